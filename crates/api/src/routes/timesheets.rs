//! Route definitions for the `/timesheets` resource.
//!
//! The acting person is always an explicit path parameter; there is no
//! implicit current-user lookup.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::timesheets;
use crate::state::AppState;

/// Routes mounted at `/timesheets`.
///
/// ```text
/// GET /{person_id}/rows      -> rows (?offset=, ?days= for a sliding window)
/// PUT /{person_id}           -> save one cell (edit-window gated)
/// GET /{person_id}/totals    -> per-day confirmed totals (?offset=)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{person_id}", put(timesheets::save))
        .route("/{person_id}/rows", get(timesheets::rows))
        .route("/{person_id}/totals", get(timesheets::totals))
}
