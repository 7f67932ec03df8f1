//! Route definitions for the `/reports` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::reports;
use crate::state::AppState;

/// Routes mounted at `/reports`.
///
/// ```text
/// GET /utilization    -> per-project budget vs. planned vs. confirmed hours
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/utilization", get(reports::utilization))
}
