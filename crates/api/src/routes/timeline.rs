//! Route definitions for the `/timeline` view.

use axum::routing::get;
use axum::Router;

use crate::handlers::timeline;
use crate::state::AppState;

/// Routes mounted at `/timeline`.
///
/// ```text
/// GET /week    -> week_view (?offset=&department=)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/week", get(timeline::week_view))
}
