//! Route definitions for the `/assignments` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::assignments;
use crate::state::AppState;

/// Routes mounted at `/assignments`.
///
/// ```text
/// GET /    -> list (optional ?person_id= scope)
/// PUT /    -> reconcile (body is the full desired set)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(assignments::list).put(assignments::reconcile))
}
