//! Route definitions for the `/people` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::people;
use crate::state::AppState;

/// Routes mounted at `/people`.
///
/// ```text
/// GET    /              -> list
/// POST   /              -> create
/// GET    /departments   -> departments (distinct, for the timeline filter)
/// GET    /{id}          -> get_by_id
/// PUT    /{id}          -> update
/// DELETE /{id}          -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(people::list).post(people::create))
        .route("/departments", get(people::departments))
        .route(
            "/{id}",
            get(people::get_by_id)
                .put(people::update)
                .delete(people::delete),
        )
}
