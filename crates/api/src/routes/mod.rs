pub mod assignments;
pub mod clients;
pub mod health;
pub mod people;
pub mod projects;
pub mod reports;
pub mod timeline;
pub mod timesheets;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /clients                             list, create
/// /clients/{id}                        get, update, delete
///
/// /people                              list, create
/// /people/departments                  distinct departments (timeline filter)
/// /people/{id}                         get, update, delete
///
/// /projects                            list, create
/// /projects/open                       open projects (timesheet picker)
/// /projects/{id}                       get, update, delete
///
/// /assignments                         hydrate working set (?person_id= scope)
/// /assignments                         PUT: reconcile to the submitted set
///
/// /timeline/week                       week grid (?offset=&department=)
///
/// /timesheets/{person_id}/rows         merged planned/actual rows (?offset=&days=)
/// /timesheets/{person_id}              PUT: save one cell (edit-window gated)
/// /timesheets/{person_id}/totals       per-day confirmed totals (?offset=)
///
/// /reports/utilization                 budget vs. planned vs. confirmed
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/clients", clients::router())
        .nest("/people", people::router())
        .nest("/projects", projects::router())
        .nest("/assignments", assignments::router())
        .nest("/timeline", timeline::router())
        .nest("/timesheets", timesheets::router())
        .nest("/reports", reports::router())
}
