//! Handlers for the `/assignments` resource.

use axum::extract::{Query, State};
use axum::Json;
use forecast_core::allocation::{Allocation, AllocationSet};
use forecast_core::types::DbId;
use forecast_db::models::assignment::{Assignment, AssignmentChange, ReconcileOutcome};
use forecast_db::repositories::AssignmentRepo;
use serde::Deserialize;
use validator::Validate;

use crate::error::AppResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Scope the result to one person (the timesheet view's hydration).
    pub person_id: Option<DbId>,
}

/// GET /api/v1/assignments
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Assignment>>> {
    let assignments = match query.person_id {
        Some(person_id) => AssignmentRepo::list_for_person(&state.pool, person_id).await?,
        None => AssignmentRepo::list(&state.pool).await?,
    };
    Ok(Json(assignments))
}

/// PUT /api/v1/assignments
///
/// The body is the full desired set of assignment rows. The stored table is
/// reconciled to equal it exactly: desired rows are upserted, rows absent
/// from the submission are deleted. Rows with zero hours are treated as
/// absent.
pub async fn reconcile(
    State(state): State<AppState>,
    Json(input): Json<Vec<AssignmentChange>>,
) -> AppResult<Json<ReconcileOutcome>> {
    for change in &input {
        change.validate()?;
    }

    let desired = AllocationSet::from_rows(input.into_iter().map(|change| Allocation {
        person_id: change.person_id,
        project_id: change.project_id,
        date: change.date,
        hours: change.hours,
    }));

    let outcome = AssignmentRepo::reconcile(&state.pool, &desired).await?;
    Ok(Json(outcome))
}
