//! Handlers for the `/reports` resource.

use axum::extract::State;
use axum::Json;
use forecast_core::types::DbId;
use forecast_db::repositories::ProjectRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::state::AppState;

/// One project's line in the utilization report.
#[derive(Debug, Serialize)]
pub struct UtilizationEntry {
    pub project_id: DbId,
    pub code: String,
    pub name: String,
    pub budget_hours: Option<f64>,
    /// Σ planned hours from assignments.
    pub assigned_hours: f64,
    /// Σ confirmed actual hours from timesheets.
    pub used_hours: f64,
    /// Budget minus assigned; absent when the project has no budget.
    pub remaining_to_allocate: Option<f64>,
    /// Budget minus used; absent when the project has no budget.
    pub remaining_to_use: Option<f64>,
}

/// Grand totals across all projects.
#[derive(Debug, Default, Serialize)]
pub struct UtilizationTotals {
    pub budget_hours: f64,
    pub assigned_hours: f64,
    pub used_hours: f64,
}

/// The full utilization report payload.
#[derive(Debug, Serialize)]
pub struct UtilizationReport {
    pub projects: Vec<UtilizationEntry>,
    pub totals: UtilizationTotals,
}

/// GET /api/v1/reports/utilization
pub async fn utilization(State(state): State<AppState>) -> AppResult<Json<UtilizationReport>> {
    let rows = ProjectRepo::utilization(&state.pool).await?;

    let mut totals = UtilizationTotals::default();
    let projects = rows
        .into_iter()
        .map(|row| {
            totals.budget_hours += row.budget_hours.unwrap_or(0.0);
            totals.assigned_hours += row.assigned_hours;
            totals.used_hours += row.used_hours;
            UtilizationEntry {
                project_id: row.project_id,
                code: row.code,
                name: row.name,
                budget_hours: row.budget_hours,
                assigned_hours: row.assigned_hours,
                used_hours: row.used_hours,
                remaining_to_allocate: row.budget_hours.map(|b| b - row.assigned_hours),
                remaining_to_use: row.budget_hours.map(|b| b - row.used_hours),
            }
        })
        .collect();

    Ok(Json(UtilizationReport { projects, totals }))
}
