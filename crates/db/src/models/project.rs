//! Project (engagement) entity model and DTOs.

use forecast_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub code: String,
    pub name: String,
    pub client_name: Option<String>,
    pub project_type: Option<String>,
    /// `open` or `closed`. Only open projects appear in the timesheet view.
    pub status: String,
    pub budget_hours: Option<f64>,
    pub budget_value: Option<f64>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProject {
    #[validate(length(min = 1))]
    pub code: String,
    #[validate(length(min = 1))]
    pub name: String,
    pub client_name: Option<String>,
    pub project_type: Option<String>,
    /// Defaults to `open` if omitted.
    pub status: Option<String>,
    #[validate(range(min = 0.0))]
    pub budget_hours: Option<f64>,
    #[validate(range(min = 0.0))]
    pub budget_value: Option<f64>,
}

/// DTO for updating an existing project. All fields are optional.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateProject {
    pub code: Option<String>,
    pub name: Option<String>,
    pub client_name: Option<String>,
    pub project_type: Option<String>,
    pub status: Option<String>,
    #[validate(range(min = 0.0))]
    pub budget_hours: Option<f64>,
    #[validate(range(min = 0.0))]
    pub budget_value: Option<f64>,
}

/// One row of the utilization report: budget vs. planned vs. confirmed hours
/// for a project.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectUtilizationRow {
    pub project_id: DbId,
    pub code: String,
    pub name: String,
    pub budget_hours: Option<f64>,
    /// Σ assignment hours (planned).
    pub assigned_hours: f64,
    /// Σ confirmed actual hours from timesheets.
    pub used_hours: f64,
}
