//! Person (staff member) entity model and DTOs.

use forecast_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A person row from the `people` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Person {
    pub id: DbId,
    pub timesheet_code: String,
    pub full_name: String,
    /// Informal display name shown on the timeline grid.
    pub short_name: Option<String>,
    pub role: Option<String>,
    pub department: Option<String>,
    pub hourly_cost: f64,
    pub email: Option<String>,
    pub active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new person.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePerson {
    #[validate(length(min = 1))]
    pub timesheet_code: String,
    #[validate(length(min = 1))]
    pub full_name: String,
    pub short_name: Option<String>,
    pub role: Option<String>,
    pub department: Option<String>,
    /// Defaults to 0 if omitted.
    #[validate(range(min = 0.0))]
    pub hourly_cost: Option<f64>,
    #[validate(email)]
    pub email: Option<String>,
    /// Defaults to true if omitted.
    pub active: Option<bool>,
}

/// DTO for updating an existing person. All fields are optional.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdatePerson {
    pub timesheet_code: Option<String>,
    pub full_name: Option<String>,
    pub short_name: Option<String>,
    pub role: Option<String>,
    pub department: Option<String>,
    #[validate(range(min = 0.0))]
    pub hourly_cost: Option<f64>,
    #[validate(email)]
    pub email: Option<String>,
    pub active: Option<bool>,
}
