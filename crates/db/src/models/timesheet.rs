//! Timesheet entry model and DTOs.

use chrono::NaiveDate;
use forecast_core::timesheet::{EntrySnapshot, TimesheetStatus};
use forecast_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A timesheet row from the `timesheets` table: the confirmation record for
/// one person/project/day cell.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TimesheetEntry {
    pub id: DbId,
    pub person_id: DbId,
    pub project_id: DbId,
    pub date: NaiveDate,
    /// Snapshot of the assignment's hours at write time, not a live
    /// reference; it may diverge if the assignment is edited afterwards.
    pub planned_hours: f64,
    pub actual_hours: Option<f64>,
    #[sqlx(try_from = "String")]
    pub status: TimesheetStatus,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl TimesheetEntry {
    /// Core-side view consumed by the row builder.
    pub fn snapshot(&self) -> EntrySnapshot {
        EntrySnapshot {
            id: self.id,
            project_id: self.project_id,
            date: self.date,
            planned_hours: self.planned_hours,
            actual_hours: self.actual_hours,
            status: self.status,
            notes: self.notes.clone(),
        }
    }
}

/// DTO for writing one timesheet cell.
///
/// Status is never supplied by the caller; the repository derives it from
/// the presence of `actual_hours`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SaveTimesheetEntry {
    pub project_id: DbId,
    pub date: NaiveDate,
    #[validate(range(min = 0.0, max = 24.0))]
    pub planned_hours: f64,
    #[validate(range(min = 0.0, max = 24.0))]
    pub actual_hours: Option<f64>,
    pub notes: Option<String>,
}
