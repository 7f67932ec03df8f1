//! Assignment entity model and reconciliation DTOs.

use chrono::NaiveDate;
use forecast_core::allocation::AssignmentKey;
use forecast_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// An assignment row from the `assignments` table: planned hours for one
/// person, one project, on one calendar day.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Assignment {
    pub id: DbId,
    pub person_id: DbId,
    pub project_id: DbId,
    pub date: NaiveDate,
    pub hours: f64,
    pub created_at: Timestamp,
}

/// One desired row submitted for reconciliation, projected to the natural
/// key plus hours.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AssignmentChange {
    pub person_id: DbId,
    pub project_id: DbId,
    pub date: NaiveDate,
    #[validate(range(min = 0.0, max = 24.0))]
    pub hours: f64,
}

/// Surrogate id plus natural key, as fetched for the orphan diff.
#[derive(Debug, Clone, FromRow)]
pub struct AssignmentKeyRow {
    pub id: DbId,
    pub person_id: DbId,
    pub project_id: DbId,
    pub date: NaiveDate,
}

impl AssignmentKeyRow {
    pub fn into_parts(self) -> (DbId, AssignmentKey) {
        (
            self.id,
            AssignmentKey {
                person_id: self.person_id,
                project_id: self.project_id,
                date: self.date,
            },
        )
    }
}

/// Row counts from one reconciliation pass.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ReconcileOutcome {
    pub upserted: u64,
    pub deleted: u64,
}
