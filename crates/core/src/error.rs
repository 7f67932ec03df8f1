use chrono::NaiveDate;

use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Date {date} is outside the {weeks}-week edit window")]
    EditWindowClosed { date: NaiveDate, weeks: u32 },

    #[error("Internal error: {0}")]
    Internal(String),
}
