//! Repository for the `timesheets` table.
//!
//! Entries are only ever created or updated, never deleted; a cell's status
//! is derived from the presence of actual hours at write time.

use chrono::NaiveDate;
use forecast_core::timesheet::derive_status;
use forecast_core::types::DbId;
use sqlx::PgPool;

use crate::models::timesheet::{SaveTimesheetEntry, TimesheetEntry};

/// Column list for `timesheets` queries.
const COLUMNS: &str = "\
    id, person_id, project_id, date, planned_hours, actual_hours, status, \
    notes, created_at, updated_at";

/// Provides persistence for timesheet confirmation records.
pub struct TimesheetRepo;

impl TimesheetRepo {
    /// Load all entries for one person.
    pub async fn list_for_person(
        pool: &PgPool,
        person_id: DbId,
    ) -> Result<Vec<TimesheetEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM timesheets WHERE person_id = $1 ORDER BY date ASC"
        );
        sqlx::query_as::<_, TimesheetEntry>(&query)
            .bind(person_id)
            .fetch_all(pool)
            .await
    }

    /// Load one person's entries inside a date range (inclusive).
    pub async fn list_for_person_between(
        pool: &PgPool,
        person_id: DbId,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<TimesheetEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM timesheets \
             WHERE person_id = $1 AND date >= $2 AND date <= $3 \
             ORDER BY date ASC"
        );
        sqlx::query_as::<_, TimesheetEntry>(&query)
            .bind(person_id)
            .bind(from)
            .bind(to)
            .fetch_all(pool)
            .await
    }

    /// Find the entry for one cell by its natural key.
    pub async fn find_by_key(
        pool: &PgPool,
        person_id: DbId,
        project_id: DbId,
        date: NaiveDate,
    ) -> Result<Option<TimesheetEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM timesheets \
             WHERE person_id = $1 AND project_id = $2 AND date = $3"
        );
        sqlx::query_as::<_, TimesheetEntry>(&query)
            .bind(person_id)
            .bind(project_id)
            .bind(date)
            .fetch_optional(pool)
            .await
    }

    /// Insert-or-update one cell, keyed on the natural key.
    ///
    /// The stored status is always `derive_status(actual_hours)`; there is
    /// no code path that writes a contradictory pair.
    pub async fn upsert(
        pool: &PgPool,
        person_id: DbId,
        input: &SaveTimesheetEntry,
    ) -> Result<TimesheetEntry, sqlx::Error> {
        let status = derive_status(input.actual_hours);
        let query = format!(
            "INSERT INTO timesheets (person_id, project_id, date, planned_hours, \
                actual_hours, status, notes)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             ON CONFLICT (person_id, project_id, date) DO UPDATE SET
                planned_hours = EXCLUDED.planned_hours,
                actual_hours = EXCLUDED.actual_hours,
                status = EXCLUDED.status,
                notes = EXCLUDED.notes,
                updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TimesheetEntry>(&query)
            .bind(person_id)
            .bind(input.project_id)
            .bind(input.date)
            .bind(input.planned_hours)
            .bind(input.actual_hours)
            .bind(status.as_str())
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }
}
