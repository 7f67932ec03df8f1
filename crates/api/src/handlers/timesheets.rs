//! Handlers for the `/timesheets/{person_id}` resource.
//!
//! Rows merge planned hours from assignments with stored confirmation
//! entries; writes are gated by the trailing edit window before anything
//! touches the database.

use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::{Local, NaiveDate};
use forecast_core::allocation::Allocation;
use forecast_core::timesheet::{self, TimesheetRow};
use forecast_core::types::DbId;
use forecast_core::{aggregate, calendar};
use forecast_db::models::timesheet::{SaveTimesheetEntry, TimesheetEntry};
use forecast_db::repositories::{AssignmentRepo, TimesheetRepo};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct WeekQuery {
    /// Whole weeks relative to the week containing today.
    #[serde(default)]
    pub offset: i64,
}

#[derive(Debug, Deserialize)]
pub struct RowsQuery {
    /// Whole weeks relative to today.
    #[serde(default)]
    pub offset: i64,
    /// When set, show a sliding window of this many days ending at
    /// `today + offset` weeks instead of the fixed calendar week.
    pub days: Option<u32>,
}

/// The merged rows payload for one person's visible range.
#[derive(Debug, Serialize)]
pub struct TimesheetRows {
    pub days: Vec<NaiveDate>,
    /// Earliest date still editable; older cells render read-only.
    pub editable_from: NaiveDate,
    pub rows: Vec<TimesheetRow>,
}

/// GET /api/v1/timesheets/{person_id}/rows
pub async fn rows(
    State(state): State<AppState>,
    Path(person_id): Path<DbId>,
    Query(query): Query<RowsQuery>,
) -> AppResult<Json<TimesheetRows>> {
    let today = Local::now().date_naive();
    let days = match query.days {
        Some(0) => {
            return Err(AppError::BadRequest("days must be at least 1".to_string()));
        }
        Some(length) => calendar::day_window(
            today,
            query.offset * calendar::DAYS_PER_WEEK,
            length,
            i64::from(length) - 1,
        ),
        None => calendar::week_for(today, query.offset),
    };
    let cutoff = state.edit_window().earliest(today);

    let assignments: Vec<Allocation> = AssignmentRepo::list_for_person(&state.pool, person_id)
        .await?
        .into_iter()
        .map(|a| Allocation {
            person_id: a.person_id,
            project_id: a.project_id,
            date: a.date,
            hours: a.hours,
        })
        .collect();

    let entries: Vec<_> = TimesheetRepo::list_for_person_between(
        &state.pool,
        person_id,
        days[0],
        days[days.len() - 1],
    )
    .await?
    .iter()
    .map(TimesheetEntry::snapshot)
    .collect();

    let rows = timesheet::build_rows(&days, cutoff, &assignments, &entries);

    Ok(Json(TimesheetRows {
        days,
        editable_from: cutoff,
        rows,
    }))
}

/// PUT /api/v1/timesheets/{person_id}
///
/// Saves one cell. Omitting `actual_hours` keeps (or returns) the entry to
/// pending; supplying it confirms. A date outside the edit window is
/// rejected with 422 before any write.
pub async fn save(
    State(state): State<AppState>,
    Path(person_id): Path<DbId>,
    Json(input): Json<SaveTimesheetEntry>,
) -> AppResult<Json<TimesheetEntry>> {
    input.validate()?;

    let today = Local::now().date_naive();
    state.edit_window().check(today, input.date)?;

    let entry = TimesheetRepo::upsert(&state.pool, person_id, &input).await?;
    Ok(Json(entry))
}

/// One day's confirmed total.
#[derive(Debug, Serialize)]
pub struct DayConfirmedTotal {
    pub date: NaiveDate,
    pub confirmed_hours: f64,
}

/// The totals payload for one person's visible week.
#[derive(Debug, Serialize)]
pub struct ConfirmedTotals {
    pub days: Vec<DayConfirmedTotal>,
    pub week_total: f64,
    /// Confirmed hours in the calendar month of the mid-week day.
    pub month_total: f64,
}

/// GET /api/v1/timesheets/{person_id}/totals
pub async fn totals(
    State(state): State<AppState>,
    Path(person_id): Path<DbId>,
    Query(query): Query<WeekQuery>,
) -> AppResult<Json<ConfirmedTotals>> {
    let today = Local::now().date_naive();
    let week = calendar::week_for(today, query.offset);

    // Month totals need entries beyond the visible week, so load them all.
    let entries: Vec<_> = TimesheetRepo::list_for_person(&state.pool, person_id)
        .await?
        .iter()
        .map(TimesheetEntry::snapshot)
        .collect();

    let days: Vec<DayConfirmedTotal> = week
        .iter()
        .map(|&date| DayConfirmedTotal {
            date,
            confirmed_hours: timesheet::confirmed_total(&entries, date),
        })
        .collect();
    let week_total = days.iter().map(|d| d.confirmed_hours).sum();

    let month_total = match calendar::month_anchor(&week) {
        Some(anchor) => {
            let pairs: Vec<(NaiveDate, f64)> = entries
                .iter()
                .filter_map(|e| e.actual_hours.map(|hours| (e.date, hours)))
                .collect();
            aggregate::month_total(&pairs, anchor)
        }
        None => 0.0,
    };

    Ok(Json(ConfirmedTotals {
        days,
        week_total,
        month_total,
    }))
}
