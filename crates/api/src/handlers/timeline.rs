//! Handlers for the `/timeline` week view.
//!
//! The grid shows one Sunday-first week: per-person per-day planned totals
//! with overcommit flags, a day-total row across people, the week total, and
//! a month total anchored to the mid-week day.

use axum::extract::{Query, State};
use axum::Json;
use chrono::{Local, NaiveDate};
use forecast_core::allocation::AllocationSet;
use forecast_core::{aggregate, calendar, overcommit};
use forecast_db::models::person::Person;
use forecast_db::repositories::{AssignmentRepo, PersonRepo};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct WeekQuery {
    /// Whole weeks relative to the week containing today.
    #[serde(default)]
    pub offset: i64,
    /// Restrict the grid to one department.
    pub department: Option<String>,
}

/// One person/day cell of the grid.
#[derive(Debug, Serialize)]
pub struct PersonDayCell {
    pub date: NaiveDate,
    pub hours: f64,
    /// Weekday cells flag totals above the daily limit; weekend cells flag
    /// any hours at all.
    pub overcommitted: bool,
}

/// One person's row across the visible week.
#[derive(Debug, Serialize)]
pub struct PersonWeekRow {
    pub person: Person,
    pub days: Vec<PersonDayCell>,
    pub week_hours: f64,
}

/// Day total across all shown people.
#[derive(Debug, Serialize)]
pub struct DayTotal {
    pub date: NaiveDate,
    pub weekend: bool,
    pub hours: f64,
}

/// The full week view payload.
#[derive(Debug, Serialize)]
pub struct WeekView {
    pub days: Vec<NaiveDate>,
    pub people: Vec<PersonWeekRow>,
    pub day_totals: Vec<DayTotal>,
    pub week_total: f64,
    /// Total planned hours in the calendar month of the mid-week day,
    /// across the shown people's entire working set.
    pub month_total: f64,
}

/// GET /api/v1/timeline/week
pub async fn week_view(
    State(state): State<AppState>,
    Query(query): Query<WeekQuery>,
) -> AppResult<Json<WeekView>> {
    let today = Local::now().date_naive();
    let days = calendar::week_for(today, query.offset);

    let people: Vec<Person> = PersonRepo::list(&state.pool)
        .await?
        .into_iter()
        .filter(|p| p.active)
        .filter(|p| match &query.department {
            Some(department) => p.department.as_deref() == Some(department.as_str()),
            None => true,
        })
        .collect();

    let assignments = AssignmentRepo::list(&state.pool).await?;
    let shown: Vec<_> = assignments
        .iter()
        .filter(|a| people.iter().any(|p| p.id == a.person_id))
        .collect();

    let set = AllocationSet::from_rows(shown.iter().map(|a| forecast_core::allocation::Allocation {
        person_id: a.person_id,
        project_id: a.project_id,
        date: a.date,
        hours: a.hours,
    }));

    let rows = people
        .into_iter()
        .map(|person| {
            let cells: Vec<PersonDayCell> = days
                .iter()
                .map(|&date| {
                    let hours = set.sum_for_person_day(person.id, date);
                    PersonDayCell {
                        date,
                        hours,
                        overcommitted: overcommit::is_overcommitted(date, hours),
                    }
                })
                .collect();
            let week_hours = cells.iter().map(|c| c.hours).sum();
            PersonWeekRow {
                person,
                days: cells,
                week_hours,
            }
        })
        .collect::<Vec<_>>();

    let day_totals: Vec<DayTotal> = days
        .iter()
        .map(|&date| DayTotal {
            date,
            weekend: calendar::is_weekend(date),
            hours: rows
                .iter()
                .flat_map(|row| &row.days)
                .filter(|cell| cell.date == date)
                .map(|cell| cell.hours)
                .sum(),
        })
        .collect();
    let week_total = day_totals.iter().map(|t| t.hours).sum();

    // The month total follows the single mid-week anchor day, summed over
    // the shown people's full working set rather than the visible week.
    let month_total = match calendar::month_anchor(&days) {
        Some(anchor) => {
            let pairs: Vec<(NaiveDate, f64)> =
                shown.iter().map(|a| (a.date, a.hours)).collect();
            aggregate::month_total(&pairs, anchor)
        }
        None => 0.0,
    };

    Ok(Json(WeekView {
        days,
        people: rows,
        day_totals,
        week_total,
        month_total,
    }))
}
