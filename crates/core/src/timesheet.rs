//! Planned-vs-confirmed timesheet state and row building.
//!
//! A timesheet cell tracks one `(person, project, date)` triple. It starts
//! pending, seeded with planned hours from the matching assignment, and
//! becomes confirmed once actual hours are recorded. `planned_hours` is a
//! snapshot taken when the entry is written, not a live reference to the
//! assignment.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::allocation::Allocation;
use crate::types::DbId;

/// Confirmation state of a timesheet cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimesheetStatus {
    Pending,
    Confirmed,
}

impl TimesheetStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
        }
    }
}

impl std::fmt::Display for TimesheetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TimesheetStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            other => Err(format!("unknown timesheet status: {other}")),
        }
    }
}

impl TryFrom<String> for TimesheetStatus {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Status is derived from the presence of actual hours; there is no other
/// code path that produces one.
pub fn derive_status(actual_hours: Option<f64>) -> TimesheetStatus {
    if actual_hours.is_some() {
        TimesheetStatus::Confirmed
    } else {
        TimesheetStatus::Pending
    }
}

/// A stored timesheet entry as the row builder sees it.
#[derive(Debug, Clone, PartialEq)]
pub struct EntrySnapshot {
    pub id: DbId,
    pub project_id: DbId,
    pub date: NaiveDate,
    pub planned_hours: f64,
    pub actual_hours: Option<f64>,
    pub status: TimesheetStatus,
    pub notes: Option<String>,
}

/// One day cell of a timesheet row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayCell {
    pub date: NaiveDate,
    pub planned_hours: f64,
    pub actual_hours: Option<f64>,
    pub status: TimesheetStatus,
    pub notes: Option<String>,
    pub entry_id: Option<DbId>,
}

impl DayCell {
    fn blank(date: NaiveDate) -> Self {
        Self {
            date,
            planned_hours: 0.0,
            actual_hours: None,
            status: TimesheetStatus::Pending,
            notes: None,
            entry_id: None,
        }
    }

    fn is_populated(&self) -> bool {
        self.planned_hours > 0.0 || self.actual_hours.is_some()
    }
}

/// A timesheet row: one project across the visible days.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimesheetRow {
    pub project_id: DbId,
    pub days: Vec<DayCell>,
}

/// Merge assignments and stored entries into per-project rows over `days`.
///
/// Assignment-derived defaults (planned hours, pending status) are written
/// first, skipping assignments dated before `cutoff`; stored entries then
/// overwrite their cells with persisted planned/actual/status/notes. Rows
/// with no planned or actual hours anywhere in the window are omitted.
pub fn build_rows(
    days: &[NaiveDate],
    cutoff: NaiveDate,
    assignments: &[Allocation],
    entries: &[EntrySnapshot],
) -> Vec<TimesheetRow> {
    let blank_row = |project_id: DbId| TimesheetRow {
        project_id,
        days: days.iter().map(|&date| DayCell::blank(date)).collect(),
    };

    let mut by_project: BTreeMap<DbId, TimesheetRow> = BTreeMap::new();

    for assignment in assignments {
        if assignment.date < cutoff {
            continue;
        }
        let Some(index) = days.iter().position(|&day| day == assignment.date) else {
            continue;
        };
        let row = by_project
            .entry(assignment.project_id)
            .or_insert_with(|| blank_row(assignment.project_id));
        row.days[index].planned_hours = assignment.hours;
    }

    for entry in entries {
        let Some(index) = days.iter().position(|&day| day == entry.date) else {
            continue;
        };
        let row = by_project
            .entry(entry.project_id)
            .or_insert_with(|| blank_row(entry.project_id));
        let cell = &mut row.days[index];
        cell.planned_hours = entry.planned_hours;
        cell.actual_hours = entry.actual_hours;
        cell.status = entry.status;
        cell.notes = entry.notes.clone();
        cell.entry_id = Some(entry.id);
    }

    by_project
        .into_values()
        .filter(|row| row.days.iter().any(DayCell::is_populated))
        .collect()
}

/// Σ actual hours over confirmed entries for one date. Pending cells
/// contribute nothing: daily totals reflect confirmed truth, not plan.
pub fn confirmed_total(entries: &[EntrySnapshot], date: NaiveDate) -> f64 {
    entries
        .iter()
        .filter(|entry| entry.date == date && entry.status == TimesheetStatus::Confirmed)
        .filter_map(|entry| entry.actual_hours)
        .sum()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
