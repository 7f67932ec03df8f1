//! Overcommit evaluation for person/day cells.

use chrono::NaiveDate;

use crate::calendar::is_weekend;

/// Maximum hours a person may be allocated on a weekday before the cell is
/// flagged.
pub const WEEKDAY_LIMIT_HOURS: f64 = 8.0;

/// Whether a person/day cell is over-threshold: any hours on a weekend, or
/// more than [`WEEKDAY_LIMIT_HOURS`] on a weekday.
///
/// Presentation-only; an overcommitted cell never blocks a write.
pub fn is_overcommitted(date: NaiveDate, total_hours: f64) -> bool {
    if is_weekend(date) {
        total_hours > 0.0
    } else {
        total_hours > WEEKDAY_LIMIT_HOURS
    }
}
