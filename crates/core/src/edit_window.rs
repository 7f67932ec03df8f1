//! The trailing window during which timesheet entries may still be edited.

use chrono::{Duration, NaiveDate};

use crate::calendar::DAYS_PER_WEEK;
use crate::error::CoreError;

/// Default window length in weeks, overridable via configuration
/// (`EDIT_WINDOW_WEEKS`).
pub const DEFAULT_EDIT_WINDOW_WEEKS: u32 = 2;

/// Time-varying predicate: a date is editable iff
/// `today - weeks <= date <= today`.
///
/// Recomputed per evaluation against the caller-supplied `today`; never
/// stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditWindow {
    pub weeks: u32,
}

impl Default for EditWindow {
    fn default() -> Self {
        Self {
            weeks: DEFAULT_EDIT_WINDOW_WEEKS,
        }
    }
}

impl EditWindow {
    pub fn new(weeks: u32) -> Self {
        Self { weeks }
    }

    /// The earliest date still editable when today is `today`.
    pub fn earliest(self, today: NaiveDate) -> NaiveDate {
        today - Duration::days(i64::from(self.weeks) * DAYS_PER_WEEK)
    }

    /// Whether `date` may still be edited.
    pub fn contains(self, today: NaiveDate, date: NaiveDate) -> bool {
        date >= self.earliest(today) && date <= today
    }

    /// Gate an edit: `Err(EditWindowClosed)` when `date` falls outside the
    /// window, before any write is attempted.
    pub fn check(self, today: NaiveDate, date: NaiveDate) -> Result<(), CoreError> {
        if self.contains(today, date) {
            Ok(())
        } else {
            Err(CoreError::EditWindowClosed {
                date,
                weeks: self.weeks,
            })
        }
    }
}
