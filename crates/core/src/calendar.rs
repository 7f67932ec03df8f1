//! Calendar range generation for the timeline and timesheet grids.
//!
//! All functions are pure given `today`; callers resolve the wall-clock date
//! once per request and pass it in, which keeps the grid stable across
//! repeated calls within the same operation.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Number of days in a generated week.
pub const DAYS_PER_WEEK: i64 = 7;

/// The most recent Sunday at or before `anchor`.
pub fn week_start(anchor: NaiveDate) -> NaiveDate {
    let back = i64::from(anchor.weekday().num_days_from_sunday());
    anchor - Duration::days(back)
}

/// The seven days of the week containing `today + offset_weeks` weeks,
/// Sunday first.
pub fn week_for(today: NaiveDate, offset_weeks: i64) -> Vec<NaiveDate> {
    let anchor = today + Duration::days(offset_weeks * DAYS_PER_WEEK);
    let start = week_start(anchor);
    (0..DAYS_PER_WEEK)
        .map(|i| start + Duration::days(i))
        .collect()
}

/// A sliding window of `length` consecutive days starting at
/// `today + offset_days - lead_in`.
///
/// The timesheet view uses this to show a trailing-plus-leading range around
/// today instead of a fixed calendar week.
pub fn day_window(today: NaiveDate, offset_days: i64, length: u32, lead_in: i64) -> Vec<NaiveDate> {
    let start = today + Duration::days(offset_days - lead_in);
    (0..i64::from(length))
        .map(|i| start + Duration::days(i))
        .collect()
}

/// Whether `date` falls on a Saturday or Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// The reference day used for month totals: the middle day of the visible
/// week. The month total is anchored to this one day's month, not to each
/// row's own month (intentional product behaviour, kept as-is).
pub fn month_anchor(week: &[NaiveDate]) -> Option<NaiveDate> {
    week.get(week.len() / 2).copied()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn week_start_is_identity_on_sunday() {
        // 2024-06-02 is a Sunday.
        assert_eq!(week_start(d(2024, 6, 2)), d(2024, 6, 2));
    }

    #[test]
    fn week_start_rolls_back_from_saturday() {
        // 2024-06-08 is a Saturday.
        assert_eq!(week_start(d(2024, 6, 8)), d(2024, 6, 2));
    }

    #[test]
    fn week_for_has_seven_consecutive_days_sunday_first() {
        let week = week_for(d(2024, 6, 5), 0);
        assert_eq!(week.len(), 7);
        assert_eq!(week[0], d(2024, 6, 2));
        assert_eq!(week[6], d(2024, 6, 8));
        for pair in week.windows(2) {
            assert_eq!(pair[1] - pair[0], Duration::days(1));
        }
    }

    #[test]
    fn week_for_contains_today_at_zero_offset() {
        let today = d(2024, 6, 5);
        assert!(week_for(today, 0).contains(&today));
    }

    #[test]
    fn week_for_offsets_by_whole_weeks() {
        let today = d(2024, 6, 5);
        assert_eq!(week_for(today, 1)[0], d(2024, 6, 9));
        assert_eq!(week_for(today, -1)[0], d(2024, 5, 26));
    }

    #[test]
    fn week_for_is_stable_across_calls() {
        let today = d(2024, 6, 5);
        assert_eq!(week_for(today, 2), week_for(today, 2));
    }

    #[test]
    fn day_window_trails_today_by_lead_in() {
        let window = day_window(d(2024, 6, 10), 0, 10, 7);
        assert_eq!(window.len(), 10);
        assert_eq!(window[0], d(2024, 6, 3));
        assert_eq!(window[9], d(2024, 6, 12));
    }

    #[test]
    fn weekend_detection() {
        assert!(is_weekend(d(2024, 6, 1))); // Saturday
        assert!(is_weekend(d(2024, 6, 2))); // Sunday
        assert!(!is_weekend(d(2024, 6, 3))); // Monday
        assert!(!is_weekend(d(2024, 6, 7))); // Friday
    }

    #[test]
    fn month_anchor_is_midweek_day() {
        let week = week_for(d(2024, 6, 5), 0);
        assert_eq!(month_anchor(&week), Some(d(2024, 6, 5)));
        assert_eq!(month_anchor(&[]), None);
    }
}
