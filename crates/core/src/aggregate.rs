//! Pure hour aggregation over `(date, hours)` pairs.
//!
//! Used for the day-total row of the timeline grid, week totals, and the
//! month total shown in the header.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

/// Total hours on one date.
pub fn sum_for_date(rows: &[(NaiveDate, f64)], date: NaiveDate) -> f64 {
    rows.iter()
        .filter(|(day, _)| *day == date)
        .map(|(_, hours)| hours)
        .sum()
}

/// Total hours grouped by date.
pub fn sum_by_day(rows: &[(NaiveDate, f64)]) -> BTreeMap<NaiveDate, f64> {
    let mut totals = BTreeMap::new();
    for (day, hours) in rows {
        *totals.entry(*day).or_insert(0.0) += hours;
    }
    totals
}

/// Total hours across the given dates (e.g. the visible week).
pub fn sum_for_dates(rows: &[(NaiveDate, f64)], dates: &[NaiveDate]) -> f64 {
    dates.iter().map(|&date| sum_for_date(rows, date)).sum()
}

/// Total hours grouped by ISO week, keyed as `(iso_year, iso_week)`.
pub fn sum_by_iso_week(rows: &[(NaiveDate, f64)]) -> BTreeMap<(i32, u32), f64> {
    let mut totals = BTreeMap::new();
    for (day, hours) in rows {
        let week = day.iso_week();
        *totals.entry((week.year(), week.week())).or_insert(0.0) += hours;
    }
    totals
}

/// Total hours in the calendar month containing `anchor`.
///
/// The month is determined by the single anchor day of the visible range
/// (see [`crate::calendar::month_anchor`]), not by each row's own month.
/// That anchoring is intentional product behaviour and is kept as-is.
pub fn month_total(rows: &[(NaiveDate, f64)], anchor: NaiveDate) -> f64 {
    rows.iter()
        .filter(|(day, _)| day.month() == anchor.month() && day.year() == anchor.year())
        .map(|(_, hours)| hours)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, day).unwrap()
    }

    fn rows() -> Vec<(NaiveDate, f64)> {
        vec![
            (d(6, 3), 5.0),
            (d(6, 3), 4.0),
            (d(6, 4), 8.0),
            (d(7, 1), 2.0),
        ]
    }

    #[test]
    fn day_total_sums_matching_rows() {
        assert_eq!(sum_for_date(&rows(), d(6, 3)), 9.0);
        assert_eq!(sum_for_date(&rows(), d(6, 5)), 0.0);
    }

    #[test]
    fn grouping_by_day() {
        let totals = sum_by_day(&rows());
        assert_eq!(totals[&d(6, 3)], 9.0);
        assert_eq!(totals[&d(6, 4)], 8.0);
        assert_eq!(totals.len(), 3);
    }

    #[test]
    fn week_total_over_visible_dates() {
        let dates = vec![d(6, 2), d(6, 3), d(6, 4)];
        assert_eq!(sum_for_dates(&rows(), &dates), 17.0);
    }

    #[test]
    fn grouping_by_iso_week() {
        let totals = sum_by_iso_week(&rows());
        // 2024-06-03 and 2024-06-04 are both in ISO week 23.
        assert_eq!(totals[&(2024, 23)], 17.0);
    }

    #[test]
    fn month_total_follows_the_anchor_day_only() {
        // Rows in July are excluded when the anchor sits in June, even if
        // they were part of the same visible week.
        assert_eq!(month_total(&rows(), d(6, 5)), 17.0);
        assert_eq!(month_total(&rows(), d(7, 5)), 2.0);
    }
}
