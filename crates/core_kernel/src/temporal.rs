//! Calendar-month arithmetic for payment scheduling
//!
//! Loan terms and projection rows are anchored to whole calendar months:
//! every scheduled date is normalized to the 1st of its month, terms advance
//! month by month, and display labels are short month + year.

use chrono::{Datelike, NaiveDate};

/// Normalizes a date to the first day of its month
pub fn month_start(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date)
}

/// Advances a date by a number of whole months, pinned to the 1st
pub fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    let total = date.year() as i64 * 12 + date.month0() as i64 + months as i64;
    let year = total.div_euclid(12) as i32;
    let month = total.rem_euclid(12) as u32 + 1;
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(date)
}

/// Number of whole calendar months from `from` to `to`
///
/// Day-of-month is ignored; negative when `to` precedes `from`.
pub fn months_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to.year() as i64 * 12 + to.month0() as i64) - (from.year() as i64 * 12 + from.month0() as i64)
}

/// Short display label for a scheduled month, e.g. "Jan 2024"
pub fn month_label(date: NaiveDate) -> String {
    date.format("%b %Y").to_string()
}

/// Elapsed time between two dates in fractional years
pub fn fractional_years_between(from: NaiveDate, to: NaiveDate) -> f64 {
    (to - from).num_days() as f64 / 365.25
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_start_normalizes_day() {
        assert_eq!(month_start(date(2024, 6, 15)), date(2024, 6, 1));
        assert_eq!(month_start(date(2024, 6, 1)), date(2024, 6, 1));
    }

    #[test]
    fn test_add_months_within_year() {
        assert_eq!(add_months(date(2024, 1, 1), 5), date(2024, 6, 1));
    }

    #[test]
    fn test_add_months_december_rollover() {
        assert_eq!(add_months(date(2024, 11, 1), 2), date(2025, 1, 1));
        assert_eq!(add_months(date(2024, 1, 1), 24), date(2026, 1, 1));
    }

    #[test]
    fn test_add_months_pins_day_to_first() {
        assert_eq!(add_months(date(2024, 1, 31), 1), date(2024, 2, 1));
    }

    #[test]
    fn test_months_between() {
        assert_eq!(months_between(date(2024, 1, 1), date(2024, 1, 20)), 0);
        assert_eq!(months_between(date(2024, 1, 1), date(2025, 1, 1)), 12);
        assert_eq!(months_between(date(2024, 6, 1), date(2024, 3, 1)), -3);
    }

    #[test]
    fn test_month_label_format() {
        assert_eq!(month_label(date(2024, 1, 1)), "Jan 2024");
        assert_eq!(month_label(date(2031, 12, 1)), "Dec 2031");
    }

    #[test]
    fn test_fractional_years() {
        let years = fractional_years_between(date(2024, 1, 1), date(2026, 1, 1));
        assert!((years - 2.0).abs() < 0.01);
        assert_eq!(fractional_years_between(date(2024, 1, 1), date(2024, 1, 1)), 0.0);
    }
}
