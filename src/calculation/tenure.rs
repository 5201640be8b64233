//! Tenure calculation.
//!
//! This module derives an employee's whole years of service from their hire
//! date, using age-style truncation rather than rounding.

use chrono::{Datelike, NaiveDate};

/// Calculates the whole years elapsed between two dates.
///
/// The count is the difference in calendar years, decremented by one if the
/// current month/day falls before the start month/day. This truncates the
/// way ages do: the year only counts once the anniversary has passed.
///
/// # Arguments
///
/// * `start` - The starting date (the hire date)
/// * `today` - The date to measure against
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::completed_years;
/// use chrono::NaiveDate;
///
/// let hired = NaiveDate::from_ymd_opt(2018, 6, 15).unwrap();
///
/// // Day before the anniversary: year not yet counted
/// let today = NaiveDate::from_ymd_opt(2024, 6, 14).unwrap();
/// assert_eq!(completed_years(hired, today), 5);
///
/// // On the anniversary: year counted
/// let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
/// assert_eq!(completed_years(hired, today), 6);
/// ```
pub fn completed_years(start: NaiveDate, today: NaiveDate) -> i32 {
    let mut years = today.year() - start.year();
    if (today.month(), today.day()) < (start.month(), start.day()) {
        years -= 1;
    }
    years
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    /// TN-001: full years after several anniversaries
    #[test]
    fn test_full_years_elapsed() {
        assert_eq!(completed_years(date("2018-01-15"), date("2025-08-01")), 7);
    }

    /// TN-002: anniversary not yet reached this year
    #[test]
    fn test_anniversary_not_reached_truncates() {
        assert_eq!(completed_years(date("2018-09-15"), date("2025-08-01")), 6);
    }

    /// TN-003: exact anniversary day counts the year
    #[test]
    fn test_exact_anniversary_counts() {
        assert_eq!(completed_years(date("2018-08-01"), date("2025-08-01")), 7);
    }

    /// TN-004: day before the anniversary does not count the year
    #[test]
    fn test_day_before_anniversary_does_not_count() {
        assert_eq!(completed_years(date("2018-08-02"), date("2025-08-01")), 6);
    }

    /// TN-005: same-year hire has zero tenure
    #[test]
    fn test_same_year_hire_is_zero() {
        assert_eq!(completed_years(date("2025-02-01"), date("2025-08-01")), 0);
    }

    /// TN-006: hired today has zero tenure
    #[test]
    fn test_hired_today_is_zero() {
        assert_eq!(completed_years(date("2025-08-01"), date("2025-08-01")), 0);
    }
}
