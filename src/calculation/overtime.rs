//! Regular and overtime hour calculation.
//!
//! This module splits monthly worked hours into a regular portion, paid at
//! the ordinary hourly rate, and an overtime portion paid at a penalty
//! multiplier.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Hours per month paid at the ordinary rate before overtime applies.
pub const REGULAR_HOURS_CAP: Decimal = Decimal::from_parts(40, 0, 0, false, 0);

/// Returns the overtime pay multiplier (1.5x the ordinary rate).
pub fn overtime_multiplier() -> Decimal {
    Decimal::new(15, 1)
}

/// The split of worked hours into regular and overtime portions.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::split_hours;
/// use rust_decimal::Decimal;
///
/// let split = split_hours(Decimal::new(45, 0));
/// assert_eq!(split.regular, Decimal::new(40, 0));
/// assert_eq!(split.overtime, Decimal::new(5, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoursSplit {
    /// Hours paid at the ordinary rate (capped at [`REGULAR_HOURS_CAP`]).
    pub regular: Decimal,
    /// Hours paid at the overtime rate (zero when under the cap).
    pub overtime: Decimal,
}

/// Splits worked hours into regular and overtime portions.
///
/// Hours up to the 40-hour ceiling are regular; anything beyond it is
/// overtime. Hours exactly at the ceiling produce no overtime.
///
/// # Arguments
///
/// * `hours_worked` - The total hours worked in the month (non-negative)
pub fn split_hours(hours_worked: Decimal) -> HoursSplit {
    if hours_worked > REGULAR_HOURS_CAP {
        HoursSplit {
            regular: REGULAR_HOURS_CAP,
            overtime: hours_worked - REGULAR_HOURS_CAP,
        }
    } else {
        HoursSplit {
            regular: hours_worked,
            overtime: Decimal::ZERO,
        }
    }
}

/// Calculates gross pay for an hourly employee.
///
/// Regular hours are paid at the ordinary rate and overtime hours at 1.5x
/// the ordinary rate.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_hourly_gross;
/// use rust_decimal::Decimal;
///
/// // 40h * 50,000 + 5h * 50,000 * 1.5 = 2,375,000
/// let gross = calculate_hourly_gross(Decimal::new(50_000, 0), Decimal::new(45, 0));
/// assert_eq!(gross, Decimal::new(2_375_000, 0));
/// ```
pub fn calculate_hourly_gross(hourly_rate: Decimal, hours_worked: Decimal) -> Decimal {
    let split = split_hours(hours_worked);
    split.regular * hourly_rate + split.overtime * hourly_rate * overtime_multiplier()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// OT-001: hours over the cap split into regular and overtime
    #[test]
    fn test_hours_over_cap_split() {
        let split = split_hours(dec("45"));
        assert_eq!(split.regular, dec("40"));
        assert_eq!(split.overtime, dec("5"));
    }

    /// OT-002: hours under the cap are all regular
    #[test]
    fn test_hours_under_cap_all_regular() {
        let split = split_hours(dec("35"));
        assert_eq!(split.regular, dec("35"));
        assert_eq!(split.overtime, Decimal::ZERO);
    }

    /// OT-003: exactly 40 hours produces no overtime
    #[test]
    fn test_exactly_40_hours_no_overtime() {
        let split = split_hours(dec("40"));
        assert_eq!(split.regular, dec("40"));
        assert_eq!(split.overtime, Decimal::ZERO);
    }

    /// OT-004: zero hours
    #[test]
    fn test_zero_hours() {
        let split = split_hours(Decimal::ZERO);
        assert_eq!(split.regular, Decimal::ZERO);
        assert_eq!(split.overtime, Decimal::ZERO);
    }

    /// OT-005: gross with overtime at 1.5x
    #[test]
    fn test_gross_with_overtime() {
        // 40 * 50,000 + 5 * 50,000 * 1.5 = 2,000,000 + 375,000
        assert_eq!(
            calculate_hourly_gross(dec("50000"), dec("45")),
            dec("2375000")
        );
    }

    /// OT-006: gross without overtime
    #[test]
    fn test_gross_without_overtime() {
        assert_eq!(
            calculate_hourly_gross(dec("50000"), dec("35")),
            dec("1750000")
        );
    }

    /// OT-007: fractional hours stay exact
    #[test]
    fn test_fractional_hours_exact() {
        // 40 * 50,000 + 2.5 * 50,000 * 1.5 = 2,000,000 + 187,500
        assert_eq!(
            calculate_hourly_gross(dec("50000"), dec("42.5")),
            dec("2187500.0")
        );
    }

    #[test]
    fn test_overtime_multiplier_is_exactly_1_5() {
        assert_eq!(overtime_multiplier(), dec("1.5"));
    }
}
