//! Sales commission and high-sales bonus calculation.
//!
//! Commission employees earn a percentage of their monthly sales on top of
//! their base salary, plus an extra bonus when sales cross the high-sales
//! threshold.

use rust_decimal::Decimal;

/// Monthly sales that must be strictly exceeded to earn the sales bonus.
pub const HIGH_SALES_THRESHOLD: Decimal = Decimal::from_parts(20_000_000, 0, 0, false, 0);

/// The bonus rate applied to monthly sales above the threshold (3%).
pub const SALES_BONUS_RATE: Decimal = Decimal::from_parts(3, 0, 0, false, 2);

/// Calculates the commission earned on monthly sales.
///
/// # Arguments
///
/// * `monthly_sales` - Total sales for the month
/// * `commission_rate` - The commission rate in `[0, 1]`
pub fn calculate_commission(monthly_sales: Decimal, commission_rate: Decimal) -> Decimal {
    monthly_sales * commission_rate
}

/// Calculates the high-sales bonus.
///
/// When monthly sales strictly exceed the 20,000,000 threshold, the bonus
/// is 3% of the ENTIRE sales figure, not 3% of the excess over the
/// threshold. This produces a discontinuity at the threshold and is the
/// established business rule.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_sales_bonus;
/// use rust_decimal::Decimal;
///
/// // 3% of the full 25M, not of the 5M excess
/// let bonus = calculate_sales_bonus(Decimal::new(25_000_000, 0));
/// assert_eq!(bonus, Decimal::new(750_000, 0));
///
/// assert_eq!(calculate_sales_bonus(Decimal::new(20_000_000, 0)), Decimal::ZERO);
/// ```
pub fn calculate_sales_bonus(monthly_sales: Decimal) -> Decimal {
    if monthly_sales > HIGH_SALES_THRESHOLD {
        monthly_sales * SALES_BONUS_RATE
    } else {
        Decimal::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// CM-001: commission is sales times rate
    #[test]
    fn test_commission_is_sales_times_rate() {
        assert_eq!(
            calculate_commission(dec("25000000"), dec("0.05")),
            dec("1250000")
        );
    }

    /// CM-002: zero rate earns zero commission
    #[test]
    fn test_zero_rate_earns_zero() {
        assert_eq!(calculate_commission(dec("25000000"), Decimal::ZERO), Decimal::ZERO);
    }

    /// CM-003: sales over the threshold earn 3% of the full figure
    #[test]
    fn test_sales_over_threshold_earn_bonus_on_full_figure() {
        assert_eq!(calculate_sales_bonus(dec("25000000")), dec("750000"));
    }

    /// CM-004: sales exactly at the threshold earn nothing
    #[test]
    fn test_sales_at_threshold_earn_nothing() {
        assert_eq!(calculate_sales_bonus(dec("20000000")), Decimal::ZERO);
    }

    /// CM-005: sales just over the threshold jump to the full bonus
    #[test]
    fn test_bonus_discontinuity_just_over_threshold() {
        assert_eq!(calculate_sales_bonus(dec("20000001")), dec("600000.03"));
    }

    /// CM-006: sales under the threshold earn nothing
    #[test]
    fn test_sales_under_threshold_earn_nothing() {
        assert_eq!(calculate_sales_bonus(dec("15000000")), Decimal::ZERO);
    }
}
