//! Statutory deduction calculation.
//!
//! This module provides the flat deduction withheld from gross pay for
//! social security and pension, identical for every compensation scheme.

use rust_decimal::Decimal;

/// The statutory deduction rate applied to gross pay (4%).
///
/// Covers social security and pension withholding. Every compensation
/// scheme uses this same rate; no scheme overrides it.
pub const DEDUCTION_RATE: Decimal = Decimal::from_parts(4, 0, 0, false, 2);

/// Calculates the statutory deductions for a gross pay amount.
///
/// # Arguments
///
/// * `gross_pay` - The gross pay before benefits and deductions
///
/// # Returns
///
/// The amount withheld, `gross_pay * 0.04`.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_deductions;
/// use rust_decimal::Decimal;
///
/// let deductions = calculate_deductions(Decimal::new(5_000_000, 0));
/// assert_eq!(deductions, Decimal::new(200_000, 0));
/// ```
pub fn calculate_deductions(gross_pay: Decimal) -> Decimal {
    gross_pay * DEDUCTION_RATE
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// DE-001: 4% of a round salary
    #[test]
    fn test_deduction_is_4_percent_of_gross() {
        assert_eq!(calculate_deductions(dec("5000000")), dec("200000"));
    }

    /// DE-002: zero gross has zero deductions
    #[test]
    fn test_zero_gross_has_zero_deductions() {
        assert_eq!(calculate_deductions(Decimal::ZERO), Decimal::ZERO);
    }

    /// DE-003: fractional gross keeps exact decimal arithmetic
    #[test]
    fn test_fractional_gross_is_exact() {
        assert_eq!(calculate_deductions(dec("2375000.50")), dec("95000.0200"));
    }

    #[test]
    fn test_deduction_rate_is_exactly_0_04() {
        assert_eq!(DEDUCTION_RATE, dec("0.04"));
    }
}
