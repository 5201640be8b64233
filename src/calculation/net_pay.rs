//! Net pay calculation.
//!
//! This module combines gross pay, benefits, and deductions into the final
//! net figure, floored at zero.

use rust_decimal::Decimal;

/// Calculates net pay from its three components.
///
/// Net pay is `gross_pay + benefits - deductions`, clamped so it is never
/// negative regardless of how extreme the inputs are.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_net_pay;
/// use rust_decimal::Decimal;
///
/// let net = calculate_net_pay(
///     Decimal::new(5_000_000, 0),
///     Decimal::new(1_500_000, 0),
///     Decimal::new(200_000, 0),
/// );
/// assert_eq!(net, Decimal::new(6_300_000, 0));
/// ```
pub fn calculate_net_pay(gross_pay: Decimal, benefits: Decimal, deductions: Decimal) -> Decimal {
    let net = gross_pay + benefits - deductions;
    net.max(Decimal::ZERO)
}
