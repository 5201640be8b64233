//! Allowance amounts.

use rust_decimal::Decimal;

/// Returns the flat monthly meal allowance (1,000,000).
///
/// Granted to salaried and commission employees; hourly and fixed-term
/// employees do not receive it.
pub fn meal_allowance() -> Decimal {
    Decimal::new(1_000_000, 0)
}
