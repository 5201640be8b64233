//! Savings fund contribution calculation.
//!
//! Hourly employees with more than one year of service may opt into a
//! savings fund; the employer contributes 2% of gross pay as a benefit.

use rust_decimal::Decimal;

/// The savings fund contribution rate applied to gross pay (2%).
pub const SAVINGS_FUND_RATE: Decimal = Decimal::from_parts(2, 0, 0, false, 2);

/// Years of service that must be strictly exceeded for fund eligibility.
pub const SAVINGS_FUND_TENURE_YEARS: i32 = 1;

/// Calculates the savings fund contribution for an hourly employee.
///
/// Both conditions are required: the employee must have strictly more than
/// one year of service AND have opted into the fund. An employee at exactly
/// one year, or one who declined the fund, receives nothing.
///
/// # Arguments
///
/// * `gross_pay` - The gross pay the contribution is based on
/// * `tenure_years` - Whole years of service at the evaluation date
/// * `enrolled` - Whether the employee opted into the fund
pub fn calculate_savings_fund(gross_pay: Decimal, tenure_years: i32, enrolled: bool) -> Decimal {
    if enrolled && tenure_years > SAVINGS_FUND_TENURE_YEARS {
        gross_pay * SAVINGS_FUND_RATE
    } else {
        Decimal::ZERO
    }
}
