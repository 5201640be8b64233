//! Seniority bonus calculation.
//!
//! Salaried employees receive a bonus of 10% of their monthly salary once
//! they have accumulated more than five years of service.

use rust_decimal::Decimal;

/// The seniority bonus rate applied to the monthly salary (10%).
pub const SENIORITY_BONUS_RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 2);

/// Years of service that must be strictly exceeded to earn the bonus.
///
/// The comparison is strict: an employee at exactly five years receives
/// nothing.
pub const SENIORITY_TENURE_YEARS: i32 = 5;

/// Calculates the seniority bonus for a salaried employee.
///
/// # Arguments
///
/// * `monthly_salary` - The employee's fixed monthly salary
/// * `tenure_years` - Whole years of service at the evaluation date
///
/// # Returns
///
/// `monthly_salary * 0.10` when `tenure_years > 5`, otherwise zero.
pub fn calculate_seniority_bonus(monthly_salary: Decimal, tenure_years: i32) -> Decimal {
    if tenure_years > SENIORITY_TENURE_YEARS {
        monthly_salary * SENIORITY_BONUS_RATE
    } else {
        Decimal::ZERO
    }
}
