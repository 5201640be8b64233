//! Calculation logic for the payroll engine.
//!
//! This module contains the pay rule functions used by the employee models,
//! including the statutory deduction, the net pay floor, tenure truncation,
//! the regular/overtime hour split, the seniority bonus, the savings fund
//! contribution, sales commission with the high-sales bonus, and the flat
//! meal allowance.

mod allowances;
mod commission;
mod deductions;
mod net_pay;
mod overtime;
mod savings_fund;
mod seniority_bonus;
mod tenure;

pub use allowances::meal_allowance;
pub use commission::{
    HIGH_SALES_THRESHOLD, SALES_BONUS_RATE, calculate_commission, calculate_sales_bonus,
};
pub use deductions::{DEDUCTION_RATE, calculate_deductions};
pub use net_pay::calculate_net_pay;
pub use overtime::{
    HoursSplit, REGULAR_HOURS_CAP, calculate_hourly_gross, overtime_multiplier, split_hours,
};
pub use savings_fund::{SAVINGS_FUND_RATE, SAVINGS_FUND_TENURE_YEARS, calculate_savings_fund};
pub use seniority_bonus::{
    SENIORITY_BONUS_RATE, SENIORITY_TENURE_YEARS, calculate_seniority_bonus,
};
pub use tenure::completed_years;
