//! The employee base contract.
//!
//! This module defines the [`Employee`] trait shared by every compensation
//! scheme, along with the [`EmployeeKind`] enum identifying the scheme.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{calculate_deductions, calculate_net_pay};

use super::{EmployeeProfile, Payslip};

/// The compensation scheme an employee is paid under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeKind {
    /// Fixed monthly salary with meal allowance and seniority bonus.
    Salaried,
    /// Hourly pay with overtime and an optional savings fund.
    Hourly,
    /// Base salary plus sales commission and a high-sales bonus.
    Commission,
    /// Fixed-term contract with a fixed salary and no benefits.
    Temporary,
}

impl EmployeeKind {
    /// Returns the payslip label for this scheme.
    pub fn label(&self) -> &'static str {
        match self {
            EmployeeKind::Salaried => "Asalariado",
            EmployeeKind::Hourly => "Por Horas",
            EmployeeKind::Commission => "Por Comisión",
            EmployeeKind::Temporary => "Temporal",
        }
    }
}

/// The base contract every compensation scheme implements.
///
/// Each scheme supplies its own gross pay and benefits formulas; the
/// statutory deduction and the net pay formula are provided here and shared
/// verbatim by all schemes. Date-dependent operations take `today` as an
/// explicit parameter so the model stays deterministic.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{Employee, SalariedEmployee};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let today = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
/// let hired = NaiveDate::from_ymd_opt(2018, 1, 15).unwrap();
/// let employee =
///     SalariedEmployee::new("001", "Juan Pérez", hired, Decimal::new(5_000_000, 0), today)
///         .unwrap();
///
/// // 5,000,000 + 1,500,000 benefits - 200,000 deductions
/// assert_eq!(employee.net_pay(today), Decimal::new(6_300_000, 0));
/// ```
pub trait Employee {
    /// Returns the scheme this employee is paid under.
    fn kind(&self) -> EmployeeKind;

    /// Returns the employee's identity fields.
    fn profile(&self) -> &EmployeeProfile;

    /// Calculates the gross pay for the month.
    fn gross_pay(&self) -> Decimal;

    /// Calculates the total benefits for the month as of `today`.
    fn benefits(&self, today: NaiveDate) -> Decimal;

    /// Produces the full pay breakdown for the month as of `today`.
    fn payslip(&self, today: NaiveDate) -> Payslip;

    /// Returns the employee's unique identifier.
    fn id(&self) -> &str {
        self.profile().id()
    }

    /// Returns the employee's full name.
    fn name(&self) -> &str {
        self.profile().name()
    }

    /// Returns the date the employee was hired.
    fn hire_date(&self) -> NaiveDate {
        self.profile().hire_date()
    }

    /// Returns the whole years of service as of `today`.
    fn tenure_years(&self, today: NaiveDate) -> i32 {
        self.profile().tenure_years(today)
    }

    /// Calculates the statutory deductions for a gross pay amount.
    ///
    /// A flat 4% of gross, identical for every scheme. No scheme overrides
    /// this.
    fn deductions(&self, gross_pay: Decimal) -> Decimal {
        calculate_deductions(gross_pay)
    }

    /// Calculates the net pay for the month as of `today`.
    ///
    /// `gross + benefits - deductions`, floored at zero.
    fn net_pay(&self, today: NaiveDate) -> Decimal {
        let gross_pay = self.gross_pay();
        let benefits = self.benefits(today);
        let deductions = self.deductions(gross_pay);
        calculate_net_pay(gross_pay, benefits, deductions)
    }
}
