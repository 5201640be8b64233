//! Salaried employee model.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::calculation::{calculate_seniority_bonus, meal_allowance};
use crate::error::{PayrollResult, ValidationError};

use super::{Employee, EmployeeKind, EmployeeProfile, Payslip, PayslipLine, PayslipValue};

/// An employee paid a fixed monthly salary.
///
/// Receives the flat meal allowance every month, plus a seniority bonus of
/// 10% of the salary once they have strictly more than five years of
/// service. The salary is immutable after construction.
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
/// assert_eq!(employee.gross_pay(), Decimal::new(5_000_000, 0));
/// assert_eq!(employee.benefits(today), Decimal::new(1_500_000, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SalariedEmployee {
    profile: EmployeeProfile,
    monthly_salary: Decimal,
}

impl SalariedEmployee {
    /// Creates a validated salaried employee.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the identity fields are invalid or
    /// if `monthly_salary` is not strictly positive.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        hire_date: NaiveDate,
        monthly_salary: Decimal,
        today: NaiveDate,
    ) -> PayrollResult<Self> {
        let profile = EmployeeProfile::new(id, name, hire_date, today)?;

        if monthly_salary <= Decimal::ZERO {
            return Err(ValidationError::new(
                "monthly_salary",
                "must be greater than zero",
            ));
        }

        Ok(Self {
            profile,
            monthly_salary,
        })
    }

    /// Returns the fixed monthly salary.
    pub fn monthly_salary(&self) -> Decimal {
        self.monthly_salary
    }

    fn seniority_bonus(&self, today: NaiveDate) -> Decimal {
        calculate_seniority_bonus(self.monthly_salary, self.profile.tenure_years(today))
    }
}

impl Employee for SalariedEmployee {
    fn kind(&self) -> EmployeeKind {
        EmployeeKind::Salaried
    }

    fn profile(&self) -> &EmployeeProfile {
        &self.profile
    }

    fn gross_pay(&self) -> Decimal {
        self.monthly_salary
    }

    fn benefits(&self, today: NaiveDate) -> Decimal {
        meal_allowance() + self.seniority_bonus(today)
    }

    fn payslip(&self, today: NaiveDate) -> Payslip {
        let gross_pay = self.gross_pay();
        let seniority_bonus = self.seniority_bonus(today);
        let deductions = self.deductions(gross_pay);

        Payslip::new(vec![
            PayslipLine::new(
                "employee",
                PayslipValue::Text(self.profile.name().to_string()),
            ),
            PayslipLine::new("type", PayslipValue::Text(self.kind().label().to_string())),
            PayslipLine::new("gross_pay", PayslipValue::Money(gross_pay)),
            PayslipLine::new("meal_allowance", PayslipValue::Money(meal_allowance())),
            PayslipLine::new("seniority_bonus", PayslipValue::Money(seniority_bonus)),
            PayslipLine::new("deductions", PayslipValue::Money(deductions)),
            PayslipLine::new("net_pay", PayslipValue::Money(self.net_pay(today))),
        ])
    }
}
