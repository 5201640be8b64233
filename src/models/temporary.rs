//! Fixed-term contract employee model.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{PayrollResult, ValidationError};

use super::{Employee, EmployeeKind, EmployeeProfile, Payslip, PayslipLine, PayslipValue};

/// An employee on a fixed-term contract.
///
/// Paid a fixed monthly salary with no benefits of any kind. The contract
/// end date must be strictly after the hire date; the model tracks whether
/// the contract is still active and how many days remain, which goes
/// negative once the contract has expired.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{Employee, TemporaryEmployee};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let today = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
/// let hired = NaiveDate::from_ymd_opt(2024, 10, 1).unwrap();
/// let ends = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
/// let employee = TemporaryEmployee::new(
///     "007",
///     "Roberto Díaz",
///     hired,
///     Decimal::new(3_000_000, 0),
///     ends,
///     today,
/// )
/// .unwrap();
///
/// assert!(employee.contract_active(today));
/// assert_eq!(employee.benefits(today), Decimal::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemporaryEmployee {
    profile: EmployeeProfile,
    monthly_salary: Decimal,
    contract_end_date: NaiveDate,
}

impl TemporaryEmployee {
    /// Creates a validated fixed-term employee.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the identity fields are invalid, if
    /// `monthly_salary` is not strictly positive, or if `contract_end_date`
    /// is not strictly after `hire_date`.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        hire_date: NaiveDate,
        monthly_salary: Decimal,
        contract_end_date: NaiveDate,
        today: NaiveDate,
    ) -> PayrollResult<Self> {
        let profile = EmployeeProfile::new(id, name, hire_date, today)?;

        if monthly_salary <= Decimal::ZERO {
            return Err(ValidationError::new(
                "monthly_salary",
                "must be greater than zero",
            ));
        }
        if contract_end_date <= hire_date {
            return Err(ValidationError::new(
                "contract_end_date",
                "must be after the hire date",
            ));
        }

        Ok(Self {
            profile,
            monthly_salary,
            contract_end_date,
        })
    }

    /// Returns the fixed monthly salary.
    pub fn monthly_salary(&self) -> Decimal {
        self.monthly_salary
    }

    /// Returns the date the contract ends.
    pub fn contract_end_date(&self) -> NaiveDate {
        self.contract_end_date
    }

    /// Returns whether the contract is still active as of `today`.
    ///
    /// The end date itself counts as active.
    pub fn contract_active(&self, today: NaiveDate) -> bool {
        today <= self.contract_end_date
    }

    /// Returns the days remaining on the contract as of `today`.
    ///
    /// Negative once the contract has expired; the sign is meaningful and
    /// is never clamped.
    pub fn days_remaining(&self, today: NaiveDate) -> i64 {
        (self.contract_end_date - today).num_days()
    }
}

impl Employee for TemporaryEmployee {
    fn kind(&self) -> EmployeeKind {
        EmployeeKind::Temporary
    }

    fn profile(&self) -> &EmployeeProfile {
        &self.profile
    }

    fn gross_pay(&self) -> Decimal {
        self.monthly_salary
    }

    fn benefits(&self, _today: NaiveDate) -> Decimal {
        Decimal::ZERO
    }

    fn payslip(&self, today: NaiveDate) -> Payslip {
        let gross_pay = self.gross_pay();
        let deductions = self.deductions(gross_pay);

        Payslip::new(vec![
            PayslipLine::new(
                "employee",
                PayslipValue::Text(self.profile.name().to_string()),
            ),
            PayslipLine::new("type", PayslipValue::Text(self.kind().label().to_string())),
            PayslipLine::new("gross_pay", PayslipValue::Money(gross_pay)),
            PayslipLine::new("benefits", PayslipValue::Money(Decimal::ZERO)),
            PayslipLine::new("deductions", PayslipValue::Money(deductions)),
            PayslipLine::new("net_pay", PayslipValue::Money(self.net_pay(today))),
            PayslipLine::new(
                "contract_end_date",
                PayslipValue::Date(self.contract_end_date),
            ),
            PayslipLine::new(
                "contract_active",
                PayslipValue::Boolean(self.contract_active(today)),
            ),
            PayslipLine::new(
                "days_remaining",
                PayslipValue::Integer(self.days_remaining(today)),
            ),
        ])
    }
}
