//! Commission employee model.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::calculation::{calculate_commission, calculate_sales_bonus, meal_allowance};
use crate::error::{PayrollResult, ValidationError};

use super::{Employee, EmployeeKind, EmployeeProfile, Payslip, PayslipLine, PayslipValue};

/// An employee paid a base salary plus sales commission.
///
/// Gross pay is the base salary plus commission on monthly sales. Benefits
/// are the flat meal allowance plus a high-sales bonus of 3% of the full
/// sales figure when sales strictly exceed 20,000,000. Monthly sales can be
/// updated through a validated setter.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{CommissionEmployee, Employee};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let today = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
/// let hired = NaiveDate::from_ymd_opt(2020, 5, 20).unwrap();
/// let employee = CommissionEmployee::new(
///     "005",
///     "Luis Torres",
///     hired,
///     Decimal::new(2_000_000, 0),
///     Decimal::new(5, 2),
///     Decimal::new(25_000_000, 0),
///     today,
/// )
/// .unwrap();
///
/// assert_eq!(employee.gross_pay(), Decimal::new(3_250_000, 0));
/// assert_eq!(employee.benefits(today), Decimal::new(1_750_000, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommissionEmployee {
    profile: EmployeeProfile,
    base_salary: Decimal,
    commission_rate: Decimal,
    monthly_sales: Decimal,
}

impl CommissionEmployee {
    /// Creates a validated commission employee.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the identity fields are invalid, if
    /// `base_salary` is not strictly positive, if `commission_rate` is
    /// outside `[0, 1]`, or if `monthly_sales` is negative.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        hire_date: NaiveDate,
        base_salary: Decimal,
        commission_rate: Decimal,
        monthly_sales: Decimal,
        today: NaiveDate,
    ) -> PayrollResult<Self> {
        let profile = EmployeeProfile::new(id, name, hire_date, today)?;

        if base_salary <= Decimal::ZERO {
            return Err(ValidationError::new(
                "base_salary",
                "must be greater than zero",
            ));
        }
        if commission_rate < Decimal::ZERO || commission_rate > Decimal::ONE {
            return Err(ValidationError::new(
                "commission_rate",
                "must be between 0 and 1",
            ));
        }
        if monthly_sales < Decimal::ZERO {
            return Err(ValidationError::new("monthly_sales", "cannot be negative"));
        }

        Ok(Self {
            profile,
            base_salary,
            commission_rate,
            monthly_sales,
        })
    }

    /// Returns the base monthly salary.
    pub fn base_salary(&self) -> Decimal {
        self.base_salary
    }

    /// Returns the commission rate in `[0, 1]`.
    pub fn commission_rate(&self) -> Decimal {
        self.commission_rate
    }

    /// Returns the sales recorded for this month.
    pub fn monthly_sales(&self) -> Decimal {
        self.monthly_sales
    }

    /// Updates the sales recorded for this month.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if `monthly_sales` is negative; the
    /// stored value is left unchanged.
    pub fn set_monthly_sales(&mut self, monthly_sales: Decimal) -> PayrollResult<()> {
        if monthly_sales < Decimal::ZERO {
            return Err(ValidationError::new("monthly_sales", "cannot be negative"));
        }
        self.monthly_sales = monthly_sales;
        Ok(())
    }

    /// Returns the commission earned on this month's sales.
    pub fn commission(&self) -> Decimal {
        calculate_commission(self.monthly_sales, self.commission_rate)
    }

    fn sales_bonus(&self) -> Decimal {
        calculate_sales_bonus(self.monthly_sales)
    }
}

impl Employee for CommissionEmployee {
    fn kind(&self) -> EmployeeKind {
        EmployeeKind::Commission
    }

    fn profile(&self) -> &EmployeeProfile {
        &self.profile
    }

    fn gross_pay(&self) -> Decimal {
        self.base_salary + self.commission()
    }

    fn benefits(&self, _today: NaiveDate) -> Decimal {
        meal_allowance() + self.sales_bonus()
    }

    fn payslip(&self, today: NaiveDate) -> Payslip {
        let gross_pay = self.gross_pay();
        let commission = self.commission();
        let sales_bonus = self.sales_bonus();
        let deductions = self.deductions(gross_pay);

        Payslip::new(vec![
            PayslipLine::new(
                "employee",
                PayslipValue::Text(self.profile.name().to_string()),
            ),
            PayslipLine::new("type", PayslipValue::Text(self.kind().label().to_string())),
            PayslipLine::new("base_salary", PayslipValue::Money(self.base_salary)),
            PayslipLine::new("monthly_sales", PayslipValue::Money(self.monthly_sales)),
            PayslipLine::new("commission", PayslipValue::Money(commission)),
            PayslipLine::new("gross_pay", PayslipValue::Money(gross_pay)),
            PayslipLine::new("meal_allowance", PayslipValue::Money(meal_allowance())),
            PayslipLine::new("sales_bonus", PayslipValue::Money(sales_bonus)),
            PayslipLine::new("deductions", PayslipValue::Money(deductions)),
            PayslipLine::new("net_pay", PayslipValue::Money(self.net_pay(today))),
        ])
    }
}
