//! Hourly employee model.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::calculation::{calculate_hourly_gross, calculate_savings_fund, split_hours};
use crate::error::{PayrollResult, ValidationError};

use super::{Employee, EmployeeKind, EmployeeProfile, Payslip, PayslipLine, PayslipValue};

/// An employee paid by the hour.
///
/// Hours up to the 40-hour monthly ceiling are paid at the ordinary rate
/// and hours beyond it at 1.5x. There is no meal allowance; the only
/// benefit is a savings fund contribution of 2% of gross, earned when the
/// employee has strictly more than one year of service and opted into the
/// fund. Worked hours can be updated through a validated setter.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{Employee, HourlyEmployee};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let today = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
/// let hired = NaiveDate::from_ymd_opt(2022, 3, 10).unwrap();
/// let employee = HourlyEmployee::new(
///     "003",
///     "Carlos Rodríguez",
///     hired,
///     Decimal::new(50_000, 0),
///     Decimal::new(45, 0),
///     true,
///     today,
/// )
/// .unwrap();
///
/// // 40h at 50,000 plus 5h at 75,000
/// assert_eq!(employee.gross_pay(), Decimal::new(2_375_000, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HourlyEmployee {
    profile: EmployeeProfile,
    hourly_rate: Decimal,
    hours_worked: Decimal,
    accepts_savings_fund: bool,
}

impl HourlyEmployee {
    /// Creates a validated hourly employee.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the identity fields are invalid, if
    /// `hourly_rate` is not strictly positive, or if `hours_worked` is
    /// negative.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        hire_date: NaiveDate,
        hourly_rate: Decimal,
        hours_worked: Decimal,
        accepts_savings_fund: bool,
        today: NaiveDate,
    ) -> PayrollResult<Self> {
        let profile = EmployeeProfile::new(id, name, hire_date, today)?;

        if hourly_rate <= Decimal::ZERO {
            return Err(ValidationError::new(
                "hourly_rate",
                "must be greater than zero",
            ));
        }
        if hours_worked < Decimal::ZERO {
            return Err(ValidationError::new("hours_worked", "cannot be negative"));
        }

        Ok(Self {
            profile,
            hourly_rate,
            hours_worked,
            accepts_savings_fund,
        })
    }

    /// Returns the ordinary hourly rate.
    pub fn hourly_rate(&self) -> Decimal {
        self.hourly_rate
    }

    /// Returns the hours worked this month.
    pub fn hours_worked(&self) -> Decimal {
        self.hours_worked
    }

    /// Returns whether the employee opted into the savings fund.
    pub fn accepts_savings_fund(&self) -> bool {
        self.accepts_savings_fund
    }

    /// Updates the hours worked this month.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if `hours_worked` is negative; the
    /// stored value is left unchanged.
    pub fn set_hours_worked(&mut self, hours_worked: Decimal) -> PayrollResult<()> {
        if hours_worked < Decimal::ZERO {
            return Err(ValidationError::new("hours_worked", "cannot be negative"));
        }
        self.hours_worked = hours_worked;
        Ok(())
    }

    /// Returns the hours paid at the ordinary rate (capped at 40).
    pub fn regular_hours(&self) -> Decimal {
        split_hours(self.hours_worked).regular
    }

    /// Returns the hours paid at the overtime rate.
    pub fn overtime_hours(&self) -> Decimal {
        split_hours(self.hours_worked).overtime
    }

    fn savings_fund(&self, today: NaiveDate) -> Decimal {
        calculate_savings_fund(
            self.gross_pay(),
            self.profile.tenure_years(today),
            self.accepts_savings_fund,
        )
    }
}

impl Employee for HourlyEmployee {
    fn kind(&self) -> EmployeeKind {
        EmployeeKind::Hourly
    }

    fn profile(&self) -> &EmployeeProfile {
        &self.profile
    }

    fn gross_pay(&self) -> Decimal {
        calculate_hourly_gross(self.hourly_rate, self.hours_worked)
    }

    fn benefits(&self, today: NaiveDate) -> Decimal {
        self.savings_fund(today)
    }

    fn payslip(&self, today: NaiveDate) -> Payslip {
        let gross_pay = self.gross_pay();
        let savings_fund = self.savings_fund(today);
        let deductions = self.deductions(gross_pay);

        Payslip::new(vec![
            PayslipLine::new(
                "employee",
                PayslipValue::Text(self.profile.name().to_string()),
            ),
            PayslipLine::new("type", PayslipValue::Text(self.kind().label().to_string())),
            PayslipLine::new("regular_hours", PayslipValue::Quantity(self.regular_hours())),
            PayslipLine::new(
                "overtime_hours",
                PayslipValue::Quantity(self.overtime_hours()),
            ),
            PayslipLine::new("gross_pay", PayslipValue::Money(gross_pay)),
            PayslipLine::new("savings_fund", PayslipValue::Money(savings_fund)),
            PayslipLine::new("deductions", PayslipValue::Money(deductions)),
            PayslipLine::new("net_pay", PayslipValue::Money(self.net_pay(today))),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn create_employee(
        hire_date: &str,
        rate: &str,
        hours: &str,
        accepts_fund: bool,
    ) -> HourlyEmployee {
        HourlyEmployee::new(
            "003",
            "Carlos Rodríguez",
            date(hire_date),
            dec(rate),
            dec(hours),
            accepts_fund,
            date("2025-08-01"),
        )
        .unwrap()
    }

    #[test]
    fn test_gross_pay_with_overtime() {
        let employee = create_employee("2022-03-10", "50000", "45", true);
        // 40 * 50,000 + 5 * 50,000 * 1.5
        assert_eq!(employee.gross_pay(), dec("2375000"));
        assert_eq!(employee.regular_hours(), dec("40"));
        assert_eq!(employee.overtime_hours(), dec("5"));
    }

    #[test]
    fn test_gross_pay_without_overtime() {
        let employee = create_employee("2022-03-10", "50000", "35", true);
        assert_eq!(employee.gross_pay(), dec("1750000"));
        assert_eq!(employee.overtime_hours(), Decimal::ZERO);
    }

    #[test]
    fn test_savings_fund_when_enrolled_over_one_year() {
        let employee = create_employee("2022-03-10", "50000", "40", true);
        // 2% of 2,000,000
        assert_eq!(employee.benefits(date("2025-08-01")), dec("40000"));
    }

    #[test]
    fn test_no_savings_fund_when_not_enrolled() {
        let employee = create_employee("2022-03-10", "50000", "40", false);
        assert_eq!(employee.benefits(date("2025-08-01")), Decimal::ZERO);
    }

    /// Exactly one year of service earns no fund contribution
    #[test]
    fn test_no_savings_fund_at_exactly_one_year() {
        let employee = create_employee("2024-08-01", "50000", "40", true);
        assert_eq!(employee.tenure_years(date("2025-08-01")), 1);
        assert_eq!(employee.benefits(date("2025-08-01")), Decimal::ZERO);
    }

    #[test]
    fn test_non_positive_rate_is_rejected() {
        let result = HourlyEmployee::new(
            "003",
            "Carlos Rodríguez",
            date("2022-03-10"),
            Decimal::ZERO,
            dec("40"),
            false,
            date("2025-08-01"),
        );
        assert_eq!(result.unwrap_err().field, "hourly_rate");
    }

    #[test]
    fn test_negative_hours_are_rejected_at_construction() {
        let result = HourlyEmployee::new(
            "003",
            "Carlos Rodríguez",
            date("2022-03-10"),
            dec("50000"),
            dec("-10"),
            false,
            date("2025-08-01"),
        );
        assert_eq!(result.unwrap_err().field, "hours_worked");
    }

    #[test]
    fn test_set_hours_worked_updates_gross_pay() {
        let mut employee = create_employee("2022-03-10", "50000", "35", false);
        employee.set_hours_worked(dec("45")).unwrap();
        assert_eq!(employee.hours_worked(), dec("45"));
        assert_eq!(employee.gross_pay(), dec("2375000"));
    }

    #[test]
    fn test_set_hours_worked_rejects_negative_and_keeps_value() {
        let mut employee = create_employee("2022-03-10", "50000", "35", false);
        let result = employee.set_hours_worked(dec("-1"));
        assert_eq!(result.unwrap_err().field, "hours_worked");
        assert_eq!(employee.hours_worked(), dec("35"));
    }

    #[test]
    fn test_payslip_fields_in_order() {
        let employee = create_employee("2022-03-10", "50000", "45", true);
        let payslip = employee.payslip(date("2025-08-01"));
        let fields: Vec<&str> = payslip.lines().iter().map(|l| l.field.as_str()).collect();
        assert_eq!(
            fields,
            vec![
                "employee",
                "type",
                "regular_hours",
                "overtime_hours",
                "gross_pay",
                "savings_fund",
                "deductions",
                "net_pay"
            ]
        );
        assert_eq!(
            payslip.get("type"),
            Some(&PayslipValue::Text("Por Horas".to_string()))
        );
        assert_eq!(
            payslip.get("overtime_hours"),
            Some(&PayslipValue::Quantity(dec("5")))
        );
    }
}
