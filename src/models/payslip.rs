//! Payslip breakdown models.
//!
//! This module defines the [`Payslip`] type returned to the presentation
//! layer: an ordered list of named raw values. Consumers decide how to
//! format field names and currency amounts.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single raw value on a payslip.
///
/// Monetary amounts and hour quantities are exact decimals; the remaining
/// variants cover the scalar fields (contract day counts, flags, dates,
/// names and labels).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayslipValue {
    /// A monetary amount.
    Money(Decimal),
    /// A non-monetary quantity, such as worked hours.
    Quantity(Decimal),
    /// A whole-number value, such as remaining contract days.
    Integer(i64),
    /// A yes/no value, such as whether a contract is active.
    Boolean(bool),
    /// A calendar date, such as a contract end date.
    Date(NaiveDate),
    /// A free-form label, such as the employee name or scheme tag.
    Text(String),
}

impl fmt::Display for PayslipValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayslipValue::Money(amount) => write!(f, "${amount}"),
            PayslipValue::Quantity(quantity) => write!(f, "{quantity}"),
            PayslipValue::Integer(value) => write!(f, "{value}"),
            PayslipValue::Boolean(value) => write!(f, "{value}"),
            PayslipValue::Date(date) => write!(f, "{date}"),
            PayslipValue::Text(text) => write!(f, "{text}"),
        }
    }
}

/// A named line on a payslip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayslipLine {
    /// The snake_case field name, e.g. `gross_pay`.
    pub field: String,
    /// The raw value for the field.
    pub value: PayslipValue,
}

impl PayslipLine {
    /// Creates a payslip line.
    pub fn new(field: impl Into<String>, value: PayslipValue) -> Self {
        Self {
            field: field.into(),
            value,
        }
    }
}

/// The full pay breakdown for one employee, in presentation order.
///
/// Each compensation scheme produces its own set of fields; the order is
/// part of the contract and is preserved as produced.
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
/// let payslip = employee.payslip(today);
/// assert_eq!(payslip.lines()[0].field, "employee");
/// assert!(payslip.get("net_pay").is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Payslip {
    lines: Vec<PayslipLine>,
}

impl Payslip {
    pub(crate) fn new(lines: Vec<PayslipLine>) -> Self {
        Self { lines }
    }

    /// Returns the payslip lines in presentation order.
    pub fn lines(&self) -> &[PayslipLine] {
        &self.lines
    }

    /// Looks up a value by field name.
    pub fn get(&self, field: &str) -> Option<&PayslipValue> {
        self.lines
            .iter()
            .find(|line| line.field == field)
            .map(|line| &line.value)
    }
}
