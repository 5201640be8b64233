//! Core data models for the payroll engine.
//!
//! This module contains the employee base contract, the four compensation
//! scheme models, and the payslip breakdown types.

mod commission;
mod employee;
mod hourly;
mod payslip;
mod profile;
mod salaried;
mod temporary;

pub use commission::CommissionEmployee;
pub use employee::{Employee, EmployeeKind};
pub use hourly::HourlyEmployee;
pub use payslip::{Payslip, PayslipLine, PayslipValue};
pub use profile::EmployeeProfile;
pub use salaried::SalariedEmployee;
pub use temporary::TemporaryEmployee;
