//! Payroll calculation engine for monthly employee compensation.
//!
//! This crate computes net pay for employees under four compensation schemes
//! (salaried, hourly, commission, and fixed-term contract), applying
//! per-scheme bonus and benefit rules plus a flat statutory deduction.

#![warn(missing_docs)]

pub mod calculation;
pub mod error;
pub mod models;
