//! Error types for the payroll engine.
//!
//! This module provides the strongly-typed validation error raised, via the
//! `thiserror` crate, whenever employee data violates a business rule at
//! construction or mutation time.

use thiserror::Error;

/// The error raised when an employee field violates a validation rule.
///
/// Validation happens before any field is stored, so an employee either
/// exists fully in a valid state or was never constructed at all. The error
/// is never caught inside the engine; it propagates to the caller.
///
/// # Example
///
/// ```
/// use payroll_engine::error::ValidationError;
///
/// let error = ValidationError::new("monthly_salary", "must be greater than zero");
/// assert_eq!(
///     error.to_string(),
///     "Invalid employee field 'monthly_salary': must be greater than zero"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid employee field '{field}': {message}")]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: String,
    /// A description of what made the value invalid.
    pub message: String,
}

impl ValidationError {
    /// Creates a validation error for the given field.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return ValidationError.
pub type PayrollResult<T> = Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_displays_field_and_message() {
        let error = ValidationError::new("name", "must not be empty");
        assert_eq!(
            error.to_string(),
            "Invalid employee field 'name': must not be empty"
        );
    }

    #[test]
    fn test_error_implements_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<ValidationError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_validation_error() -> PayrollResult<()> {
            Err(ValidationError::new("hours_worked", "cannot be negative"))
        }

        fn propagates_error() -> PayrollResult<()> {
            returns_validation_error()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
