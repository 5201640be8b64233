//! Shared employee identity fields.

use chrono::NaiveDate;
use serde::Serialize;

use crate::calculation::completed_years;
use crate::error::{PayrollResult, ValidationError};

/// The identity fields common to every compensation scheme.
///
/// A profile is immutable once constructed: `id` and `name` are non-empty
/// for the whole lifetime of the value, and `hire_date` is not after the
/// date supplied at construction. The hire date check happens only at
/// construction; it is not re-evaluated as "today" advances.
///
/// # Example
///
/// ```
/// use payroll_engine::models::EmployeeProfile;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
/// let hired = NaiveDate::from_ymd_opt(2020, 3, 10).unwrap();
///
/// let profile = EmployeeProfile::new("001", "Juan Pérez", hired, today).unwrap();
/// assert_eq!(profile.tenure_years(today), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeProfile {
    id: String,
    name: String,
    hire_date: NaiveDate,
}

impl EmployeeProfile {
    /// Creates a validated employee profile.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if `id` or `name` is empty, or if
    /// `hire_date` is strictly after `today`.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        hire_date: NaiveDate,
        today: NaiveDate,
    ) -> PayrollResult<Self> {
        let id = id.into();
        let name = name.into();

        if id.is_empty() {
            return Err(ValidationError::new("id", "must not be empty"));
        }
        if name.is_empty() {
            return Err(ValidationError::new("name", "must not be empty"));
        }
        if hire_date > today {
            return Err(ValidationError::new(
                "hire_date",
                format!("{hire_date} is after the current date {today}"),
            ));
        }

        Ok(Self {
            id,
            name,
            hire_date,
        })
    }

    /// Returns the employee's unique identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the employee's full name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the date the employee was hired.
    pub fn hire_date(&self) -> NaiveDate {
        self.hire_date
    }

    /// Returns the whole years of service as of `today`.
    ///
    /// Uses age-style truncation: the year counts only once the hire
    /// anniversary has passed.
    pub fn tenure_years(&self, today: NaiveDate) -> i32 {
        completed_years(self.hire_date, today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_valid_profile_is_constructed() {
        let profile =
            EmployeeProfile::new("001", "Juan Pérez", date("2020-01-01"), date("2025-08-01"))
                .unwrap();
        assert_eq!(profile.id(), "001");
        assert_eq!(profile.name(), "Juan Pérez");
        assert_eq!(profile.hire_date(), date("2020-01-01"));
    }

    #[test]
    fn test_empty_id_is_rejected() {
        let result = EmployeeProfile::new("", "Juan Pérez", date("2020-01-01"), date("2025-08-01"));
        assert_eq!(result.unwrap_err().field, "id");
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let result = EmployeeProfile::new("001", "", date("2020-01-01"), date("2025-08-01"));
        assert_eq!(result.unwrap_err().field, "name");
    }

    #[test]
    fn test_future_hire_date_is_rejected() {
        let result =
            EmployeeProfile::new("001", "Juan Pérez", date("2025-08-02"), date("2025-08-01"));
        assert_eq!(result.unwrap_err().field, "hire_date");
    }

    #[test]
    fn test_hire_date_today_is_accepted() {
        let result =
            EmployeeProfile::new("001", "Juan Pérez", date("2025-08-01"), date("2025-08-01"));
        assert!(result.is_ok());
    }

    #[test]
    fn test_tenure_truncates_before_anniversary() {
        let profile =
            EmployeeProfile::new("001", "Juan Pérez", date("2018-09-15"), date("2025-08-01"))
                .unwrap();
        assert_eq!(profile.tenure_years(date("2025-08-01")), 6);
        assert_eq!(profile.tenure_years(date("2025-09-15")), 7);
    }
}
