//! Error types for the Payroll Calculation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during payroll calculation.
//!
//! Nothing in the engine is fatal: every failure is reported as a normal
//! `Err` value describing why the calculation could not be performed, and
//! the caller decides how to present it.

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::PayrollMonth;

/// The main error type for the Payroll Calculation Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::EmployeeNotFound {
///     employee_id: "10042".to_string(),
/// };
/// assert_eq!(error.to_string(), "Employee not found: 10042");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The employee ID was not present in the supplied compensation profiles.
    #[error("Employee not found: {employee_id}")]
    EmployeeNotFound {
        /// The employee ID that was not found.
        employee_id: String,
    },

    /// No attendance records exist for the employee in the requested payroll month.
    #[error("No attendance records found for employee '{employee_id}' in {month}")]
    NoAttendanceRecords {
        /// The employee the calculation was requested for.
        employee_id: String,
        /// The payroll month that had no records.
        month: PayrollMonth,
    },

    /// The requested week number has no attendance bucket in the payroll month.
    #[error(
        "No attendance data found for week {week_number} in payroll month {month} \
         ({weeks_available} week(s) available)"
    )]
    WeekNotFound {
        /// The 1-based week number that was requested.
        week_number: u32,
        /// How many payroll weeks the month actually contains.
        weeks_available: u32,
        /// The payroll month that was searched.
        month: PayrollMonth,
    },

    /// A payroll month selection was out of range.
    #[error("Invalid payroll month: {year}-{month}")]
    InvalidPayrollMonth {
        /// The requested year.
        year: i32,
        /// The requested month number (must be 1-12).
        month: u32,
    },

    /// An attendance record contained inconsistent data.
    #[error("Invalid attendance record for employee '{employee_id}' on {date}: {message}")]
    InvalidAttendance {
        /// The employee the record belongs to.
        employee_id: String,
        /// The date of the invalid record.
        date: NaiveDate,
        /// A description of what made the record invalid.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_not_found_displays_id() {
        let error = EngineError::EmployeeNotFound {
            employee_id: "10042".to_string(),
        };
        assert_eq!(error.to_string(), "Employee not found: 10042");
    }

    #[test]
    fn test_no_attendance_records_displays_employee_and_month() {
        let error = EngineError::NoAttendanceRecords {
            employee_id: "10042".to_string(),
            month: PayrollMonth::new(2024, 6).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "No attendance records found for employee '10042' in June 2024"
        );
    }

    #[test]
    fn test_week_not_found_displays_week_and_month() {
        let error = EngineError::WeekNotFound {
            week_number: 6,
            weeks_available: 4,
            month: PayrollMonth::new(2024, 6).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "No attendance data found for week 6 in payroll month June 2024 (4 week(s) available)"
        );
    }

    #[test]
    fn test_invalid_payroll_month_displays_year_and_month() {
        let error = EngineError::InvalidPayrollMonth {
            year: 2024,
            month: 13,
        };
        assert_eq!(error.to_string(), "Invalid payroll month: 2024-13");
    }

    #[test]
    fn test_invalid_attendance_displays_employee_date_and_message() {
        let error = EngineError::InvalidAttendance {
            employee_id: "10042".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
            message: "time out is not after time in".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid attendance record for employee '10042' on 2024-06-03: \
             time out is not after time in"
        );
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/file.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/file.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_employee_not_found() -> EngineResult<()> {
            Err(EngineError::EmployeeNotFound {
                employee_id: "missing".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_employee_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
