//! Attendance event model.
//!
//! This module defines the AttendanceEvent struct representing one day's
//! clock-in/clock-out pair for an employee, as delivered by the attendance
//! log collaborator.

use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// One day's clock-in/clock-out record for an employee.
///
/// Events are produced by the attendance log and consumed read-only by the
/// engine. `time_out` is expected to be later than `time_in` on the same
/// date; overnight shifts do not occur in this system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceEvent {
    /// The employee this record belongs to.
    pub employee_id: String,
    /// The calendar date of the attendance.
    pub date: NaiveDate,
    /// The clock-in time.
    pub time_in: NaiveTime,
    /// The clock-out time.
    pub time_out: NaiveTime,
}

impl AttendanceEvent {
    /// Calculates the total worked hours for the day.
    ///
    /// Fractional hours are retained exactly (minutes divided by 60 as a
    /// `Decimal`), not rounded.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::AttendanceEvent;
    /// use chrono::{NaiveDate, NaiveTime};
    /// use rust_decimal::Decimal;
    ///
    /// let event = AttendanceEvent {
    ///     employee_id: "10001".to_string(),
    ///     date: NaiveDate::from_ymd_opt(2024, 6, 5).unwrap(),
    ///     time_in: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
    ///     time_out: NaiveTime::from_hms_opt(17, 30, 0).unwrap(),
    /// };
    /// assert_eq!(event.worked_hours(), Decimal::new(95, 1)); // 9.5 hours
    /// ```
    pub fn worked_hours(&self) -> Decimal {
        let worked_minutes = (self.time_out - self.time_in).num_minutes();
        Decimal::new(worked_minutes, 0) / Decimal::new(60, 0)
    }

    /// Returns the day of the week for the attendance date.
    pub fn day_of_week(&self) -> Weekday {
        self.date.weekday()
    }

    /// Returns true if the attendance date falls on a rest day (Saturday or Sunday).
    pub fn is_rest_day(&self) -> bool {
        matches!(self.day_of_week(), Weekday::Sat | Weekday::Sun)
    }

    /// Checks the record's internal consistency.
    ///
    /// A well-formed record has `time_out` strictly after `time_in`. Records
    /// failing this check are the attendance collaborator's responsibility to
    /// filter; if one still reaches the engine it is excluded from
    /// aggregation rather than aborting the calculation.
    pub fn validate(&self) -> EngineResult<()> {
        if self.time_out <= self.time_in {
            return Err(EngineError::InvalidAttendance {
                employee_id: self.employee_id.clone(),
                date: self.date,
                message: "time out is not after time in".to_string(),
            });
        }
        Ok(())
    }
}
