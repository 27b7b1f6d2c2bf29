//! Daily hours splitting and day-type detection.
//!
//! This module provides functions for splitting one day's worked time into
//! regular hours (up to the daily threshold) and overtime hours, and for
//! determining the overtime multiplier that applies to the day.

use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::WorkSchedule;
use crate::models::AttendanceEvent;

/// The kind of day an attendance date falls on, for overtime pricing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// Monday through Friday.
    Weekday,
    /// Saturday or Sunday.
    RestDay,
}

impl DayType {
    /// Returns the day type of a date.
    pub fn of(date: NaiveDate) -> Self {
        match date.weekday() {
            Weekday::Sat | Weekday::Sun => DayType::RestDay,
            _ => DayType::Weekday,
        }
    }
}

/// One day's worked time split into regular and overtime hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyHours {
    /// Hours up to the daily threshold (capped).
    pub regular_hours: Decimal,
    /// Hours exceeding the daily threshold (zero if none).
    pub overtime_hours: Decimal,
    /// The kind of day, determining the overtime multiplier.
    pub day_type: DayType,
}

/// Splits one attendance record's worked time into regular and overtime hours.
///
/// Regular hours are capped at the schedule's daily threshold; anything
/// beyond it is overtime. Fractional hours are kept exact, and no hours are
/// lost or double-counted: `regular_hours + overtime_hours` always equals
/// the total time between clock-in and clock-out.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::split_daily_hours;
/// use payroll_engine::config::WorkSchedule;
/// use payroll_engine::models::AttendanceEvent;
/// use chrono::{NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
///
/// let event = AttendanceEvent {
///     employee_id: "10001".to_string(),
///     date: NaiveDate::from_ymd_opt(2024, 6, 5).unwrap(),
///     time_in: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
///     time_out: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
/// };
///
/// let split = split_daily_hours(&event, &WorkSchedule::standard());
/// assert_eq!(split.regular_hours, Decimal::new(80, 1));  // 8.0
/// assert_eq!(split.overtime_hours, Decimal::new(20, 1)); // 2.0
/// ```
pub fn split_daily_hours(event: &AttendanceEvent, schedule: &WorkSchedule) -> DailyHours {
    let worked_hours = event.worked_hours();
    let threshold = schedule.regular_hours_per_day;

    let regular_hours = if worked_hours <= threshold {
        worked_hours
    } else {
        threshold
    };
    let overtime_hours = if worked_hours > threshold {
        worked_hours - threshold
    } else {
        Decimal::ZERO
    };

    DailyHours {
        regular_hours,
        overtime_hours,
        day_type: DayType::of(event.date),
    }
}

/// Returns the overtime multiplier for a date: the rest-day rate on Saturday
/// and Sunday, the weekday rate otherwise.
pub fn overtime_multiplier(date: NaiveDate, schedule: &WorkSchedule) -> Decimal {
    match DayType::of(date) {
        DayType::RestDay => schedule.rest_day_overtime_multiplier,
        DayType::Weekday => schedule.weekday_overtime_multiplier,
    }
}
