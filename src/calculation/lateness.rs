//! Grace-period lateness calculation.
//!
//! This module provides functions for measuring an arrival's lateness
//! against the nominal work start and converting it to a monetary deduction.

use chrono::{Duration, NaiveTime};
use rust_decimal::Decimal;

use crate::config::WorkSchedule;

/// Calculates minutes of lateness for a clock-in time.
///
/// An arrival within the grace period (at or before 08:10 under the standard
/// schedule) is on time. Once the grace period is exceeded, lateness is the
/// full elapsed time from the nominal start — 08:00, not 08:10 — so an
/// 08:11 arrival is 11 minutes late. Crossing the threshold makes the whole
/// span count, not just the excess over the grace window; this is the
/// intended behavior, not an off-by-grace bug.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_late_minutes;
/// use payroll_engine::config::WorkSchedule;
/// use chrono::NaiveTime;
///
/// let schedule = WorkSchedule::standard();
/// let on_time = NaiveTime::from_hms_opt(8, 5, 0).unwrap();
/// assert_eq!(calculate_late_minutes(on_time, &schedule), 0);
///
/// let late = NaiveTime::from_hms_opt(8, 15, 0).unwrap();
/// assert_eq!(calculate_late_minutes(late, &schedule), 15);
/// ```
pub fn calculate_late_minutes(time_in: NaiveTime, schedule: &WorkSchedule) -> i64 {
    let grace_end = schedule.work_start + Duration::minutes(schedule.grace_minutes);
    if time_in > grace_end {
        (time_in - schedule.work_start).num_minutes()
    } else {
        0
    }
}

/// Converts late minutes into a monetary deduction at the hourly rate.
pub fn calculate_late_deduction(late_minutes: i64, hourly_rate: Decimal) -> Decimal {
    Decimal::new(late_minutes, 0) / Decimal::new(60, 0) * hourly_rate
}
