//! Payroll period and payroll month models.
//!
//! This module contains the [`PayrollMonth`] and [`PayrollPeriod`] types and
//! the week-grouping rule that drives all attendance bucketing: weeks run
//! Monday to Sunday, and a week belongs to the calendar month containing its
//! Friday. A week starting Monday Jan 29 with Friday Feb 2 is a February
//! payroll week, even though most of its days fall in January.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{EngineError, EngineResult};

/// Returns the Monday on or before the given date.
///
/// # Examples
///
/// ```
/// use payroll_engine::models::week_start_of;
/// use chrono::NaiveDate;
///
/// // 2024-06-05 is a Wednesday; its week starts Monday 2024-06-03.
/// let wednesday = NaiveDate::from_ymd_opt(2024, 6, 5).unwrap();
/// assert_eq!(week_start_of(wednesday), NaiveDate::from_ymd_opt(2024, 6, 3).unwrap());
///
/// // A Monday is its own week start.
/// let monday = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
/// assert_eq!(week_start_of(monday), monday);
/// ```
pub fn week_start_of(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// A payroll month: the calendar month a payroll week is attributed to.
///
/// Distinct from the plain calendar month a date falls in — attribution
/// follows the Friday rule, see [`PayrollMonth::of`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct PayrollMonth {
    /// The calendar year.
    pub year: i32,
    /// The calendar month number (1-12).
    pub month: u32,
}

impl PayrollMonth {
    /// Creates a payroll month, validating the month number.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::PayrollMonth;
    ///
    /// assert!(PayrollMonth::new(2024, 6).is_ok());
    /// assert!(PayrollMonth::new(2024, 13).is_err());
    /// assert!(PayrollMonth::new(2024, 0).is_err());
    /// ```
    pub fn new(year: i32, month: u32) -> EngineResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(EngineError::InvalidPayrollMonth { year, month });
        }
        Ok(Self { year, month })
    }

    /// Returns the payroll month a date is attributed to.
    ///
    /// The date's week is the Monday-to-Sunday week containing it; the week
    /// belongs to the calendar month containing that week's Friday. The
    /// result is therefore identical for all seven dates of the same week.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::PayrollMonth;
    /// use chrono::NaiveDate;
    ///
    /// // Monday 2024-01-29 starts a week whose Friday is 2024-02-02, so the
    /// // whole week is a February payroll week.
    /// let monday = NaiveDate::from_ymd_opt(2024, 1, 29).unwrap();
    /// assert_eq!(PayrollMonth::of(monday), PayrollMonth { year: 2024, month: 2 });
    ///
    /// // Its Sunday (2024-02-04) maps to the same payroll month.
    /// let sunday = NaiveDate::from_ymd_opt(2024, 2, 4).unwrap();
    /// assert_eq!(PayrollMonth::of(sunday), PayrollMonth { year: 2024, month: 2 });
    /// ```
    pub fn of(date: NaiveDate) -> Self {
        let friday = week_start_of(date) + Duration::days(4);
        Self {
            year: friday.year(),
            month: friday.month(),
        }
    }
}

impl fmt::Display for PayrollMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.month {
            1 => "January",
            2 => "February",
            3 => "March",
            4 => "April",
            5 => "May",
            6 => "June",
            7 => "July",
            8 => "August",
            9 => "September",
            10 => "October",
            11 => "November",
            12 => "December",
            _ => return write!(f, "{:04}-{:02}", self.year, self.month),
        };
        write!(f, "{} {}", name, self.year)
    }
}

/// One Monday-to-Sunday payroll week and the month it is attributed to.
///
/// Periods are derived values computed on demand from a date; they are never
/// stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollPeriod {
    /// The Monday the week starts on.
    pub week_start: NaiveDate,
    /// The Sunday the week ends on (`week_start + 6`).
    pub week_end: NaiveDate,
    /// The payroll month the week belongs to, per the Friday rule.
    pub payroll_month: PayrollMonth,
}

impl PayrollPeriod {
    /// Returns the payroll period containing the given date.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::{PayrollMonth, PayrollPeriod};
    /// use chrono::NaiveDate;
    ///
    /// let period = PayrollPeriod::containing(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());
    /// assert_eq!(period.week_start, NaiveDate::from_ymd_opt(2024, 1, 29).unwrap());
    /// assert_eq!(period.week_end, NaiveDate::from_ymd_opt(2024, 2, 4).unwrap());
    /// assert_eq!(period.payroll_month, PayrollMonth { year: 2024, month: 2 });
    /// ```
    pub fn containing(date: NaiveDate) -> Self {
        let week_start = week_start_of(date);
        Self {
            week_start,
            week_end: week_start + Duration::days(6),
            payroll_month: PayrollMonth::of(week_start),
        }
    }

    /// Checks if a given date falls within this payroll period.
    ///
    /// The check is inclusive of both the starting Monday and ending Sunday.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.week_start && date <= self.week_end
    }
}
