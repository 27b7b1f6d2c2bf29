//! Payroll-period classification over attendance record sets.
//!
//! This module provides the queries that drive period selection: which
//! payroll months a record set spans, and which payroll weeks a month
//! contains. All results are distinct and ascending; a week's 1-based
//! position in [`weeks_within_month`] is the week number shown to users.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::models::{AttendanceEvent, PayrollMonth, week_start_of};

/// Returns the distinct payroll months present in a record set, ascending.
///
/// Months are attributed per the Friday rule, so a late-January week with a
/// February Friday counts as February.
pub fn available_months(records: &[AttendanceEvent]) -> Vec<PayrollMonth> {
    records
        .iter()
        .map(|r| PayrollMonth::of(r.date))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Returns the distinct payroll months with records for one employee, ascending.
pub fn available_months_for(records: &[AttendanceEvent], employee_id: &str) -> Vec<PayrollMonth> {
    records
        .iter()
        .filter(|r| r.employee_id == employee_id)
        .map(|r| PayrollMonth::of(r.date))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Returns the distinct week-start Mondays whose payroll month equals
/// `month`, ascending.
///
/// A payroll month contains four or five weeks depending on calendar
/// alignment; no fixed count is assumed here.
pub fn weeks_within_month(records: &[AttendanceEvent], month: PayrollMonth) -> Vec<NaiveDate> {
    records
        .iter()
        .filter(|r| PayrollMonth::of(r.date) == month)
        .map(|r| week_start_of(r.date))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn event(employee_id: &str, date_str: &str) -> AttendanceEvent {
        AttendanceEvent {
            employee_id: employee_id.to_string(),
            date: NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap(),
            time_in: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            time_out: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_available_months_distinct_and_ascending() {
        let records = vec![
            event("10001", "2024-07-03"),
            event("10001", "2024-06-05"),
            event("10001", "2024-06-12"),
            event("10002", "2024-05-08"),
        ];

        assert_eq!(
            available_months(&records),
            vec![
                PayrollMonth { year: 2024, month: 5 },
                PayrollMonth { year: 2024, month: 6 },
                PayrollMonth { year: 2024, month: 7 },
            ]
        );
    }

    #[test]
    fn test_available_months_applies_friday_rule() {
        // Wednesday 2024-01-31 sits in the week whose Friday is 2024-02-02:
        // the record set has a February payroll month, not January.
        let records = vec![event("10001", "2024-01-31")];
        assert_eq!(
            available_months(&records),
            vec![PayrollMonth { year: 2024, month: 2 }]
        );
    }

    #[test]
    fn test_available_months_for_filters_by_employee() {
        let records = vec![
            event("10001", "2024-06-05"),
            event("10002", "2024-07-03"),
        ];

        assert_eq!(
            available_months_for(&records, "10001"),
            vec![PayrollMonth { year: 2024, month: 6 }]
        );
        assert_eq!(
            available_months_for(&records, "10002"),
            vec![PayrollMonth { year: 2024, month: 7 }]
        );
        assert!(available_months_for(&records, "10003").is_empty());
    }

    #[test]
    fn test_weeks_within_month_ascending_mondays() {
        let records = vec![
            event("10001", "2024-06-12"), // week of 2024-06-10
            event("10001", "2024-06-05"), // week of 2024-06-03
            event("10001", "2024-06-06"), // same week, deduplicated
        ];

        assert_eq!(
            weeks_within_month(&records, PayrollMonth { year: 2024, month: 6 }),
            vec![date(2024, 6, 3), date(2024, 6, 10)]
        );
    }

    #[test]
    fn test_weeks_within_month_excludes_other_months() {
        let records = vec![
            event("10001", "2024-06-05"),
            event("10001", "2024-07-03"),
        ];

        assert_eq!(
            weeks_within_month(&records, PayrollMonth { year: 2024, month: 6 }),
            vec![date(2024, 6, 3)]
        );
    }

    #[test]
    fn test_august_2024_has_five_payroll_weeks() {
        // Fridays 2024-08-02, -09, -16, -23 and -30 all fall in August, so a
        // full month of attendance yields five payroll weeks.
        let mondays = [
            date(2024, 7, 29),
            date(2024, 8, 5),
            date(2024, 8, 12),
            date(2024, 8, 19),
            date(2024, 8, 26),
        ];
        let records: Vec<AttendanceEvent> = mondays
            .iter()
            .map(|d| event("10001", &d.to_string()))
            .collect();

        assert_eq!(
            weeks_within_month(&records, PayrollMonth { year: 2024, month: 8 }),
            mondays.to_vec()
        );
    }

    #[test]
    fn test_weeks_within_month_empty_records() {
        assert!(weeks_within_month(&[], PayrollMonth { year: 2024, month: 6 }).is_empty());
    }
}
