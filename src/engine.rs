//! Payroll calculation orchestration.
//!
//! This module ties the classifier, the weekly assembler and the statutory
//! tables together: it resolves an employee's profile, narrows attendance to
//! the requested payroll month, buckets it into Monday-start weeks, and
//! produces one [`WeeklyPayrollReport`] per selected week.
//!
//! Every entry point is a pure function of its arguments: records and
//! profiles are passed in, nothing is cached between calls, and identical
//! inputs always produce identical reports.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::calculation::assemble_weekly_report;
use crate::config::StatutoryConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AttendanceEvent, CompensationProfile, PayrollMonth, PayrollPeriod, WeeklyPayrollReport,
    week_start_of,
};

/// Which payroll week(s) of a month to calculate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeekSelection {
    /// Every week of the payroll month, in ascending order.
    All,
    /// One week, by its 1-based position within the payroll month.
    Week(u32),
}

/// Calculates payroll reports for one employee and payroll month.
///
/// Attendance is narrowed to records whose payroll week belongs to `month`
/// (Friday rule), bucketed by week-start Monday, and assembled into one
/// report per selected week. With [`WeekSelection::All`] the reports come
/// back in ascending week order; with [`WeekSelection::Week`] exactly one
/// report is returned.
///
/// # Errors
///
/// - [`EngineError::EmployeeNotFound`] when `employee_id` has no profile.
/// - [`EngineError::NoAttendanceRecords`] when the employee has no
///   attendance in the payroll month.
/// - [`EngineError::WeekNotFound`] when the requested week number has no
///   attendance bucket.
///
/// # Example
///
/// ```
/// use payroll_engine::config::StatutoryConfig;
/// use payroll_engine::engine::{WeekSelection, calculate_period};
/// use payroll_engine::models::{AttendanceEvent, CompensationProfile, PayrollMonth};
/// use chrono::{NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
///
/// let profiles = vec![CompensationProfile {
///     employee_id: "10001".to_string(),
///     hourly_rate: Decimal::new(10000, 2),
///     basic_monthly_salary: Decimal::new(2000000, 2),
///     rice_subsidy: Decimal::ZERO,
///     phone_allowance: Decimal::ZERO,
///     clothing_allowance: Decimal::ZERO,
/// }];
/// let records = vec![AttendanceEvent {
///     employee_id: "10001".to_string(),
///     date: NaiveDate::from_ymd_opt(2024, 6, 5).unwrap(),
///     time_in: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
///     time_out: NaiveTime::from_hms_opt(16, 0, 0).unwrap(),
/// }];
///
/// let reports = calculate_period(
///     &profiles,
///     &records,
///     "10001",
///     PayrollMonth { year: 2024, month: 6 },
///     WeekSelection::All,
///     &StatutoryConfig::fiscal_2023(),
/// )?;
/// assert_eq!(reports.len(), 1);
/// assert_eq!(reports[0].worked_hours, Decimal::new(80, 1));
/// # Ok::<(), payroll_engine::error::EngineError>(())
/// ```
pub fn calculate_period(
    profiles: &[CompensationProfile],
    records: &[AttendanceEvent],
    employee_id: &str,
    month: PayrollMonth,
    selection: WeekSelection,
    config: &StatutoryConfig,
) -> EngineResult<Vec<WeeklyPayrollReport>> {
    let profile = profiles
        .iter()
        .find(|p| p.employee_id == employee_id)
        .ok_or_else(|| EngineError::EmployeeNotFound {
            employee_id: employee_id.to_string(),
        })?;

    let mut relevant: Vec<AttendanceEvent> = records
        .iter()
        .filter(|r| r.employee_id == employee_id)
        .filter(|r| PayrollMonth::of(r.date) == month)
        .cloned()
        .collect();

    if relevant.is_empty() {
        return Err(EngineError::NoAttendanceRecords {
            employee_id: employee_id.to_string(),
            month,
        });
    }

    relevant.sort_by_key(|r| r.date);

    // Bucket by week-start Monday; BTreeMap keeps the weeks ascending.
    let mut weekly: BTreeMap<NaiveDate, Vec<AttendanceEvent>> = BTreeMap::new();
    for record in relevant {
        weekly.entry(week_start_of(record.date)).or_default().push(record);
    }

    info!(
        employee_id,
        month = %month,
        weeks = weekly.len(),
        "calculating payroll period"
    );

    match selection {
        WeekSelection::All => Ok(weekly
            .iter()
            .enumerate()
            .map(|(index, (week_start, bucket))| {
                assemble_weekly_report(
                    profile,
                    &PayrollPeriod::containing(*week_start),
                    index as u32 + 1,
                    bucket,
                    config,
                )
            })
            .collect()),
        WeekSelection::Week(week_number) => {
            let selected = week_number
                .checked_sub(1)
                .and_then(|index| weekly.iter().nth(index as usize));
            match selected {
                Some((week_start, bucket)) => Ok(vec![assemble_weekly_report(
                    profile,
                    &PayrollPeriod::containing(*week_start),
                    week_number,
                    bucket,
                    config,
                )]),
                None => Err(EngineError::WeekNotFound {
                    week_number,
                    weeks_available: weekly.len() as u32,
                    month,
                }),
            }
        }
    }
}

/// Calculates payroll reports for every employee with attendance in the month.
///
/// A sequential loop over independent per-employee calculations; employees
/// whose calculation fails — typically no attendance in the month — are
/// skipped with a warning rather than failing the batch.
pub fn calculate_month_for_all(
    profiles: &[CompensationProfile],
    records: &[AttendanceEvent],
    month: PayrollMonth,
    selection: WeekSelection,
    config: &StatutoryConfig,
) -> Vec<WeeklyPayrollReport> {
    let mut reports = Vec::new();
    for profile in profiles {
        match calculate_period(
            profiles,
            records,
            &profile.employee_id,
            month,
            selection,
            config,
        ) {
            Ok(mut employee_reports) => reports.append(&mut employee_reports),
            Err(error) => warn!(
                employee_id = %profile.employee_id,
                %error,
                "skipping employee in batch payroll run"
            ),
        }
    }
    reports
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn event(employee_id: &str, date_str: &str, time_in: &str, time_out: &str) -> AttendanceEvent {
        AttendanceEvent {
            employee_id: employee_id.to_string(),
            date: NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap(),
            time_in: NaiveTime::parse_from_str(time_in, "%H:%M").unwrap(),
            time_out: NaiveTime::parse_from_str(time_out, "%H:%M").unwrap(),
        }
    }

    fn profile(employee_id: &str) -> CompensationProfile {
        CompensationProfile {
            employee_id: employee_id.to_string(),
            hourly_rate: dec("100"),
            basic_monthly_salary: dec("20000"),
            rice_subsidy: dec("1500"),
            phone_allowance: dec("1000"),
            clothing_allowance: dec("800"),
        }
    }

    fn june_month() -> PayrollMonth {
        PayrollMonth { year: 2024, month: 6 }
    }

    fn two_week_records() -> Vec<AttendanceEvent> {
        vec![
            event("10001", "2024-06-04", "08:00", "16:00"), // week of 06-03
            event("10001", "2024-06-05", "08:00", "16:00"),
            event("10001", "2024-06-11", "08:00", "16:00"), // week of 06-10
        ]
    }

    #[test]
    fn test_unknown_employee() {
        let err = calculate_period(
            &[profile("10001")],
            &two_week_records(),
            "99999",
            june_month(),
            WeekSelection::All,
            &StatutoryConfig::fiscal_2023(),
        )
        .unwrap_err();
        assert!(matches!(err, EngineError::EmployeeNotFound { .. }));
    }

    #[test]
    fn test_no_attendance_for_month() {
        let err = calculate_period(
            &[profile("10001")],
            &two_week_records(),
            "10001",
            PayrollMonth { year: 2024, month: 9 },
            WeekSelection::All,
            &StatutoryConfig::fiscal_2023(),
        )
        .unwrap_err();
        assert!(matches!(err, EngineError::NoAttendanceRecords { .. }));
    }

    #[test]
    fn test_all_weeks_ascending() {
        let reports = calculate_period(
            &[profile("10001")],
            &two_week_records(),
            "10001",
            june_month(),
            WeekSelection::All,
            &StatutoryConfig::fiscal_2023(),
        )
        .unwrap();

        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].week_number, 1);
        assert_eq!(reports[0].week_start, NaiveDate::from_ymd_opt(2024, 6, 3).unwrap());
        assert_eq!(reports[0].worked_hours, dec("16"));
        assert_eq!(reports[1].week_number, 2);
        assert_eq!(reports[1].week_start, NaiveDate::from_ymd_opt(2024, 6, 10).unwrap());
        assert_eq!(reports[1].worked_hours, dec("8"));
    }

    #[test]
    fn test_single_week_selection() {
        let reports = calculate_period(
            &[profile("10001")],
            &two_week_records(),
            "10001",
            june_month(),
            WeekSelection::Week(2),
            &StatutoryConfig::fiscal_2023(),
        )
        .unwrap();

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].week_number, 2);
        assert_eq!(reports[0].worked_hours, dec("8"));
    }

    #[test]
    fn test_week_out_of_range() {
        let err = calculate_period(
            &[profile("10001")],
            &two_week_records(),
            "10001",
            june_month(),
            WeekSelection::Week(3),
            &StatutoryConfig::fiscal_2023(),
        )
        .unwrap_err();
        match err {
            EngineError::WeekNotFound {
                week_number,
                weeks_available,
                ..
            } => {
                assert_eq!(week_number, 3);
                assert_eq!(weeks_available, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_week_zero_is_not_a_valid_selection() {
        let err = calculate_period(
            &[profile("10001")],
            &two_week_records(),
            "10001",
            june_month(),
            WeekSelection::Week(0),
            &StatutoryConfig::fiscal_2023(),
        )
        .unwrap_err();
        assert!(matches!(err, EngineError::WeekNotFound { week_number: 0, .. }));
    }

    #[test]
    fn test_records_of_other_employees_are_ignored() {
        let mut records = two_week_records();
        records.push(event("10002", "2024-06-04", "08:00", "18:00"));

        let reports = calculate_period(
            &[profile("10001"), profile("10002")],
            &records,
            "10001",
            june_month(),
            WeekSelection::Week(1),
            &StatutoryConfig::fiscal_2023(),
        )
        .unwrap();

        assert_eq!(reports[0].worked_hours, dec("16"));
        assert_eq!(reports[0].overtime_hours, Decimal::ZERO);
    }

    #[test]
    fn test_month_boundary_week_belongs_to_friday_month() {
        // Wednesday 2024-01-31 sits in the week of Monday 2024-01-29, whose
        // Friday is 2024-02-02: the record is February attendance.
        let records = vec![event("10001", "2024-01-31", "08:00", "16:00")];

        let january = calculate_period(
            &[profile("10001")],
            &records,
            "10001",
            PayrollMonth { year: 2024, month: 1 },
            WeekSelection::All,
            &StatutoryConfig::fiscal_2023(),
        );
        assert!(matches!(
            january.unwrap_err(),
            EngineError::NoAttendanceRecords { .. }
        ));

        let february = calculate_period(
            &[profile("10001")],
            &records,
            "10001",
            PayrollMonth { year: 2024, month: 2 },
            WeekSelection::All,
            &StatutoryConfig::fiscal_2023(),
        )
        .unwrap();
        assert_eq!(february.len(), 1);
        assert_eq!(
            february[0].week_start,
            NaiveDate::from_ymd_opt(2024, 1, 29).unwrap()
        );
    }

    #[test]
    fn test_identical_inputs_yield_identical_reports() {
        let profiles = [profile("10001")];
        let records = two_week_records();
        let config = StatutoryConfig::fiscal_2023();

        let first = calculate_period(
            &profiles,
            &records,
            "10001",
            june_month(),
            WeekSelection::All,
            &config,
        )
        .unwrap();
        let second = calculate_period(
            &profiles,
            &records,
            "10001",
            june_month(),
            WeekSelection::All,
            &config,
        )
        .unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_batch_skips_employees_without_attendance() {
        let profiles = [profile("10001"), profile("10002")];
        let reports = calculate_month_for_all(
            &profiles,
            &two_week_records(),
            june_month(),
            WeekSelection::All,
            &StatutoryConfig::fiscal_2023(),
        );

        // Only 10001 has June attendance; 10002 is skipped, not fatal.
        assert_eq!(reports.len(), 2);
        assert!(reports.iter().all(|r| r.employee_id == "10001"));
    }
}
