//! Weekly payroll report assembly.
//!
//! This module combines one payroll week's attendance with an employee's
//! compensation profile and the statutory tables into a
//! [`WeeklyPayrollReport`]: hours and lateness aggregated across the week,
//! overtime priced by day type, and the monthly allowances and deductions
//! prorated to the week.

use rust_decimal::Decimal;
use tracing::warn;

use crate::config::StatutoryConfig;
use crate::models::{
    AttendanceEvent, CompensationProfile, PayrollPeriod, WeeklyPayrollReport,
};

use super::contributions::calculate_monthly_deductions;
use super::daily_hours::{DayType, split_daily_hours};
use super::lateness::{calculate_late_deduction, calculate_late_minutes};

/// Monthly amounts are spread over a constant four weeks, even in five-week
/// payroll months.
const WEEKS_PER_MONTH: Decimal = Decimal::from_parts(4, 0, 0, false, 0);

/// Assembles one employee's payroll report for one payroll week.
///
/// The records are the attendance bucket for the week; a record whose times
/// are inconsistent is excluded from aggregation with a warning rather than
/// aborting the week. The report's label carries the first and last
/// attendance dates in the bucket.
///
/// Net pay is gross pay minus deductions and is not floored at zero: a week
/// of extreme lateness can legitimately come out negative and is reported
/// as-is.
pub fn assemble_weekly_report(
    profile: &CompensationProfile,
    period: &PayrollPeriod,
    week_number: u32,
    records: &[AttendanceEvent],
    config: &StatutoryConfig,
) -> WeeklyPayrollReport {
    let mut regular_hours = Decimal::ZERO;
    let mut weekday_overtime = Decimal::ZERO;
    let mut rest_day_overtime = Decimal::ZERO;
    let mut late_minutes = 0i64;

    for record in records {
        if let Err(error) = record.validate() {
            warn!(
                employee_id = %record.employee_id,
                date = %record.date,
                %error,
                "excluding malformed attendance record from weekly aggregation"
            );
            continue;
        }

        let split = split_daily_hours(record, &config.schedule);
        regular_hours += split.regular_hours;
        match split.day_type {
            DayType::RestDay => rest_day_overtime += split.overtime_hours,
            DayType::Weekday => weekday_overtime += split.overtime_hours,
        }
        late_minutes += calculate_late_minutes(record.time_in, &config.schedule);
    }

    let regular_pay = regular_hours * profile.hourly_rate;
    let overtime_pay = weekday_overtime
        * profile.hourly_rate
        * config.schedule.weekday_overtime_multiplier
        + rest_day_overtime * profile.hourly_rate * config.schedule.rest_day_overtime_multiplier;
    let late_deduction = calculate_late_deduction(late_minutes, profile.hourly_rate);

    let weekly_allowances = profile.monthly_allowances() / WEEKS_PER_MONTH;

    let monthly = calculate_monthly_deductions(profile.basic_monthly_salary, config);
    let weekly_government_deductions = monthly.government_total() / WEEKS_PER_MONTH;
    let weekly_withholding_tax = monthly.withholding_tax / WEEKS_PER_MONTH;

    let gross_pay = regular_pay + overtime_pay + weekly_allowances;
    let total_deductions = weekly_government_deductions + weekly_withholding_tax + late_deduction;
    let net_pay = gross_pay - total_deductions;

    let first_date = records
        .iter()
        .map(|r| r.date)
        .min()
        .unwrap_or(period.week_start);
    let last_date = records
        .iter()
        .map(|r| r.date)
        .max()
        .unwrap_or(period.week_end);

    WeeklyPayrollReport {
        employee_id: profile.employee_id.clone(),
        payroll_month: period.payroll_month,
        week_number,
        period_label: format!("Week {} ({} to {})", week_number, first_date, last_date),
        week_start: period.week_start,
        week_end: period.week_end,
        worked_hours: regular_hours,
        late_minutes,
        overtime_hours: weekday_overtime + rest_day_overtime,
        regular_pay,
        overtime_pay,
        allowances: weekly_allowances,
        government_deductions: weekly_government_deductions,
        withholding_tax: weekly_withholding_tax,
        late_deduction,
        gross_pay,
        total_deductions,
        net_pay,
    }
}
