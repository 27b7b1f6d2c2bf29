//! Weekly payroll report model.
//!
//! This module contains the [`WeeklyPayrollReport`] type, the engine's
//! output: one week's pay, allowances and deductions for one employee.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::PayrollMonth;

/// One employee's payroll breakdown for one payroll week.
///
/// Reports are created fresh per calculation and immutable once produced.
/// All monetary amounts are exact decimals; rounding to two places for
/// display is the presenter's responsibility. `net_pay` is not floored at
/// zero — a pathological week (e.g. extreme lateness) is reported as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyPayrollReport {
    /// The employee this report is for.
    pub employee_id: String,
    /// The payroll month the week belongs to.
    pub payroll_month: PayrollMonth,
    /// The 1-based position of the week within the payroll month.
    pub week_number: u32,
    /// Human-readable label, e.g. "Week 2 (2024-06-10 to 2024-06-14)".
    /// The dates are the first and last attendance dates in the week.
    pub period_label: String,
    /// The Monday the payroll week starts on.
    pub week_start: NaiveDate,
    /// The Sunday the payroll week ends on.
    pub week_end: NaiveDate,
    /// Total regular hours worked (capped at 8 per day).
    pub worked_hours: Decimal,
    /// Total minutes of lateness across the week.
    pub late_minutes: i64,
    /// Total overtime hours across the week (before multipliers).
    pub overtime_hours: Decimal,
    /// Pay for regular hours at the plain hourly rate.
    pub regular_pay: Decimal,
    /// Pay for overtime hours with day-type multipliers applied.
    pub overtime_pay: Decimal,
    /// One week's share of the fixed monthly allowances.
    pub allowances: Decimal,
    /// One week's share of SSS, PhilHealth and Pag-IBIG contributions.
    pub government_deductions: Decimal,
    /// One week's share of the monthly withholding tax.
    pub withholding_tax: Decimal,
    /// Monetary deduction for the week's lateness.
    pub late_deduction: Decimal,
    /// Regular pay + overtime pay + allowances.
    pub gross_pay: Decimal,
    /// Government deductions + withholding tax + late deduction.
    pub total_deductions: Decimal,
    /// Gross pay minus total deductions; may be negative.
    pub net_pay: Decimal,
}
