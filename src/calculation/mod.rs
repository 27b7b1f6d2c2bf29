//! Calculation logic for the Payroll Calculation Engine.
//!
//! This module contains all the calculation functions for turning attendance
//! into pay: the daily regular/overtime split and day-type detection,
//! grace-period lateness, the SSS, PhilHealth and Pag-IBIG contribution
//! lookups, the progressive withholding-tax schedule, payroll-period
//! classification over record sets, and the weekly report assembler.

mod contributions;
mod daily_hours;
mod lateness;
mod periods;
mod weekly_report;
mod withholding_tax;

pub use contributions::{
    MonthlyDeductions, calculate_monthly_deductions, pagibig_contribution,
    philhealth_contribution, sss_contribution,
};
pub use daily_hours::{DailyHours, DayType, overtime_multiplier, split_daily_hours};
pub use lateness::{calculate_late_deduction, calculate_late_minutes};
pub use periods::{available_months, available_months_for, weeks_within_month};
pub use weekly_report::assemble_weekly_report;
pub use withholding_tax::withholding_tax;
