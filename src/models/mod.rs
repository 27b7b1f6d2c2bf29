//! Core data models for the Payroll Calculation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod employee;
mod pay_period;
mod payroll_report;

pub use attendance::AttendanceEvent;
pub use employee::CompensationProfile;
pub use pay_period::{PayrollMonth, PayrollPeriod, week_start_of};
pub use payroll_report::WeeklyPayrollReport;
