//! Weekly Payroll Calculation Engine
//!
//! This crate computes weekly payroll for hourly employees from raw time-clock
//! attendance records: worked and overtime hours, lateness against a 10-minute
//! grace period, statutory contributions (SSS, PhilHealth, Pag-IBIG), a
//! progressive withholding-tax schedule, and the resulting gross/net weekly
//! breakdown.
//!
//! Attendance is grouped into Monday–Sunday payroll weeks, and each week is
//! attributed to the calendar month containing its Friday.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
