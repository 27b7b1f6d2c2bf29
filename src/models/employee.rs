//! Compensation profile model.
//!
//! This module defines the CompensationProfile struct describing the pay
//! components of one employee, as supplied by the employee directory
//! collaborator.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The pay components of one hourly employee.
///
/// Profiles are owned by the employee directory; the engine never mutates
/// them. All amounts are non-negative decimals in pesos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompensationProfile {
    /// Unique identifier for the employee.
    pub employee_id: String,
    /// The hourly rate used for regular and overtime pay.
    pub hourly_rate: Decimal,
    /// The basic monthly salary, the base for statutory deductions.
    pub basic_monthly_salary: Decimal,
    /// Fixed monthly rice subsidy.
    pub rice_subsidy: Decimal,
    /// Fixed monthly phone allowance.
    pub phone_allowance: Decimal,
    /// Fixed monthly clothing allowance.
    pub clothing_allowance: Decimal,
}

impl CompensationProfile {
    /// Returns the sum of the three fixed monthly allowances.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::CompensationProfile;
    /// use rust_decimal::Decimal;
    ///
    /// let profile = CompensationProfile {
    ///     employee_id: "10001".to_string(),
    ///     hourly_rate: Decimal::new(15000, 2),
    ///     basic_monthly_salary: Decimal::new(2500000, 2),
    ///     rice_subsidy: Decimal::new(150000, 2),
    ///     phone_allowance: Decimal::new(100000, 2),
    ///     clothing_allowance: Decimal::new(80000, 2),
    /// };
    /// assert_eq!(profile.monthly_allowances(), Decimal::new(330000, 2)); // 3300.00
    /// ```
    pub fn monthly_allowances(&self) -> Decimal {
        self.rice_subsidy + self.phone_allowance + self.clothing_allowance
    }
}
