//! Statutory contribution lookups.
//!
//! This module provides the SSS, PhilHealth and Pag-IBIG contribution
//! calculations. Each is a pure function of the basic monthly salary against
//! a fiscal-year table, monotone non-decreasing in salary, and each returns
//! a monthly figure — the weekly report prorates them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::{PagIbigParams, PhilHealthParams, SssTable, StatutoryConfig};

use super::withholding_tax::withholding_tax;

/// Looks up the monthly SSS contribution for a salary.
///
/// The table is scanned in ascending band order. The floor band applies
/// strictly below its cap (the published schedule's "below 3,250" row);
/// every later band includes its cap. Salaries above the last band pay the
/// maximum.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::sss_contribution;
/// use payroll_engine::config::SssTable;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let table = SssTable::schedule_2023();
/// let salary = Decimal::from_str("20000").unwrap();
/// assert_eq!(sss_contribution(salary, &table), Decimal::from_str("900.00").unwrap());
/// ```
pub fn sss_contribution(salary: Decimal, table: &SssTable) -> Decimal {
    let mut bands = table.bands.iter();
    if let Some(floor_band) = bands.next() {
        if salary < floor_band.salary_cap {
            return floor_band.contribution;
        }
    }
    for band in bands {
        if salary <= band.salary_cap {
            return band.contribution;
        }
    }
    table.maximum
}

/// Calculates the monthly PhilHealth employee-share contribution.
///
/// Flat minimum at or below the salary floor, a percentage of salary
/// strictly below the ceiling, flat maximum from the ceiling up.
pub fn philhealth_contribution(salary: Decimal, params: &PhilHealthParams) -> Decimal {
    if salary <= params.minimum_salary {
        params.minimum_contribution
    } else if salary < params.maximum_salary {
        salary * params.premium_rate
    } else {
        params.maximum_contribution
    }
}

/// Calculates the monthly Pag-IBIG contribution.
///
/// The reduced rate applies at or below the low-salary cap; above it the
/// standard rate applies, capped at the maximum contribution.
pub fn pagibig_contribution(salary: Decimal, params: &PagIbigParams) -> Decimal {
    if salary <= params.low_salary_cap {
        salary * params.low_rate
    } else {
        (salary * params.standard_rate).min(params.maximum_contribution)
    }
}

/// The four monthly statutory deductions for one employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyDeductions {
    /// Monthly SSS contribution.
    pub sss: Decimal,
    /// Monthly PhilHealth contribution.
    pub philhealth: Decimal,
    /// Monthly Pag-IBIG contribution.
    pub pagibig: Decimal,
    /// Monthly withholding tax on salary net of the three contributions.
    pub withholding_tax: Decimal,
}

impl MonthlyDeductions {
    /// The sum of the three government contributions, excluding tax.
    pub fn government_total(&self) -> Decimal {
        self.sss + self.philhealth + self.pagibig
    }
}

/// Computes all four monthly statutory deductions from a basic monthly salary.
///
/// The withholding tax is computed on the salary net of the three
/// contributions, per the fiscal schedule in the configuration.
pub fn calculate_monthly_deductions(
    monthly_salary: Decimal,
    config: &StatutoryConfig,
) -> MonthlyDeductions {
    let sss = sss_contribution(monthly_salary, &config.sss);
    let philhealth = philhealth_contribution(monthly_salary, &config.philhealth);
    let pagibig = pagibig_contribution(monthly_salary, &config.pagibig);
    let withholding_tax =
        withholding_tax(monthly_salary, sss, philhealth, pagibig, &config.tax);

    MonthlyDeductions {
        sss,
        philhealth,
        pagibig,
        withholding_tax,
    }
}
