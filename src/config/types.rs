//! Configuration types for payroll calculation.
//!
//! This module contains the strongly-typed structures describing the work
//! schedule and the fiscal-year statutory tables. The tables are ordered
//! tuple lists scanned at lookup time, which keeps every row individually
//! testable. Values are deserialized from YAML configuration files or taken
//! from the built-in fiscal-2023 constructors.

use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::Deserialize;

/// Work-schedule rules used by the daily hours and lateness calculations.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WorkSchedule {
    /// The nominal start of the workday.
    pub work_start: NaiveTime,
    /// Minutes after `work_start` during which an arrival is still on time.
    pub grace_minutes: i64,
    /// Regular (non-overtime) hours per day; hours beyond this are overtime.
    pub regular_hours_per_day: Decimal,
    /// Overtime multiplier for Monday through Friday.
    pub weekday_overtime_multiplier: Decimal,
    /// Overtime multiplier for rest days (Saturday and Sunday).
    pub rest_day_overtime_multiplier: Decimal,
}

impl WorkSchedule {
    /// The standard schedule: 08:00 start, 10-minute grace, 8 regular hours,
    /// overtime at 125% on weekdays and 130% on rest days.
    pub fn standard() -> Self {
        Self {
            work_start: NaiveTime::from_hms_opt(8, 0, 0).expect("08:00:00 is a valid time"),
            grace_minutes: 10,
            regular_hours_per_day: Decimal::from_parts(8, 0, 0, false, 0),
            weekday_overtime_multiplier: Decimal::new(125, 2),
            rest_day_overtime_multiplier: Decimal::new(130, 2),
        }
    }
}

/// One band of the SSS contribution table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SssBand {
    /// The salary cap of the band.
    pub salary_cap: Decimal,
    /// The monthly contribution for salaries in the band.
    pub contribution: Decimal,
}

/// The SSS contribution table: ascending salary bands plus the capped
/// contribution for salaries above the last band.
///
/// The floor band applies strictly below its cap; every later band includes
/// its cap, matching the published schedule's "below 3,250" first row.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SssTable {
    /// Salary bands in ascending order of `salary_cap`.
    pub bands: Vec<SssBand>,
    /// Contribution for salaries above the last band's cap.
    pub maximum: Decimal,
}

/// The 2023 SSS schedule: ₱500-wide bands from below 3,250 (135.00) up to
/// 24,750 (1,102.50), capped at 1,125.00. Centavo pairs of
/// (salary cap, contribution).
const SSS_BANDS_2023: &[(i64, i64)] = &[
    (3_250_00, 135_00),
    (3_750_00, 157_50),
    (4_250_00, 180_00),
    (4_750_00, 202_50),
    (5_250_00, 225_00),
    (5_750_00, 247_50),
    (6_250_00, 270_00),
    (6_750_00, 292_50),
    (7_250_00, 315_00),
    (7_750_00, 337_50),
    (8_250_00, 360_00),
    (8_750_00, 382_50),
    (9_250_00, 405_00),
    (9_750_00, 427_50),
    (10_250_00, 450_00),
    (10_750_00, 472_50),
    (11_250_00, 495_00),
    (11_750_00, 517_50),
    (12_250_00, 540_00),
    (12_750_00, 562_50),
    (13_250_00, 585_00),
    (13_750_00, 607_50),
    (14_250_00, 630_00),
    (14_750_00, 652_50),
    (15_250_00, 675_00),
    (15_750_00, 697_50),
    (16_250_00, 720_00),
    (16_750_00, 742_50),
    (17_250_00, 765_00),
    (17_750_00, 787_50),
    (18_250_00, 810_00),
    (18_750_00, 832_50),
    (19_250_00, 855_00),
    (19_750_00, 877_50),
    (20_250_00, 900_00),
    (20_750_00, 922_50),
    (21_250_00, 945_00),
    (21_750_00, 967_50),
    (22_250_00, 990_00),
    (22_750_00, 1_012_50),
    (23_250_00, 1_035_00),
    (23_750_00, 1_057_50),
    (24_250_00, 1_080_00),
    (24_750_00, 1_102_50),
];

impl SssTable {
    /// The 2023 SSS contribution schedule.
    pub fn schedule_2023() -> Self {
        Self {
            bands: SSS_BANDS_2023
                .iter()
                .map(|&(cap, contribution)| SssBand {
                    salary_cap: Decimal::new(cap, 2),
                    contribution: Decimal::new(contribution, 2),
                })
                .collect(),
            maximum: Decimal::new(1_125_00, 2),
        }
    }
}

/// Parameters of the PhilHealth premium: a flat minimum up to a salary floor,
/// a percentage in between, and a flat maximum from the salary ceiling up.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PhilHealthParams {
    /// Salaries at or below this pay the minimum contribution.
    pub minimum_salary: Decimal,
    /// The minimum monthly contribution.
    pub minimum_contribution: Decimal,
    /// The employee-share premium rate applied between floor and ceiling.
    pub premium_rate: Decimal,
    /// Salaries at or above this pay the maximum contribution.
    pub maximum_salary: Decimal,
    /// The maximum monthly contribution.
    pub maximum_contribution: Decimal,
}

impl PhilHealthParams {
    /// The 2023 PhilHealth employee-share premium: 150.00 up to 10,000,
    /// 1.5% of salary below 60,000, 900.00 from 60,000 up.
    pub fn premium_2023() -> Self {
        Self {
            minimum_salary: Decimal::new(10_000_00, 2),
            minimum_contribution: Decimal::new(150_00, 2),
            premium_rate: Decimal::new(15, 3),
            maximum_salary: Decimal::new(60_000_00, 2),
            maximum_contribution: Decimal::new(900_00, 2),
        }
    }
}

/// Parameters of the Pag-IBIG contribution: a reduced rate for low salaries,
/// a standard rate above, and an absolute monthly cap.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PagIbigParams {
    /// Salaries at or below this use the reduced rate.
    pub low_salary_cap: Decimal,
    /// The reduced contribution rate.
    pub low_rate: Decimal,
    /// The standard contribution rate.
    pub standard_rate: Decimal,
    /// The monthly contribution cap.
    pub maximum_contribution: Decimal,
}

impl PagIbigParams {
    /// The 2023 Pag-IBIG rates: 1% up to 1,500, otherwise 2% capped at 100.00.
    pub fn rates_2023() -> Self {
        Self {
            low_salary_cap: Decimal::new(1_500_00, 2),
            low_rate: Decimal::new(1, 2),
            standard_rate: Decimal::new(2, 2),
            maximum_contribution: Decimal::new(100_00, 2),
        }
    }
}

/// One bracket of the progressive withholding-tax schedule.
///
/// Tax for income inside a bracket is `base + (income - floor) * rate`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TaxBracket {
    /// Taxable income must exceed this floor for the bracket to apply.
    pub floor: Decimal,
    /// Fixed tax owed on income up to the floor.
    pub base: Decimal,
    /// Marginal rate on income above the floor.
    pub rate: Decimal,
}

/// The progressive withholding-tax schedule: brackets in ascending order of
/// floor, the applicable bracket being the last one whose floor is exceeded.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WithholdingTaxTable {
    /// Tax brackets in ascending order of `floor`.
    pub brackets: Vec<TaxBracket>,
}

impl WithholdingTaxTable {
    /// The 2023 monthly withholding schedule: six tiers from 0% at or below
    /// 20,833 up to 35% above 666,667, with the published base amounts.
    pub fn monthly_2023() -> Self {
        let rows: &[(i64, i64, i64)] = &[
            // (floor, base, rate) in centavos / basis points over 10^4
            (0, 0, 0),
            (20_833_00, 0, 2_000),
            (33_333_00, 2_500_00, 2_500),
            (66_667_00, 10_833_00, 3_000),
            (166_667_00, 40_833_33, 3_200),
            (666_667_00, 200_833_33, 3_500),
        ];
        Self {
            brackets: rows
                .iter()
                .map(|&(floor, base, rate)| TaxBracket {
                    floor: Decimal::new(floor, 2),
                    base: Decimal::new(base, 2),
                    rate: Decimal::new(rate, 4),
                })
                .collect(),
        }
    }
}

/// The complete rule set a payroll calculation runs against.
///
/// Passed into the calculation functions as an explicit argument; the engine
/// holds no ambient configuration state.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatutoryConfig {
    /// Work-schedule rules.
    pub schedule: WorkSchedule,
    /// SSS contribution table.
    pub sss: SssTable,
    /// PhilHealth premium parameters.
    pub philhealth: PhilHealthParams,
    /// Pag-IBIG contribution parameters.
    pub pagibig: PagIbigParams,
    /// Withholding-tax schedule.
    pub tax: WithholdingTaxTable,
}

impl StatutoryConfig {
    /// The built-in fiscal-2023 rule set.
    pub fn fiscal_2023() -> Self {
        Self {
            schedule: WorkSchedule::standard(),
            sss: SssTable::schedule_2023(),
            philhealth: PhilHealthParams::premium_2023(),
            pagibig: PagIbigParams::rates_2023(),
            tax: WithholdingTaxTable::monthly_2023(),
        }
    }
}

impl Default for StatutoryConfig {
    fn default() -> Self {
        Self::fiscal_2023()
    }
}
