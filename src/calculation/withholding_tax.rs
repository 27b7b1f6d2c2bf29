//! Progressive withholding-tax calculation.
//!
//! This module computes the monthly withholding tax from the basic salary
//! and the three statutory contributions, against a bracket schedule of
//! (floor, base, rate) rows.

use rust_decimal::Decimal;

use crate::config::WithholdingTaxTable;

/// Calculates the monthly withholding tax.
///
/// Taxable income is the monthly salary minus the SSS, PhilHealth and
/// Pag-IBIG contributions. The applicable bracket is the last one whose
/// floor the taxable income exceeds, and the tax is the bracket's base
/// amount plus its marginal rate on the excess over the floor. Taxable
/// income at or below the first taxed floor — including the non-positive
/// case — owes nothing.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::withholding_tax;
/// use payroll_engine::config::WithholdingTaxTable;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let table = WithholdingTaxTable::monthly_2023();
/// let dec = |s: &str| Decimal::from_str(s).unwrap();
///
/// // Salary 26,300 with 1,300 of contributions: taxable 25,000 lands in
/// // the 20% bracket: (25,000 - 20,833) * 0.20 = 833.40.
/// let tax = withholding_tax(dec("26300"), dec("1000"), dec("200"), dec("100"), &table);
/// assert_eq!(tax, dec("833.40"));
/// ```
pub fn withholding_tax(
    monthly_salary: Decimal,
    sss: Decimal,
    philhealth: Decimal,
    pagibig: Decimal,
    table: &WithholdingTaxTable,
) -> Decimal {
    let taxable = monthly_salary - (sss + philhealth + pagibig);

    match table.brackets.iter().rev().find(|b| taxable > b.floor) {
        Some(bracket) => bracket.base + (taxable - bracket.floor) * bracket.rate,
        None => Decimal::ZERO,
    }
}
