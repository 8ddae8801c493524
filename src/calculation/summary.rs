//! Table-level summary aggregation.
//!
//! Recomputes the five payroll totals in full on every call; there is no
//! incremental update.

use crate::models::{PayrollSummary, PayslipRecord};

/// Sums the five summary columns over the augmented table.
///
/// Each total is the plain arithmetic sum of the corresponding column; the
/// sum over zero rows is zero, so an empty table yields
/// [`PayrollSummary::default`].
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::summarize;
/// use payroll_engine::models::PayrollSummary;
///
/// assert_eq!(summarize(&[]), PayrollSummary::default());
/// ```
pub fn summarize(payslips: &[PayslipRecord]) -> PayrollSummary {
    payslips.iter().fold(PayrollSummary::default(), |mut acc, p| {
        acc.total_salary += p.basic_salary;
        acc.total_tax += p.tax;
        acc.total_deductions += p.deductions;
        acc.total_allowances += p.allowances;
        acc.total_net_salary += p.net_salary;
        acc
    })
}
