//! High-deduction compliance check.
//!
//! Flags employees whose pre-existing deductions exceed the configured
//! fraction of basic salary. The comparison is a strict inequality: a row
//! whose deductions exactly equal the threshold is not flagged.

use crate::config::DeductionRates;
use crate::models::PayslipRecord;

/// Returns true when a record's deductions exceed the compliance threshold.
///
/// The rule is `deductions > basic_salary * high_deduction_threshold`,
/// strictly. Equality is compliant.
pub fn is_high_deduction(payslip: &PayslipRecord, rates: &DeductionRates) -> bool {
    payslip.deductions > payslip.basic_salary * rates.high_deduction_threshold
}

/// Filters the augmented table down to the rows that fail the compliance
/// check.
///
/// An empty result means no issues were found; it is a valid outcome, not an
/// error.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::{find_high_deductions, process_records};
/// use payroll_engine::config::DeductionRates;
/// use payroll_engine::models::EmployeeRecord;
/// use rust_decimal::Decimal;
///
/// let rates = DeductionRates::default();
/// let records = vec![EmployeeRecord {
///     employee_id: "E2".to_string(),
///     name: "Bob".to_string(),
///     basic_salary: Decimal::from(10000),
///     deductions: Decimal::from(3500),
///     allowances: Decimal::ZERO,
/// }];
/// let payslips = process_records(&records, &rates);
///
/// let flagged = find_high_deductions(&payslips, &rates);
/// assert_eq!(flagged.len(), 1);
/// ```
pub fn find_high_deductions(
    payslips: &[PayslipRecord],
    rates: &DeductionRates,
) -> Vec<PayslipRecord> {
    payslips
        .iter()
        .filter(|p| is_high_deduction(p, rates))
        .cloned()
        .collect()
}
