//! Batch payroll processing.
//!
//! Applies the single-record deduction formula to every row of an input
//! table. Rows are independent of one another, so processing order has no
//! effect on the result.

use crate::config::DeductionRates;
use crate::models::{EmployeeRecord, PayslipRecord};

use super::deductions::calculate_deductions;

/// Augments every input record with its derived tax, retirement contribution
/// and net salary columns.
///
/// Each output row is produced by [`calculate_deductions`] on that row alone;
/// there is no cross-row dependency, and the output preserves input order.
/// An empty input yields an empty output.
///
/// # Arguments
///
/// * `records` - The parsed input payroll table
/// * `rates` - The deduction rates to apply
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::process_records;
/// use payroll_engine::config::DeductionRates;
/// use payroll_engine::models::EmployeeRecord;
/// use rust_decimal::Decimal;
///
/// let records = vec![EmployeeRecord {
///     employee_id: "E1".to_string(),
///     name: "Alice".to_string(),
///     basic_salary: Decimal::from(5000),
///     deductions: Decimal::from(500),
///     allowances: Decimal::from(1000),
/// }];
///
/// let payslips = process_records(&records, &DeductionRates::default());
/// assert_eq!(payslips[0].net_salary, Decimal::from(4750));
/// ```
pub fn process_records(records: &[EmployeeRecord], rates: &DeductionRates) -> Vec<PayslipRecord> {
    records
        .iter()
        .map(|record| {
            let breakdown = calculate_deductions(
                record.basic_salary,
                record.deductions,
                record.allowances,
                rates,
            );
            PayslipRecord::new(record.clone(), breakdown)
        })
        .collect()
}
