//! Augmented payroll record model.
//!
//! A [`PayslipRecord`] is an input record extended with the three derived
//! columns. Derived fields are pure functions of the input fields and the
//! configured rates; they are never edited or stored independently.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::employee::EmployeeRecord;
use crate::calculation::DeductionBreakdown;

/// One row of the augmented payroll table.
///
/// Carries the five input columns unchanged plus `Tax`,
/// `Retirement_Contribution` and `Net_Salary`. Field order matches the
/// column order of the exported table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayslipRecord {
    /// Opaque employee identifier, copied from the input row.
    #[serde(rename = "Employee_ID")]
    pub employee_id: String,
    /// Display name, copied from the input row.
    #[serde(rename = "Name")]
    pub name: String,
    /// Basic salary, copied from the input row.
    #[serde(rename = "Basic_Salary")]
    pub basic_salary: Decimal,
    /// Pre-existing deductions, copied from the input row.
    #[serde(rename = "Deductions")]
    pub deductions: Decimal,
    /// Allowances, copied from the input row.
    #[serde(rename = "Allowances")]
    pub allowances: Decimal,
    /// Derived flat tax on basic salary.
    #[serde(rename = "Tax")]
    pub tax: Decimal,
    /// Derived retirement fund contribution.
    #[serde(rename = "Retirement_Contribution")]
    pub retirement_contribution: Decimal,
    /// Derived net salary after all deductions.
    #[serde(rename = "Net_Salary")]
    pub net_salary: Decimal,
}

impl PayslipRecord {
    /// Combines an input record with its deduction breakdown.
    pub fn new(record: EmployeeRecord, breakdown: DeductionBreakdown) -> Self {
        Self {
            employee_id: record.employee_id,
            name: record.name,
            basic_salary: record.basic_salary,
            deductions: record.deductions,
            allowances: record.allowances,
            tax: breakdown.tax,
            retirement_contribution: breakdown.retirement_contribution,
            net_salary: breakdown.net_salary,
        }
    }
}
