//! Configuration types for payroll processing.
//!
//! This module contains the strongly-typed rate configuration that is
//! deserialized from the YAML rates file.

use rust_decimal::Decimal;
use serde::Deserialize;

/// The deduction rates applied to every payroll calculation.
///
/// All three values are fractions of basic salary. Tax and retirement are
/// deducted from pay; the high-deduction threshold drives the compliance
/// check (an employee is flagged when their pre-existing deductions exceed
/// `basic_salary * high_deduction_threshold`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DeductionRates {
    /// Flat tax rate applied to basic salary.
    pub tax_rate: Decimal,
    /// Retirement fund contribution rate applied to basic salary.
    pub retirement_rate: Decimal,
    /// Fraction of basic salary above which deductions are flagged.
    #[serde(default = "default_high_deduction_threshold")]
    pub high_deduction_threshold: Decimal,
}

fn default_high_deduction_threshold() -> Decimal {
    Decimal::new(3, 1)
}

impl Default for DeductionRates {
    /// Returns the standard rates: 10% tax, 5% retirement, 30% compliance
    /// threshold.
    fn default() -> Self {
        Self {
            tax_rate: Decimal::new(10, 2),
            retirement_rate: Decimal::new(5, 2),
            high_deduction_threshold: default_high_deduction_threshold(),
        }
    }
}
