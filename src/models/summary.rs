//! Payroll summary model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Table-level aggregates over the augmented payroll table.
///
/// Each total is the arithmetic sum of the corresponding column across all
/// loaded rows. The default value is the all-zero summary of an empty table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PayrollSummary {
    /// Sum of basic salaries.
    pub total_salary: Decimal,
    /// Sum of derived tax.
    pub total_tax: Decimal,
    /// Sum of pre-existing deductions.
    pub total_deductions: Decimal,
    /// Sum of allowances.
    pub total_allowances: Decimal,
    /// Sum of derived net salaries.
    pub total_net_salary: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_summary_is_all_zero() {
        let summary = PayrollSummary::default();
        assert_eq!(summary.total_salary, Decimal::ZERO);
        assert_eq!(summary.total_tax, Decimal::ZERO);
        assert_eq!(summary.total_deductions, Decimal::ZERO);
        assert_eq!(summary.total_allowances, Decimal::ZERO);
        assert_eq!(summary.total_net_salary, Decimal::ZERO);
    }

    #[test]
    fn test_summary_serializes_totals_as_strings() {
        let summary = PayrollSummary {
            total_salary: Decimal::new(5000, 0),
            ..PayrollSummary::default()
        };
        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"total_salary\":\"5000\""));
    }
}
