//! Single-record deduction calculation.
//!
//! This module provides the core payroll formula applied to one
//! (basic salary, deductions, allowances) triple. The batch path delegates
//! to the same function, so ad-hoc and batch results are identical by
//! construction.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::DeductionRates;

/// The derived fields for one payroll record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeductionBreakdown {
    /// Flat tax: `basic_salary * tax_rate`.
    pub tax: Decimal,
    /// Retirement fund contribution: `basic_salary * retirement_rate`.
    pub retirement_contribution: Decimal,
    /// Net pay after tax, retirement and pre-existing deductions.
    pub net_salary: Decimal,
}

/// Computes tax, retirement contribution and net salary for one record.
///
/// The formulas are:
///
/// ```text
/// tax                     = basic_salary * rates.tax_rate
/// retirement_contribution = basic_salary * rates.retirement_rate
/// net_salary              = basic_salary + allowances
///                           - (tax + deductions + retirement_contribution)
/// ```
///
/// No range constraint is enforced here: negative inputs propagate into
/// negative derived values. Range checks belong to the caller's boundary.
///
/// # Arguments
///
/// * `basic_salary` - Basic salary before allowances and deductions
/// * `deductions` - Pre-existing deductions, excluding tax and retirement
/// * `allowances` - Allowances added on top of basic salary
/// * `rates` - The deduction rates to apply
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_deductions;
/// use payroll_engine::config::DeductionRates;
/// use rust_decimal::Decimal;
///
/// let rates = DeductionRates::default();
/// let breakdown = calculate_deductions(
///     Decimal::from(5000),
///     Decimal::from(500),
///     Decimal::from(1000),
///     &rates,
/// );
/// assert_eq!(breakdown.tax, Decimal::from(500));
/// assert_eq!(breakdown.retirement_contribution, Decimal::from(250));
/// assert_eq!(breakdown.net_salary, Decimal::from(4750));
/// ```
pub fn calculate_deductions(
    basic_salary: Decimal,
    deductions: Decimal,
    allowances: Decimal,
    rates: &DeductionRates,
) -> DeductionBreakdown {
    let tax = basic_salary * rates.tax_rate;
    let retirement_contribution = basic_salary * rates.retirement_rate;
    let net_salary = basic_salary + allowances - (tax + deductions + retirement_contribution);

    DeductionBreakdown {
        tax,
        retirement_contribution,
        net_salary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_standard_rates_worked_example() {
        let breakdown = calculate_deductions(
            dec("5000"),
            dec("500"),
            dec("1000"),
            &DeductionRates::default(),
        );

        assert_eq!(breakdown.tax, dec("500.00"));
        assert_eq!(breakdown.retirement_contribution, dec("250.00"));
        assert_eq!(breakdown.net_salary, dec("4750.00"));
    }

    #[test]
    fn test_zero_salary_yields_zero_tax_and_retirement() {
        let breakdown = calculate_deductions(
            Decimal::ZERO,
            Decimal::ZERO,
            Decimal::ZERO,
            &DeductionRates::default(),
        );

        assert_eq!(breakdown.tax, Decimal::ZERO);
        assert_eq!(breakdown.retirement_contribution, Decimal::ZERO);
        assert_eq!(breakdown.net_salary, Decimal::ZERO);
    }

    #[test]
    fn test_deductions_can_push_net_salary_negative() {
        let breakdown = calculate_deductions(
            dec("1000"),
            dec("2000"),
            Decimal::ZERO,
            &DeductionRates::default(),
        );

        // 1000 - (100 + 2000 + 50) = -1150
        assert_eq!(breakdown.net_salary, dec("-1150.00"));
    }

    #[test]
    fn test_negative_inputs_propagate() {
        let breakdown = calculate_deductions(
            dec("-1000"),
            Decimal::ZERO,
            Decimal::ZERO,
            &DeductionRates::default(),
        );

        assert_eq!(breakdown.tax, dec("-100.00"));
        assert_eq!(breakdown.retirement_contribution, dec("-50.00"));
        assert_eq!(breakdown.net_salary, dec("-850.00"));
    }

    #[test]
    fn test_custom_rates_are_honoured() {
        let rates = DeductionRates {
            tax_rate: dec("0.20"),
            retirement_rate: dec("0.10"),
            high_deduction_threshold: dec("0.3"),
        };

        let breakdown = calculate_deductions(dec("1000"), dec("100"), dec("50"), &rates);

        assert_eq!(breakdown.tax, dec("200.00"));
        assert_eq!(breakdown.retirement_contribution, dec("100.00"));
        // 1000 + 50 - (200 + 100 + 100) = 650
        assert_eq!(breakdown.net_salary, dec("650.00"));
    }

    #[test]
    fn test_allowances_are_not_taxed() {
        let with_allowance = calculate_deductions(
            dec("5000"),
            Decimal::ZERO,
            dec("1000"),
            &DeductionRates::default(),
        );
        let without_allowance = calculate_deductions(
            dec("5000"),
            Decimal::ZERO,
            Decimal::ZERO,
            &DeductionRates::default(),
        );

        assert_eq!(with_allowance.tax, without_allowance.tax);
        assert_eq!(
            with_allowance.net_salary - without_allowance.net_salary,
            dec("1000")
        );
    }
}
