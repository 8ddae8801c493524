//! Request types for the Payroll Processing Engine API.
//!
//! This module defines the JSON request structure for the ad-hoc
//! `/calculate` endpoint. The batch endpoints take raw CSV bodies and have
//! no request struct.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};

/// Request body for the `/calculate` endpoint.
///
/// All three amounts are optional in the JSON and fall back to the
/// documented defaults (basic salary 5000, deductions 500, allowances 1000).
/// The minimum bound of zero is enforced here, at the boundary, not inside
/// the calculator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SingleCalculationRequest {
    /// Basic salary for the calculation. Defaults to 5000.
    #[serde(default = "default_basic_salary")]
    pub basic_salary: Decimal,
    /// Pre-existing deductions. Defaults to 500.
    #[serde(default = "default_deductions")]
    pub deductions: Decimal,
    /// Allowances. Defaults to 1000.
    #[serde(default = "default_allowances")]
    pub allowances: Decimal,
}

fn default_basic_salary() -> Decimal {
    Decimal::from(5000)
}

fn default_deductions() -> Decimal {
    Decimal::from(500)
}

fn default_allowances() -> Decimal {
    Decimal::from(1000)
}

impl Default for SingleCalculationRequest {
    fn default() -> Self {
        Self {
            basic_salary: default_basic_salary(),
            deductions: default_deductions(),
            allowances: default_allowances(),
        }
    }
}

impl SingleCalculationRequest {
    /// Rejects negative amounts.
    ///
    /// Returns the first offending field as a `NegativeAmount` error.
    pub fn validate(&self) -> PayrollResult<()> {
        let fields = [
            ("basic_salary", self.basic_salary),
            ("deductions", self.deductions),
            ("allowances", self.allowances),
        ];

        for (field, value) in fields {
            if value < Decimal::ZERO {
                return Err(PayrollError::NegativeAmount {
                    field: field.to_string(),
                    value: value.to_string(),
                });
            }
        }

        Ok(())
    }
}
