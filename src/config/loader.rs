//! Configuration loading functionality.
//!
//! This module provides the [`RatesLoader`] type for loading deduction rates
//! from a YAML file and validating them before use.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{PayrollError, PayrollResult};

use super::types::DeductionRates;

/// Loads and provides access to the deduction rate configuration.
///
/// The `RatesLoader` reads a single YAML file containing the tax rate, the
/// retirement contribution rate, and the high-deduction compliance threshold.
/// Each rate is validated to lie in `[0, 1]` at load time so calculation code
/// never has to re-check them.
///
/// # File Format
///
/// ```text
/// tax_rate: 0.10
/// retirement_rate: 0.05
/// high_deduction_threshold: 0.3
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::RatesLoader;
///
/// let loader = RatesLoader::load("./config/rates.yaml").unwrap();
/// println!("Tax rate: {}", loader.rates().tax_rate);
/// ```
#[derive(Debug, Clone)]
pub struct RatesLoader {
    rates: DeductionRates,
}

impl RatesLoader {
    /// Loads rates from the specified YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the rates file (e.g., "./config/rates.yaml")
    ///
    /// # Returns
    ///
    /// Returns a `RatesLoader` instance on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML (`ConfigParseError`)
    /// - Any rate is outside `[0, 1]` (`InvalidRate`)
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let rates: DeductionRates =
            serde_yaml::from_str(&content).map_err(|e| PayrollError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        Self::validate(&rates)?;

        Ok(Self { rates })
    }

    /// Creates a loader with the standard default rates, without touching
    /// the filesystem.
    pub fn with_defaults() -> Self {
        Self {
            rates: DeductionRates::default(),
        }
    }

    /// Returns the loaded rates.
    pub fn rates(&self) -> &DeductionRates {
        &self.rates
    }

    /// Checks that every rate is a fraction in `[0, 1]`.
    fn validate(rates: &DeductionRates) -> PayrollResult<()> {
        let fields = [
            ("tax_rate", rates.tax_rate),
            ("retirement_rate", rates.retirement_rate),
            ("high_deduction_threshold", rates.high_deduction_threshold),
        ];

        for (name, value) in fields {
            if value < Decimal::ZERO || value > Decimal::ONE {
                return Err(PayrollError::InvalidRate {
                    name: name.to_string(),
                    rate: value.to_string(),
                });
            }
        }

        Ok(())
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
    fn test_load_missing_file_returns_not_found() {
        let result = RatesLoader::load("/nonexistent/rates.yaml");
        match result {
            Err(PayrollError::ConfigNotFound { path }) => {
                assert!(path.contains("rates.yaml"));
            }
            other => panic!("Expected ConfigNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_with_defaults_uses_standard_rates() {
        let loader = RatesLoader::with_defaults();
        assert_eq!(loader.rates().tax_rate, dec("0.10"));
        assert_eq!(loader.rates().retirement_rate, dec("0.05"));
        assert_eq!(loader.rates().high_deduction_threshold, dec("0.3"));
    }

    #[test]
    fn test_validate_rejects_rate_above_one() {
        let rates = DeductionRates {
            tax_rate: dec("1.5"),
            ..DeductionRates::default()
        };
        match RatesLoader::validate(&rates) {
            Err(PayrollError::InvalidRate { name, rate }) => {
                assert_eq!(name, "tax_rate");
                assert_eq!(rate, "1.5");
            }
            other => panic!("Expected InvalidRate, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_negative_rate() {
        let rates = DeductionRates {
            retirement_rate: dec("-0.05"),
            ..DeductionRates::default()
        };
        match RatesLoader::validate(&rates) {
            Err(PayrollError::InvalidRate { name, .. }) => {
                assert_eq!(name, "retirement_rate");
            }
            other => panic!("Expected InvalidRate, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_accepts_boundary_rates() {
        let rates = DeductionRates {
            tax_rate: Decimal::ZERO,
            retirement_rate: Decimal::ONE,
            high_deduction_threshold: dec("0.3"),
        };
        assert!(RatesLoader::validate(&rates).is_ok());
    }

    #[test]
    fn test_load_from_real_file() {
        let loader = RatesLoader::load("./config/rates.yaml").unwrap();
        assert_eq!(loader.rates(), &DeductionRates::default());
    }
}
