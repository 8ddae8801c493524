//! Error types for the Payroll Processing Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during payroll processing.

use thiserror::Error;

/// The main error type for the Payroll Processing Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::PayrollError;
///
/// let error = PayrollError::ConfigNotFound {
///     path: "/missing/rates.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/rates.yaml");
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A configured rate was outside the valid range.
    #[error("Invalid rate '{rate}' for {name}: must be between 0 and 1")]
    InvalidRate {
        /// The name of the rate field.
        name: String,
        /// The out-of-range value.
        rate: String,
    },

    /// The input table is missing one or more required columns.
    #[error("Dataset must contain these columns: {required}; missing: {missing}")]
    MissingColumns {
        /// The full required column set, comma separated.
        required: String,
        /// The columns that were absent, comma separated.
        missing: String,
    },

    /// A cell in a numeric column could not be parsed as a number.
    #[error("Invalid value '{value}' in column '{column}' at line {line}: not a valid number")]
    InvalidCell {
        /// The 1-based line in the input file (header is line 1).
        line: u64,
        /// The column containing the bad value.
        column: String,
        /// The offending cell contents.
        value: String,
    },

    /// The input could not be read as CSV at all.
    #[error("Failed to read payroll data: {message}")]
    CsvReadError {
        /// A description of the read failure.
        message: String,
    },

    /// The augmented table could not be encoded as CSV.
    #[error("Failed to write payroll data: {message}")]
    CsvWriteError {
        /// A description of the write failure.
        message: String,
    },

    /// An amount supplied at the API boundary was negative.
    #[error("Invalid amount for '{field}': must not be negative, got {value}")]
    NegativeAmount {
        /// The field holding the negative amount.
        field: String,
        /// The rejected value.
        value: String,
    },
}

impl From<csv::Error> for PayrollError {
    fn from(error: csv::Error) -> Self {
        PayrollError::CsvReadError {
            message: error.to_string(),
        }
    }
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = PayrollError::ConfigNotFound {
            path: "/missing/rates.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/rates.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = PayrollError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_missing_columns_names_required_set() {
        let error = PayrollError::MissingColumns {
            required: "Employee_ID, Name, Basic_Salary, Deductions, Allowances".to_string(),
            missing: "Basic_Salary".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("Employee_ID, Name, Basic_Salary, Deductions, Allowances"));
        assert!(message.contains("missing: Basic_Salary"));
    }

    #[test]
    fn test_invalid_cell_displays_location() {
        let error = PayrollError::InvalidCell {
            line: 3,
            column: "Basic_Salary".to_string(),
            value: "abc".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid value 'abc' in column 'Basic_Salary' at line 3: not a valid number"
        );
    }

    #[test]
    fn test_negative_amount_displays_field_and_value() {
        let error = PayrollError::NegativeAmount {
            field: "basic_salary".to_string(),
            value: "-100".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid amount for 'basic_salary': must not be negative, got -100"
        );
    }

    #[test]
    fn test_invalid_rate_displays_name_and_value() {
        let error = PayrollError::InvalidRate {
            name: "tax_rate".to_string(),
            rate: "1.5".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid rate '1.5' for tax_rate: must be between 0 and 1"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<PayrollError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_config_not_found() -> PayrollResult<()> {
            Err(PayrollError::ConfigNotFound {
                path: "/test".to_string(),
            })
        }

        fn propagates_error() -> PayrollResult<()> {
            returns_config_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
