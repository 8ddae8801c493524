//! Response types for the Payroll Processing Engine API.
//!
//! This module defines the `/process` response body plus the error response
//! structures and error mapping for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::PayrollError;
use crate::models::{PayrollSummary, PayslipRecord};

/// Response body for the `/process` endpoint.
///
/// One load-compute cycle in full: the augmented table, the five summary
/// totals, and the sub-table of rows failing the high-deduction compliance
/// check. An empty `compliance` list means no issues were detected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessResponse {
    /// The augmented payroll table, in input order.
    pub records: Vec<PayslipRecord>,
    /// Table-level totals.
    pub summary: PayrollSummary,
    /// Rows whose deductions exceed the compliance threshold.
    pub compliance: Vec<PayslipRecord>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<PayrollError> for ApiErrorResponse {
    fn from(error: PayrollError) -> Self {
        match error {
            PayrollError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            PayrollError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            PayrollError::InvalidRate { name, rate } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Invalid rate configuration",
                    format!("Rate '{}' has invalid value {}", name, rate),
                ),
            },
            PayrollError::MissingColumns { required, missing } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "MISSING_COLUMNS",
                    format!("Dataset must contain these columns: {}", required),
                    format!("Missing columns: {}", missing),
                ),
            },
            PayrollError::InvalidCell {
                line,
                column,
                value,
            } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_CELL",
                    format!("Invalid value in column '{}' at line {}", column, line),
                    format!("'{}' is not a valid number", value),
                ),
            },
            PayrollError::CsvReadError { message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "MALFORMED_CSV",
                    "Failed to read payroll data",
                    message,
                ),
            },
            PayrollError::CsvWriteError { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "EXPORT_ERROR",
                    "Failed to encode processed payroll",
                    message,
                ),
            },
            PayrollError::NegativeAmount { field, value } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_AMOUNT",
                    format!("Invalid amount for '{}'", field),
                    format!("Amounts must not be negative, got {}", value),
                ),
            },
        }
    }
}
