//! HTTP request handlers for the Payroll Processing Engine API.
//!
//! This module contains the handler functions for all API endpoints. Every
//! endpoint is a complete load-compute cycle over its own request body; no
//! state is shared between requests beyond the configured rates.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    calculate_deductions, find_high_deductions, process_records, summarize,
};
use crate::config::DeductionRates;
use crate::error::PayrollResult;
use crate::io::{PROCESSED_FILE_NAME, read_records, records_to_csv};
use crate::models::PayslipRecord;

use super::request::SingleCalculationRequest;
use super::response::{ApiError, ApiErrorResponse, ProcessResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/process", post(process_handler))
        .route("/export", post(export_handler))
        .route("/calculate", post(calculate_handler))
        .with_state(state)
}

/// Handler for POST /process.
///
/// Accepts a raw CSV payroll table and returns the augmented table, the
/// summary totals, and the high-deduction compliance sub-table as JSON.
async fn process_handler(State(state): State<AppState>, body: String) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll upload");

    let start_time = Instant::now();
    match run_payroll_cycle(&body, state.rates()) {
        Ok((rows, response)) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                rows = rows,
                flagged = response.compliance.len(),
                total_net_salary = %response.summary.total_net_salary,
                duration_us = duration.as_micros(),
                "Payroll processed successfully"
            );
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Payroll processing failed");
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}

/// Handler for POST /export.
///
/// Accepts a raw CSV payroll table and returns the processed table as a CSV
/// attachment named `processed_payroll.csv`.
async fn export_handler(State(state): State<AppState>, body: String) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Exporting processed payroll");

    let result = read_records(body.as_bytes())
        .map(|records| process_records(&records, state.rates()))
        .and_then(|payslips| records_to_csv(&payslips));

    match result {
        Ok(csv) => {
            info!(correlation_id = %correlation_id, "Export completed");
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{}\"", PROCESSED_FILE_NAME),
                    ),
                ],
                csv,
            )
                .into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Export failed");
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}

/// Handler for POST /calculate.
///
/// Accepts the ad-hoc single-employee input triple (with documented
/// defaults) and returns the deduction breakdown. Uses the same calculation
/// as the batch path, so the two stay numerically identical.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<SingleCalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing ad-hoc calculation");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(correlation_id = %correlation_id, error = %body_text, "JSON data error");
                    ApiError::malformed_json(body_text)
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(correlation_id = %correlation_id, error = %err, "JSON syntax error");
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (StatusCode::BAD_REQUEST, Json(error)).into_response();
        }
    };

    if let Err(err) = request.validate() {
        warn!(correlation_id = %correlation_id, error = %err, "Ad-hoc input rejected");
        let api_error: ApiErrorResponse = err.into();
        return api_error.into_response();
    }

    let breakdown = calculate_deductions(
        request.basic_salary,
        request.deductions,
        request.allowances,
        state.rates(),
    );

    info!(
        correlation_id = %correlation_id,
        net_salary = %breakdown.net_salary,
        "Ad-hoc calculation completed"
    );
    (StatusCode::OK, Json(breakdown)).into_response()
}

/// Runs one full load-compute cycle over a CSV body.
///
/// Returns the input row count alongside the response so callers can log it.
fn run_payroll_cycle(
    body: &str,
    rates: &DeductionRates,
) -> PayrollResult<(usize, ProcessResponse)> {
    let records = read_records(body.as_bytes())?;
    let payslips: Vec<PayslipRecord> = process_records(&records, rates);
    let summary = summarize(&payslips);
    let compliance = find_high_deductions(&payslips, rates);

    Ok((
        records.len(),
        ProcessResponse {
            records: payslips,
            summary,
            compliance,
        },
    ))
}
