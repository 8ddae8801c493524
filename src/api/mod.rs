//! HTTP API module for the Payroll Processing Engine.
//!
//! This module provides the REST endpoints for processing an uploaded payroll
//! table, downloading the processed table, and running the ad-hoc
//! single-employee calculator.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::SingleCalculationRequest;
pub use response::{ApiError, ProcessResponse};
pub use state::AppState;
