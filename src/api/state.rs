//! Application state for the Payroll Processing Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::DeductionRates;

/// Shared application state.
///
/// Holds the deduction rates applied to every request. The rates are the
/// only state the engine carries; each request otherwise operates on its own
/// table snapshot and nothing outlives a single load-compute cycle.
#[derive(Clone)]
pub struct AppState {
    /// The configured deduction rates.
    rates: Arc<DeductionRates>,
}

impl AppState {
    /// Creates a new application state with the given rates.
    pub fn new(rates: DeductionRates) -> Self {
        Self {
            rates: Arc::new(rates),
        }
    }

    /// Returns a reference to the deduction rates.
    pub fn rates(&self) -> &DeductionRates {
        &self.rates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_app_state_exposes_rates() {
        let state = AppState::new(DeductionRates::default());
        assert_eq!(state.rates(), &DeductionRates::default());
    }
}
