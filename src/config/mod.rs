//! Configuration loading and management for the Payroll Processing Engine.
//!
//! This module provides the deduction rate configuration and the loader that
//! reads it from a YAML file. Rates are explicit values passed into the
//! calculation functions rather than module-level constants, so they can be
//! swapped without touching calculation code.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::RatesLoader;
//!
//! let rates = RatesLoader::load("./config/rates.yaml").unwrap();
//! println!("Tax rate: {}", rates.rates().tax_rate);
//! ```

mod loader;
mod types;

pub use loader::RatesLoader;
pub use types::DeductionRates;
