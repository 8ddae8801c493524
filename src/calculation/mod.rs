//! Calculation logic for the Payroll Processing Engine.
//!
//! This module contains the pure calculation functions: the single-record
//! deduction breakdown, batch processing of a payroll table, table-level
//! summary aggregation, and the high-deduction compliance check. Every
//! function is stateless and re-entrant; rates are passed in explicitly.

mod batch;
mod compliance;
mod deductions;
mod summary;

pub use batch::process_records;
pub use compliance::{find_high_deductions, is_high_deduction};
pub use deductions::{DeductionBreakdown, calculate_deductions};
pub use summary::summarize;
