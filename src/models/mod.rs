//! Core data models for the Payroll Processing Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod employee;
mod payslip;
mod summary;

pub use employee::EmployeeRecord;
pub use payslip::PayslipRecord;
pub use summary::PayrollSummary;
