//! Payroll Processing & Tax Compliance Engine
//!
//! This crate ingests an employee payroll table (CSV), applies flat-rate tax and
//! retirement deductions, computes net salary per employee, flags employees whose
//! deductions exceed the compliance threshold, and produces aggregate summaries.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod io;
pub mod models;
