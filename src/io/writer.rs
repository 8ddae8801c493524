//! CSV export functionality.
//!
//! Encodes the augmented payroll table as UTF-8 CSV with the same column
//! structure the rest of the engine uses. The header row is always written,
//! even for an empty table, and no index column is emitted.

use std::io::Write;

use crate::error::{PayrollError, PayrollResult};
use crate::models::PayslipRecord;

/// The fixed file name for the exported payroll table.
pub const PROCESSED_FILE_NAME: &str = "processed_payroll.csv";

/// The augmented table columns, in export order.
const AUGMENTED_COLUMNS: [&str; 8] = [
    "Employee_ID",
    "Name",
    "Basic_Salary",
    "Deductions",
    "Allowances",
    "Tax",
    "Retirement_Contribution",
    "Net_Salary",
];

/// Writes the augmented table as CSV to the given writer.
///
/// The header row is written unconditionally, so an empty table exports as a
/// header-only file that round-trips back to an empty table.
///
/// # Arguments
///
/// * `payslips` - The augmented payroll rows
/// * `writer` - Destination for the encoded CSV
pub fn write_records<W: Write>(payslips: &[PayslipRecord], writer: W) -> PayrollResult<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer
        .write_record(AUGMENTED_COLUMNS)
        .map_err(write_error)?;

    for payslip in payslips {
        csv_writer.serialize(payslip).map_err(write_error)?;
    }

    csv_writer.flush().map_err(|e| PayrollError::CsvWriteError {
        message: e.to_string(),
    })?;

    Ok(())
}

/// Encodes the augmented table as a CSV string.
///
/// # Examples
///
/// ```
/// use payroll_engine::io::records_to_csv;
///
/// let csv = records_to_csv(&[]).unwrap();
/// assert!(csv.starts_with("Employee_ID,Name,Basic_Salary"));
/// ```
pub fn records_to_csv(payslips: &[PayslipRecord]) -> PayrollResult<String> {
    let mut buffer = Vec::new();
    write_records(payslips, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| PayrollError::CsvWriteError {
        message: e.to_string(),
    })
}

fn write_error(error: csv::Error) -> PayrollError {
    PayrollError::CsvWriteError {
        message: error.to_string(),
    }
}
