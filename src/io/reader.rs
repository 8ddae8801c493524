//! CSV ingest functionality.
//!
//! Parses an uploaded payroll table into typed [`EmployeeRecord`]s. Column
//! presence is checked against the header before any row is read; a missing
//! column aborts the whole load with an error naming the required set.
//! Non-numeric cells in numeric columns are rejected with their line and
//! column, rather than propagated as undefined values.

use std::io::Read;
use std::str::FromStr;

use csv::StringRecord;
use rust_decimal::Decimal;

use crate::error::{PayrollError, PayrollResult};
use crate::models::EmployeeRecord;

/// Positions of the required columns within the header row.
struct ColumnIndexes {
    employee_id: usize,
    name: usize,
    basic_salary: usize,
    deductions: usize,
    allowances: usize,
}

impl ColumnIndexes {
    /// Locates every required column in the header, or reports the full
    /// missing set. Header matching is exact and case-sensitive; extra
    /// columns are ignored.
    fn from_headers(headers: &StringRecord) -> PayrollResult<Self> {
        let find = |name: &str| headers.iter().position(|h| h == name);

        // Same order as REQUIRED_COLUMNS, so missing names line up below.
        let indexes = [
            find("Employee_ID"),
            find("Name"),
            find("Basic_Salary"),
            find("Deductions"),
            find("Allowances"),
        ];

        if let [
            Some(employee_id),
            Some(name),
            Some(basic_salary),
            Some(deductions),
            Some(allowances),
        ] = indexes
        {
            return Ok(Self {
                employee_id,
                name,
                basic_salary,
                deductions,
                allowances,
            });
        }

        let missing: Vec<&str> = EmployeeRecord::REQUIRED_COLUMNS
            .iter()
            .zip(&indexes)
            .filter(|(_, index)| index.is_none())
            .map(|(column, _)| *column)
            .collect();

        Err(PayrollError::MissingColumns {
            required: EmployeeRecord::REQUIRED_COLUMNS.join(", "),
            missing: missing.join(", "),
        })
    }
}

/// Parses one decimal cell, attributing failures to a line and column.
fn parse_amount(record: &StringRecord, index: usize, column: &str, line: u64) -> PayrollResult<Decimal> {
    let raw = record.get(index).unwrap_or("").trim();
    Decimal::from_str(raw).map_err(|_| PayrollError::InvalidCell {
        line,
        column: column.to_string(),
        value: raw.to_string(),
    })
}

/// Reads a payroll table into typed records.
///
/// The first row must be a header containing at least the five required
/// columns (`Employee_ID`, `Name`, `Basic_Salary`, `Deductions`,
/// `Allowances`), matched exactly and case-sensitively. A header with zero
/// data rows is valid and yields an empty vector.
///
/// # Arguments
///
/// * `input` - Any reader over the raw CSV bytes (UTF-8)
///
/// # Returns
///
/// Returns the parsed records in file order, or an error if:
/// - Any required column is absent (`MissingColumns`, naming the full set)
/// - A numeric column holds a non-numeric cell (`InvalidCell`)
/// - The input is not decodable as CSV at all (`CsvReadError`)
///
/// # Examples
///
/// ```
/// use payroll_engine::io::read_records;
///
/// let csv = "Employee_ID,Name,Basic_Salary,Deductions,Allowances\nE1,Alice,5000,500,1000\n";
/// let records = read_records(csv.as_bytes()).unwrap();
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].employee_id, "E1");
/// ```
pub fn read_records<R: Read>(input: R) -> PayrollResult<Vec<EmployeeRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    let headers = reader.headers()?.clone();
    let columns = ColumnIndexes::from_headers(&headers)?;

    let mut records = Vec::new();

    for row in reader.records() {
        let row = row?;
        let line = row.position().map(|p| p.line()).unwrap_or(0);

        records.push(EmployeeRecord {
            employee_id: row.get(columns.employee_id).unwrap_or("").to_string(),
            name: row.get(columns.name).unwrap_or("").to_string(),
            basic_salary: parse_amount(&row, columns.basic_salary, "Basic_Salary", line)?,
            deductions: parse_amount(&row, columns.deductions, "Deductions", line)?,
            allowances: parse_amount(&row, columns.allowances, "Allowances", line)?,
        });
    }

    Ok(records)
}
