//! Employee payroll record model.
//!
//! This module defines the strongly-typed input record for payroll processing.
//! The five required fields map one-to-one onto the required columns of the
//! uploaded payroll table, so column presence is validated once at the CSV
//! boundary and calculation code never handles missing fields.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of the input payroll table.
///
/// Field names are renamed to the exact, case-sensitive column headers the
/// payroll dataset must carry (`Employee_ID`, `Name`, `Basic_Salary`,
/// `Deductions`, `Allowances`). Monetary values are decimals; the engine
/// places no range constraint on them, so negative inputs propagate into
/// negative derived values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// Opaque employee identifier. Uniqueness is not enforced.
    #[serde(rename = "Employee_ID")]
    pub employee_id: String,
    /// Display name of the employee.
    #[serde(rename = "Name")]
    pub name: String,
    /// Basic salary before allowances and deductions.
    #[serde(rename = "Basic_Salary")]
    pub basic_salary: Decimal,
    /// Pre-existing deductions, excluding tax and retirement.
    #[serde(rename = "Deductions")]
    pub deductions: Decimal,
    /// Allowances added on top of basic salary.
    #[serde(rename = "Allowances")]
    pub allowances: Decimal,
}

impl EmployeeRecord {
    /// The required column headers, in table order.
    pub const REQUIRED_COLUMNS: [&'static str; 5] = [
        "Employee_ID",
        "Name",
        "Basic_Salary",
        "Deductions",
        "Allowances",
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_deserialize_record_from_renamed_fields() {
        let json = r#"{
            "Employee_ID": "E1",
            "Name": "Alice",
            "Basic_Salary": "5000",
            "Deductions": "500",
            "Allowances": "1000"
        }"#;

        let record: EmployeeRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.employee_id, "E1");
        assert_eq!(record.name, "Alice");
        assert_eq!(record.basic_salary, dec("5000"));
        assert_eq!(record.deductions, dec("500"));
        assert_eq!(record.allowances, dec("1000"));
    }

    #[test]
    fn test_serialize_record_round_trip() {
        let record = EmployeeRecord {
            employee_id: "E2".to_string(),
            name: "Bob".to_string(),
            basic_salary: dec("10000"),
            deductions: dec("3500"),
            allowances: Decimal::ZERO,
        };

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"Employee_ID\":\"E2\""));
        let deserialized: EmployeeRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }

    #[test]
    fn test_required_columns_in_table_order() {
        assert_eq!(
            EmployeeRecord::REQUIRED_COLUMNS,
            ["Employee_ID", "Name", "Basic_Salary", "Deductions", "Allowances"]
        );
    }
}
