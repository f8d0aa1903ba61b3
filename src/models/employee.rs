//! Raw employee record model.
//!
//! This module defines the EmployeeRecord struct as submitted by the
//! input-collection surface, before any normalization. Every field is
//! optional on the wire and falls back to the submission defaults.

use serde::{Deserialize, Serialize};

/// A money or duration value as it arrives from the submission surface.
///
/// The surface is loosely typed: amounts may arrive as JSON numbers, as
/// strings, or as null. Parsing into a decimal happens during normalization;
/// anything unparsable there is coerced to zero rather than rejected.
///
/// A JSON number is kept as [`serde_json::Number`] so its decimal literal
/// survives intact until parsing (no detour through binary floating point).
///
/// # Example
///
/// ```
/// use sif_engine::models::MoneyInput;
///
/// let from_number: MoneyInput = serde_json::from_str("1.255").unwrap();
/// let from_string: MoneyInput = serde_json::from_str("\"1.255\"").unwrap();
/// let from_null: MoneyInput = serde_json::from_str("null").unwrap();
///
/// assert!(matches!(from_number, MoneyInput::Number(_)));
/// assert!(matches!(from_string, MoneyInput::Text(_)));
/// assert!(matches!(from_null, MoneyInput::Null));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MoneyInput {
    /// A JSON number, e.g. `250.5`.
    Number(serde_json::Number),
    /// A string, e.g. `"250.500"` or `"abc"`.
    Text(String),
    /// JSON null.
    Null,
}

impl Default for MoneyInput {
    fn default() -> Self {
        MoneyInput::Text("0".to_string())
    }
}

fn default_id_type() -> String {
    "C".to_string()
}

fn default_bic() -> String {
    "BMUSOMRX".to_string()
}

fn default_frequency() -> String {
    "M".to_string()
}

fn default_working_days() -> String {
    "30".to_string()
}

/// One employee salary record as submitted, prior to normalization.
///
/// No invariants hold on this type: any field may be malformed or out of
/// range. Missing fields deserialize to the submission-surface defaults
/// (id type "C", BIC "BMUSOMRX", frequency "M", working days "30",
/// amounts "0", other text fields empty).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// Identity document type, nominally "C" (civil ID) or "P" (passport).
    #[serde(default = "default_id_type")]
    pub employee_id_type: String,
    /// Identity document number.
    #[serde(default)]
    pub employee_id: String,
    /// Employer-side payroll reference number.
    #[serde(default)]
    pub reference_number: String,
    /// Employee full name.
    #[serde(default)]
    pub employee_name: String,
    /// BIC of the employee's bank.
    #[serde(default = "default_bic")]
    pub employee_bic_code: String,
    /// Employee bank account number.
    #[serde(default)]
    pub employee_account: String,
    /// Salary frequency, nominally "M" (monthly) or "B" (bi-weekly).
    #[serde(default = "default_frequency")]
    pub salary_frequency: String,
    /// Number of working days in the period, as a digit string.
    #[serde(default = "default_working_days")]
    pub number_of_working_days: String,
    /// Net salary as submitted. Never trusted; the engine recomputes it.
    #[serde(default)]
    pub net_salary: MoneyInput,
    /// Basic salary for the period.
    #[serde(default)]
    pub basic_salary: MoneyInput,
    /// Extra hours worked (duration, not money).
    #[serde(default)]
    pub extra_hours: MoneyInput,
    /// Additional income beyond basic salary.
    #[serde(default)]
    pub extra_income: MoneyInput,
    /// Deductions for the period.
    #[serde(default)]
    pub deductions: MoneyInput,
    /// Social security contribution deducted.
    #[serde(default)]
    pub social_security_deductions: MoneyInput,
    /// Free-text notes column.
    #[serde(default)]
    pub notes_comments: String,
}

impl Default for EmployeeRecord {
    fn default() -> Self {
        EmployeeRecord {
            employee_id_type: default_id_type(),
            employee_id: String::new(),
            reference_number: String::new(),
            employee_name: String::new(),
            employee_bic_code: default_bic(),
            employee_account: String::new(),
            salary_frequency: default_frequency(),
            number_of_working_days: default_working_days(),
            net_salary: MoneyInput::default(),
            basic_salary: MoneyInput::default(),
            extra_hours: MoneyInput::default(),
            extra_income: MoneyInput::default(),
            deductions: MoneyInput::default(),
            social_security_deductions: MoneyInput::default(),
            notes_comments: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_record() {
        let json = r#"{
            "employee_id_type": "P",
            "employee_id": "A1234567",
            "reference_number": "EMP-042",
            "employee_name": "Said Al Hinai",
            "employee_bic_code": "bdofomru",
            "employee_account": "0123456789",
            "salary_frequency": "B",
            "number_of_working_days": "22",
            "net_salary": "900",
            "basic_salary": 850.5,
            "extra_hours": "3.25",
            "extra_income": 100,
            "deductions": "50.250",
            "social_security_deductions": null,
            "notes_comments": "August payroll"
        }"#;

        let record: EmployeeRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.employee_id_type, "P");
        assert_eq!(record.employee_id, "A1234567");
        assert_eq!(record.employee_bic_code, "bdofomru");
        assert_eq!(record.salary_frequency, "B");
        assert_eq!(record.number_of_working_days, "22");
        assert!(matches!(record.basic_salary, MoneyInput::Number(_)));
        assert_eq!(record.extra_hours, MoneyInput::Text("3.25".to_string()));
        assert!(matches!(record.extra_income, MoneyInput::Number(_)));
        assert_eq!(record.social_security_deductions, MoneyInput::Null);
        assert_eq!(record.notes_comments, "August payroll");
    }

    #[test]
    fn test_deserialize_empty_object_takes_defaults() {
        let record: EmployeeRecord = serde_json::from_str("{}").unwrap();

        assert_eq!(record.employee_id_type, "C");
        assert_eq!(record.employee_id, "");
        assert_eq!(record.employee_bic_code, "BMUSOMRX");
        assert_eq!(record.salary_frequency, "M");
        assert_eq!(record.number_of_working_days, "30");
        assert_eq!(record.basic_salary, MoneyInput::Text("0".to_string()));
        assert_eq!(record.notes_comments, "");
    }

    #[test]
    fn test_default_matches_wire_defaults() {
        let from_wire: EmployeeRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(EmployeeRecord::default(), from_wire);
    }

    #[test]
    fn test_number_input_preserves_decimal_literal() {
        let record: EmployeeRecord =
            serde_json::from_str(r#"{"basic_salary": 1.255}"#).unwrap();

        match record.basic_salary {
            MoneyInput::Number(n) => assert_eq!(n.to_string(), "1.255"),
            other => panic!("Expected Number, got {:?}", other),
        }
    }

    #[test]
    fn test_money_input_null_serializes_as_null() {
        let json = serde_json::to_string(&MoneyInput::Null).unwrap();
        assert_eq!(json, "null");
    }

    #[test]
    fn test_serialize_round_trip() {
        let record: EmployeeRecord = serde_json::from_str(
            r#"{"employee_name": "Maryam", "basic_salary": 420.125, "deductions": null}"#,
        )
        .unwrap();

        let json = serde_json::to_string(&record).unwrap();
        let back: EmployeeRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
