//! Normalized employee record model.
//!
//! This module defines the NormalizedEmployee struct, the per-record output
//! of normalization. Every field is a canonical string: enumerations are
//! validated, text fields are trimmed and truncated, money fields carry a
//! fixed number of fractional digits, and the net salary is derived.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::employee::{EmployeeRecord, MoneyInput};

/// One employee record after normalization.
///
/// Instances are produced only by normalization and are immutable in
/// practice; the field invariants below hold from construction:
///
///   - `employee_id_type` is "C" or "P"; `salary_frequency` is "M" or "B".
///   - `number_of_working_days` is an all-digit string of at most 3 digits.
///   - `net_salary`, `basic_salary`, `extra_income`, `deductions` and
///     `social_security_deductions` carry exactly 3 fractional digits;
///     `extra_hours` carries exactly 2.
///   - Text fields are trimmed and truncated to the WPS column widths.
///   - If the net salary is zero and no notes were supplied,
///     `notes_comments` carries the mandatory zero-salary annotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedEmployee {
    /// Identity document type, "C" or "P".
    pub employee_id_type: String,
    /// Identity document number, at most 17 characters.
    pub employee_id: String,
    /// Payroll reference number, at most 64 characters.
    pub reference_number: String,
    /// Employee full name, at most 70 characters.
    pub employee_name: String,
    /// Upper-cased BIC, at most 11 characters.
    pub employee_bic_code: String,
    /// Bank account number, at most 30 characters.
    pub employee_account: String,
    /// Salary frequency, "M" or "B".
    pub salary_frequency: String,
    /// Working-days count as an all-digit string.
    pub number_of_working_days: String,
    /// Derived net salary with 3 fractional digits.
    pub net_salary: String,
    /// Basic salary with 3 fractional digits.
    pub basic_salary: String,
    /// Extra hours with 2 fractional digits.
    pub extra_hours: String,
    /// Extra income with 3 fractional digits.
    pub extra_income: String,
    /// Deductions with 3 fractional digits.
    pub deductions: String,
    /// Social security deduction with 3 fractional digits.
    pub social_security_deductions: String,
    /// Notes column, at most 300 characters.
    pub notes_comments: String,
}

impl NormalizedEmployee {
    /// Returns the net salary as a decimal value.
    ///
    /// The stored string is always a canonical fixed-point literal, so this
    /// never actually falls back; the zero fallback keeps the accessor total.
    pub fn net_salary_value(&self) -> Decimal {
        Decimal::from_str(&self.net_salary).unwrap_or(Decimal::ZERO)
    }
}

impl From<&NormalizedEmployee> for EmployeeRecord {
    /// Converts a normalized record back into its raw submission form.
    ///
    /// Feeding the result through normalization again reproduces the same
    /// normalized record (normalization is idempotent).
    fn from(normalized: &NormalizedEmployee) -> Self {
        EmployeeRecord {
            employee_id_type: normalized.employee_id_type.clone(),
            employee_id: normalized.employee_id.clone(),
            reference_number: normalized.reference_number.clone(),
            employee_name: normalized.employee_name.clone(),
            employee_bic_code: normalized.employee_bic_code.clone(),
            employee_account: normalized.employee_account.clone(),
            salary_frequency: normalized.salary_frequency.clone(),
            number_of_working_days: normalized.number_of_working_days.clone(),
            net_salary: MoneyInput::Text(normalized.net_salary.clone()),
            basic_salary: MoneyInput::Text(normalized.basic_salary.clone()),
            extra_hours: MoneyInput::Text(normalized.extra_hours.clone()),
            extra_income: MoneyInput::Text(normalized.extra_income.clone()),
            deductions: MoneyInput::Text(normalized.deductions.clone()),
            social_security_deductions: MoneyInput::Text(
                normalized.social_security_deductions.clone(),
            ),
            notes_comments: normalized.notes_comments.clone(),
        }
    }
}
