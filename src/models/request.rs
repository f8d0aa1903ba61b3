//! SIF generation request model.
//!
//! This module defines the SifRequest struct, the input contract handed over
//! by the input-collection surface: employer/payer metadata, the salary
//! period, file naming inputs, and the raw employee records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::employee::EmployeeRecord;

fn default_payment_type() -> String {
    "Salary".to_string()
}

fn default_seq() -> u32 {
    1
}

fn default_sheet_name() -> String {
    "Sheet1".to_string()
}

/// A full SIF generation request.
///
/// Range constraints (salary year 2000-2100, salary month 1-12, sequence
/// number 1-999) and the required-field policy are enforced by the generation
/// pipeline, not at deserialization time, so a malformed request still
/// deserializes and fails with a typed error.
///
/// # Example
///
/// ```
/// use sif_engine::models::SifRequest;
///
/// let request: SifRequest = serde_json::from_str(r#"{
///     "employer_cr": "1077707",
///     "payer_cr": "1077707",
///     "payer_bank_short": "BMCT",
///     "payer_account": "0316000123456",
///     "salary_year": 2026,
///     "salary_month": 2,
///     "processing_date": "2026-02-13",
///     "employees": []
/// }"#).unwrap();
///
/// assert_eq!(request.payment_type, "Salary");
/// assert_eq!(request.seq, 1);
/// assert_eq!(request.sheet_name, "Sheet1");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SifRequest {
    /// Employer commercial registration number.
    pub employer_cr: String,
    /// Payer commercial registration number.
    pub payer_cr: String,
    /// Short name of the payer's bank (e.g. "BMCT").
    pub payer_bank_short: String,
    /// Payer bank account number.
    pub payer_account: String,
    /// Salary year, accepted range 2000-2100.
    pub salary_year: i32,
    /// Salary month, accepted range 1-12.
    pub salary_month: u32,
    /// Payment type label rendered in the document header.
    #[serde(default = "default_payment_type")]
    pub payment_type: String,
    /// Processing date used for the output filename.
    pub processing_date: NaiveDate,
    /// File sequence number, accepted range 1-999.
    #[serde(default = "default_seq")]
    pub seq: u32,
    /// Target worksheet name for the serialized document.
    #[serde(default = "default_sheet_name")]
    pub sheet_name: String,
    /// Raw employee records, in submission order.
    pub employees: Vec<EmployeeRecord>,
}
