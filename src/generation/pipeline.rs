//! SIF generation pipeline.
//!
//! This module provides the single entry point collaborators call: it
//! validates the request, runs normalization, aggregation, layout and
//! filename composition in order, and returns the finished artifact.

use std::time::Instant;

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::{SifError, SifResult};
use crate::models::{SifArtifact, SifRequest};

use super::aggregate::aggregate_net_salaries;
use super::filename::compose_filename;
use super::layout::{DocumentHeader, build_document};
use super::normalize::normalize_employee;
use super::text::clip_text;

/// Worksheet name used when the requested name is blank after trimming.
pub const DEFAULT_SHEET_NAME: &str = "Sheet1";

/// Worksheet-title length limit honored by every spreadsheet serializer.
const MAX_SHEET_NAME_LEN: usize = 31;

/// Validates the request-level fields.
///
/// Checks run in a fixed order: required fields first (employer CR, payer
/// CR, payer account, each non-empty after trimming), then the salary
/// year/month ranges, then the file sequence range. The first violation
/// aborts processing; employee fields are never validated here.
fn validate_request(request: &SifRequest) -> SifResult<()> {
    if request.employer_cr.trim().is_empty() {
        return Err(SifError::MissingRequiredField {
            field: "Employer CR-NO".to_string(),
        });
    }
    if request.payer_cr.trim().is_empty() {
        return Err(SifError::MissingRequiredField {
            field: "Payer CR-NO".to_string(),
        });
    }
    if request.payer_account.trim().is_empty() {
        return Err(SifError::MissingRequiredField {
            field: "Payer Account Number".to_string(),
        });
    }
    if !(2000..=2100).contains(&request.salary_year) {
        return Err(SifError::SalaryYearOutOfRange {
            year: request.salary_year,
        });
    }
    if !(1..=12).contains(&request.salary_month) {
        return Err(SifError::SalaryMonthOutOfRange {
            month: request.salary_month,
        });
    }
    if !(1..=999).contains(&request.seq) {
        return Err(SifError::SequenceOutOfRange { seq: request.seq });
    }
    Ok(())
}

/// Trims and truncates the worksheet name, falling back to
/// [`DEFAULT_SHEET_NAME`] if nothing is left.
fn sanitize_sheet_name(sheet_name: &str) -> String {
    let cleaned = clip_text(sheet_name, MAX_SHEET_NAME_LEN);
    if cleaned.is_empty() {
        DEFAULT_SHEET_NAME.to_string()
    } else {
        cleaned
    }
}

/// Generates the SIF artifact for one request.
///
/// Runs the full pipeline: request validation, per-employee normalization,
/// net salary aggregation, document layout, filename composition and
/// worksheet-name sanitization. The filename is composed from the
/// truncated employer code and bank short name, the same values the
/// document header renders.
///
/// Emits tracing events carrying a per-request correlation id; no
/// subscriber is installed by the library.
///
/// # Arguments
///
/// * `request` - The deserialized submission
///
/// # Returns
///
/// Returns the [`SifArtifact`] on success, or a [`SifError`] if a required
/// field is missing or the salary year, salary month, or sequence number
/// is out of range. Malformed employee fields never fail generation; they
/// are coerced to defaults.
///
/// # Example
///
/// ```
/// use sif_engine::generation::generate;
/// use sif_engine::models::SifRequest;
///
/// let request: SifRequest = serde_json::from_str(r#"{
///     "employer_cr": "fg-67",
///     "payer_cr": "fg-67",
///     "payer_bank_short": "B.M.C.T",
///     "payer_account": "123",
///     "salary_year": 2026,
///     "salary_month": 2,
///     "processing_date": "2026-02-13",
///     "employees": [{"employee_name": "Test User", "basic_salary": 150}]
/// }"#).unwrap();
///
/// let artifact = generate(&request).unwrap();
/// assert_eq!(artifact.filename, "SIF_fg67_BMCT_20260213_001.xlsx");
/// assert_eq!(artifact.total_salaries, "150.000");
/// assert_eq!(artifact.document.row_count(), 4);
/// ```
pub fn generate(request: &SifRequest) -> SifResult<SifArtifact> {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        employees = request.employees.len(),
        "Processing SIF generation request"
    );
    let start_time = Instant::now();

    if let Err(err) = validate_request(request) {
        warn!(
            correlation_id = %correlation_id,
            error = %err,
            "Request validation failed"
        );
        return Err(err);
    }

    let header = DocumentHeader::from_request(request);
    let employees: Vec<_> = request.employees.iter().map(normalize_employee).collect();
    let totals = aggregate_net_salaries(&employees);
    debug!(
        correlation_id = %correlation_id,
        total_salaries = %totals.total_salaries,
        "Employee records normalized"
    );

    let document = build_document(&header, &employees, &totals);
    let filename = compose_filename(
        &header.employer_cr,
        &header.payer_bank_short,
        request.processing_date,
        request.seq,
    );
    let sheet_name = sanitize_sheet_name(&request.sheet_name);

    let duration = start_time.elapsed();
    info!(
        correlation_id = %correlation_id,
        filename = %filename,
        records = totals.number_of_records,
        total_salaries = %totals.total_salaries,
        duration_us = duration.as_micros() as u64,
        "SIF generation completed successfully"
    );

    Ok(SifArtifact {
        document,
        filename,
        sheet_name,
        total_salaries: totals.total_salaries,
        number_of_records: totals.number_of_records,
        employees,
    })
}
