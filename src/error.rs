//! Error types for the SIF generation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during SIF generation.

use thiserror::Error;

/// The main error type for the SIF generation engine.
///
/// Errors fall into two tiers: request-level validation failures raised by
/// the generation pipeline before any employee record is processed, and
/// configuration failures raised while loading the bank directory. Malformed
/// employee fields never produce an error; they are coerced to defaults
/// during normalization.
///
/// # Example
///
/// ```
/// use sif_engine::error::SifError;
///
/// let error = SifError::MissingRequiredField {
///     field: "Employer CR-NO".to_string(),
/// };
/// assert_eq!(error.to_string(), "Missing required field: Employer CR-NO");
/// ```
#[derive(Debug, Error)]
pub enum SifError {
    /// A required request field was empty after trimming.
    #[error("Missing required field: {field}")]
    MissingRequiredField {
        /// The display label of the missing field.
        field: String,
    },

    /// The salary year was outside the accepted range.
    #[error("Salary year {year} is outside the allowed range 2000-2100")]
    SalaryYearOutOfRange {
        /// The rejected year.
        year: i32,
    },

    /// The salary month was outside the accepted range.
    #[error("Salary month {month} is outside the allowed range 1-12")]
    SalaryMonthOutOfRange {
        /// The rejected month.
        month: u32,
    },

    /// The file sequence number was outside the accepted range.
    #[error("File sequence number {seq} is outside the allowed range 1-999")]
    SequenceOutOfRange {
        /// The rejected sequence number.
        seq: u32,
    },

    /// The bank directory file was not found at the specified path.
    #[error("Bank directory file not found: {path}")]
    BankDirectoryNotFound {
        /// The path that was not found.
        path: String,
    },

    /// The bank directory file could not be parsed.
    #[error("Failed to parse bank directory '{path}': {message}")]
    BankDirectoryParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return SifError.
pub type SifResult<T> = Result<T, SifError>;
