//! SIF document and artifact models.
//!
//! This module defines the fixed-shape output of document assembly: rows of
//! exactly 15 cells, the document they form, and the artifact returned by
//! the generation pipeline.

use serde::{Deserialize, Serialize};

use super::normalized::NormalizedEmployee;

/// Number of cells in every SIF document row.
pub const COLUMN_COUNT: usize = 15;

/// One document row of exactly [`COLUMN_COUNT`] cells.
///
/// The WPS layout requires every row to carry 15 columns regardless of
/// content. Wrapping a fixed-size array makes that invariant structural:
/// a `SifRow` with the wrong cell count cannot be constructed.
///
/// # Example
///
/// ```
/// use sif_engine::models::{SifRow, COLUMN_COUNT};
///
/// let row = SifRow::new(std::array::from_fn(|i| i.to_string()));
/// assert_eq!(row.cells().len(), COLUMN_COUNT);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SifRow([String; COLUMN_COUNT]);

impl SifRow {
    /// Creates a row from its 15 cells.
    pub fn new(cells: [String; COLUMN_COUNT]) -> Self {
        SifRow(cells)
    }

    /// Returns the row's cells in column order.
    pub fn cells(&self) -> &[String; COLUMN_COUNT] {
        &self.0
    }
}

impl From<&NormalizedEmployee> for SifRow {
    /// Maps a normalized record onto its document row.
    ///
    /// The field order here matches the employee header labels; the document
    /// is only valid if they stay in lockstep.
    fn from(employee: &NormalizedEmployee) -> Self {
        SifRow([
            employee.employee_id_type.clone(),
            employee.employee_id.clone(),
            employee.reference_number.clone(),
            employee.employee_name.clone(),
            employee.employee_bic_code.clone(),
            employee.employee_account.clone(),
            employee.salary_frequency.clone(),
            employee.number_of_working_days.clone(),
            employee.net_salary.clone(),
            employee.basic_salary.clone(),
            employee.extra_hours.clone(),
            employee.extra_income.clone(),
            employee.deductions.clone(),
            employee.social_security_deductions.clone(),
            employee.notes_comments.clone(),
        ])
    }
}

/// The assembled SIF document: an ordered sequence of 15-cell rows.
///
/// Rows 0 and 1 carry the request-level header labels and values, row 2
/// carries the employee field labels, and rows 3 onward carry one employee
/// each, so the row count is always 3 plus the number of employees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SifDocument {
    rows: Vec<SifRow>,
}

impl SifDocument {
    /// Creates a document from its rows.
    pub fn new(rows: Vec<SifRow>) -> Self {
        SifDocument { rows }
    }

    /// Returns the rows in document order.
    pub fn rows(&self) -> &[SifRow] {
        &self.rows
    }

    /// Returns the number of rows, header rows included.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Everything the generation pipeline produces for one request.
///
/// The serialization collaborator writes `document` under `sheet_name` into
/// a file called `filename`; the remaining fields echo the derived values
/// back to the submitting surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SifArtifact {
    /// The assembled document rows.
    pub document: SifDocument,
    /// The composed output filename.
    pub filename: String,
    /// The sanitized worksheet name.
    pub sheet_name: String,
    /// The formatted total of all net salaries.
    pub total_salaries: String,
    /// The number of employee records in the document.
    pub number_of_records: usize,
    /// The normalized employee records, in submission order.
    pub employees: Vec<NormalizedEmployee>,
}
