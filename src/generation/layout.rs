//! SIF document layout functionality.
//!
//! This module assembles the fixed 15-column document: the request-level
//! header pair (labels, then values), the employee field-name row, and one
//! row per normalized employee. The label tables are the authoritative
//! definition of the document shape.

use crate::models::{COLUMN_COUNT, NormalizedEmployee, SifDocument, SifRequest, SifRow};

use super::aggregate::SalaryTotals;
use super::text::clip_text;

/// Column labels of row 0, the request-level header.
///
/// Only the first nine columns are labeled; the remaining six stay empty so
/// the row still spans the full document width.
pub const HEADER_LABELS: [&str; COLUMN_COUNT] = [
    "Employer CR-NO",
    "Payer CR-NO",
    "Payer Bank Short Name",
    "Payer Account Number",
    "Salary Year",
    "Salary Month",
    "Total Salaries",
    "Number Of Records",
    "Payment Type",
    "",
    "",
    "",
    "",
    "",
    "",
];

/// Column labels of row 2, the employee field names.
pub const EMPLOYEE_LABELS: [&str; COLUMN_COUNT] = [
    "Employee ID Type",
    "Employee ID",
    "Reference Number",
    "Employee Name",
    "Employee BIC Code",
    "Employee Account",
    "Salary Frequency",
    "Number Of Working days",
    "Net Salary",
    "Basic Salary",
    "Extra Hours",
    "Extra Income",
    "Deductions",
    "Social Security Deductions",
    "Notes / Comments",
];

// Header column widths, in characters.
const MAX_CR_LEN: usize = 32;
const MAX_BANK_SHORT_LEN: usize = 16;
const MAX_HEADER_ACCOUNT_LEN: usize = 64;
const MAX_PAYMENT_TYPE_LEN: usize = 32;

/// Request-level header fields after truncation to their column widths.
///
/// The truncated employer code and bank short name are also the values the
/// filename is composed from, so they are derived once here and shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentHeader {
    /// Employer commercial registration number, at most 32 characters.
    pub employer_cr: String,
    /// Payer commercial registration number, at most 32 characters.
    pub payer_cr: String,
    /// Payer bank short name, at most 16 characters.
    pub payer_bank_short: String,
    /// Payer account number, at most 64 characters.
    pub payer_account: String,
    /// Salary year, rendered as its plain decimal string.
    pub salary_year: i32,
    /// Salary month, rendered zero-padded to two digits.
    pub salary_month: u32,
    /// Payment type label, at most 32 characters.
    pub payment_type: String,
}

impl DocumentHeader {
    /// Derives the header fields from a request, applying the header
    /// truncation rules.
    pub fn from_request(request: &SifRequest) -> Self {
        DocumentHeader {
            employer_cr: clip_text(&request.employer_cr, MAX_CR_LEN),
            payer_cr: clip_text(&request.payer_cr, MAX_CR_LEN),
            payer_bank_short: clip_text(&request.payer_bank_short, MAX_BANK_SHORT_LEN),
            payer_account: clip_text(&request.payer_account, MAX_HEADER_ACCOUNT_LEN),
            salary_year: request.salary_year,
            salary_month: request.salary_month,
            payment_type: clip_text(&request.payment_type, MAX_PAYMENT_TYPE_LEN),
        }
    }
}

/// Assembles the full SIF document.
///
/// Row 0 carries [`HEADER_LABELS`], row 1 the header values, row 2
/// [`EMPLOYEE_LABELS`], and rows 3 onward one employee each, so the result
/// always has `3 + employees.len()` rows. This stage is pure assembly; no
/// validation failure is possible here.
pub fn build_document(
    header: &DocumentHeader,
    employees: &[NormalizedEmployee],
    totals: &SalaryTotals,
) -> SifDocument {
    let header_values = SifRow::new([
        header.employer_cr.clone(),
        header.payer_cr.clone(),
        header.payer_bank_short.clone(),
        header.payer_account.clone(),
        header.salary_year.to_string(),
        format!("{:02}", header.salary_month),
        totals.total_salaries.clone(),
        totals.number_of_records.to_string(),
        header.payment_type.clone(),
        String::new(),
        String::new(),
        String::new(),
        String::new(),
        String::new(),
        String::new(),
    ]);

    let mut rows = Vec::with_capacity(3 + employees.len());
    rows.push(SifRow::new(HEADER_LABELS.map(String::from)));
    rows.push(header_values);
    rows.push(SifRow::new(EMPLOYEE_LABELS.map(String::from)));
    rows.extend(employees.iter().map(SifRow::from));

    SifDocument::new(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::{aggregate_net_salaries, normalize_employee};
    use crate::models::{EmployeeRecord, MoneyInput};

    fn create_test_request(employees: Vec<EmployeeRecord>) -> SifRequest {
        SifRequest {
            employer_cr: "1077707".to_string(),
            payer_cr: "1077707".to_string(),
            payer_bank_short: "BMCT".to_string(),
            payer_account: "0316000123456".to_string(),
            salary_year: 2026,
            salary_month: 2,
            payment_type: "Salary".to_string(),
            processing_date: chrono::NaiveDate::from_ymd_opt(2026, 2, 13).unwrap(),
            seq: 1,
            sheet_name: "Sheet1".to_string(),
            employees,
        }
    }

    fn build_test_document(employees: Vec<EmployeeRecord>) -> SifDocument {
        let request = create_test_request(employees);
        let header = DocumentHeader::from_request(&request);
        let normalized: Vec<_> = request.employees.iter().map(normalize_employee).collect();
        let totals = aggregate_net_salaries(&normalized);
        build_document(&header, &normalized, &totals)
    }

    #[test]
    fn test_label_tables_span_all_columns() {
        assert_eq!(HEADER_LABELS.len(), COLUMN_COUNT);
        assert_eq!(EMPLOYEE_LABELS.len(), COLUMN_COUNT);
        assert_eq!(HEADER_LABELS[8], "Payment Type");
        assert!(HEADER_LABELS[9..].iter().all(|label| label.is_empty()));
        assert_eq!(EMPLOYEE_LABELS[14], "Notes / Comments");
    }

    #[test]
    fn test_row_0_is_the_header_label_row() {
        let document = build_test_document(vec![]);
        let cells = document.rows()[0].cells();
        assert_eq!(cells[0], "Employer CR-NO");
        assert_eq!(cells[5], "Salary Month");
        assert_eq!(cells[14], "");
    }

    #[test]
    fn test_row_1_carries_header_values() {
        let document = build_test_document(vec![EmployeeRecord {
            basic_salary: MoneyInput::Text("412.5".to_string()),
            ..EmployeeRecord::default()
        }]);

        let cells = document.rows()[1].cells();
        assert_eq!(cells[0], "1077707");
        assert_eq!(cells[2], "BMCT");
        assert_eq!(cells[4], "2026");
        assert_eq!(cells[5], "02");
        assert_eq!(cells[6], "412.500");
        assert_eq!(cells[7], "1");
        assert_eq!(cells[8], "Salary");
        assert!(cells[9..].iter().all(|cell| cell.is_empty()));
    }

    #[test]
    fn test_row_2_is_the_employee_label_row() {
        let document = build_test_document(vec![]);
        let cells = document.rows()[2].cells();
        assert_eq!(cells[0], "Employee ID Type");
        assert_eq!(cells[8], "Net Salary");
        assert_eq!(cells[14], "Notes / Comments");
    }

    #[test]
    fn test_employee_rows_follow_in_submission_order() {
        let first = EmployeeRecord {
            employee_name: "Aisha".to_string(),
            ..EmployeeRecord::default()
        };
        let second = EmployeeRecord {
            employee_name: "Badr".to_string(),
            ..EmployeeRecord::default()
        };

        let document = build_test_document(vec![first, second]);
        assert_eq!(document.rows()[3].cells()[3], "Aisha");
        assert_eq!(document.rows()[4].cells()[3], "Badr");
    }

    #[test]
    fn test_row_count_is_three_plus_employee_count() {
        assert_eq!(build_test_document(vec![]).row_count(), 3);

        let employees = vec![EmployeeRecord::default(); 5];
        assert_eq!(build_test_document(employees).row_count(), 8);
    }

    #[test]
    fn test_month_is_zero_padded() {
        let mut request = create_test_request(vec![]);
        request.salary_month = 11;

        let header = DocumentHeader::from_request(&request);
        let totals = aggregate_net_salaries(&[]);
        let document = build_document(&header, &[], &totals);
        assert_eq!(document.rows()[1].cells()[5], "11");

        request.salary_month = 2;
        let header = DocumentHeader::from_request(&request);
        let document = build_document(&header, &[], &totals);
        assert_eq!(document.rows()[1].cells()[5], "02");
    }

    #[test]
    fn test_header_fields_are_truncated() {
        let mut request = create_test_request(vec![]);
        request.employer_cr = "9".repeat(40);
        request.payer_bank_short = "VERYLONGBANKSHORTNAME".to_string();

        let header = DocumentHeader::from_request(&request);
        assert_eq!(header.employer_cr.chars().count(), 32);
        assert_eq!(header.payer_bank_short, "VERYLONGBANKSHOR");
    }

    #[test]
    fn test_header_fields_are_trimmed() {
        let mut request = create_test_request(vec![]);
        request.employer_cr = "  1077707  ".to_string();
        request.payment_type = " Salary ".to_string();

        let header = DocumentHeader::from_request(&request);
        assert_eq!(header.employer_cr, "1077707");
        assert_eq!(header.payment_type, "Salary");
    }

    // ==========================================================================
    // Property tests
    // ==========================================================================

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_row_count_is_employee_count_plus_three(n in 0usize..40) {
                let employees = vec![EmployeeRecord::default(); n];
                let document = build_test_document(employees);
                prop_assert_eq!(document.row_count(), n + 3);
            }

            #[test]
            fn prop_every_row_spans_all_columns(n in 0usize..20) {
                let employees = vec![EmployeeRecord::default(); n];
                let document = build_test_document(employees);
                for row in document.rows() {
                    prop_assert_eq!(row.cells().len(), COLUMN_COUNT);
                }
            }
        }
    }
}
