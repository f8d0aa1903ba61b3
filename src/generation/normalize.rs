//! Employee record normalization functionality.
//!
//! This module turns one raw [`EmployeeRecord`] into a [`NormalizedEmployee`]
//! with every field coerced to its canonical WPS shape. Normalization never
//! fails: malformed input is replaced with a safe default, never rejected,
//! so a single bad field cannot sink a bulk payroll submission.

use rust_decimal::Decimal;

use crate::models::{EmployeeRecord, NormalizedEmployee};

use super::amount::{format_amount, money_value, round_half_up};
use super::text::clip_text;

/// Annotation written into the notes column when the derived net salary is
/// zero and no notes were supplied. The WPS guide makes notes mandatory for
/// zero-net records.
pub const ZERO_NET_NOTE: &str = "Net salary is 0";

// WPS column widths, in characters.
const MAX_ENUM_LEN: usize = 1;
const MAX_EMPLOYEE_ID_LEN: usize = 17;
const MAX_REFERENCE_LEN: usize = 64;
const MAX_NAME_LEN: usize = 70;
const MAX_BIC_LEN: usize = 11;
const MAX_ACCOUNT_LEN: usize = 30;
const MAX_WORKING_DAYS_LEN: usize = 3;
const MAX_NOTES_LEN: usize = 300;

/// Normalizes one raw employee record.
///
/// The rules run in a fixed order:
///
/// 1. Text fields are trimmed and truncated to their column widths.
/// 2. Enumerated fields are upper-cased and checked against their closed
///    sets; anything else falls back to the default ("C" for id type, "M"
///    for salary frequency).
/// 3. Working days must be an all-digit string after truncation to 3
///    characters; otherwise it becomes "0".
/// 4. Money fields parse leniently (unparsable input is zero) and each is
///    quantized to 3 fractional digits half-up; extra hours to 2.
/// 5. Net salary is derived as basic + extra income - deductions - social
///    security, from the already-quantized addends, then quantized itself.
///    The submitted net salary is never consulted.
/// 6. If the derived net salary is zero and the notes column is empty, the
///    notes column gets the mandatory zero-net annotation.
///
/// # Examples
///
/// ```
/// use sif_engine::generation::normalize_employee;
/// use sif_engine::models::{EmployeeRecord, MoneyInput};
///
/// let record = EmployeeRecord {
///     employee_id_type: "x".to_string(),
///     basic_salary: MoneyInput::Text("100.5".to_string()),
///     ..EmployeeRecord::default()
/// };
///
/// let normalized = normalize_employee(&record);
/// assert_eq!(normalized.employee_id_type, "C");
/// assert_eq!(normalized.basic_salary, "100.500");
/// assert_eq!(normalized.net_salary, "100.500");
/// ```
pub fn normalize_employee(record: &EmployeeRecord) -> NormalizedEmployee {
    let mut id_type = clip_text(&record.employee_id_type, MAX_ENUM_LEN).to_uppercase();
    if id_type != "C" && id_type != "P" {
        id_type = "C".to_string();
    }

    let mut salary_frequency = clip_text(&record.salary_frequency, MAX_ENUM_LEN).to_uppercase();
    if salary_frequency != "M" && salary_frequency != "B" {
        salary_frequency = "M".to_string();
    }

    // Truncate to 3 characters first, then check: "1234" passes as "123",
    // while any surviving non-digit resets the field.
    let mut working_days = clip_text(&record.number_of_working_days, MAX_WORKING_DAYS_LEN);
    if working_days.is_empty() || !working_days.chars().all(|c| c.is_ascii_digit()) {
        working_days = "0".to_string();
    }

    let basic_salary = round_half_up(money_value(&record.basic_salary), 3);
    let extra_income = round_half_up(money_value(&record.extra_income), 3);
    let deductions = round_half_up(money_value(&record.deductions), 3);
    let social_security = round_half_up(money_value(&record.social_security_deductions), 3);
    let net_salary = round_half_up(basic_salary + extra_income - deductions - social_security, 3);

    let mut notes = clip_text(&record.notes_comments, MAX_NOTES_LEN);
    if net_salary == Decimal::ZERO && notes.is_empty() {
        notes = ZERO_NET_NOTE.to_string();
    }

    NormalizedEmployee {
        employee_id_type: id_type,
        employee_id: clip_text(&record.employee_id, MAX_EMPLOYEE_ID_LEN),
        reference_number: clip_text(&record.reference_number, MAX_REFERENCE_LEN),
        employee_name: clip_text(&record.employee_name, MAX_NAME_LEN),
        employee_bic_code: clip_text(&record.employee_bic_code, MAX_BIC_LEN).to_uppercase(),
        employee_account: clip_text(&record.employee_account, MAX_ACCOUNT_LEN),
        salary_frequency,
        number_of_working_days: working_days,
        net_salary: format_amount(net_salary, 3),
        basic_salary: format_amount(basic_salary, 3),
        extra_hours: format_amount(money_value(&record.extra_hours), 2),
        extra_income: format_amount(extra_income, 3),
        deductions: format_amount(deductions, 3),
        social_security_deductions: format_amount(social_security, 3),
        notes_comments: notes,
    }
}
