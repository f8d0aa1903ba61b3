//! Net salary aggregation functionality.
//!
//! This module sums the derived net salaries of a normalized employee set
//! into the document's total and record count.

use rust_decimal::Decimal;

use crate::models::NormalizedEmployee;

use super::amount::format_amount;

/// The aggregate figures rendered into the document header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalaryTotals {
    /// Sum of all net salaries, formatted with 3 fractional digits.
    pub total_salaries: String,
    /// Number of employee records.
    pub number_of_records: usize,
}

/// Sums the net salaries of the given normalized records.
///
/// Each addend is already quantized to 3 fractional digits, so the total is
/// re-quantized only once at the end. An empty set yields a total of
/// "0.000" and a count of 0.
///
/// # Examples
///
/// ```
/// use sif_engine::generation::{aggregate_net_salaries, normalize_employee};
/// use sif_engine::models::{EmployeeRecord, MoneyInput};
///
/// let record = EmployeeRecord {
///     basic_salary: MoneyInput::Text("412.5".to_string()),
///     ..EmployeeRecord::default()
/// };
/// let normalized = vec![normalize_employee(&record)];
///
/// let totals = aggregate_net_salaries(&normalized);
/// assert_eq!(totals.total_salaries, "412.500");
/// assert_eq!(totals.number_of_records, 1);
/// ```
pub fn aggregate_net_salaries(employees: &[NormalizedEmployee]) -> SalaryTotals {
    let total: Decimal = employees
        .iter()
        .map(NormalizedEmployee::net_salary_value)
        .sum();

    SalaryTotals {
        total_salaries: format_amount(total, 3),
        number_of_records: employees.len(),
    }
}
