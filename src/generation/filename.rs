//! Output filename composition functionality.
//!
//! This module derives the deterministic SIF filename from the employer
//! code, the payer bank short name, the processing date, and the file
//! sequence number.

use chrono::NaiveDate;

/// Composes the output filename `SIF_<employer>_<bank>_<YYYYMMDD>_<seq>.xlsx`.
///
/// Employer code and bank short name keep only their ASCII alphanumeric
/// characters; everything else, separators and whitespace included, is
/// stripped outright. The sequence number is zero-padded to three digits.
/// The function is total: an input that strips down to nothing simply
/// yields an empty fragment.
///
/// # Examples
///
/// ```
/// use sif_engine::generation::compose_filename;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2026, 2, 13).unwrap();
/// assert_eq!(
///     compose_filename("fg-67", "B.M.C.T", date, 1),
///     "SIF_fg67_BMCT_20260213_001.xlsx"
/// );
/// ```
pub fn compose_filename(
    employer_cr: &str,
    payer_bank_short: &str,
    processing_date: NaiveDate,
    seq: u32,
) -> String {
    let employer: String = employer_cr
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect();
    let bank: String = payer_bank_short
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect();

    format!(
        "SIF_{}_{}_{}_{:03}.xlsx",
        employer,
        bank,
        processing_date.format("%Y%m%d"),
        seq
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_clean_inputs_pass_through() {
        let name = compose_filename("fg67", "BMCT", date(2026, 2, 13), 1);
        assert_eq!(name, "SIF_fg67_BMCT_20260213_001.xlsx");
    }

    #[test]
    fn test_separators_are_stripped() {
        let name = compose_filename("fg-67", "B.M.C.T", date(2026, 2, 13), 1);
        assert_eq!(name, "SIF_fg67_BMCT_20260213_001.xlsx");
    }

    #[test]
    fn test_whitespace_is_stripped() {
        let name = compose_filename(" fg 67 ", "BMCT", date(2026, 2, 13), 1);
        assert_eq!(name, "SIF_fg67_BMCT_20260213_001.xlsx");
    }

    #[test]
    fn test_non_ascii_characters_are_stripped() {
        let name = compose_filename("\u{0641}\u{0631}\u{0639}67", "BMCT", date(2026, 2, 13), 1);
        assert_eq!(name, "SIF_67_BMCT_20260213_001.xlsx");
    }

    #[test]
    fn test_fully_stripped_input_yields_empty_fragment() {
        let name = compose_filename("###", "BMCT", date(2026, 2, 13), 1);
        assert_eq!(name, "SIF__BMCT_20260213_001.xlsx");
    }

    #[test]
    fn test_sequence_is_zero_padded() {
        assert!(compose_filename("a", "b", date(2026, 1, 1), 7).ends_with("_007.xlsx"));
        assert!(compose_filename("a", "b", date(2026, 1, 1), 42).ends_with("_042.xlsx"));
        assert!(compose_filename("a", "b", date(2026, 1, 1), 999).ends_with("_999.xlsx"));
    }

    #[test]
    fn test_date_renders_as_compact_ymd() {
        let name = compose_filename("a", "b", date(2026, 2, 3), 1);
        assert!(name.contains("_20260203_"));
    }

    // ==========================================================================
    // Property tests
    // ==========================================================================

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_date() -> impl Strategy<Value = NaiveDate> {
            (2000i32..=2100, 1u32..=12, 1u32..=28)
                .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
        }

        proptest! {
            #[test]
            fn prop_filename_shape_holds_for_any_input(
                employer in any::<String>(),
                bank in any::<String>(),
                date in arb_date(),
                seq in 1u32..=999,
            ) {
                let name = compose_filename(&employer, &bank, date, seq);

                let core = name
                    .strip_prefix("SIF_")
                    .and_then(|rest| rest.strip_suffix(".xlsx"))
                    .unwrap();
                let parts: Vec<&str> = core.split('_').collect();

                prop_assert_eq!(parts.len(), 4);
                prop_assert!(parts[0].chars().all(|c| c.is_ascii_alphanumeric()));
                prop_assert!(parts[1].chars().all(|c| c.is_ascii_alphanumeric()));
                prop_assert_eq!(parts[2].len(), 8);
                prop_assert!(parts[2].chars().all(|c| c.is_ascii_digit()));
                prop_assert_eq!(parts[3].len(), 3);
                prop_assert!(parts[3].chars().all(|c| c.is_ascii_digit()));
            }
        }
    }
}
