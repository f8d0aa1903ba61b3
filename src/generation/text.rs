//! Text field sanitization functionality.
//!
//! This module provides the truncation rule shared by every text field in
//! the SIF layout: trim surrounding whitespace, then cut to the column's
//! maximum length. Over-long values are cut, never rejected.

/// Trims a text value and truncates it to `max_len` characters.
///
/// Truncation counts characters, not bytes, so multi-byte names are cut at
/// a character boundary and never split mid-codepoint.
///
/// # Arguments
///
/// * `value` - The raw text value
/// * `max_len` - The maximum number of characters to keep
///
/// # Examples
///
/// ```
/// use sif_engine::generation::clip_text;
///
/// assert_eq!(clip_text("  Salim Al Harthy  ", 70), "Salim Al Harthy");
/// assert_eq!(clip_text("abcdefgh", 3), "abc");
/// assert_eq!(clip_text("   ", 10), "");
/// ```
pub fn clip_text(value: &str, max_len: usize) -> String {
    let trimmed = value.trim();
    if trimmed.chars().count() > max_len {
        trimmed.chars().take(max_len).collect()
    } else {
        trimmed.to_string()
    }
}
