//! Money and duration amount handling.
//!
//! This module provides the decimal parsing and quantization rules shared by
//! all money/duration fields: lenient parse-or-zero coercion of submitted
//! values, round-half-up quantization, and fixed-precision rendering.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::MoneyInput;

/// Parses a submitted money/duration value, coercing anything unparsable to
/// zero.
///
/// Plain decimal notation and scientific notation both parse; null, empty
/// strings, and non-numeric text all coerce to zero. A JSON number is parsed
/// from its decimal literal, so `1.255` means exactly 1.255.
///
/// # Examples
///
/// ```
/// use sif_engine::generation::money_value;
/// use sif_engine::models::MoneyInput;
/// use rust_decimal::Decimal;
///
/// assert_eq!(money_value(&MoneyInput::Text(" 250.5 ".to_string())), Decimal::new(2505, 1));
/// assert_eq!(money_value(&MoneyInput::Text("1e3".to_string())), Decimal::new(1000, 0));
/// assert_eq!(money_value(&MoneyInput::Text("abc".to_string())), Decimal::ZERO);
/// assert_eq!(money_value(&MoneyInput::Null), Decimal::ZERO);
/// ```
pub fn money_value(input: &MoneyInput) -> Decimal {
    match input {
        MoneyInput::Number(number) => parse_decimal(&number.to_string()).unwrap_or(Decimal::ZERO),
        MoneyInput::Text(text) => parse_decimal(text).unwrap_or(Decimal::ZERO),
        MoneyInput::Null => Decimal::ZERO,
    }
}

/// Parses trimmed decimal text, trying plain notation first and scientific
/// notation second.
fn parse_decimal(text: &str) -> Option<Decimal> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .parse::<Decimal>()
        .ok()
        .or_else(|| Decimal::from_scientific(trimmed).ok())
}

/// Rounds a value to `places` fractional digits using round-half-up.
///
/// A value exactly halfway between two quantization steps rounds away from
/// zero, for negative amounts as well: 1.255 → 1.26 and -1.255 → -1.26 at
/// two places.
///
/// # Examples
///
/// ```
/// use sif_engine::generation::round_half_up;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let value = Decimal::from_str("1.255").unwrap();
/// assert_eq!(round_half_up(value, 2), Decimal::from_str("1.26").unwrap());
/// ```
pub fn round_half_up(value: Decimal, places: u32) -> Decimal {
    value.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
}

/// Renders a value with exactly `places` fractional digits, rounding
/// half-up first.
///
/// Rounding happens before formatting so the format step only ever pads
/// with zeros and never rounds a second time.
///
/// # Examples
///
/// ```
/// use sif_engine::generation::format_amount;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(format_amount(Decimal::from_str("5").unwrap(), 3), "5.000");
/// assert_eq!(format_amount(Decimal::from_str("1.2345").unwrap(), 3), "1.235");
/// assert_eq!(format_amount(Decimal::from_str("1.255").unwrap(), 2), "1.26");
/// ```
pub fn format_amount(value: Decimal, places: u32) -> String {
    let rounded = round_half_up(value, places);
    format!("{:.prec$}", rounded, prec = places as usize)
}
