//! Bank directory types.
//!
//! This module contains the strongly-typed entries that are deserialized
//! from the bank directory file.

use serde::{Deserialize, Serialize};

/// A single bank in the directory.
///
/// Pairs the short name callers put on submissions with the BIC that
/// identifies the bank (or its Islamic window) on the Wage Protection
/// System, plus a display name for listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankEntry {
    /// The short name used to refer to the bank (e.g., "BMCT").
    pub short_name: String,
    /// The BIC registered for the bank (e.g., "BMUSOMRX").
    pub bic: String,
    /// The human-readable bank name.
    pub bank_name: String,
}
