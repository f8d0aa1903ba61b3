//! Bank directory loading functionality.
//!
//! This module provides the [`BankDirectory`] type for loading the bank
//! reference data from a JSON or YAML file.

use std::fs;
use std::path::Path;

use crate::error::{SifError, SifResult};

use super::types::BankEntry;

/// Loads and provides access to the bank directory.
///
/// The `BankDirectory` reads a bank directory file and provides lookup
/// by short name. Entries are held sorted by bank name, so listings come
/// out stable regardless of file order.
///
/// # File Format
///
/// The file holds a single list of entries. Files with a `.yaml` or
/// `.yml` extension are parsed as YAML, everything else as JSON:
///
/// ```text
/// [
///   {"short_name": "BMCT", "bic": "BMUSOMRX", "bank_name": "Bank Muscat"},
///   {"short_name": "NBO", "bic": "NBOMOMRX", "bank_name": "National Bank of Oman"}
/// ]
/// ```
///
/// # Example
///
/// ```no_run
/// use sif_engine::config::BankDirectory;
///
/// let directory = BankDirectory::load("./data/banks.json").unwrap();
///
/// let entry = directory.entry_by_short_name("BMCT").unwrap();
/// println!("BIC: {}", entry.bic);
/// ```
#[derive(Debug, Clone)]
pub struct BankDirectory {
    banks: Vec<BankEntry>,
}

impl BankDirectory {
    /// Loads the bank directory from the specified file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the directory file (e.g., "./data/banks.json")
    ///
    /// # Returns
    ///
    /// Returns a `BankDirectory` instance on success, or an error if:
    /// - The file is missing or unreadable
    /// - The file does not parse as a list of bank entries
    ///
    /// # Example
    ///
    /// ```no_run
    /// use sif_engine::config::BankDirectory;
    ///
    /// let directory = BankDirectory::load("./data/banks.json")?;
    /// # Ok::<(), sif_engine::error::SifError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> SifResult<Self> {
        let path = path.as_ref();

        let content = fs::read_to_string(path).map_err(|_| SifError::BankDirectoryNotFound {
            path: path.display().to_string(),
        })?;

        let mut banks = Self::parse(path, &content)?;
        banks.sort_by_key(|entry| entry.bank_name.to_lowercase());

        Ok(Self { banks })
    }

    /// Parses the directory file, choosing the format from the extension.
    fn parse(path: &Path, content: &str) -> SifResult<Vec<BankEntry>> {
        let path_str = path.display().to_string();

        let is_yaml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

        if is_yaml {
            serde_yaml::from_str(content).map_err(|e| SifError::BankDirectoryParseError {
                path: path_str,
                message: e.to_string(),
            })
        } else {
            serde_json::from_str(content).map_err(|e| SifError::BankDirectoryParseError {
                path: path_str,
                message: e.to_string(),
            })
        }
    }

    /// Returns all banks, sorted by bank name.
    pub fn banks(&self) -> &[BankEntry] {
        &self.banks
    }

    /// Gets a bank entry by its short name.
    ///
    /// The lookup ignores ASCII case, so "bmct" and "BMCT" resolve to the
    /// same entry.
    ///
    /// # Arguments
    ///
    /// * `short_name` - The short name to look up (e.g., "BMCT")
    ///
    /// # Returns
    ///
    /// Returns the entry if found, or `None` for an unknown short name.
    pub fn entry_by_short_name(&self, short_name: &str) -> Option<&BankEntry> {
        self.banks
            .iter()
            .find(|entry| entry.short_name.eq_ignore_ascii_case(short_name))
    }

    /// Gets the BIC registered for a bank short name.
    ///
    /// # Arguments
    ///
    /// * `short_name` - The short name to look up (e.g., "NBO")
    pub fn bic_for_short_name(&self, short_name: &str) -> Option<&str> {
        self.entry_by_short_name(short_name)
            .map(|entry| entry.bic.as_str())
    }
}
