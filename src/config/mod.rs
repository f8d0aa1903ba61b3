//! Bank directory loading for the SIF engine.
//!
//! This module provides functionality to load the Omani bank reference
//! data used to resolve payer and payee bank short names to BICs.
//!
//! # Example
//!
//! ```no_run
//! use sif_engine::config::BankDirectory;
//!
//! let directory = BankDirectory::load("./data/banks.json").unwrap();
//! println!("Loaded {} banks", directory.banks().len());
//! ```

mod loader;
mod types;

pub use loader::BankDirectory;
pub use types::BankEntry;
