//! Core data models for the SIF generation engine.
//!
//! This module contains all the domain models used throughout the engine.

mod document;
mod employee;
mod normalized;
mod request;

pub use document::{COLUMN_COUNT, SifArtifact, SifDocument, SifRow};
pub use employee::{EmployeeRecord, MoneyInput};
pub use normalized::NormalizedEmployee;
pub use request::SifRequest;
