//! SIF Generation Engine for the Oman Wage Protection System
//!
//! This crate provides functionality for turning monthly salary submissions
//! into WPS-compliant Salary Information Files: normalizing employee records,
//! aggregating net salaries, laying out the document grid, and composing the
//! upload filename.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod generation;
pub mod models;
