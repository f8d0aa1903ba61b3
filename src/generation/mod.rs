//! Generation logic for the SIF engine.
//!
//! This module contains all the stages that turn a salary submission into
//! a finished SIF artifact: text clipping, money parsing and half-up
//! rounding, per-employee normalization, net salary aggregation, document
//! layout, filename composition, and the pipeline entry point that runs
//! the stages in order.

mod aggregate;
mod amount;
mod filename;
mod layout;
mod normalize;
mod pipeline;
mod text;

pub use aggregate::{SalaryTotals, aggregate_net_salaries};
pub use amount::{format_amount, money_value, round_half_up};
pub use filename::compose_filename;
pub use layout::{DocumentHeader, EMPLOYEE_LABELS, HEADER_LABELS, build_document};
pub use normalize::{ZERO_NET_NOTE, normalize_employee};
pub use pipeline::{DEFAULT_SHEET_NAME, generate};
pub use text::clip_text;
