//! Presentation of analysis results.
//!
//! - [`Interpretation`]: verdict from the d-construct and overall consensus
//! - [`format_report`]: fixed-width plain-text summary
//! - [`csv`]: delimited export of the result tables
//!
//! These are thin views over [`crate::analysis::AnalysisResult`]; nothing
//! here recomputes metrics.

pub mod csv;
mod interpretation;
mod text;

pub use interpretation::{Interpretation, CONSENSUS_LIMIT, D_CONSTRUCT_LIMIT};
pub use text::format_report;
