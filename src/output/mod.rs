//! Output module for rendering analysis results
//!
//! This module handles:
//! - Plain-text rendering for the terminal
//! - JSON serialization of the full outcome
//! - CSV export with one column per signal group

mod export;
mod sections;
mod text;

pub use export::{export_csv, write_csv};
pub use sections::{report_sections, Section};
pub use text::{format_outcome, format_report};

use crate::report::AnalysisOutcome;
use crate::Result;

/// Serializes an outcome as pretty-printed JSON
///
/// Field order follows the report structure, so identical outcomes always
/// produce identical documents.
pub fn to_json(outcome: &AnalysisOutcome) -> Result<String> {
    Ok(serde_json::to_string_pretty(outcome)?)
}
