//! Analysis pipeline
//!
//! This module wires the components of one analysis run together:
//! - Fetching the page into a snapshot
//! - Running the signal extractors over the parsed document
//! - Probing outbound links and requesting the external speed score
//! - Assembling the final report

mod coordinator;

pub use coordinator::Analyzer;

use crate::config::Config;
use crate::report::AnalysisOutcome;
use crate::LensError;

/// Runs a complete analysis of one page
///
/// This is the main entry point for an audit. It builds the HTTP transport
/// and optional speed client from `config` and analyses `url`.
///
/// # Returns
///
/// * `Ok(AnalysisOutcome)` - The report, or the fetch-failure marker
/// * `Err(LensError)` - The URL or configuration is unusable
pub async fn analyze(config: Config, url: &str) -> Result<AnalysisOutcome, LensError> {
    Analyzer::new(config)?.analyze(url).await
}
