//! Plain-text rendering of an analysis outcome

use crate::output::sections::report_sections;
use crate::report::{AnalysisOutcome, AnalysisReport};

/// Formats an outcome for terminal display
pub fn format_outcome(outcome: &AnalysisOutcome) -> String {
    match outcome {
        AnalysisOutcome::Completed(report) => format_report(report),
        AnalysisOutcome::FetchFailed { url, error } => {
            format!("=== SEO Analysis: {} ===\n\nError: {}\n", url, error)
        }
    }
}

/// Formats a completed report section by section
pub fn format_report(report: &AnalysisReport) -> String {
    let mut out = format!("=== SEO Analysis: {} ===\n", report.url);

    for section in report_sections(report) {
        out.push_str(&format!("\n{}\n", section.heading));
        let numbered = section.column == "Recommendations";
        for (i, line) in section.lines.iter().enumerate() {
            if numbered {
                out.push_str(&format!("  {}. {}\n", i + 1, line));
            } else {
                out.push_str(&format!("  {}\n", line));
            }
        }
    }

    out
}
