//! Flattening of a report into labelled groups of display lines
//!
//! Both the text rendering and the CSV export are built from these groups,
//! so the two formats always agree on content and order.

use crate::report::AnalysisReport;
use crate::speed::{ScoreOutcome, SpeedSignals};

/// One signal group of a report
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    /// Short name, used as the CSV column header
    pub column: &'static str,
    /// Heading used by the text rendering
    pub heading: &'static str,
    pub lines: Vec<String>,
}

/// Flattens a report into its signal groups, in display order
pub fn report_sections(report: &AnalysisReport) -> Vec<Section> {
    vec![
        Section {
            column: "Meta Tags",
            heading: "Meta Tags",
            lines: report
                .meta
                .display_fields()
                .into_iter()
                .map(|(label, value)| format!("{}: {}", label, value))
                .collect(),
        },
        Section {
            column: "Keyword Density",
            heading: "Top 10 Keywords (Density %)",
            lines: keyword_lines(report),
        },
        Section {
            column: "Broken Links",
            heading: "Broken Links",
            lines: broken_link_lines(report),
        },
        Section {
            column: "On-Page Audit",
            heading: "On-Page SEO Audit",
            lines: vec![
                format!("H1 tags: {}", report.on_page.h1_status),
                format!("Image alt text: {}", report.on_page.image_alt_status),
                format!("Meta description: {}", report.on_page.description_status),
            ],
        },
        Section {
            column: "Content",
            heading: "Content",
            lines: vec![
                format!("Word count: {}", report.content.word_count),
                format!("Internal links: {}", report.internal_links),
            ],
        },
        Section {
            column: "Speed",
            heading: "Page Speed",
            lines: speed_lines(&report.speed),
        },
        Section {
            column: "Recommendations",
            heading: "Recommendations",
            lines: report.recommendations.clone(),
        },
    ]
}

fn keyword_lines(report: &AnalysisReport) -> Vec<String> {
    if report.keyword_density.is_empty() {
        return vec!["No keyword data".to_string()];
    }

    report
        .keyword_density
        .iter()
        .map(|k| format!("{}: {:.2}%", k.term, k.percentage))
        .collect()
}

fn broken_link_lines(report: &AnalysisReport) -> Vec<String> {
    if report.broken_links.is_empty() {
        return vec![format!(
            "No broken links found! ({} checked)",
            report.links_checked
        )];
    }

    report
        .broken_links
        .iter()
        .map(|link| format!("URL: {} - Status: {}", link.url, link.status))
        .collect()
}

fn speed_lines(speed: &SpeedSignals) -> Vec<String> {
    let mut lines = vec![format!("Response time: {:.2}s", speed.response_time)];

    match &speed.external {
        ScoreOutcome::NotRequested => {
            lines.push("Performance score: not requested".to_string());
        }
        ScoreOutcome::Unavailable { reason } => {
            lines.push(format!("Performance score unavailable: {}", reason));
        }
        ScoreOutcome::Scored { score, hints } => {
            lines.push(format!("Performance score: {}/100", score));
            lines.extend(
                hints
                    .iter()
                    .map(|hint| format!("Improve: {} (score {:.2})", hint.title, hint.score)),
            );
        }
    }

    lines
}
