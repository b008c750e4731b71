//! Analysis report types and aggregation
//!
//! The report is the sole product of an analysis run. It is assembled once
//! from the extractor outputs, the link report and the speed signals, and the
//! recommendation list is derived from it before it is handed out.

use crate::links::{LinkCheckResult, LinkReport};
use crate::recommend::recommend;
use crate::signals::{ContentStats, KeywordDensity, MetaSignals, OnPageAudit, PageSignals};
use crate::speed::SpeedSignals;
use serde::Serialize;

/// Every signal of one analysed page plus the derived recommendations
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub url: String,
    pub meta: MetaSignals,
    pub keyword_density: Vec<KeywordDensity>,
    /// Number of outbound links probed
    pub links_checked: usize,
    pub broken_links: Vec<LinkCheckResult>,
    pub on_page: OnPageAudit,
    pub content: ContentStats,
    pub internal_links: usize,
    pub speed: SpeedSignals,
    pub recommendations: Vec<String>,
}

impl AnalysisReport {
    /// Aggregates all signal outputs and derives the recommendations
    pub fn assemble(
        url: &str,
        signals: PageSignals,
        links: LinkReport,
        speed: SpeedSignals,
    ) -> Self {
        let mut report = Self {
            url: url.to_string(),
            meta: signals.meta,
            keyword_density: signals.keyword_density,
            links_checked: links.checked,
            broken_links: links.broken,
            on_page: signals.on_page,
            content: signals.content,
            internal_links: signals.internal_links,
            speed,
            recommendations: Vec::new(),
        };
        report.recommendations = recommend(&report);
        report
    }
}

/// Outcome of one analysis run
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum AnalysisOutcome {
    /// The page was fetched and analysed
    Completed(AnalysisReport),
    /// The page fetch failed; nothing else was computed
    FetchFailed { url: String, error: String },
}

impl AnalysisOutcome {
    pub fn report(&self) -> Option<&AnalysisReport> {
        match self {
            Self::Completed(report) => Some(report),
            Self::FetchFailed { .. } => None,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::FetchFailed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::links::LinkOutcome;
    use std::time::Duration;

    #[test]
    fn test_assemble_moves_signals_and_recommends() {
        let signals = PageSignals {
            internal_links: 4,
            ..PageSignals::default()
        };
        let links = LinkReport {
            checked: 2,
            broken: vec![LinkCheckResult {
                url: "https://example.com/gone".to_string(),
                status: LinkOutcome::Status(404),
            }],
        };
        let speed = SpeedSignals::new(Duration::from_millis(300), Default::default());

        let report = AnalysisReport::assemble("https://example.com/", signals, links, speed);

        assert_eq!(report.url, "https://example.com/");
        assert_eq!(report.links_checked, 2);
        assert_eq!(report.broken_links.len(), 1);
        assert_eq!(report.internal_links, 4);
        assert_eq!(report.speed.response_time, 0.3);
        assert_eq!(report.recommendations, recommend(&report));
        assert!(!report.recommendations.is_empty());
    }

    #[test]
    fn test_failure_outcome_serialization() {
        let outcome = AnalysisOutcome::FetchFailed {
            url: "https://example.com/".to_string(),
            error: "Failed to fetch page: HTTP status 500".to_string(),
        };
        let json = serde_json::to_string(&outcome).unwrap();
        assert_eq!(
            json,
            r#"{"outcome":"fetch_failed","url":"https://example.com/","error":"Failed to fetch page: HTTP status 500"}"#
        );
        assert!(outcome.is_failure());
        assert!(outcome.report().is_none());
    }
}
