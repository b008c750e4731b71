//! Concurrent link prober

use crate::config::LinkConfig;
use crate::document::{attr_value, Document};
use crate::fetch::Transport;
use crate::links::{LinkCheckResult, LinkOutcome, LinkReport};
use crate::url::resolve_href;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use url::Url;

/// Collects the page's probe-able anchor targets
///
/// Hrefs are resolved against the page URL, non-HTTP(S) targets are
/// dropped, and duplicates are removed keeping first-occurrence order.
pub fn collect_outbound_links(document: &Document, page_url: &Url) -> Vec<Url> {
    let mut seen = HashSet::new();

    document
        .find_all("a[href]")
        .into_iter()
        .filter_map(|anchor| attr_value(anchor, "href"))
        .filter_map(|href| resolve_href(&href, page_url))
        .filter(|url| seen.insert(url.as_str().to_string()))
        .collect()
}

/// Probes outbound links on a bounded worker pool
///
/// Only the first `max_links` candidates are probed; the rest are neither
/// probed nor reported. Each probe is bounded by `probe_timeout` and a probe
/// that fails in any way becomes an [`LinkOutcome::Unreachable`] entry
/// instead of an error.
pub struct LinkValidator {
    transport: Arc<dyn Transport>,
    max_links: usize,
    probe_timeout: Duration,
    concurrency: usize,
}

impl LinkValidator {
    pub fn new(transport: Arc<dyn Transport>, config: &LinkConfig) -> Self {
        Self {
            transport,
            max_links: config.max_links,
            probe_timeout: config.probe_timeout(),
            concurrency: config.effective_concurrency(),
        }
    }

    /// Probes up to `max_links` of the given links
    ///
    /// All probes are launched together and joined; each writes only its own
    /// result slot, and the report is assembled in candidate order.
    pub async fn validate(&self, links: &[Url]) -> LinkReport {
        let candidates: Vec<Url> = links.iter().take(self.max_links).cloned().collect();

        if candidates.is_empty() {
            tracing::debug!("No outbound links to probe");
            return LinkReport::default();
        }

        tracing::debug!(
            "Probing {} of {} outbound links ({} workers)",
            candidates.len(),
            links.len(),
            self.concurrency
        );

        let permits = Arc::new(Semaphore::new(self.concurrency));
        let handles: Vec<_> = candidates
            .iter()
            .cloned()
            .map(|url| {
                let transport = Arc::clone(&self.transport);
                let permits = Arc::clone(&permits);
                let probe_timeout = self.probe_timeout;

                tokio::spawn(async move {
                    let Ok(_permit) = permits.acquire_owned().await else {
                        return Some(LinkOutcome::Unreachable);
                    };
                    probe(transport.as_ref(), &url, probe_timeout).await
                })
            })
            .collect();

        let mut broken = Vec::new();
        for (url, handle) in candidates.iter().zip(handles) {
            let outcome = match handle.await {
                Ok(outcome) => outcome,
                Err(e) => {
                    tracing::warn!("Probe task for {} did not complete: {}", url, e);
                    Some(LinkOutcome::Unreachable)
                }
            };

            if let Some(status) = outcome {
                broken.push(LinkCheckResult {
                    url: url.to_string(),
                    status,
                });
            }
        }

        tracing::info!(
            "Checked {} links, {} broken",
            candidates.len(),
            broken.len()
        );

        LinkReport {
            checked: candidates.len(),
            broken,
        }
    }
}

/// Probes one link; `None` means the link is healthy
async fn probe(transport: &dyn Transport, url: &Url, probe_timeout: Duration) -> Option<LinkOutcome> {
    match tokio::time::timeout(probe_timeout, transport.head(url, probe_timeout)).await {
        Ok(Ok(status)) if status >= 400 => {
            tracing::debug!("Broken link {} ({})", url, status);
            Some(LinkOutcome::Status(status))
        }
        Ok(Ok(_)) => None,
        Ok(Err(e)) => {
            tracing::debug!("Link {} unreachable: {}", url, e);
            Some(LinkOutcome::Unreachable)
        }
        Err(_) => {
            tracing::debug!("Link {} timed out after {:?}", url, probe_timeout);
            Some(LinkOutcome::Unreachable)
        }
    }
}
