//! Page fetcher
//!
//! Performs the single page GET of an analysis run and captures the outcome
//! as a [`PageSnapshot`]. There is no retry: a failed fetch ends the run.

use crate::fetch::{FetchError, Transport};
use std::time::{Duration, Instant};
use url::Url;

/// Immutable capture of one page fetch
///
/// Created once per analysis and discarded once the report is built.
#[derive(Debug, Clone, PartialEq)]
pub enum PageSnapshot {
    /// The page was retrieved
    Fetched {
        /// The requested page URL
        url: Url,
        /// Raw response body
        markup: String,
        /// Wall-clock time of the GET
        latency: Duration,
    },

    /// The page could not be retrieved
    FetchFailed {
        /// The requested page URL
        url: Url,
        /// Why the fetch failed
        reason: FetchError,
    },
}

impl PageSnapshot {
    pub fn url(&self) -> &Url {
        match self {
            Self::Fetched { url, .. } | Self::FetchFailed { url, .. } => url,
        }
    }

    pub fn is_fetched(&self) -> bool {
        matches!(self, Self::Fetched { .. })
    }
}

/// Fetches one page and measures its latency
///
/// # Arguments
///
/// * `transport` - The transport to send the GET through
/// * `url` - The page URL
/// * `timeout` - Timeout for the whole request
///
/// # Returns
///
/// A [`PageSnapshot`]; transport failures become
/// [`PageSnapshot::FetchFailed`] rather than an error.
pub async fn fetch_page(transport: &dyn Transport, url: &Url, timeout: Duration) -> PageSnapshot {
    let started = Instant::now();

    match transport.get(url, timeout).await {
        Ok(markup) => {
            let latency = started.elapsed();
            tracing::info!(
                "Successfully fetched {} ({} bytes in {:.2}s)",
                url,
                markup.len(),
                latency.as_secs_f64()
            );
            PageSnapshot::Fetched {
                url: url.clone(),
                markup,
                latency,
            }
        }
        Err(reason) => {
            tracing::error!("Failed to fetch {}: {}", url, reason);
            PageSnapshot::FetchFailed {
                url: url.clone(),
                reason,
            }
        }
    }
}
