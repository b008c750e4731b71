//! Analysis coordinator - orchestrates one page audit

use crate::config::Config;
use crate::document::Document;
use crate::fetch::{fetch_page, HttpTransport, PageSnapshot, Transport};
use crate::links::{collect_outbound_links, LinkValidator};
use crate::report::{AnalysisOutcome, AnalysisReport};
use crate::signals::{PageSignals, SignalExtractor, StandardExtractor};
use crate::speed::{PageSpeedClient, ScoreOutcome, SpeedSignals};
use crate::url::parse_page_url;
use crate::LensError;
use std::sync::Arc;
use std::time::Instant;
use url::Url;

/// Runs single-page audits
///
/// Every run is independent: nothing is cached between calls, so analysing
/// the same unchanged page twice yields the same report.
pub struct Analyzer<E: SignalExtractor = StandardExtractor> {
    config: Config,
    transport: Arc<dyn Transport>,
    scorer: Option<PageSpeedClient>,
    extractor: E,
}

impl Analyzer {
    /// Creates an analyzer backed by a real HTTP client
    ///
    /// # Arguments
    ///
    /// * `config` - The analysis configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Analyzer)` - Ready to analyse pages
    /// * `Err(LensError)` - The HTTP client or speed endpoint is invalid
    pub fn new(config: Config) -> Result<Self, LensError> {
        let transport = Arc::new(HttpTransport::new(&config.fetch)?);
        Self::with_parts(config, transport, StandardExtractor)
    }
}

impl<E: SignalExtractor> Analyzer<E> {
    /// Creates an analyzer from explicit parts
    ///
    /// The speed client, if any, is still built from `config.speed`.
    pub fn with_parts(
        config: Config,
        transport: Arc<dyn Transport>,
        extractor: E,
    ) -> Result<Self, LensError> {
        let scorer = PageSpeedClient::from_config(&config.speed, &config.fetch)?;
        if let Some(scorer) = &scorer {
            tracing::debug!("External speed scoring enabled ({})", scorer.strategy());
        }

        Ok(Self {
            config,
            transport,
            scorer,
            extractor,
        })
    }

    pub fn extractor(&self) -> &E {
        &self.extractor
    }

    /// Analyses one page
    ///
    /// # Returns
    ///
    /// * `Ok(AnalysisOutcome::Completed)` - The full report
    /// * `Ok(AnalysisOutcome::FetchFailed)` - The page could not be fetched
    /// * `Err(LensError)` - `url` is not an absolute http(s) URL
    pub async fn analyze(&self, url: &str) -> Result<AnalysisOutcome, LensError> {
        let page_url = parse_page_url(url)?;
        tracing::info!("Analyzing {}", page_url);

        let started = Instant::now();
        let snapshot = fetch_page(
            self.transport.as_ref(),
            &page_url,
            self.config.fetch.timeout(),
        )
        .await;

        let outcome = self.analyze_snapshot(snapshot).await;
        tracing::info!(
            "Analysis of {} finished in {:.2}s",
            page_url,
            started.elapsed().as_secs_f64()
        );

        Ok(outcome)
    }

    /// Builds the outcome for an already captured snapshot
    ///
    /// A failed snapshot short-circuits: no extractor, probe or scoring
    /// request runs.
    pub async fn analyze_snapshot(&self, snapshot: PageSnapshot) -> AnalysisOutcome {
        let (page_url, markup, latency) = match snapshot {
            PageSnapshot::Fetched {
                url,
                markup,
                latency,
            } => (url, markup, latency),
            PageSnapshot::FetchFailed { url, reason } => {
                return AnalysisOutcome::FetchFailed {
                    url: url.to_string(),
                    error: format!("Failed to fetch page: {}", reason),
                };
            }
        };

        let (signals, outbound) = self.inspect(&markup, &page_url);
        tracing::debug!(
            "Extracted signals for {} ({} outbound link candidates)",
            page_url,
            outbound.len()
        );

        let validator = LinkValidator::new(Arc::clone(&self.transport), &self.config.links);
        let (links, external) = tokio::join!(validator.validate(&outbound), self.score(&page_url));

        AnalysisOutcome::Completed(AnalysisReport::assemble(
            page_url.as_str(),
            signals,
            links,
            SpeedSignals::new(latency, external),
        ))
    }

    /// Parses the markup and runs every synchronous extraction step
    ///
    /// The document does not outlive this call.
    fn inspect(&self, markup: &str, page_url: &Url) -> (PageSignals, Vec<Url>) {
        let document = Document::parse(markup);
        let signals = self
            .extractor
            .extract(&document, page_url, &self.config.density);
        let outbound = collect_outbound_links(&document, page_url);
        (signals, outbound)
    }

    async fn score(&self, page_url: &Url) -> ScoreOutcome {
        match &self.scorer {
            Some(scorer) => scorer.score(page_url).await,
            None => ScoreOutcome::NotRequested,
        }
    }
}
