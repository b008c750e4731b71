//! Client for a PageSpeed-Insights-compatible scoring service

use crate::config::{FetchConfig, SpeedConfig, Strategy};
use crate::fetch::build_http_client;
use crate::speed::{ScoreOutcome, SpeedHint, MAX_SPEED_HINTS};
use crate::LensError;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Map, Value};
use url::Url;

/// Audits scoring at or above this mark are not reported as hints
const PASSING_AUDIT_SCORE: f64 = 0.9;

#[derive(Debug, Deserialize)]
struct PageSpeedResponse {
    #[serde(rename = "lighthouseResult")]
    lighthouse_result: LighthouseResult,
}

#[derive(Debug, Deserialize)]
struct LighthouseResult {
    categories: Categories,
    #[serde(default)]
    audits: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
struct Categories {
    performance: Category,
}

#[derive(Debug, Deserialize)]
struct Category {
    score: Option<f64>,
}

/// Delegates performance scoring to an external service
///
/// One request is made per analysis. Any failure is reported as
/// [`ScoreOutcome::Unavailable`], never as an error.
#[derive(Debug, Clone)]
pub struct PageSpeedClient {
    client: Client,
    endpoint: Url,
    api_key: String,
    strategy: Strategy,
}

impl PageSpeedClient {
    /// Builds a client when a credential is configured
    ///
    /// # Returns
    ///
    /// * `Ok(None)` - No api key; scoring is disabled
    /// * `Ok(Some(client))` - Scoring is enabled
    /// * `Err(LensError)` - The endpoint or HTTP client is invalid
    pub fn from_config(speed: &SpeedConfig, fetch: &FetchConfig) -> Result<Option<Self>, LensError> {
        let Some(api_key) = speed.api_key.clone() else {
            return Ok(None);
        };

        Ok(Some(Self {
            client: build_http_client(fetch)?,
            endpoint: Url::parse(&speed.endpoint)?,
            api_key,
            strategy: speed.strategy,
        }))
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Requests a performance score for the page
    pub async fn score(&self, page_url: &Url) -> ScoreOutcome {
        match self.request(page_url).await {
            Ok(response) => interpret(response),
            Err(e) => {
                tracing::warn!("Speed scoring failed for {}: {}", page_url, e);
                ScoreOutcome::Unavailable {
                    reason: e.to_string(),
                }
            }
        }
    }

    async fn request(&self, page_url: &Url) -> Result<PageSpeedResponse, reqwest::Error> {
        tracing::debug!(
            "Requesting {} performance score for {}",
            self.strategy,
            page_url
        );

        self.client
            .get(self.endpoint.clone())
            .query(&[
                ("url", page_url.as_str()),
                ("key", self.api_key.as_str()),
                ("strategy", self.strategy.as_str()),
                ("category", "performance"),
            ])
            .send()
            .await?
            .error_for_status()?
            .json::<PageSpeedResponse>()
            .await
    }
}

/// Converts a service response into a score and up to three hints
///
/// Hints are the first audits, in the service's own order, whose score is
/// below the passing mark. Audits without a numeric score are skipped.
fn interpret(response: PageSpeedResponse) -> ScoreOutcome {
    let result = response.lighthouse_result;

    let Some(raw_score) = result.categories.performance.score else {
        tracing::warn!("Speed service returned no performance score");
        return ScoreOutcome::Unavailable {
            reason: "response carried no performance score".to_string(),
        };
    };

    let hints = result
        .audits
        .values()
        .filter_map(|audit| {
            let score = audit.get("score")?.as_f64()?;
            let title = audit.get("title")?.as_str()?;
            (score < PASSING_AUDIT_SCORE).then(|| SpeedHint {
                title: title.to_string(),
                score,
            })
        })
        .take(MAX_SPEED_HINTS)
        .collect();

    ScoreOutcome::Scored {
        score: (raw_score.clamp(0.0, 1.0) * 100.0).round() as u32,
        hints,
    }
}
