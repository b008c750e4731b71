use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Browser-like identification sent with every request
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// PageSpeed Insights v5 endpoint
pub const DEFAULT_SPEED_ENDPOINT: &str =
    "https://www.googleapis.com/pagespeedonline/v5/runPagespeed";

/// Main configuration structure for Sumi-Lens
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub links: LinkConfig,
    #[serde(default)]
    pub density: DensityConfig,
    #[serde(default)]
    pub speed: SpeedConfig,
}

/// Page fetch configuration
#[derive(Debug, Clone, Deserialize)]
pub struct FetchConfig {
    /// Timeout for the page GET (seconds)
    #[serde(rename = "timeout-secs", default = "default_fetch_timeout")]
    pub timeout_secs: u64,

    /// User-Agent header value
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,
}

/// Outbound link validation configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LinkConfig {
    /// Maximum number of distinct outbound links to probe
    #[serde(rename = "max-links", default = "default_max_links")]
    pub max_links: usize,

    /// Timeout for a single probe (seconds)
    #[serde(rename = "probe-timeout-secs", default = "default_probe_timeout")]
    pub probe_timeout_secs: u64,

    /// Number of probes allowed in flight at once (defaults to `max_links`)
    #[serde(default)]
    pub concurrency: Option<usize>,
}

/// Keyword density configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DensityConfig {
    /// Minimum token length (in characters) for a word to count
    #[serde(rename = "min-length", default = "default_min_length")]
    pub min_length: usize,
}

/// External performance scoring configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SpeedConfig {
    /// Credential for the scoring service; scoring is skipped without one
    #[serde(rename = "api-key", default)]
    pub api_key: Option<String>,

    /// Execution profile requested from the scoring service
    #[serde(default)]
    pub strategy: Strategy,

    /// Scoring service endpoint
    #[serde(default = "default_speed_endpoint")]
    pub endpoint: String,
}

/// Execution profile for external performance scoring
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    #[default]
    Desktop,
    Mobile,
}

impl Strategy {
    /// Returns the value sent to the scoring service
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Desktop => "desktop",
            Self::Mobile => "mobile",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FetchConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl LinkConfig {
    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_secs)
    }

    /// Effective worker count: the configured concurrency, or one worker per
    /// candidate when unset. Never more than `max_links`.
    pub fn effective_concurrency(&self) -> usize {
        self.concurrency
            .unwrap_or(self.max_links)
            .min(self.max_links)
            .max(1)
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_fetch_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            max_links: default_max_links(),
            probe_timeout_secs: default_probe_timeout(),
            concurrency: None,
        }
    }
}

impl Default for DensityConfig {
    fn default() -> Self {
        Self {
            min_length: default_min_length(),
        }
    }
}

impl Default for SpeedConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            strategy: Strategy::default(),
            endpoint: default_speed_endpoint(),
        }
    }
}

fn default_fetch_timeout() -> u64 {
    10
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_max_links() -> usize {
    10
}

fn default_probe_timeout() -> u64 {
    5
}

fn default_min_length() -> usize {
    3
}

fn default_speed_endpoint() -> String {
    DEFAULT_SPEED_ENDPOINT.to_string()
}
