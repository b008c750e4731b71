//! Speed signals
//!
//! The page's own fetch latency is always reported. An external performance
//! score is added only when a scoring credential is configured.

mod pagespeed;

pub use pagespeed::PageSpeedClient;

use serde::Serialize;
use std::time::Duration;

/// Maximum number of improvement hints kept from the scoring service
pub const MAX_SPEED_HINTS: usize = 3;

/// An audit the scoring service rated below the passing mark
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeedHint {
    pub title: String,
    /// Audit score in [0, 1]
    pub score: f64,
}

/// Result of the optional external scoring call
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScoreOutcome {
    /// No credential was supplied
    #[default]
    NotRequested,
    /// The service returned a score
    Scored {
        /// Performance score in [0, 100]
        score: u32,
        hints: Vec<SpeedHint>,
    },
    /// The call failed; local signals are unaffected
    Unavailable { reason: String },
}

impl ScoreOutcome {
    pub fn score(&self) -> Option<u32> {
        match self {
            Self::Scored { score, .. } => Some(*score),
            _ => None,
        }
    }
}

/// Speed-related signals of one page
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SpeedSignals {
    /// Page fetch latency in seconds, rounded to two decimals
    pub response_time: f64,
    pub external: ScoreOutcome,
}

impl SpeedSignals {
    pub fn new(latency: Duration, external: ScoreOutcome) -> Self {
        Self {
            response_time: round_seconds(latency),
            external,
        }
    }
}

/// Rounds a duration to seconds with two decimals
pub fn round_seconds(latency: Duration) -> f64 {
    (latency.as_secs_f64() * 100.0).round() / 100.0
}
