//! Outbound link validation
//!
//! This module handles:
//! - Collecting probe candidates from the page's anchors
//! - Probing them concurrently on a bounded worker pool
//! - Classifying each outcome into a failure entry or nothing

mod validator;

pub use validator::{collect_outbound_links, LinkValidator};

use serde::{Serialize, Serializer};
use std::fmt;

/// Outcome of a probe that flagged a link as broken
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkOutcome {
    /// The server answered with an error status (>= 400)
    Status(u16),
    /// Timeout, connection error or any other transport failure
    Unreachable,
}

impl fmt::Display for LinkOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status(code) => write!(f, "{}", code),
            Self::Unreachable => f.write_str("Failed to connect"),
        }
    }
}

impl Serialize for LinkOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Status(code) => serializer.serialize_u16(*code),
            Self::Unreachable => serializer.serialize_str("unreachable"),
        }
    }
}

/// A broken outbound link
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkCheckResult {
    /// Absolute URL, resolved against the page URL
    pub url: String,
    pub status: LinkOutcome,
}

/// Result of validating a page's outbound links
///
/// `broken` empty with `checked > 0` means every probed link is healthy;
/// `checked == 0` means the page had no probe-able links.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LinkReport {
    /// Number of links actually probed (never more than the cap)
    pub checked: usize,
    /// Failure entries in candidate order
    pub broken: Vec<LinkCheckResult>,
}
