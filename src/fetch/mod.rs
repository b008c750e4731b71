//! Page retrieval
//!
//! This module contains:
//! - The [`Transport`] seam used for every HTTP round-trip (page GET and
//!   link probes), with a reqwest-backed implementation
//! - The fetcher that captures one page into a [`PageSnapshot`]

mod fetcher;
mod transport;

pub use fetcher::{fetch_page, PageSnapshot};
pub use transport::{build_http_client, HttpTransport, Transport};

use thiserror::Error;

/// Transport-level failure of a single request
///
/// No request is ever retried; callers decide whether a failure is fatal
/// (the page fetch) or absorbed (a link probe).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("request timed out")]
    Timeout,

    #[error("connection failed: {0}")]
    Connect(String),

    #[error("HTTP status {0}")]
    Status(u16),

    #[error("transport error: {0}")]
    Transport(String),
}

impl FetchError {
    /// Classifies a reqwest error
    pub fn from_reqwest(error: &reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout
        } else if error.is_connect() {
            Self::Connect(error.to_string())
        } else if let Some(status) = error.status() {
            Self::Status(status.as_u16())
        } else {
            Self::Transport(error.to_string())
        }
    }
}
