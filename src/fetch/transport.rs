//! HTTP transport
//!
//! All network access goes through the [`Transport`] trait so the pipeline
//! can run against an in-process fake in tests.

use crate::config::FetchConfig;
use crate::fetch::FetchError;
use async_trait::async_trait;
use reqwest::{redirect::Policy, Client};
use std::time::Duration;
use url::Url;

/// Maximum redirect hops followed for both page fetches and probes
const MAX_REDIRECTS: usize = 10;

/// Network operations required by the analysis pipeline
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends a GET and returns the body of a 2xx response
    ///
    /// Non-2xx responses are returned as [`FetchError::Status`].
    async fn get(&self, url: &Url, timeout: Duration) -> Result<String, FetchError>;

    /// Sends a HEAD (following redirects) and returns the final status code
    ///
    /// Any status, including 4xx/5xx, is returned as `Ok`.
    async fn head(&self, url: &Url, timeout: Duration) -> Result<u16, FetchError>;
}

/// Builds an HTTP client with the configured browser-like user agent
///
/// # Example
///
/// ```no_run
/// use sumi_lens::config::FetchConfig;
/// use sumi_lens::fetch::build_http_client;
///
/// let client = build_http_client(&FetchConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &FetchConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .redirect(Policy::limited(MAX_REDIRECTS))
        .gzip(true)
        .brotli(true)
        .build()
}

/// reqwest-backed [`Transport`]
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(config: &FetchConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_http_client(config)?,
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &Url, timeout: Duration) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url.clone())
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(&e))?;

        let response = response
            .error_for_status()
            .map_err(|e| FetchError::from_reqwest(&e))?;

        response
            .text()
            .await
            .map_err(|e| FetchError::from_reqwest(&e))
    }

    async fn head(&self, url: &Url, timeout: Duration) -> Result<u16, FetchError> {
        let response = self
            .client
            .head(url.clone())
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(&e))?;

        Ok(response.status().as_u16())
    }
}
