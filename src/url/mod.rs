//! URL handling module for Sumi-Lens
//!
//! This module validates the page URL given by the caller, resolves anchor
//! hrefs against it, and decides whether a link stays on the same site.

mod domain;

use crate::{UrlError, UrlResult};
use url::Url;

pub use domain::{extract_domain, same_site};

/// Parses the page URL supplied by the caller
///
/// The URL must be absolute, use HTTP or HTTPS, and carry a host.
///
/// # Examples
///
/// ```
/// use sumi_lens::url::parse_page_url;
///
/// let url = parse_page_url("https://example.com/blog").unwrap();
/// assert_eq!(url.host_str(), Some("example.com"));
///
/// assert!(parse_page_url("example.com/blog").is_err());
/// assert!(parse_page_url("ftp://example.com/").is_err());
/// ```
pub fn parse_page_url(url_str: &str) -> UrlResult<Url> {
    let url = Url::parse(url_str.trim()).map_err(|e| UrlError::Parse(e.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(format!(
            "Only HTTP and HTTPS schemes are supported, got: {}",
            url.scheme()
        )));
    }

    if url.host_str().is_none() {
        return Err(UrlError::MissingHost);
    }

    Ok(url)
}

/// Resolves an anchor href to an absolute, probe-able URL
///
/// Returns None if the link should not be probed:
/// - javascript:, mailto:, tel: schemes
/// - data: URIs
/// - fragment-only links (same page anchors)
/// - invalid URLs
/// - non-HTTP(S) URLs after resolution
///
/// The fragment is dropped, since it never reaches the server.
pub fn resolve_href(href: &str, base_url: &Url) -> Option<Url> {
    let href = href.trim();

    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    let lowered = href.to_ascii_lowercase();
    if lowered.starts_with("javascript:")
        || lowered.starts_with("mailto:")
        || lowered.starts_with("tel:")
        || lowered.starts_with("data:")
    {
        return None;
    }

    match base_url.join(href) {
        Ok(mut absolute_url) if matches!(absolute_url.scheme(), "http" | "https") => {
            absolute_url.set_fragment(None);
            Some(absolute_url)
        }
        _ => None,
    }
}

/// Returns true if an anchor href points into the page's own site
///
/// Any href beginning with `/` counts, including protocol-relative `//host`
/// forms. Otherwise the href is resolved against the page URL and must keep
/// its scheme and host.
pub fn is_internal_href(href: &str, page_url: &Url) -> bool {
    let href = href.trim();

    if href.starts_with('/') {
        return true;
    }

    page_url
        .join(href)
        .map(|resolved| same_site(&resolved, page_url))
        .unwrap_or(false)
}
