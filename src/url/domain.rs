use url::Url;

/// Extracts the lowercase host from a URL
///
/// # Examples
///
/// ```
/// use url::Url;
/// use sumi_lens::url::extract_domain;
///
/// let url = Url::parse("https://EXAMPLE.COM/path").unwrap();
/// assert_eq!(extract_domain(&url), Some("example.com".to_string()));
/// ```
pub fn extract_domain(url: &Url) -> Option<String> {
    url.host_str().map(|h| h.to_lowercase())
}

/// Returns true if both URLs share scheme and host
pub fn same_site(a: &Url, b: &Url) -> bool {
    a.scheme() == b.scheme()
        && matches!(
            (extract_domain(a), extract_domain(b)),
            (Some(x), Some(y)) if x == y
        )
}
