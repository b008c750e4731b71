use crate::document::{attr_value, Document};
use crate::url::is_internal_href;
use url::Url;

/// Counts anchors that point into the page's own site
///
/// See [`is_internal_href`] for the rule applied to each `href`.
pub fn count_internal_links(document: &Document, page_url: &Url) -> usize {
    document
        .find_all("a[href]")
        .into_iter()
        .filter_map(|anchor| attr_value(anchor, "href"))
        .filter(|href| is_internal_href(href, page_url))
        .count()
}
