//! Signal extractors
//!
//! Each extractor is a pure function of the parsed [`Document`] and the page
//! URL. None of them mutate shared state, and none of them fail: on an empty
//! document they return zero values.

mod audit;
mod content;
mod density;
mod internal;
mod meta;

pub use audit::{
    audit_on_page, OnPageAudit, IDEAL_DESCRIPTION_MAX, IDEAL_DESCRIPTION_MIN,
};
pub use content::{count_content_words, ContentStats};
pub use density::{analyze_keyword_density, is_filler_word, is_stop_word, KeywordDensity};
pub use internal::count_internal_links;
pub use meta::{extract_meta, MetaSignals};

use crate::config::DensityConfig;
use crate::document::Document;
use serde::Serialize;
use url::Url;

/// Every document-derived signal of one page
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PageSignals {
    pub meta: MetaSignals,
    pub keyword_density: Vec<KeywordDensity>,
    pub on_page: OnPageAudit,
    pub content: ContentStats,
    pub internal_links: usize,
}

/// Produces the signal set for a parsed page
///
/// The pipeline calls this exactly once per fetched page and never for a
/// failed fetch.
pub trait SignalExtractor: Send + Sync {
    fn extract(&self, document: &Document, page_url: &Url, density: &DensityConfig)
        -> PageSignals;
}

/// The production extractor set
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardExtractor;

impl SignalExtractor for StandardExtractor {
    fn extract(
        &self,
        document: &Document,
        page_url: &Url,
        density: &DensityConfig,
    ) -> PageSignals {
        let meta = extract_meta(document);
        let on_page = audit_on_page(document, &meta);

        PageSignals {
            keyword_density: analyze_keyword_density(document, density.min_length),
            content: count_content_words(document),
            internal_links: count_internal_links(document, page_url),
            meta,
            on_page,
        }
    }
}
