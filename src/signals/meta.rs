use crate::document::{attr_value, element_text, AttrMatch, Document};
use serde::Serialize;

/// Head metadata of a page
///
/// `None` means the tag (or its attribute) is absent, which is distinct from
/// a tag present with empty content.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MetaSignals {
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<String>,
    pub canonical: Option<String>,
    pub robots: Option<String>,
}

impl MetaSignals {
    /// Labelled display values, with a readable placeholder for absent fields
    pub fn display_fields(&self) -> [(&'static str, String); 5] {
        [
            ("Title", display_or(&self.title, "No title found")),
            ("Description", display_or(&self.description, "No description found")),
            ("Keywords", display_or(&self.keywords, "No keywords found")),
            ("Canonical", display_or(&self.canonical, "No canonical URL found")),
            ("Robots", display_or(&self.robots, "No robots directive found")),
        ]
    }
}

fn display_or(value: &Option<String>, placeholder: &str) -> String {
    value.clone().unwrap_or_else(|| placeholder.to_string())
}

/// Extracts title, description, keywords, canonical URL and robots directive
///
/// # Rules
///
/// - title: trimmed text of the first `<title>`
/// - description / keywords: `content` of the first `<meta>` whose `name`
///   contains "description" / "keywords", ignoring case
/// - canonical: `href` of the first `<link rel="canonical">`
/// - robots: `content` of the first `<meta name="robots">`
///
/// Each field falls back to `None` on its own.
pub fn extract_meta(document: &Document) -> MetaSignals {
    MetaSignals {
        title: document
            .find_first("title")
            .map(|title| element_text(title).trim().to_string()),
        description: meta_content(document, AttrMatch::Contains("description")),
        keywords: meta_content(document, AttrMatch::Contains("keywords")),
        canonical: document
            .find_first_with_attr("link", "rel", AttrMatch::Token("canonical"))
            .and_then(|link| attr_value(link, "href")),
        robots: meta_content(document, AttrMatch::Exact("robots")),
    }
}

/// Reads `content` from the first meta tag whose name matches
///
/// Only the first matching tag is consulted; if it lacks `content`, the
/// field is absent even when a later tag would match.
fn meta_content(document: &Document, name: AttrMatch<'_>) -> Option<String> {
    document
        .find_first_with_attr("meta", "name", name)
        .and_then(|meta| attr_value(meta, "content"))
}
