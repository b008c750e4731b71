//! Queryable document model over parsed HTML
//!
//! Every signal extractor reads the page through [`Document`]. Queries take
//! tag names (or comma-separated tag lists) and never fail: a selector that
//! cannot be parsed simply matches nothing.

mod text;

pub use text::{tokenize_words, BLOCK_TAGS, DENSITY_TAGS};

use scraper::{ElementRef, Html, Selector};

/// How an attribute value is matched
#[derive(Debug, Clone, Copy)]
pub enum AttrMatch<'a> {
    /// Whole value equals the pattern, ignoring ASCII case
    Exact(&'a str),
    /// Value contains the pattern, ignoring case
    Contains(&'a str),
    /// Whitespace-separated token list contains the pattern, ignoring ASCII
    /// case (as used by `rel`)
    Token(&'a str),
}

impl AttrMatch<'_> {
    fn matches(&self, value: &str) -> bool {
        match self {
            Self::Exact(pattern) => value.trim().eq_ignore_ascii_case(pattern),
            Self::Contains(pattern) => value.to_lowercase().contains(&pattern.to_lowercase()),
            Self::Token(pattern) => value
                .split_ascii_whitespace()
                .any(|token| token.eq_ignore_ascii_case(pattern)),
        }
    }
}

/// A parsed HTML page
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses markup into a document; malformed markup is repaired, never
    /// rejected
    pub fn parse(markup: &str) -> Self {
        Self {
            html: Html::parse_document(markup),
        }
    }

    /// Returns the first element matching the tag (or tag list)
    pub fn find_first(&self, tags: &str) -> Option<ElementRef<'_>> {
        let selector = Selector::parse(tags).ok()?;
        self.html.select(&selector).next()
    }

    /// Returns all elements matching the tag (or tag list) in document order
    pub fn find_all(&self, tags: &str) -> Vec<ElementRef<'_>> {
        match Selector::parse(tags) {
            Ok(selector) => self.html.select(&selector).collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Returns the first `tag` element whose `attr` attribute matches
    ///
    /// Attribute names are compared case-insensitively, as HTML parsing
    /// already lowercases them.
    pub fn find_first_with_attr(
        &self,
        tag: &str,
        attr: &str,
        pattern: AttrMatch<'_>,
    ) -> Option<ElementRef<'_>> {
        let attr = attr.to_ascii_lowercase();
        self.find_all(tag).into_iter().find(|element| {
            element
                .value()
                .attr(&attr)
                .map(|value| pattern.matches(value))
                .unwrap_or(false)
        })
    }

    /// Counts elements matching the tag (or tag list)
    pub fn count(&self, tags: &str) -> usize {
        self.find_all(tags).len()
    }

    /// Joins the descendant text of every matching element with spaces
    ///
    /// Nested matches contribute their text once per matching ancestor.
    pub fn joined_text(&self, tags: &str) -> String {
        self.find_all(tags)
            .into_iter()
            .map(element_text)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Returns an element's own and descendant text content
pub fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>()
}

/// Returns a trimmed attribute value, if present
pub fn attr_value(element: ElementRef<'_>, attr: &str) -> Option<String> {
    element.value().attr(attr).map(|value| value.trim().to_string())
}
