use crate::document::{tokenize_words, Document, BLOCK_TAGS};
use serde::Serialize;

/// Size of the page's main content
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContentStats {
    pub word_count: usize,
}

/// Counts word tokens in paragraphs and headings
///
/// Spans, scripts, styles and other inline text are not counted.
pub fn count_content_words(document: &Document) -> ContentStats {
    let text = document.joined_text(BLOCK_TAGS);
    ContentStats {
        word_count: tokenize_words(&text).count(),
    }
}
