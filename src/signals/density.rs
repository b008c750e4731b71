use crate::document::{tokenize_words, Document, DENSITY_TAGS};
use serde::Serialize;
use std::collections::HashMap;

/// Maximum number of terms reported
pub const MAX_KEYWORDS: usize = 10;

/// Common English function words, excluded from density counts
const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
    "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each", "few", "for",
    "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers", "herself",
    "him", "himself", "his", "how", "i", "if", "in", "into", "is", "it", "its", "itself", "just",
    "me", "more", "most", "my", "myself", "no", "nor", "not", "now", "of", "off", "on", "once",
    "only", "or", "other", "our", "ours", "ourselves", "out", "over", "own", "same", "she",
    "should", "so", "some", "such", "than", "that", "the", "their", "theirs", "them",
    "themselves", "then", "there", "these", "they", "this", "those", "through", "to", "too",
    "under", "until", "up", "very", "was", "we", "were", "what", "when", "where", "which",
    "while", "who", "whom", "why", "will", "with", "would", "you", "your", "yours", "yourself",
    "yourselves",
];

/// Generic words that carry no topical signal when they top the list
const FILLER_WORDS: &[&str] = &[
    "also", "best", "click", "content", "get", "good", "great", "home", "info", "information",
    "like", "make", "many", "much", "new", "next", "page", "read", "really", "see", "site",
    "stuff", "thing", "things", "use", "way", "web", "website", "welcome", "well",
];

/// Share of one term among all qualifying tokens
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordDensity {
    pub term: String,
    /// Occurrences / qualifying tokens × 100
    pub percentage: f64,
}

pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}

pub fn is_filler_word(word: &str) -> bool {
    FILLER_WORDS.contains(&word)
}

/// Computes the ten densest terms of the page's text
///
/// Text is taken from paragraphs, headings and spans in document order and
/// lower-cased. A token qualifies when it is alphabetic, has at least
/// `min_length` characters, and is not a stop-word. Terms are ranked by
/// count; equal counts keep the order in which the terms first appeared.
///
/// A span nested in a paragraph or heading contributes its words twice.
///
/// Returns an empty list when no token qualifies.
pub fn analyze_keyword_density(document: &Document, min_length: usize) -> Vec<KeywordDensity> {
    let text = document.joined_text(DENSITY_TAGS).to_lowercase();

    // (term, count) in first-occurrence order
    let mut counts: Vec<(&str, usize)> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut total = 0usize;

    for word in tokenize_words(&text) {
        if word.chars().count() < min_length
            || !word.chars().all(char::is_alphabetic)
            || is_stop_word(word)
        {
            continue;
        }

        total += 1;
        match positions.get(word) {
            Some(&index) => counts[index].1 += 1,
            None => {
                positions.insert(word, counts.len());
                counts.push((word, 1));
            }
        }
    }

    if total == 0 {
        return Vec::new();
    }

    // Stable sort keeps first-occurrence order among equal counts
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    counts
        .into_iter()
        .take(MAX_KEYWORDS)
        .map(|(term, count)| KeywordDensity {
            term: term.to_string(),
            percentage: count as f64 * 100.0 / total as f64,
        })
        .collect()
}
