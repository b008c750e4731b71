/// Block-level content tags counted for content length
pub const BLOCK_TAGS: &str = "p, h1, h2, h3, h4, h5, h6";

/// Tags whose text feeds keyword density
pub const DENSITY_TAGS: &str = "p, h1, h2, h3, h4, h5, h6, span";

/// Splits text into word tokens
///
/// A word is a maximal run of alphanumeric characters or underscores.
pub fn tokenize_words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|token| !token.is_empty())
}
