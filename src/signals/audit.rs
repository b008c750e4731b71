use crate::document::Document;
use crate::signals::MetaSignals;
use serde::Serialize;

/// Lower bound of the ideal meta description length (characters)
pub const IDEAL_DESCRIPTION_MIN: usize = 120;

/// Upper bound of the ideal meta description length (characters)
pub const IDEAL_DESCRIPTION_MAX: usize = 160;

/// Structural on-page judgments
///
/// Each numeric field is paired with the human-readable status derived from
/// it; consumers read the number, never the status text.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OnPageAudit {
    pub h1_count: usize,
    pub h1_status: String,
    pub images_missing_alt: usize,
    pub image_alt_status: String,
    /// Character count of the meta description, `None` when absent
    pub description_length: Option<usize>,
    pub description_status: String,
}

/// Audits H1 usage, image alt text and meta description length
///
/// An image is missing alt text when it has no `alt` attribute or an empty
/// one. The description length is taken from the already-extracted
/// [`MetaSignals`].
pub fn audit_on_page(document: &Document, meta: &MetaSignals) -> OnPageAudit {
    let h1_count = document.count("h1");

    let images_missing_alt = document
        .find_all("img")
        .into_iter()
        .filter(|img| img.value().attr("alt").map_or(true, str::is_empty))
        .count();

    let description_length = meta.description.as_ref().map(|d| d.chars().count());

    OnPageAudit {
        h1_count,
        h1_status: h1_status(h1_count),
        images_missing_alt,
        image_alt_status: image_alt_status(images_missing_alt),
        description_length,
        description_status: description_status(description_length),
    }
}

fn h1_status(count: usize) -> String {
    if count == 0 {
        "No H1 tag found".to_string()
    } else {
        format!("Found {} H1 tags", count)
    }
}

fn image_alt_status(missing: usize) -> String {
    if missing == 0 {
        "All images have alt text".to_string()
    } else {
        format!("{} images missing alt text", missing)
    }
}

fn description_status(length: Option<usize>) -> String {
    match length {
        Some(length) if length > 0 => format!(
            "Description length: {} (Ideal: {}-{})",
            length, IDEAL_DESCRIPTION_MIN, IDEAL_DESCRIPTION_MAX
        ),
        _ => "No meta description".to_string(),
    }
}
