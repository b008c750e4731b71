//! Recommendation engine
//!
//! A pure function from an [`AnalysisReport`] to advisory strings. Rules are
//! evaluated in a fixed order (meta, keywords, links, structure, content,
//! internal links, speed) followed by general advice, so the output order
//! depends only on which rules fire, never on the signal values.

use crate::report::AnalysisReport;
use crate::signals::{is_filler_word, is_stop_word, IDEAL_DESCRIPTION_MAX, IDEAL_DESCRIPTION_MIN};
use crate::speed::ScoreOutcome;

/// Titles longer than this are truncated in search results
pub const MAX_TITLE_LENGTH: usize = 60;

/// Word count below which content is considered thin
pub const THIN_CONTENT_WORDS: usize = 300;

/// Word count to aim for
pub const TARGET_CONTENT_WORDS: usize = 800;

/// Minimum number of internal links
pub const MIN_INTERNAL_LINKS: usize = 3;

/// Performance score below which speed is a major problem
pub const POOR_SPEED_SCORE: u32 = 50;

/// Performance score from which speed needs no advice
pub const GOOD_SPEED_SCORE: u32 = 90;

/// Response time (seconds) above which the server is considered slow
pub const SLOW_RESPONSE_SECS: f64 = 2.0;

/// Appended to every recommendation list
pub const GENERAL_ADVICE: &[&str] = &[
    "Make sure the page renders well on mobile devices.",
    "Keep your XML sitemap up to date and submit it to search engines.",
    "Use descriptive, readable URLs for your pages.",
];

/// Derives the ordered recommendation list for a report
///
/// The `recommendations` field of the input is ignored.
pub fn recommend(report: &AnalysisReport) -> Vec<String> {
    let mut recs = Vec::new();

    meta_rules(report, &mut recs);
    keyword_rules(report, &mut recs);
    link_rules(report, &mut recs);
    structure_rules(report, &mut recs);
    content_rules(report, &mut recs);
    speed_rules(report, &mut recs);

    recs.extend(GENERAL_ADVICE.iter().map(|advice| advice.to_string()));
    recs
}

fn meta_rules(report: &AnalysisReport, recs: &mut Vec<String>) {
    match report.meta.title.as_deref() {
        None | Some("") => recs.push(
            "Add a unique title tag of 50-60 characters that describes the page.".to_string(),
        ),
        Some(title) => {
            let length = title.chars().count();
            if length > MAX_TITLE_LENGTH {
                recs.push(format!(
                    "Shorten the title to 50-60 characters (currently {}).",
                    length
                ));
            }
        }
    }

    match report.on_page.description_length {
        None | Some(0) => recs.push(format!(
            "Add a meta description of {}-{} characters that summarizes the page.",
            IDEAL_DESCRIPTION_MIN, IDEAL_DESCRIPTION_MAX
        )),
        Some(length) if !(IDEAL_DESCRIPTION_MIN..=IDEAL_DESCRIPTION_MAX).contains(&length) => {
            recs.push(format!(
                "Adjust the meta description to {}-{} characters (currently {}).",
                IDEAL_DESCRIPTION_MIN, IDEAL_DESCRIPTION_MAX, length
            ))
        }
        Some(_) => {}
    }

    if report.meta.keywords.is_none() {
        recs.push(
            "Consider adding a meta keywords tag (optional; most search engines ignore it)."
                .to_string(),
        );
    }
}

fn keyword_rules(report: &AnalysisReport, recs: &mut Vec<String>) {
    let top: Vec<&str> = report
        .keyword_density
        .iter()
        .take(3)
        .map(|k| k.term.as_str())
        .collect();

    if !top.is_empty() && top.iter().all(|term| is_filler_word(term) || is_stop_word(term)) {
        recs.push(format!(
            "Top keywords ({}) are generic filler; work targeted keywords for the page's topic into the content.",
            top.join(", ")
        ));
    }
}

fn link_rules(report: &AnalysisReport, recs: &mut Vec<String>) {
    for link in &report.broken_links {
        recs.push(format!(
            "Fix or remove broken link: {} (status: {}).",
            link.url, link.status
        ));
    }
}

fn structure_rules(report: &AnalysisReport, recs: &mut Vec<String>) {
    match report.on_page.h1_count {
        0 => recs.push("Add one H1 tag that states the page's main topic.".to_string()),
        1 => {}
        count => recs.push(format!(
            "Reduce the number of H1 tags to one (found {}).",
            count
        )),
    }

    if report.on_page.images_missing_alt > 0 {
        recs.push(format!(
            "Add alt text to {} image(s) missing it.",
            report.on_page.images_missing_alt
        ));
    }
}

fn content_rules(report: &AnalysisReport, recs: &mut Vec<String>) {
    let words = report.content.word_count;
    if words < THIN_CONTENT_WORDS {
        recs.push(format!(
            "Increase content length; the page has only {} words (aim for at least {}).",
            words, THIN_CONTENT_WORDS
        ));
    } else if words < TARGET_CONTENT_WORDS {
        recs.push(format!(
            "Aim for {}+ words to cover the topic in more depth (currently {}).",
            TARGET_CONTENT_WORDS, words
        ));
    }

    if report.internal_links < MIN_INTERNAL_LINKS {
        recs.push(format!(
            "Add more internal links to related pages (found {}, aim for at least {}).",
            report.internal_links, MIN_INTERNAL_LINKS
        ));
    }
}

fn speed_rules(report: &AnalysisReport, recs: &mut Vec<String>) {
    match &report.speed.external {
        ScoreOutcome::Scored { score, .. } if *score < POOR_SPEED_SCORE => recs.push(format!(
            "Page speed is poor (performance score {}/100); optimize images and defer non-critical scripts.",
            score
        )),
        ScoreOutcome::Scored { score, .. } if *score < GOOD_SPEED_SCORE => recs.push(format!(
            "Page speed could be improved (performance score {}/100); review the listed opportunities.",
            score
        )),
        ScoreOutcome::Scored { .. } => {}
        ScoreOutcome::NotRequested | ScoreOutcome::Unavailable { .. } => {
            if report.speed.response_time > SLOW_RESPONSE_SECS {
                recs.push(format!(
                    "Server response time is slow ({:.2}s); consider caching or a faster host.",
                    report.speed.response_time
                ));
            }
        }
    }
}
