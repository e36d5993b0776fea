//! Preamble stripping: drop title/byline paragraphs above the date marker.
//!
//! Source documents for the publishing pipeline open with a title, author
//! line, and a date like "7-6-24"; only the content after the date belongs
//! in the rendered output. This is a heuristic, and a domain-specific one —
//! which is why the marker test is an injectable predicate
//! ([`crate::config::ConversionConfigBuilder::preamble_predicate`]) rather
//! than a hardcoded regex. The default predicate matches
//! `\d{1,2}-\d{1,2}-\d{2,4}` anywhere in a paragraph's text.
//!
//! Policy: fail open. When no paragraph matches, the document is returned
//! unchanged — better to keep a title than to drop a story.

use crate::model::Paragraph;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

static RE_DATE_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d{1,2}-\d{1,2}-\d{2,4}").unwrap());

/// Default marker predicate: text contains a `M-D-YY`-style date.
pub fn is_date_marker(text: &str) -> bool {
    RE_DATE_MARKER.is_match(text)
}

/// Remove all paragraphs up to and including the first non-empty paragraph
/// whose text satisfies `is_marker`.
///
/// Returns the input unchanged when no paragraph matches.
pub fn strip_preamble(
    paragraphs: Vec<Paragraph>,
    is_marker: &dyn Fn(&str) -> bool,
) -> Vec<Paragraph> {
    for (i, paragraph) in paragraphs.iter().enumerate() {
        if !paragraph.is_empty() && is_marker(&paragraph.raw_text) {
            debug!(
                "Preamble marker found at paragraph {}; stripping {} leading paragraphs",
                i,
                i + 1
            );
            return paragraphs.into_iter().skip(i + 1).collect();
        }
    }

    debug!("No preamble marker found; keeping full content");
    paragraphs
}
