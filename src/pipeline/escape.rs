//! Symbol normalization: escape run text for safe embedding in JSX.
//!
//! Word documents are full of typographic characters — smart quotes, em
//! dashes, non-breaking spaces — that either break JSX string literals or
//! render inconsistently across browsers. Each is replaced with its HTML
//! entity. The table is applied exactly once, to each **raw** run's text,
//! never to rendered output; re-escaping rendered markup would turn
//! `&quot;` into `&amp;quot;`.
//!
//! ## Rule order
//!
//! The ampersand rule must run first: every other substitution introduces
//! new `&` characters that must not be escaped again.

use once_cell::sync::Lazy;
use regex::Regex;

static RE_DOUBLE_QUOTES: Lazy<Regex> = Lazy::new(|| Regex::new("[\u{201C}\u{201D}\"]").unwrap());
static RE_SINGLE_QUOTES: Lazy<Regex> = Lazy::new(|| Regex::new("[\u{2018}\u{2019}`']").unwrap());

/// Normalize quote, dash, and symbol characters in one raw run's text.
///
/// Substitutions, in order:
///
/// | Input | Output |
/// |---|---|
/// | `&` | `&amp;` |
/// | `"` and smart double-quotes | `&quot;` |
/// | `'`, backtick, smart single-quotes | `&apos;` |
/// | non-breaking space | `&nbsp;` |
/// | en dash / em dash | `&ndash;` / `&mdash;` |
/// | `©` `®` `™` `°` | `&copy;` `&reg;` `&trade;` `&deg;` |
pub fn normalize_symbols(text: &str) -> String {
    // Must handle & first since later replacements introduce new &
    let text = text.replace('&', "&amp;");

    let text = RE_DOUBLE_QUOTES.replace_all(&text, "&quot;");
    let text = RE_SINGLE_QUOTES.replace_all(&text, "&apos;");

    let text = text.replace('\u{00A0}', "&nbsp;");
    let text = text.replace('\u{2013}', "&ndash;");
    let text = text.replace('\u{2014}', "&mdash;");

    text.replace('©', "&copy;")
        .replace('®', "&reg;")
        .replace('™', "&trade;")
        .replace('°', "&deg;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ampersand_escaped_first() {
        // Scenario C from the conversion contract.
        assert_eq!(
            normalize_symbols("He said \"hi\" & left."),
            "He said &quot;hi&quot; &amp; left."
        );
    }

    #[test]
    fn smart_quotes_normalized() {
        assert_eq!(
            normalize_symbols("\u{201C}word\u{201D} \u{2018}x\u{2019}"),
            "&quot;word&quot; &apos;x&apos;"
        );
        assert_eq!(normalize_symbols("it`s"), "it&apos;s");
    }

    #[test]
    fn dashes_and_nbsp() {
        assert_eq!(
            normalize_symbols("a\u{2013}b\u{2014}c\u{00A0}d"),
            "a&ndash;b&mdash;c&nbsp;d"
        );
    }

    #[test]
    fn uncommon_symbols() {
        assert_eq!(
            normalize_symbols("©®™ 90°"),
            "&copy;&reg;&trade; 90&deg;"
        );
    }

    #[test]
    fn plain_text_passthrough() {
        assert_eq!(normalize_symbols("Hello world."), "Hello world.");
        assert_eq!(normalize_symbols(""), "");
    }

    #[test]
    fn entities_do_not_survive_a_second_pass() {
        // The table is single-pass by contract: running it on already-escaped
        // output double-escapes, which is exactly why render_runs applies it
        // only to raw run text.
        assert_eq!(normalize_symbols("&quot;"), "&amp;quot;");
    }
}
