//! Paragraph style resolution and run merging.
//!
//! The template styles whole paragraphs through a `fontStyle` attribute, so
//! a paragraph whose every run is bold needs no `<b>` tags at all. This
//! module decides that paragraph-level style, suppresses the now-redundant
//! run-level tags, and merges adjacent runs whose effective formatting is
//! identical — Word routinely splits a single bold phrase across several
//! internal runs, and emitting `<b>A</b><b>B</b>` for those is noise.

use crate::model::Run;
use crate::pipeline::escape::normalize_symbols;
use serde::{Deserialize, Serialize};

/// Whole-paragraph font style for the template's `fontStyle` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    Bold,
    Italic,
    #[default]
    Normal,
}

impl FontStyle {
    /// The value substituted into the block template.
    pub fn as_template_value(self) -> &'static str {
        match self {
            FontStyle::Bold => "bold",
            FontStyle::Italic => "italic",
            FontStyle::Normal => "normal",
        }
    }
}

/// Determine the font style for an entire paragraph.
///
/// Computed only over runs with non-blank text: `Bold` if all such runs are
/// bold, else `Italic` if all are italic, else `Normal`. A paragraph with no
/// non-blank runs resolves to `Normal`.
pub fn resolve_style(runs: &[Run]) -> FontStyle {
    let mut saw_any = false;
    let mut all_bold = true;
    let mut all_italic = true;

    for run in runs.iter().filter(|r| !r.is_blank()) {
        saw_any = true;
        all_bold &= run.bold;
        all_italic &= run.italic;
    }

    if !saw_any {
        FontStyle::Normal
    } else if all_bold {
        FontStyle::Bold
    } else if all_italic {
        FontStyle::Italic
    } else {
        FontStyle::Normal
    }
}

/// A run after normalization, reduced to the flags that still matter.
struct ProcessedRun {
    text: String,
    needs_italic: bool,
    needs_bold: bool,
    is_line_break: bool,
}

/// Render a paragraph's runs into an escaped JSX body string.
///
/// 1. Each run's text is symbol-normalized (once, on the raw text).
/// 2. A run keeps its own `<em>`/`<b>` only when the paragraph style does
///    not already carry that formatting.
/// 3. Adjacent runs with identical `(needs_italic, needs_bold)` pairs are
///    concatenated into one group before wrapping, so a phrase Word split
///    across runs gets a single tag pair.
/// 4. Line-break marker runs are emitted verbatim and never merged.
/// 5. Wrapping order is fixed: `<em>` innermost, `<b>` outermost.
///
/// Always produces a string; an empty run list yields the empty string.
pub fn render_runs(runs: &[Run], paragraph_style: FontStyle) -> String {
    let processed: Vec<ProcessedRun> = runs
        .iter()
        .map(|run| ProcessedRun {
            is_line_break: run.is_line_break(),
            text: if run.is_line_break() {
                // Marker text is structural markup, not content.
                run.text.clone()
            } else {
                normalize_symbols(&run.text)
            },
            needs_italic: run.italic && paragraph_style != FontStyle::Italic,
            needs_bold: run.bold && paragraph_style != FontStyle::Bold,
        })
        .collect();

    let mut parts: Vec<String> = Vec::with_capacity(processed.len());
    let mut i = 0;

    while i < processed.len() {
        let current = &processed[i];

        if current.is_line_break {
            parts.push(current.text.clone());
            i += 1;
            continue;
        }

        // Collect consecutive runs with the same effective formatting.
        let mut group = current.text.clone();
        let mut j = i + 1;
        while j < processed.len()
            && !processed[j].is_line_break
            && processed[j].needs_italic == current.needs_italic
            && processed[j].needs_bold == current.needs_bold
        {
            group.push_str(&processed[j].text);
            j += 1;
        }

        if current.needs_italic {
            group = format!("<em>{group}</em>");
        }
        if current.needs_bold {
            group = format!("<b>{group}</b>");
        }

        parts.push(group);
        i = j;
    }

    parts.concat()
}
