//! Content extraction: normalize loader paragraphs into the pipeline model.
//!
//! The loader reports what the document actually says — tri-state style
//! flags, free-form alignment strings. This stage resolves all of that into
//! the closed [`crate::model`] types exactly once, so no later stage ever
//! sees an `Option<bool>` or an unrecognized alignment.

use crate::docx::{ParagraphSource, SourceParagraph};
use crate::model::{Alignment, Paragraph, Run};
use tracing::warn;

/// Convert every source paragraph into a normalized [`Paragraph`].
///
/// Run text is captured verbatim; absent bold/italic attributes become
/// `false`. Pure and infallible: any read failure happens earlier, when the
/// source itself is opened.
pub fn extract(source: &impl ParagraphSource) -> Vec<Paragraph> {
    source.paragraphs().iter().map(extract_paragraph).collect()
}

fn extract_paragraph(source: &SourceParagraph) -> Paragraph {
    let runs = source
        .runs
        .iter()
        .map(|run| Run {
            text: run.text.clone(),
            bold: run.bold.unwrap_or(false),
            italic: run.italic.unwrap_or(false),
        })
        .collect();

    Paragraph {
        alignment: map_alignment(source.alignment.as_deref()),
        runs,
        raw_text: source.text.clone(),
    }
}

/// Map a DOCX `w:jc` justification value onto the template's alignment set.
///
/// Absent values mean left (the Word default). Unrecognized values also fall
/// back to left, with a warning — non-fatal by contract.
fn map_alignment(value: Option<&str>) -> Alignment {
    match value {
        None | Some("left") | Some("start") => Alignment::Left,
        Some("center") => Alignment::Center,
        Some("right") | Some("end") => Alignment::Right,
        // "both" is what document.xml actually stores for justified text.
        Some("both") | Some("justify") | Some("distribute") => Alignment::Justify,
        Some(other) => {
            warn!("Unknown alignment '{other}', defaulting to 'left'");
            Alignment::Left
        }
    }
}
