//! Normalized document model: the shapes every pipeline stage consumes.
//!
//! The loader produces raw, format-flavoured paragraphs (`Option<bool>`
//! style flags, free-form alignment strings); the extractor normalizes them
//! into these types once, and from that point on the pipeline is a chain of
//! pure `Vec<Paragraph> -> Vec<Paragraph>` transformations. Nothing here is
//! mutated after construction.

use serde::{Deserialize, Serialize};

/// Marker text inserted between grouped paragraphs.
///
/// Emitted verbatim into the JSX body; the renderer treats a run carrying
/// exactly this text as a structural line break and never merges it with
/// neighboring runs.
pub const LINE_BREAK_MARKER: &str = "<br></br>\n";

/// A contiguous span of text sharing one formatting state.
///
/// Ordering within a paragraph is significant; runs are immutable once
/// extracted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
}

impl Run {
    /// Plain unstyled run.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
            italic: false,
        }
    }

    /// The explicit line-break run the grouper inserts between members.
    pub fn line_break() -> Self {
        Self::plain(LINE_BREAK_MARKER)
    }

    /// True if this run is the grouper's line-break marker.
    pub fn is_line_break(&self) -> bool {
        self.text == LINE_BREAK_MARKER
    }

    /// True if the run's text is blank after trimming.
    ///
    /// Blank runs carry no visible formatting and are ignored by paragraph
    /// style resolution.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Paragraph alignment, reduced to the four values the template recognizes.
///
/// The extractor maps every source alignment onto this set; anything it does
/// not recognize falls back to `Left` with a warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

impl Alignment {
    /// The value substituted into the block template's `textAlign` attribute.
    pub fn as_template_value(self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
            Alignment::Justify => "justify",
        }
    }
}

/// An ordered run sequence plus alignment; the basic structural unit.
///
/// `raw_text` is the concatenation of the source paragraph's run texts,
/// captured at extraction time so emptiness checks and the preamble marker
/// scan never have to re-join runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    pub alignment: Alignment,
    pub runs: Vec<Run>,
    pub raw_text: String,
}

impl Paragraph {
    /// True iff the paragraph's full text, trimmed, is empty.
    ///
    /// Empty paragraphs are spacing artifacts: the grouper treats them as
    /// separators and the renderer skips them.
    pub fn is_empty(&self) -> bool {
        self.raw_text.trim().is_empty()
    }
}
