//! Output types returned by the conversion entry points.

use serde::{Deserialize, Serialize};

/// Result of a successful conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionOutput {
    /// The rendered WrittenContent JSX.
    pub jsx: String,
    /// Document-level metadata gathered during loading.
    pub metadata: DocumentMetadata,
    /// Counters describing what each pipeline stage did.
    pub stats: ConversionStats,
}

/// Document metadata, available without running the conversion pipeline
/// (see [`crate::convert::inspect`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// Paragraph count, including empty spacing paragraphs.
    pub paragraph_count: usize,
    /// Simple whitespace-separated word count. Approximate for languages
    /// without space-delimited words.
    pub word_count: usize,
}

/// Per-stage counters for one conversion run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConversionStats {
    /// Paragraphs extracted from the source document.
    pub total_paragraphs: usize,
    /// Paragraphs removed by the preamble stripper.
    pub stripped_paragraphs: usize,
    /// Paragraphs after grouping (equals the post-strip count when the
    /// separator pattern was absent and grouping was a no-op).
    pub grouped_paragraphs: usize,
    /// Non-empty paragraphs actually rendered into the output.
    pub rendered_paragraphs: usize,
    /// Wall-clock duration of the whole conversion.
    pub duration_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_serialize_round_trip() {
        let stats = ConversionStats {
            total_paragraphs: 10,
            stripped_paragraphs: 3,
            grouped_paragraphs: 5,
            rendered_paragraphs: 4,
            duration_ms: 12,
        };
        let json = serde_json::to_string(&stats).unwrap();
        assert!(json.contains("\"stripped_paragraphs\":3"));
        let back: ConversionStats = serde_json::from_str(&json).unwrap();
        assert_eq!(back.rendered_paragraphs, 4);
    }
}
