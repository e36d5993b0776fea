//! Conversion entry points.
//!
//! The whole pipeline is a synchronous, single-pass computation: one read at
//! the start, pure transformations in the middle, at most one write at the
//! end. There is nothing to parallelise — runtime is linear in paragraph and
//! run count — so these functions are plain blocking calls.

use crate::config::ConversionConfig;
use crate::docx::DocxFile;
use crate::error::Docx2WcError;
use crate::model::Paragraph;
use crate::output::{ConversionOutput, ConversionStats, DocumentMetadata};
use crate::pipeline::{extract, group, preamble, render};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

/// Convert a DOCX file to WrittenContent JSX.
///
/// This is the primary entry point for the library.
///
/// # Errors
/// Returns `Err(Docx2WcError)` for fatal errors only: missing/unreadable
/// input, a file that is not a DOCX container, or a parse failure. An absent
/// preamble marker and unrecognized alignment values are non-fatal and are
/// logged instead.
pub fn convert(
    input: impl AsRef<Path>,
    config: &ConversionConfig,
) -> Result<ConversionOutput, Docx2WcError> {
    let start = Instant::now();
    let input = input.as_ref();
    info!("Starting conversion: {}", input.display());

    let docx = DocxFile::open(input)?;
    run_pipeline(&docx, config, start)
}

/// Convert DOCX bytes in memory to WrittenContent JSX.
///
/// Recommended when the document comes from a database or network buffer
/// rather than a file on disk; no temporary file is created.
pub fn convert_from_bytes(
    bytes: &[u8],
    config: &ConversionConfig,
) -> Result<ConversionOutput, Docx2WcError> {
    let start = Instant::now();
    let docx = DocxFile::from_bytes(bytes)?;
    run_pipeline(&docx, config, start)
}

/// Convert a DOCX file and write the JSX directly to `output_path`.
///
/// The output extension must be `.txt`; this is validated **before** the
/// input is read so a bad invocation fails instantly. The write is atomic
/// (sibling temp file + rename) so a crash never leaves a partial file.
pub fn convert_to_file(
    input: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    config: &ConversionConfig,
) -> Result<ConversionOutput, Docx2WcError> {
    let path = output_path.as_ref();
    validate_output_path(path)?;

    let output = convert(input, config)?;
    write_atomic(path, &output.jsx)?;

    info!("Wrote WrittenContent JSX: {}", path.display());
    Ok(output)
}

/// Extract document metadata without converting content.
pub fn inspect(input: impl AsRef<Path>) -> Result<DocumentMetadata, Docx2WcError> {
    let docx = DocxFile::open(input)?;
    Ok(DocumentMetadata {
        paragraph_count: docx.paragraph_count(),
        word_count: docx.word_count(),
    })
}

/// Default output path for a given input: `{stem}_written_content.txt`
/// alongside the source file.
pub fn default_output_path(input: impl AsRef<Path>) -> PathBuf {
    let input = input.as_ref();
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    input.with_file_name(format!("{stem}_written_content.txt"))
}

// ── Internal helpers ─────────────────────────────────────────────────────

/// Run the transformation stages over a loaded document.
fn run_pipeline(
    docx: &DocxFile,
    config: &ConversionConfig,
    start: Instant,
) -> Result<ConversionOutput, Docx2WcError> {
    let metadata = DocumentMetadata {
        paragraph_count: docx.paragraph_count(),
        word_count: docx.word_count(),
    };

    // ── Step 1: Extract normalized paragraphs ────────────────────────────
    let paragraphs = extract::extract(docx);
    let total_paragraphs = paragraphs.len();
    debug!("Extracted {total_paragraphs} paragraphs");

    // ── Step 2: Strip the preamble ───────────────────────────────────────
    let paragraphs = if config.strip_preamble {
        strip_with_configured_marker(paragraphs, config)
    } else {
        paragraphs
    };
    let stripped_paragraphs = total_paragraphs - paragraphs.len();

    // ── Step 3: Group blank-line-separated sections ──────────────────────
    let paragraphs = if config.group_paragraphs {
        group::group_paragraphs(paragraphs)
    } else {
        paragraphs
    };
    let grouped_paragraphs = paragraphs.len();

    // ── Step 4: Render (style resolution and escaping happen per block) ──
    let rendered_paragraphs = paragraphs.iter().filter(|p| !p.is_empty()).count();
    let jsx = render::render_document(&paragraphs);

    let stats = ConversionStats {
        total_paragraphs,
        stripped_paragraphs,
        grouped_paragraphs,
        rendered_paragraphs,
        duration_ms: start.elapsed().as_millis() as u64,
    };

    info!(
        "Conversion complete: {}/{} paragraphs rendered in {}ms",
        stats.rendered_paragraphs, stats.total_paragraphs, stats.duration_ms
    );

    Ok(ConversionOutput {
        jsx,
        metadata,
        stats,
    })
}

/// Strip the preamble using the configured marker, from most-specific to
/// least-specific: injected predicate, then custom pattern, then the
/// built-in date heuristic.
fn strip_with_configured_marker(
    paragraphs: Vec<Paragraph>,
    config: &ConversionConfig,
) -> Vec<Paragraph> {
    if let Some(ref pred) = config.preamble_predicate {
        preamble::strip_preamble(paragraphs, &**pred)
    } else if let Some(ref pattern) = config.preamble_pattern {
        preamble::strip_preamble(paragraphs, &|text: &str| pattern.is_match(text))
    } else {
        preamble::strip_preamble(paragraphs, &preamble::is_date_marker)
    }
}

/// Reject any output path that does not end in `.txt`.
fn validate_output_path(path: &Path) -> Result<(), Docx2WcError> {
    let ok = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("txt"));
    if ok {
        Ok(())
    } else {
        Err(Docx2WcError::InvalidOutputPath {
            path: path.to_path_buf(),
        })
    }
}

/// Atomic write: temp file in the same directory, then rename.
fn write_atomic(path: &Path, contents: &str) -> Result<(), Docx2WcError> {
    let map_err = |source: std::io::Error| Docx2WcError::OutputWriteFailed {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(map_err)?;
    }

    // Sibling path keeps the rename on one filesystem, so it stays atomic.
    let tmp_path = path.with_extension("txt.tmp");
    std::fs::write(&tmp_path, contents).map_err(map_err)?;
    std::fs::rename(&tmp_path, path).map_err(map_err)?;
    Ok(())
}
