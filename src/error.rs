//! Error types for the docx2wc library.
//!
//! Every variant here is **fatal**: the conversion is a single-pass pure
//! computation, so any failure aborts the whole run rather than producing
//! partial output. The two recoverable conditions the pipeline knows about —
//! an unrecognized alignment value and an absent preamble date marker — are
//! handled inline (warn-and-default, keep-everything) and never surface as
//! errors.

use std::path::PathBuf;
use thiserror::Error;

/// All errors returned by the docx2wc library.
#[derive(Debug, Error)]
pub enum Docx2WcError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// Input file was not found at the given path.
    #[error("File not found: '{}'\nCheck the path exists and is readable.", path.display())]
    FileNotFound { path: PathBuf },

    /// Process does not have read permission on the file.
    #[error("Permission denied reading '{}'\nTry: chmod +r {path:?}", path.display())]
    PermissionDenied { path: PathBuf },

    /// The file exists but is not a DOCX document (wrong extension or not a
    /// ZIP container).
    #[error("File is not a valid .docx document: '{}'", path.display())]
    NotADocx { path: PathBuf },

    /// The DOCX container could not be parsed (bad ZIP entry, malformed
    /// `word/document.xml`).
    #[error("Failed to load DOCX '{}': {detail}", path.display())]
    DocumentLoad { path: PathBuf, detail: String },

    // ── Output errors ─────────────────────────────────────────────────────
    /// Output path does not end in `.txt`. Validated before any input is
    /// read so a bad invocation fails instantly.
    #[error("Output path must have a .txt extension, got: '{}'", path.display())]
    InvalidOutputPath { path: PathBuf },

    /// Could not create or write the output file.
    #[error("Failed to write output file '{}': {source}", path.display())]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Image errors ──────────────────────────────────────────────────────
    /// The image path carries an extension outside the supported set.
    #[error(
        "Unsupported image extension '{extension}' for '{}'\n\
         Supported: png, jpg, jpeg, gif, bmp, tiff, webp, ico.",
        path.display()
    )]
    UnsupportedImageFormat { path: PathBuf, extension: String },

    /// Resize output extension does not match the source image extension.
    /// Resizing never converts formats; use `convert_format` for that.
    #[error("Output extension '{got}' does not match source image extension '{expected}'")]
    ImageExtensionMismatch { expected: String, got: String },

    /// The underlying imaging library failed to decode or encode.
    #[error("Image operation failed for '{}': {detail}", path.display())]
    ImageOperation { path: PathBuf, detail: String },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Catch-all ─────────────────────────────────────────────────────────
    /// Unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_output_path_display() {
        let e = Docx2WcError::InvalidOutputPath {
            path: PathBuf::from("result.html"),
        };
        let msg = e.to_string();
        assert!(msg.contains(".txt"), "got: {msg}");
        assert!(msg.contains("result.html"));
    }

    #[test]
    fn not_a_docx_display() {
        let e = Docx2WcError::NotADocx {
            path: PathBuf::from("notes.pdf"),
        };
        assert!(e.to_string().contains("notes.pdf"));
    }

    #[test]
    fn extension_mismatch_display() {
        let e = Docx2WcError::ImageExtensionMismatch {
            expected: ".png".into(),
            got: ".jpg".into(),
        };
        let msg = e.to_string();
        assert!(msg.contains(".png"));
        assert!(msg.contains(".jpg"));
    }

    #[test]
    fn output_write_failed_has_source() {
        use std::error::Error;
        let e = Docx2WcError::OutputWriteFailed {
            path: PathBuf::from("out.txt"),
            source: std::io::Error::other("disk full"),
        };
        assert!(e.source().is_some());
    }
}
