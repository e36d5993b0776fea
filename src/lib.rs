//! # docx2wc
//!
//! Convert DOCX story documents into WrittenContent JSX markup.
//!
//! ## Why this crate?
//!
//! Publishing pipelines that render stories through `WrittenContentLoader`
//! components need each manuscript turned into a fixed JSX scaffold:
//! paragraph styling resolved, line-break groups preserved, typographic
//! symbols normalized to entities. Doing that by hand is slow and
//! error-prone; this crate reads the DOCX container directly and emits the
//! complete component markup in one pass.
//!
//! ## Pipeline Overview
//!
//! ```text
//! DOCX
//!  │
//!  ├─ 1. Load      open the zip container, parse word/document.xml
//!  ├─ 2. Extract   normalize paragraphs, runs, and alignment
//!  ├─ 3. Strip     drop title/byline preamble up to the date marker
//!  ├─ 4. Group     merge blank-line-separated sections with <br></br>
//!  ├─ 5. Style     resolve bold/italic per paragraph, merge adjacent runs
//!  └─ 6. Render    escape symbols and emit WrittenContent JSX
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use docx2wc::{convert, ConversionConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ConversionConfig::default();
//!     let output = convert("my_story.docx", &config)?;
//!     println!("{}", output.jsx);
//!     eprintln!(
//!         "{} of {} paragraphs rendered",
//!         output.stats.rendered_paragraphs, output.stats.total_paragraphs
//!     );
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `docx2wc` binary (clap + anyhow + tracing-subscriber) |
//!
//! Disable `cli` when using only the library to avoid pulling in CLI-only deps:
//! ```toml
//! docx2wc = { version = "0.3", default-features = false }
//! ```
//!
//! ## Image utilities
//!
//! The crate also bundles the small raster helpers the same publishing flow
//! needs for cover art: [`ImageFile`] resizes images and converts between
//! formats, reloading from disk after every save so the in-memory handle
//! never drifts from the file.

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod convert;
pub mod docx;
pub mod error;
pub mod image;
pub mod model;
pub mod output;
pub mod pipeline;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{ConversionConfig, ConversionConfigBuilder, PreamblePredicate};
pub use convert::{convert, convert_from_bytes, convert_to_file, default_output_path, inspect};
pub use docx::{DocxFile, ParagraphSource, SourceParagraph, SourceRun};
pub use error::Docx2WcError;
pub use image::{ImageFile, SUPPORTED_IMAGE_EXTENSIONS};
pub use model::{Alignment, Paragraph, Run, LINE_BREAK_MARKER};
pub use output::{ConversionOutput, ConversionStats, DocumentMetadata};
pub use pipeline::style::FontStyle;
