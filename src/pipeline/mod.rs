//! Pipeline stages for DOCX-to-WrittenContent conversion.
//!
//! Each submodule implements exactly one transformation step. Keeping stages
//! separate makes each independently testable and lets us swap
//! implementations (e.g. a different preamble heuristic) without touching
//! other stages.
//!
//! ## Data Flow
//!
//! ```text
//! extract ──▶ preamble ──▶ group ──▶ style/escape ──▶ render
//! (normalize)  (strip)     (merge)   (resolve+merge)  (template)
//! ```
//!
//! 1. [`extract`]  — normalize loader paragraphs into the pipeline model
//! 2. [`preamble`] — drop title/byline content above the date marker
//! 3. [`group`]    — collapse blank-line-separated sections into single
//!    paragraphs with explicit break markers
//! 4. [`style`]    — resolve paragraph-level font style, suppress redundant
//!    run tags, merge adjacent same-format runs; [`escape`] holds the
//!    symbol-normalization table it applies to each raw run
//! 5. [`render`]   — emit the fixed JSX block and wrapper templates
//!
//! Every stage is a pure function of its input; the sequence is linear in
//! paragraph and run count and nothing is mutated in place.

pub mod escape;
pub mod extract;
pub mod group;
pub mod preamble;
pub mod render;
pub mod style;
