//! DOCX document loader: ZIP container + streaming XML.
//!
//! A `.docx` file is a ZIP archive whose main content lives in
//! `word/document.xml`. We parse that entry directly with `quick-xml`
//! (docx-rs is writer-only) and keep only what the conversion needs:
//! paragraphs, their runs with bold/italic flags, and paragraph alignment.
//!
//! The pipeline consumes the loader through the [`ParagraphSource`] trait,
//! never this concrete type — any conforming provider (or a test double)
//! satisfies it, which keeps the transformation logic independent of the
//! binary format binding.
//!
//! ## Relevant XML shape
//!
//! ```text
//! <w:p>                          paragraph
//!   <w:pPr><w:jc w:val="center"/></w:pPr>     alignment
//!   <w:r>                        run
//!     <w:rPr><w:b/><w:i/></w:rPr>             style flags
//!     <w:t xml:space="preserve">text</w:t>
//!   </w:r>
//! </w:p>
//! ```

use crate::error::Docx2WcError;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::fs::File;
use std::io::{Cursor, Read, Seek};
use std::path::{Path, PathBuf};
use tracing::debug;
use zip::ZipArchive;

/// A run as the document states it: style flags are tri-state because Word
/// distinguishes "absent" from "explicitly off".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRun {
    pub text: String,
    pub bold: Option<bool>,
    pub italic: Option<bool>,
}

/// A paragraph as read from `word/document.xml`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceParagraph {
    /// Concatenation of all run texts.
    pub text: String,
    /// Raw `w:jc` justification value, if present.
    pub alignment: Option<String>,
    pub runs: Vec<SourceRun>,
}

/// Capability interface the pipeline consumes: an ordered paragraph
/// sequence. Implemented by [`DocxFile`] and by test doubles.
pub trait ParagraphSource {
    fn paragraphs(&self) -> &[SourceParagraph];
}

/// A loaded DOCX document.
#[derive(Debug)]
pub struct DocxFile {
    path: PathBuf,
    paragraphs: Vec<SourceParagraph>,
}

impl ParagraphSource for DocxFile {
    fn paragraphs(&self) -> &[SourceParagraph] {
        &self.paragraphs
    }
}

impl DocxFile {
    /// Open and parse a `.docx` file.
    ///
    /// Validates the extension and the ZIP magic bytes before parsing, so a
    /// mis-named or corrupt file fails with a meaningful error rather than a
    /// ZIP parser panic deep inside.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, Docx2WcError> {
        let path = path.as_ref().to_path_buf();

        let extension_ok = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("docx"));
        if !extension_ok {
            return Err(Docx2WcError::NotADocx { path });
        }

        if !path.exists() {
            return Err(Docx2WcError::FileNotFound { path });
        }

        let mut file = match File::open(&path) {
            Ok(f) => f,
            Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
                return Err(Docx2WcError::PermissionDenied { path });
            }
            Err(_) => {
                return Err(Docx2WcError::FileNotFound { path });
            }
        };

        // ZIP local-file-header magic; anything else is not a DOCX container.
        let mut magic = [0u8; 4];
        if file.read_exact(&mut magic).is_err() || &magic != b"PK\x03\x04" {
            return Err(Docx2WcError::NotADocx { path });
        }
        file.rewind()
            .map_err(|e| Docx2WcError::Internal(format!("rewind failed: {e}")))?;

        let mut archive = ZipArchive::new(file).map_err(|e| Docx2WcError::DocumentLoad {
            path: path.clone(),
            detail: format!("not a readable ZIP archive: {e}"),
        })?;

        let paragraphs = Self::load(&mut archive, &path)?;
        debug!("Loaded DOCX: {} ({} paragraphs)", path.display(), paragraphs.len());

        Ok(Self { path, paragraphs })
    }

    /// Parse a DOCX document from in-memory bytes.
    ///
    /// Used when the document comes from a buffer rather than a file on
    /// disk; no temporary file is created.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Docx2WcError> {
        let path = PathBuf::from("<in-memory>");

        if bytes.len() < 4 || &bytes[..4] != b"PK\x03\x04" {
            return Err(Docx2WcError::NotADocx { path });
        }

        let mut archive =
            ZipArchive::new(Cursor::new(bytes)).map_err(|e| Docx2WcError::DocumentLoad {
                path: path.clone(),
                detail: format!("not a readable ZIP archive: {e}"),
            })?;

        let paragraphs = Self::load(&mut archive, &path)?;
        Ok(Self { path, paragraphs })
    }

    /// Path the document was loaded from (`<in-memory>` for byte input).
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of paragraphs, including empty spacing paragraphs.
    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }

    /// Whitespace-separated word count across all paragraphs.
    pub fn word_count(&self) -> usize {
        self.paragraphs
            .iter()
            .map(|p| p.text.split_whitespace().count())
            .sum()
    }

    fn load<R: Read + Seek>(
        archive: &mut ZipArchive<R>,
        path: &Path,
    ) -> Result<Vec<SourceParagraph>, Docx2WcError> {
        let xml_content = {
            let mut entry =
                archive
                    .by_name("word/document.xml")
                    .map_err(|e| Docx2WcError::DocumentLoad {
                        path: path.to_path_buf(),
                        detail: format!("missing word/document.xml: {e}"),
                    })?;
            let mut content = String::new();
            entry
                .read_to_string(&mut content)
                .map_err(|e| Docx2WcError::DocumentLoad {
                    path: path.to_path_buf(),
                    detail: format!("word/document.xml is not valid UTF-8: {e}"),
                })?;
            content
        };

        parse_document_xml(&xml_content).map_err(|detail| Docx2WcError::DocumentLoad {
            path: path.to_path_buf(),
            detail,
        })
    }
}

/// Walk `word/document.xml` and collect paragraphs.
fn parse_document_xml(xml: &str) -> Result<Vec<SourceParagraph>, String> {
    let mut reader = Reader::from_str(xml);
    // DOCX marks significant whitespace with xml:space="preserve"; trimming
    // here would eat inter-run spaces.
    reader.trim_text(false);

    let mut paragraphs: Vec<SourceParagraph> = Vec::new();
    let mut current_paragraph: Option<SourceParagraph> = None;
    let mut current_run: Option<SourceRun> = None;
    let mut in_text = false;

    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"w:p" => {
                    current_paragraph = Some(SourceParagraph {
                        text: String::new(),
                        alignment: None,
                        runs: Vec::new(),
                    });
                }
                b"w:r" => {
                    current_run = Some(SourceRun {
                        text: String::new(),
                        bold: None,
                        italic: None,
                    });
                }
                b"w:t" => in_text = true,
                b"w:b" => handle_style_flag(&e, &mut current_run, StyleFlag::Bold),
                b"w:i" => handle_style_flag(&e, &mut current_run, StyleFlag::Italic),
                _ => {}
            },
            Ok(Event::Empty(e)) => match e.name().as_ref() {
                // Spacing paragraphs are sometimes written self-closing.
                b"w:p" => paragraphs.push(SourceParagraph {
                    text: String::new(),
                    alignment: None,
                    runs: Vec::new(),
                }),
                b"w:jc" => {
                    if let Some(ref mut p) = current_paragraph {
                        p.alignment = get_attr(&e, b"w:val");
                    }
                }
                b"w:b" => handle_style_flag(&e, &mut current_run, StyleFlag::Bold),
                b"w:i" => handle_style_flag(&e, &mut current_run, StyleFlag::Italic),
                _ => {}
            },
            Ok(Event::Text(e)) => {
                if in_text {
                    if let Some(ref mut run) = current_run {
                        let text = e.unescape().map_err(|err| format!("bad text node: {err}"))?;
                        run.text.push_str(&text);
                    }
                }
            }
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:t" => in_text = false,
                b"w:r" => {
                    if let (Some(p), Some(run)) = (current_paragraph.as_mut(), current_run.take()) {
                        p.text.push_str(&run.text);
                        p.runs.push(run);
                    }
                }
                b"w:p" => {
                    if let Some(p) = current_paragraph.take() {
                        paragraphs.push(p);
                    }
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(format!("XML parse error: {e}")),
            _ => {}
        }
        buf.clear();
    }

    Ok(paragraphs)
}

enum StyleFlag {
    Bold,
    Italic,
}

/// Apply a `w:b`/`w:i` element to the current run.
///
/// Present without a value means on; `w:val="0"` or `"false"` means
/// explicitly off. Ignored outside a run (`w:pPr/w:rPr` holds paragraph-mark
/// properties that do not style content runs).
fn handle_style_flag(e: &BytesStart<'_>, current_run: &mut Option<SourceRun>, flag: StyleFlag) {
    let Some(run) = current_run.as_mut() else {
        return;
    };
    let enabled = !val_is_off(e);
    match flag {
        StyleFlag::Bold => run.bold = Some(enabled),
        StyleFlag::Italic => run.italic = Some(enabled),
    }
}

/// Check if the `w:val` attribute explicitly disables the flag.
fn val_is_off(e: &BytesStart<'_>) -> bool {
    get_attr(e, b"w:val").is_some_and(|v| v == "0" || v == "false")
}

/// Extract an attribute value by key from an element.
fn get_attr(e: &BytesStart<'_>, key: &[u8]) -> Option<String> {
    e.attributes()
        .filter_map(Result::ok)
        .find(|a| a.key.as_ref() == key)
        .map(|a| String::from_utf8_lossy(&a.value).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> Vec<SourceParagraph> {
        let xml = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
<w:body>{body}</w:body></w:document>"#
        );
        parse_document_xml(&xml).expect("parse should succeed")
    }

    #[test]
    fn plain_paragraph() {
        let paras = parse("<w:p><w:r><w:t>Hello world.</w:t></w:r></w:p>");
        assert_eq!(paras.len(), 1);
        assert_eq!(paras[0].text, "Hello world.");
        assert_eq!(paras[0].runs.len(), 1);
        assert_eq!(paras[0].runs[0].bold, None);
        assert_eq!(paras[0].alignment, None);
    }

    #[test]
    fn style_flags_captured() {
        let paras = parse(
            "<w:p><w:r><w:rPr><w:b/><w:i/></w:rPr><w:t>styled</w:t></w:r></w:p>",
        );
        assert_eq!(paras[0].runs[0].bold, Some(true));
        assert_eq!(paras[0].runs[0].italic, Some(true));
    }

    #[test]
    fn explicit_val_off_is_false() {
        let paras = parse(
            r#"<w:p><w:r><w:rPr><w:b w:val="0"/><w:i w:val="false"/></w:rPr><w:t>x</w:t></w:r></w:p>"#,
        );
        assert_eq!(paras[0].runs[0].bold, Some(false));
        assert_eq!(paras[0].runs[0].italic, Some(false));
    }

    #[test]
    fn alignment_from_jc() {
        let paras = parse(
            r#"<w:p><w:pPr><w:jc w:val="center"/></w:pPr><w:r><w:t>centered</w:t></w:r></w:p>"#,
        );
        assert_eq!(paras[0].alignment.as_deref(), Some("center"));
    }

    #[test]
    fn paragraph_mark_properties_do_not_leak_into_runs() {
        // w:pPr/w:rPr styles the paragraph mark, not the content runs.
        let paras = parse(
            "<w:p><w:pPr><w:rPr><w:b/></w:rPr></w:pPr><w:r><w:t>plain</w:t></w:r></w:p>",
        );
        assert_eq!(paras[0].runs[0].bold, None);
    }

    #[test]
    fn multiple_runs_concatenate_into_paragraph_text() {
        let paras = parse(
            r#"<w:p><w:r><w:t xml:space="preserve">A </w:t></w:r><w:r><w:rPr><w:b/></w:rPr><w:t>B</w:t></w:r></w:p>"#,
        );
        assert_eq!(paras[0].text, "A B");
        assert_eq!(paras[0].runs.len(), 2);
    }

    #[test]
    fn empty_paragraph_preserved() {
        // Both the self-closing and the open/close empty forms occur.
        for body in ["<w:p/><w:p><w:r><w:t>x</w:t></w:r></w:p>",
                     "<w:p></w:p><w:p><w:r><w:t>x</w:t></w:r></w:p>"] {
            let paras = parse(body);
            assert_eq!(paras.len(), 2);
            assert_eq!(paras[0].text, "");
            assert_eq!(paras[1].text, "x");
        }
    }

    #[test]
    fn entities_unescaped() {
        let paras = parse("<w:p><w:r><w:t>a &amp; b</w:t></w:r></w:p>");
        assert_eq!(paras[0].text, "a & b");
    }

    #[test]
    fn from_bytes_rejects_non_zip() {
        let err = DocxFile::from_bytes(b"not a zip").unwrap_err();
        assert!(matches!(err, Docx2WcError::NotADocx { .. }));
    }

    #[test]
    fn open_rejects_wrong_extension() {
        let err = DocxFile::open("document.pdf").unwrap_err();
        assert!(matches!(err, Docx2WcError::NotADocx { .. }));
    }

    #[test]
    fn open_missing_file() {
        let err = DocxFile::open("does-not-exist.docx").unwrap_err();
        assert!(matches!(err, Docx2WcError::FileNotFound { .. }));
    }
}
