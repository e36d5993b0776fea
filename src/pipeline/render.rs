//! Markup rendering: assemble normalized paragraphs into the JSX template.
//!
//! The output shape is fixed by the consuming site's `WrittenContent*`
//! components; indentation and attribute order are part of the contract and
//! must not drift. Rendering is deterministic: identical input always yields
//! byte-identical output.

use crate::model::Paragraph;
use crate::pipeline::style::{render_runs, resolve_style};
use tracing::debug;

/// Render the full document: one block per non-empty paragraph, joined by a
/// blank line inside the fixed loader/group wrapper.
pub fn render_document(paragraphs: &[Paragraph]) -> String {
    let blocks: Vec<String> = paragraphs
        .iter()
        .filter(|p| !p.is_empty())
        .map(render_block)
        .collect();

    debug!("Rendered {} paragraph blocks", blocks.len());

    format!(
        "<WrittenContentLoader {{...storyMetadata}}>
        <WrittenContentParagraphGroup>
{}
        </WrittenContentParagraphGroup>
      </WrittenContentLoader>",
        blocks.join("\n\n")
    )
}

/// Render one paragraph as a `WrittenContentParagraphElement` block.
fn render_block(paragraph: &Paragraph) -> String {
    let style = resolve_style(&paragraph.runs);
    let font_style = style.as_template_value();
    let text_align = paragraph.alignment.as_template_value();
    let body = render_runs(&paragraph.runs, style);

    format!(
        "          <WrittenContentParagraphElement
            fontStyle=\"{font_style}\"
            textAlign=\"{text_align}\"
          >
            {body}
          </WrittenContentParagraphElement>"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Alignment, Run};

    fn para(text: &str, alignment: Alignment) -> Paragraph {
        Paragraph {
            alignment,
            runs: vec![Run::plain(text)],
            raw_text: text.into(),
        }
    }

    #[test]
    fn wrapper_structure() {
        let out = render_document(&[para("Hello.", Alignment::Left)]);
        assert!(out.starts_with("<WrittenContentLoader {...storyMetadata}>"));
        assert!(out.ends_with("</WrittenContentLoader>"));
        assert!(out.contains("<WrittenContentParagraphGroup>"));
        assert!(out.contains("</WrittenContentParagraphGroup>"));
    }

    #[test]
    fn block_attributes_substituted() {
        let out = render_document(&[para("Hi", Alignment::Center)]);
        assert!(out.contains("fontStyle=\"normal\""));
        assert!(out.contains("textAlign=\"center\""));
        assert!(out.contains("            Hi\n"));
    }

    #[test]
    fn empty_paragraphs_skipped() {
        let out = render_document(&[
            para("a", Alignment::Left),
            para("   ", Alignment::Left),
            para("b", Alignment::Left),
        ]);
        assert_eq!(out.matches("<WrittenContentParagraphElement").count(), 2);
    }

    #[test]
    fn blocks_joined_with_blank_line() {
        let out = render_document(&[para("a", Alignment::Left), para("b", Alignment::Left)]);
        assert!(out.contains(
            "</WrittenContentParagraphElement>\n\n          <WrittenContentParagraphElement"
        ));
    }

    #[test]
    fn justified_paragraph_uses_template_value() {
        let out = render_document(&[para("j", Alignment::Justify)]);
        assert!(out.contains("textAlign=\"justify\""));
    }

    #[test]
    fn bold_paragraph_sets_font_style_without_tags() {
        // Scenario E end-to-end: paragraph-level bold, no run-level tags.
        let p = Paragraph {
            alignment: Alignment::Left,
            runs: vec![
                Run {
                    text: "A".into(),
                    bold: true,
                    italic: false,
                },
                Run {
                    text: "B".into(),
                    bold: true,
                    italic: false,
                },
            ],
            raw_text: "AB".into(),
        };
        let out = render_document(&[p]);
        assert!(out.contains("fontStyle=\"bold\""));
        assert!(out.contains("            AB\n"));
        assert!(!out.contains("<b>"));
    }

    #[test]
    fn deterministic_output() {
        let input = vec![para("same", Alignment::Left)];
        assert_eq!(render_document(&input), render_document(&input));
    }

    #[test]
    fn rendered_body_is_escaped() {
        let out = render_document(&[para("salt & pepper", Alignment::Left)]);
        assert!(out.contains("salt &amp; pepper"));
        // Escaping applied once, to raw run text only.
        assert!(!out.contains("&amp;amp;"));
    }
}
