//! Paragraph grouping: collapse blank-line-separated sections.
//!
//! Authors use two conventions in Word. Some press Enter once per paragraph
//! and rely on paragraph spacing; others press Enter twice, leaving empty
//! paragraphs as visual separators between sections of closely-spaced lines.
//! For the second convention the lines between separators belong together in
//! one rendered paragraph, joined by explicit `<br></br>` breaks.
//!
//! Detection first, grouping second: grouping only runs when at least one
//! interior empty paragraph has non-empty neighbors on both sides. Without
//! that gate a one-paragraph-per-line document would collapse into a single
//! giant block.

use crate::model::{Paragraph, Run};
use tracing::debug;

/// True when some interior empty paragraph separates two non-empty ones.
fn has_separating_empty_paragraphs(paragraphs: &[Paragraph]) -> bool {
    paragraphs.windows(3).any(|w| {
        w[1].is_empty() && !w[0].is_empty() && !w[2].is_empty()
    })
}

/// Merge runs of consecutive non-empty paragraphs into single paragraphs.
///
/// No-op (input returned unchanged) unless the separator pattern is
/// detected. When grouping runs: empty paragraphs are dropped, each group
/// takes the alignment of its first member, a [`Run::line_break`] is
/// inserted between members, and every run of a non-first member is
/// whitespace-trimmed so the break marker is not padded by stray spacing.
/// Group order matches the input order of each group's first member.
pub fn group_paragraphs(paragraphs: Vec<Paragraph>) -> Vec<Paragraph> {
    if !has_separating_empty_paragraphs(&paragraphs) {
        debug!("No separator pattern detected; grouping skipped");
        return paragraphs;
    }

    let mut grouped: Vec<Paragraph> = Vec::new();
    let mut iter = paragraphs.into_iter().peekable();

    while let Some(first) = iter.next() {
        if first.is_empty() {
            continue;
        }

        let mut runs = first.runs;
        let mut texts = vec![first.raw_text];

        while iter.peek().is_some_and(|p| !p.is_empty()) {
            let member = iter.next().expect("peeked");
            runs.push(Run::line_break());
            runs.extend(member.runs.into_iter().map(|run| Run {
                text: run.text.trim().to_string(),
                ..run
            }));
            texts.push(member.raw_text);
        }

        grouped.push(Paragraph {
            alignment: first.alignment,
            runs,
            raw_text: texts.join(" "),
        });
    }

    debug!("Grouped into {} paragraphs", grouped.len());
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Alignment;

    fn para(text: &str) -> Paragraph {
        para_aligned(text, Alignment::Left)
    }

    fn para_aligned(text: &str, alignment: Alignment) -> Paragraph {
        Paragraph {
            alignment,
            runs: if text.is_empty() {
                vec![]
            } else {
                vec![Run::plain(text)]
            },
            raw_text: text.into(),
        }
    }

    #[test]
    fn no_separator_pattern_is_a_no_op() {
        // One paragraph per line, no blank-line convention: untouched.
        let input = vec![para("one"), para("two"), para("three")];
        assert_eq!(group_paragraphs(input.clone()), input);
    }

    #[test]
    fn trailing_empties_alone_do_not_trigger_grouping() {
        let input = vec![para("one"), para("two"), para("")];
        assert_eq!(group_paragraphs(input.clone()), input);
    }

    #[test]
    fn consecutive_lines_merge_with_break_markers() {
        // Scenario B: two lines flanked by separated neighbors.
        let input = vec![
            para("Intro."),
            para(""),
            para("Line one."),
            para("Line two."),
            para(""),
            para("Outro."),
        ];
        let out = group_paragraphs(input);
        assert_eq!(out.len(), 3);

        let merged = &out[1];
        assert_eq!(merged.runs.len(), 3);
        assert!(merged.runs[1].is_line_break());
        assert_eq!(merged.runs[0].text, "Line one.");
        assert_eq!(merged.runs[2].text, "Line two.");
        assert_eq!(merged.raw_text, "Line one. Line two.");
        assert!(!merged.is_empty());
    }

    #[test]
    fn group_takes_alignment_of_first_member() {
        let input = vec![
            para("a"),
            para(""),
            para_aligned("b", Alignment::Center),
            para_aligned("c", Alignment::Right),
        ];
        let out = group_paragraphs(input);
        assert_eq!(out.len(), 2);
        assert_eq!(out[1].alignment, Alignment::Center);
    }

    #[test]
    fn later_member_runs_are_trimmed() {
        let mut second = para("  padded  ");
        second.runs = vec![Run::plain("  padded  ")];
        let input = vec![para("x"), para(""), para("first"), second, para(""), para("y")];
        let out = group_paragraphs(input);
        let merged = &out[1];
        assert_eq!(merged.runs[2].text, "padded");
    }

    #[test]
    fn separator_empties_are_dropped() {
        let input = vec![para("a"), para(""), para("b"), para(""), para("c")];
        let out = group_paragraphs(input);
        let texts: Vec<&str> = out.iter().map(|p| p.raw_text.as_str()).collect();
        assert_eq!(texts, vec!["a", "b", "c"]);
        assert!(out.iter().all(|p| !p.is_empty()));
    }

    #[test]
    fn output_order_matches_first_members() {
        let input = vec![
            para("a1"),
            para("a2"),
            para(""),
            para("b1"),
            para(""),
            para("c1"),
            para("c2"),
        ];
        let out = group_paragraphs(input);
        let texts: Vec<&str> = out.iter().map(|p| p.raw_text.as_str()).collect();
        assert_eq!(texts, vec!["a1 a2", "b1", "c1 c2"]);
    }
}
