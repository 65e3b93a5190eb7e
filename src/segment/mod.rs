//! Splitting a paragraph sequence into front matter and poems.
//!
//! A paragraph whose trimmed text is only a number (optionally followed by a
//! dot) starts a new poem. Everything before the first such marker is front
//! matter. Segmentation is a fold of [`SegmentState::step`] over the input and
//! never touches the filesystem.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::{FrontMatter, Paragraph, Poem, Segmented};

/// Regex matching a bare poem number like `12`, `7.` or `  003  `.
#[allow(clippy::expect_used)]
static RE_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\d+)\.?\s*$").expect("valid regex: RE_MARKER")
});

/// Check whether a line is a poem marker.
pub fn is_poem_marker(text: &str) -> bool {
    RE_MARKER.is_match(text)
}

/// Extract the digits of a poem marker, or `None` if `text` is not a marker.
///
/// The digits are returned as written so arbitrarily long numbers survive.
pub fn marker_number(text: &str) -> Option<&str> {
    RE_MARKER
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Where the scanner currently is.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    /// No marker seen yet.
    #[default]
    FrontMatter,
    /// Accumulating the body of a poem.
    InPoem(Poem),
}

/// Segmentation state threaded through the fold.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SegmentState {
    front_matter: FrontMatter,
    mode: Mode,
}

impl SegmentState {
    /// Consume one paragraph, returning the next state and the poem it
    /// finalized, if any.
    #[must_use]
    pub fn step(mut self, paragraph: &Paragraph, author: &str) -> (Self, Option<Poem>) {
        let text = paragraph.trimmed();

        if let Some(number) = marker_number(text) {
            let next = Mode::InPoem(Poem::new(number));
            let finished = match std::mem::replace(&mut self.mode, next) {
                Mode::InPoem(poem) => Some(poem),
                Mode::FrontMatter => None,
            };
            return (self, finished);
        }

        match &mut self.mode {
            Mode::FrontMatter => {
                // Leading blank padding is dropped; blanks inside are kept
                if !text.is_empty() || !self.front_matter.is_empty() {
                    self.front_matter.lines.push(paragraph.text().to_string());
                }
            }
            Mode::InPoem(poem) => {
                if text == author {
                    poem.has_author_signature = true;
                } else {
                    if poem.title.is_none() && !text.is_empty() {
                        poem.title = Some(text.to_string());
                    }
                    poem.lines.push(paragraph.text().to_string());
                }
            }
        }

        (self, None)
    }

    /// End of input: return the front matter and the poem still open, if any.
    #[must_use]
    pub fn finish(self) -> (FrontMatter, Option<Poem>) {
        let open = match self.mode {
            Mode::InPoem(poem) => Some(poem),
            Mode::FrontMatter => None,
        };
        (self.front_matter, open)
    }
}

/// Segment a whole document.
///
/// Poems are returned in marker order, empty ones included; see
/// [`Segmented::retained_poems`] for the ones that get written.
pub fn segment(paragraphs: &[Paragraph], author: &str) -> Segmented {
    let (state, mut poems) = paragraphs.iter().fold(
        (SegmentState::default(), Vec::new()),
        |(state, mut poems), paragraph| {
            let (next, finished) = state.step(paragraph, author);
            if let Some(poem) = finished {
                tracing::debug!(number = %poem.number, title = ?poem.title, "finalized poem");
                poems.push(poem);
            }
            (next, poems)
        },
    );

    let (front_matter, last) = state.finish();
    poems.extend(last);

    tracing::debug!(
        front_matter_lines = front_matter.lines.len(),
        poems = poems.len(),
        "segmented document"
    );

    Segmented { front_matter, poems }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    const AUTHOR: &str = "Urangani T.M";

    fn paragraphs(lines: &[&str]) -> Vec<Paragraph> {
        lines.iter().map(|l| Paragraph::from(*l)).collect()
    }

    #[test]
    fn test_marker_recognition() {
        for text in ["1", "12.", "  123  ", "007", "\t42.\t", "99999999999999999999999999"] {
            assert!(is_poem_marker(text), "{text:?} should be a marker");
        }
        for text in ["", "1a", "a1", "1.2", "1..", "-1", "#1", "1)", "One", ". 1", "1 2"] {
            assert!(!is_poem_marker(text), "{text:?} should not be a marker");
        }
    }

    #[test]
    fn test_marker_number_extraction() {
        assert_eq!(marker_number("12."), Some("12"));
        assert_eq!(marker_number("  003 "), Some("003"));
        assert_eq!(
            marker_number("123456789012345678901234567890"),
            Some("123456789012345678901234567890")
        );
        assert_eq!(marker_number("12 Roses"), None);
    }

    #[test]
    fn test_step_marker_finalizes_previous_poem() {
        let state = SegmentState::default();
        let (state, done) = state.step(&Paragraph::from("1"), AUTHOR);
        assert!(done.is_none());
        let (state, _) = state.step(&Paragraph::from("Rain"), AUTHOR);
        let (state, done) = state.step(&Paragraph::from("2."), AUTHOR);

        let done = done.unwrap();
        assert_eq!(done.number, "1");
        assert_eq!(done.title.as_deref(), Some("Rain"));
        match &state.mode {
            Mode::InPoem(poem) => {
                assert_eq!(poem.number, "2");
                assert!(poem.lines.is_empty());
                assert!(poem.title.is_none());
                assert!(!poem.has_author_signature);
            }
            Mode::FrontMatter => panic!("Expected to be inside a poem"),
        }
    }

    #[test]
    fn test_front_matter_skips_leading_blanks_only() {
        let result = segment(
            &paragraphs(&["", "  ", "Title Page", "", "  Dedication", "1", "Poem"]),
            AUTHOR,
        );
        assert_eq!(
            result.front_matter.lines,
            vec!["Title Page", "", "  Dedication"]
        );
    }

    #[test]
    fn test_title_extraction() {
        let result = segment(
            &paragraphs(&["1", "", "  ", "Sunset Over the Bay", "line two"]),
            AUTHOR,
        );
        let poem = &result.poems[0];
        assert_eq!(poem.title.as_deref(), Some("Sunset Over the Bay"));
        assert_eq!(poem.lines, vec!["", "  ", "Sunset Over the Bay", "line two"]);
    }

    #[test]
    fn test_title_is_trimmed_but_body_is_raw() {
        let result = segment(&paragraphs(&["4", "   Indented Title  ", "  body"]), AUTHOR);
        let poem = &result.poems[0];
        assert_eq!(poem.title.as_deref(), Some("Indented Title"));
        assert_eq!(poem.lines, vec!["   Indented Title  ", "  body"]);
    }

    #[test]
    fn test_author_signature_is_flagged_not_kept() {
        let result = segment(
            &paragraphs(&["1", "Song", "la la", "  Urangani T.M  "]),
            AUTHOR,
        );
        let poem = &result.poems[0];
        assert!(poem.has_author_signature);
        assert_eq!(poem.lines, vec!["Song", "la la"]);
    }

    #[test]
    fn test_signature_never_becomes_title() {
        let result = segment(&paragraphs(&["1", "Urangani T.M", "", "late line"]), AUTHOR);
        let poem = &result.poems[0];
        assert!(poem.has_author_signature);
        assert_eq!(poem.title.as_deref(), Some("late line"));

        let result = segment(&paragraphs(&["1", "", "Urangani T.M"]), AUTHOR);
        assert!(result.poems[0].title.is_none());
    }

    #[test]
    fn test_author_in_front_matter_is_ordinary_text() {
        let result = segment(&paragraphs(&["Urangani T.M", "1", "x"]), AUTHOR);
        assert_eq!(result.front_matter.lines, vec!["Urangani T.M"]);
    }

    #[test]
    fn test_consecutive_markers_yield_empty_poem() {
        let result = segment(&paragraphs(&["1", "2", "Only", "3", "", "  "]), AUTHOR);
        let numbers: Vec<_> = result.poems.iter().map(|p| p.number.as_str()).collect();
        assert_eq!(numbers, vec!["1", "2", "3"]);

        let retained: Vec<_> = result.retained_poems().map(|p| p.number.as_str()).collect();
        assert_eq!(retained, vec!["2"]);
    }

    #[test]
    fn test_no_markers_everything_is_front_matter() {
        let result = segment(&paragraphs(&["", "Preface", "", "More"]), AUTHOR);
        assert!(result.poems.is_empty());
        assert_eq!(result.front_matter.lines, vec!["Preface", "", "More"]);

        let result = segment(&paragraphs(&["", "   "]), AUTHOR);
        assert!(result.front_matter.is_empty());
        assert!(result.poems.is_empty());
    }

    #[test]
    fn test_end_to_end_records() {
        let result = segment(
            &paragraphs(&[
                "Intro text", "", "1", "First", "hello world", "", "Urangani T.M", "2", "Second",
                "goodbye",
            ]),
            AUTHOR,
        );

        assert_eq!(result.front_matter.lines, vec!["Intro text", ""]);
        assert_eq!(result.poems.len(), 2);

        let first = &result.poems[0];
        assert_eq!(first.number, "1");
        assert_eq!(first.title.as_deref(), Some("First"));
        assert_eq!(first.lines, vec!["First", "hello world", ""]);
        assert!(first.has_author_signature);

        let second = &result.poems[1];
        assert_eq!(second.number, "2");
        assert_eq!(second.title.as_deref(), Some("Second"));
        assert_eq!(second.lines, vec!["Second", "goodbye"]);
        assert!(!second.has_author_signature);
    }
}
