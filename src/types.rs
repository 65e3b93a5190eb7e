//! Core records produced by segmentation.
//!
//! A document is read as a flat list of [`Paragraph`]s and segmented into a
//! [`FrontMatter`] block plus a list of [`Poem`]s, collected in [`Segmented`].

use serde::Serialize;

/// A single paragraph of the input document.
///
/// The raw text keeps leading and trailing whitespace so indentation survives
/// into the Markdown output; matching is done on the trimmed form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Paragraph(String);

impl Paragraph {
    /// Create a paragraph from its raw text.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Raw text, whitespace preserved.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.0
    }

    /// Text with surrounding whitespace removed.
    #[must_use]
    pub fn trimmed(&self) -> &str {
        self.0.trim()
    }

    /// True when the paragraph holds only whitespace.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.trimmed().is_empty()
    }
}

impl From<&str> for Paragraph {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Paragraph {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Introductory content found before the first poem marker.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FrontMatter {
    /// Raw paragraph text in document order
    pub lines: Vec<String>,
}

impl FrontMatter {
    /// True when no front matter was collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// A poem delimited by a numeric marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Poem {
    /// Digits of the marker exactly as written, e.g. `"7"` or `"012"`
    pub number: String,
    /// First non-blank line after the marker, trimmed
    pub title: Option<String>,
    /// Raw body lines, including blank stanza breaks and the title line
    pub lines: Vec<String>,
    /// Whether a line matching the author name closed the poem
    pub has_author_signature: bool,
}

impl Poem {
    /// Start an empty poem for the given marker number.
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            title: None,
            lines: Vec::new(),
            has_author_signature: false,
        }
    }

    /// True when at least one body line has visible text.
    ///
    /// Poems without content are never written.
    #[must_use]
    pub fn has_content(&self) -> bool {
        self.lines.iter().any(|line| !line.trim().is_empty())
    }
}

/// Result of segmenting a document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Segmented {
    /// Content before the first marker
    pub front_matter: FrontMatter,
    /// Every poem in marker order, including empty ones
    pub poems: Vec<Poem>,
}

impl Segmented {
    /// Poems that will produce an output file.
    pub fn retained_poems(&self) -> impl Iterator<Item = &Poem> {
        self.poems.iter().filter(|poem| poem.has_content())
    }
}
