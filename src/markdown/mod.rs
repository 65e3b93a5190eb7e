//! Markdown rendering of segmented records.
//!
//! Everything here is pure string building; [`crate::writer`] puts the
//! results on disk.

use crate::constants::output::{
    FORBIDDEN_FILENAME_CHARS, FRONT_MATTER_HEADING, HARD_BREAK, MAX_TITLE_CHARS, NUMBER_WIDTH,
    UNTITLED,
};
use crate::types::{FrontMatter, Poem};

/// Turn a poem title into a filesystem-safe file name fragment.
///
/// Strips `< > : " / \ | ? *`, trims, replaces spaces with underscores and
/// keeps at most 50 characters. A missing title becomes `Untitled`.
pub fn sanitize_title(title: Option<&str>) -> String {
    let Some(title) = title else {
        return UNTITLED.to_string();
    };

    let stripped: String = title
        .chars()
        .filter(|c| !FORBIDDEN_FILENAME_CHARS.contains(c))
        .collect();

    stripped
        .trim()
        .replace(' ', "_")
        .chars()
        .take(MAX_TITLE_CHARS)
        .collect()
}

/// Left-pad a marker number with zeros to at least three digits.
///
/// Longer numbers are kept whole.
pub fn pad_number(number: &str) -> String {
    format!("{number:0>width$}", width = NUMBER_WIDTH)
}

/// File name for a poem, e.g. `007_My_PoemTitle.md`.
pub fn poem_filename(poem: &Poem) -> String {
    format!(
        "{}_{}.md",
        pad_number(&poem.number),
        sanitize_title(poem.title.as_deref())
    )
}

/// Heading shown at the top of a poem.
pub fn display_title(poem: &Poem) -> String {
    poem.title
        .clone()
        .unwrap_or_else(|| format!("Poem {}", poem.number))
}

/// Render the front matter file.
pub fn render_front_matter(front_matter: &FrontMatter) -> String {
    let mut out = format!("# {FRONT_MATTER_HEADING}\n\n");
    for line in &front_matter.lines {
        push_hard_line(&mut out, line);
    }
    out
}

/// Render a poem with its metadata header.
pub fn render_poem(poem: &Poem, author: &str) -> String {
    let mut out = String::new();

    out.push_str("---\n");
    out.push_str(&format!(
        "title: {}\n",
        yaml_quote(poem.title.as_deref().unwrap_or(UNTITLED))
    ));
    out.push_str(&format!("author: {}\n", yaml_quote(author)));
    out.push_str(&format!("id: {}\n", poem.number));
    out.push_str("---\n\n");

    out.push_str(&format!("# {}\n\n", display_title(poem)));

    for line in &poem.lines {
        if line.trim().is_empty() {
            // Stanza break
            out.push('\n');
        } else {
            push_hard_line(&mut out, line);
        }
    }

    if poem.has_author_signature {
        out.push_str(&format!("\n\n*{author}*"));
    }

    out
}

fn push_hard_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push_str(HARD_BREAK);
    out.push('\n');
}

/// Double-quote a YAML scalar, escaping backslashes and quotes.
fn yaml_quote(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{escaped}\"")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    fn poem(number: &str, title: Option<&str>, lines: &[&str], signed: bool) -> Poem {
        Poem {
            number: number.to_string(),
            title: title.map(ToString::to_string),
            lines: lines.iter().map(ToString::to_string).collect(),
            has_author_signature: signed,
        }
    }

    #[test]
    fn test_sanitize_title() {
        assert_eq!(sanitize_title(Some("My: Poem/Title?")), "My_PoemTitle");
        assert_eq!(sanitize_title(Some("  <Dawn> | Dusk  ")), "Dawn__Dusk");
        assert_eq!(sanitize_title(Some("a*b\\c\"d")), "abcd");
        assert_eq!(sanitize_title(None), "Untitled");
    }

    #[test]
    fn test_sanitize_truncates_to_fifty_chars() {
        let long = "word ".repeat(20);
        let clean = sanitize_title(Some(&long));
        assert_eq!(clean.chars().count(), 50);
        assert!(clean.starts_with("word_word_"));

        let accented = "é".repeat(60);
        assert_eq!(sanitize_title(Some(&accented)), "é".repeat(50));
    }

    #[test]
    fn test_pad_number() {
        assert_eq!(pad_number("7"), "007");
        assert_eq!(pad_number("42"), "042");
        assert_eq!(pad_number("123"), "123");
        assert_eq!(pad_number("1234"), "1234");
        assert_eq!(pad_number("0012"), "0012");
    }

    #[test]
    fn test_poem_filename() {
        let p = poem("7", Some("My: Poem/Title?"), &["x"], false);
        assert_eq!(poem_filename(&p), "007_My_PoemTitle.md");

        let p = poem("15", None, &["x"], false);
        assert_eq!(poem_filename(&p), "015_Untitled.md");
    }

    #[test]
    fn test_render_front_matter() {
        let fm = FrontMatter {
            lines: vec!["Intro text".to_string(), String::new()],
        };
        assert_eq!(render_front_matter(&fm), "# Front Matter\n\nIntro text  \n  \n");
    }

    #[test]
    fn test_render_signed_poem() {
        let p = poem("1", Some("First"), &["First", "  hello world", ""], true);
        let expected = "---\n\
            title: \"First\"\n\
            author: \"Urangani T.M\"\n\
            id: 1\n\
            ---\n\
            \n\
            # First\n\
            \n\
            First  \n  hello world  \n\n\
            \n\n*Urangani T.M*";
        assert_eq!(render_poem(&p, "Urangani T.M"), expected);
    }

    #[test]
    fn test_render_untitled_poem() {
        let p = poem("9", None, &[], false);
        let rendered = render_poem(&p, "A");
        assert!(rendered.contains("title: \"Untitled\"\n"));
        assert!(rendered.contains("id: 9\n"));
        assert!(rendered.ends_with("# Poem 9\n\n"));
    }

    #[test]
    fn test_render_keeps_raw_id() {
        let p = poem("012", Some("T"), &["T"], false);
        assert!(render_poem(&p, "A").contains("id: 012\n"));
    }

    #[test]
    fn test_title_quotes_are_escaped() {
        let p = poem("3", Some("The \"Real\" Thing"), &["x"], false);
        assert!(render_poem(&p, "A").contains("title: \"The \\\"Real\\\" Thing\"\n"));
    }
}
