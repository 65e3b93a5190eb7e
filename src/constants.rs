//! Application constants.
//!
//! Centralizes fixed names and limits used by the converter.

/// Default configuration values.
pub mod defaults {
    /// Input document read when nothing else is configured.
    pub const INPUT_FILE: &str = "Reality-a-colorful-illusion.docx";

    /// Directory the Markdown files are written into.
    pub const OUTPUT_DIR: &str = "markdown_poems";

    /// Author display name, also matched as the signature line.
    pub const AUTHOR_NAME: &str = "Urangani T.M";
}

/// Environment variables read by `Config::load`.
pub mod env {
    /// Overrides the input document path.
    pub const INPUT: &str = "POEMS_INPUT";

    /// Overrides the output directory.
    pub const OUTPUT_DIR: &str = "POEMS_OUTPUT_DIR";

    /// Overrides the author name.
    pub const AUTHOR: &str = "POEMS_AUTHOR";
}

/// Output naming and formatting constants.
pub mod output {
    /// File holding everything before the first poem.
    pub const FRONT_MATTER_FILE: &str = "00_Front_Matter.md";

    /// Heading written at the top of the front matter file.
    pub const FRONT_MATTER_HEADING: &str = "Front Matter";

    /// Minimum width of the zero-padded poem number in file names.
    pub const NUMBER_WIDTH: usize = 3;

    /// Maximum number of characters kept from a sanitized title.
    pub const MAX_TITLE_CHARS: usize = 50;

    /// Placeholder used when a poem has no title.
    pub const UNTITLED: &str = "Untitled";

    /// Characters stripped from titles before they become file names.
    pub const FORBIDDEN_FILENAME_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

    /// Markdown hard line break suffix.
    pub const HARD_BREAK: &str = "  ";
}
