//! Debug tool to inspect how a `.docx` file is read and segmented.
//!
//! Usage:
//!   `cargo run --bin dump_paragraphs -- <file.docx>`
//!   `cargo run --bin dump_paragraphs -- <file.docx> --json [--author NAME]`
//!   `cargo run --bin dump_paragraphs -- --help`
//!
//! The plain listing shows every extracted paragraph with its index, marking
//! poem markers and author signature lines. `--json` prints the segmented
//! front matter and poems instead.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use poem_splitter::config::{Config, Overrides};
use poem_splitter::docx::read_paragraphs;
use poem_splitter::markdown::poem_filename;
use poem_splitter::segment::{marker_number, segment};

#[derive(Debug, Parser)]
#[command(name = "dump_paragraphs")]
#[command(about = "Show how a .docx file is read and split into poems")]
struct Args {
    /// Word document to inspect
    file: PathBuf,

    /// Print the segmented records as JSON
    #[arg(long)]
    json: bool,

    /// Author name used to spot signature lines (default: POEMS_AUTHOR)
    #[arg(long)]
    author: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let path = args.file;

    // Same layering and trimming as the converter itself
    let config = Config::from_env().with_overrides(Overrides {
        author_name: args.author,
        ..Overrides::default()
    })?;
    let author = config.author_name.as_str();

    let paragraphs = read_paragraphs(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    if args.json {
        let segmented = segment(&paragraphs, author);
        let json = serde_json::to_string_pretty(&segmented).context("Failed to encode JSON")?;
        println!("{json}");
        return Ok(());
    }

    println!("📄 {} ({} paragraphs)", path.display(), paragraphs.len());
    for (i, para) in paragraphs.iter().enumerate() {
        let tag = if let Some(number) = marker_number(para.trimmed()) {
            format!("[marker {number}]")
        } else if para.trimmed() == author {
            "[signature]".to_string()
        } else if para.is_blank() {
            "[blank]".to_string()
        } else {
            String::new()
        };
        println!("{i:>5} {tag:<14} {:?}", para.text());
    }

    let segmented = segment(&paragraphs, author);
    println!();
    println!("📁 Front matter: {} lines", segmented.front_matter.lines.len());
    println!(
        "📝 Poems: {} found, {} with content",
        segmented.poems.len(),
        segmented.retained_poems().count()
    );
    for poem in segmented.retained_poems() {
        println!("   └─ {}", poem_filename(poem));
    }

    Ok(())
}
