//! Load → segment → write.

use std::path::Path;

use crate::config::Config;
use crate::docx::read_paragraphs;
use crate::error::{Error, Result};
use crate::segment::segment;
use crate::types::Paragraph;
use crate::writer::{write_collection, WriteReport};

/// Progress notifications emitted while converting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress<'a> {
    /// The input document is about to be read.
    Reading {
        /// Document being read
        input: &'a Path,
    },
    /// An output file was written.
    Saved {
        /// Name of the file inside the output directory
        file_name: &'a str,
    },
}

/// Convert the configured document into Markdown files.
///
/// A missing input fails with [`Error::InputNotFound`] before anything is
/// created on disk.
pub fn convert<F>(config: &Config, mut on_progress: F) -> Result<WriteReport>
where
    F: FnMut(Progress<'_>),
{
    if !config.input_path.is_file() {
        return Err(Error::InputNotFound {
            path: config.input_path.clone(),
        });
    }

    on_progress(Progress::Reading {
        input: &config.input_path,
    });
    let paragraphs = read_paragraphs(&config.input_path)?;

    convert_paragraphs(&paragraphs, config, on_progress)
}

/// Segment already extracted paragraphs and write the result.
pub fn convert_paragraphs<F>(
    paragraphs: &[Paragraph],
    config: &Config,
    mut on_progress: F,
) -> Result<WriteReport>
where
    F: FnMut(Progress<'_>),
{
    let collection = segment(paragraphs, &config.author_name);
    write_collection(&collection, &config.author_name, &config.output_dir, |file_name| {
        on_progress(Progress::Saved { file_name });
    })
}
