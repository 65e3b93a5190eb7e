//! Writing rendered records to the output directory.

use std::path::{Path, PathBuf};

use crate::constants::output::FRONT_MATTER_FILE;
use crate::error::{Error, Result};
use crate::markdown::{poem_filename, render_front_matter, render_poem};
use crate::types::Segmented;

/// Files produced by one [`write_collection`] call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WriteReport {
    /// Directory the files were written into
    pub output_dir: PathBuf,
    /// Name of the front matter file, if one was written
    pub front_matter: Option<String>,
    /// Poem file names in write order
    pub poems: Vec<String>,
}

impl WriteReport {
    /// Number of poem files written.
    #[must_use]
    pub fn poem_count(&self) -> usize {
        self.poems.len()
    }

    /// All written file names, front matter first.
    pub fn files(&self) -> impl Iterator<Item = &str> {
        self.front_matter
            .iter()
            .chain(self.poems.iter())
            .map(String::as_str)
    }
}

/// Write the front matter and every non-empty poem into `output_dir`.
///
/// The directory is created if needed and existing files are overwritten.
/// `on_saved` is called with each file name right after it is written. The
/// first failed write aborts the run; files already written stay on disk.
pub fn write_collection<F>(
    collection: &Segmented,
    author: &str,
    output_dir: &Path,
    mut on_saved: F,
) -> Result<WriteReport>
where
    F: FnMut(&str),
{
    fs_err::create_dir_all(output_dir).map_err(|e| Error::io(e, output_dir.to_path_buf()))?;

    let mut report = WriteReport {
        output_dir: output_dir.to_path_buf(),
        ..WriteReport::default()
    };

    if !collection.front_matter.is_empty() {
        let name = FRONT_MATTER_FILE.to_string();
        write_file(output_dir, &name, &render_front_matter(&collection.front_matter))?;
        on_saved(&name);
        report.front_matter = Some(name);
    }

    for poem in &collection.poems {
        if !poem.has_content() {
            tracing::warn!(number = %poem.number, "skipping poem without content");
            continue;
        }

        let name = poem_filename(poem);
        write_file(output_dir, &name, &render_poem(poem, author))?;
        on_saved(&name);
        report.poems.push(name);
    }

    tracing::info!(
        "Wrote {} poems to {}",
        report.poem_count(),
        output_dir.display()
    );

    Ok(report)
}

fn write_file(dir: &Path, name: &str, contents: &str) -> Result<()> {
    let path = dir.join(name);
    fs_err::write(&path, contents).map_err(|e| Error::io(e, path.clone()))?;
    tracing::debug!("Saved {}", path.display());
    Ok(())
}
