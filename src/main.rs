//! `poem-splitter` - split a Word poetry collection into Markdown files.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use poem_splitter::config::{Config, Overrides};
use poem_splitter::error::Error;
use poem_splitter::pipeline::{self, Progress};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "poem-splitter")]
#[command(about = "Split a Word poetry collection into one Markdown file per poem")]
#[command(version)]
struct Cli {
    /// Word document to read (default: POEMS_INPUT or the built-in file name)
    input: Option<PathBuf>,

    /// Directory for the Markdown files (default: POEMS_OUTPUT_DIR or markdown_poems)
    output_dir: Option<PathBuf>,

    /// Author name, also matched as the signature line (default: POEMS_AUTHOR)
    #[arg(long)]
    author: Option<String>,
}

impl From<Cli> for Overrides {
    fn from(cli: Cli) -> Self {
        Self {
            input_path: cli.input,
            output_dir: cli.output_dir,
            author_name: cli.author,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr so stdout only carries the progress report
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match Config::load(cli.into()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {e}");
            return ExitCode::FAILURE;
        }
    };

    let result = pipeline::convert(&config, |event| match event {
        Progress::Reading { input } => println!("📖 Reading '{}'...", input.display()),
        Progress::Saved { file_name } => println!("✓ Saved: {file_name}"),
    });

    match result {
        Ok(report) => {
            println!(
                "\n🎉 Finished! Processed {} poems into '{}/'",
                report.poem_count(),
                config.output_dir.display()
            );
            ExitCode::SUCCESS
        }
        Err(Error::InputNotFound { path }) => {
            println!("❌ Error: Could not find '{}'", path.display());
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("❌ Error: {e}");
            ExitCode::FAILURE
        }
    }
}
