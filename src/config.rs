//! Application configuration.
//!
//! Defaults come from [`crate::constants::defaults`]; environment variables
//! (optionally from a `.env` file) override them, and [`Overrides`] from the
//! command line override both.

use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

use crate::constants::{defaults, env as env_vars};
use crate::error::{Error, Result};

/// Configuration for a single conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Word document holding the collection
    pub input_path: PathBuf,
    /// Directory receiving the Markdown files
    pub output_dir: PathBuf,
    /// Author display name and signature line
    pub author_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(defaults::INPUT_FILE),
            output_dir: PathBuf::from(defaults::OUTPUT_DIR),
            author_name: defaults::AUTHOR_NAME.to_string(),
        }
    }
}

/// Values given on the command line; each one replaces the loaded value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Overrides {
    /// Word document to read
    pub input_path: Option<PathBuf>,
    /// Directory to write into
    pub output_dir: Option<PathBuf>,
    /// Author display name
    pub author_name: Option<String>,
}

impl Config {
    /// Load configuration from the environment, then apply command-line overrides.
    ///
    /// Validation runs once, after every layer is applied.
    pub fn load(overrides: Overrides) -> Result<Self> {
        Self::from_env().with_overrides(overrides)
    }

    /// Defaults overlaid with environment variables (and a `.env` file).
    #[must_use]
    pub fn from_env() -> Self {
        // Try to load .env file if present
        dotenv().ok();

        let mut config = Self::default();

        if let Ok(path) = env::var(env_vars::INPUT) {
            config.input_path = expand_path(&path);
        }

        if let Ok(path) = env::var(env_vars::OUTPUT_DIR) {
            config.output_dir = expand_path(&path);
        }

        if let Ok(author) = env::var(env_vars::AUTHOR) {
            config.author_name = author;
        }

        config
    }

    /// Apply overrides on top of this configuration and validate the result.
    pub fn with_overrides(mut self, overrides: Overrides) -> Result<Self> {
        if let Some(input) = overrides.input_path {
            self.input_path = input;
        }
        if let Some(output) = overrides.output_dir {
            self.output_dir = output;
        }
        if let Some(author) = overrides.author_name {
            self.author_name = author;
        }
        self.validated()
    }

    /// Trim the author name and reject configurations that cannot match anything.
    fn validated(mut self) -> Result<Self> {
        self.author_name = self.author_name.trim().to_string();
        if self.author_name.is_empty() {
            return Err(Error::config(
                "Author name is empty",
                "Set POEMS_AUTHOR or pass --author NAME",
            ));
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err(Error::config(
                "Output directory is empty",
                "Set POEMS_OUTPUT_DIR or pass an output directory",
            ));
        }
        Ok(self)
    }
}

fn expand_path(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).to_string())
}
