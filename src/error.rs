//! Application error types.
//!
//! Provides unified error handling with the path or hint needed to act on it.

use std::path::PathBuf;
use thiserror::Error;

/// Application result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types
#[derive(Debug, Error)]
pub enum Error {
    /// IO error with path context
    #[error("IO error at {path:?}: {source}")]
    Io {
        /// The underlying IO error.
        source: std::io::Error,
        /// File path where the error occurred, if known.
        path: Option<PathBuf>,
    },

    /// The input document does not exist
    #[error("Could not find '{}'", path.display())]
    InputNotFound {
        /// Path that was looked up.
        path: PathBuf,
    },

    /// The input could not be read as a Word document
    #[error("Invalid document {file:?}: {message}")]
    Docx {
        /// Document that failed to parse, if known.
        file: Option<PathBuf>,
        /// Description of the failure.
        message: String,
    },

    /// Configuration error with guidance
    #[error("Configuration error: {message}. {hint}")]
    Config {
        /// Description of the configuration problem.
        message: String,
        /// Actionable guidance for fixing the issue.
        hint: &'static str,
    },
}

impl Error {
    /// Create an IO error with path context
    pub fn io(source: std::io::Error, path: impl Into<Option<PathBuf>>) -> Self {
        Self::Io { source, path: path.into() }
    }

    /// Create a document error with file context
    pub fn docx(message: impl Into<String>, file: impl Into<Option<PathBuf>>) -> Self {
        Self::Docx { file: file.into(), message: message.into() }
    }

    /// Create a config error with actionable hint
    pub fn config(message: impl Into<String>, hint: &'static str) -> Self {
        Self::Config { message: message.into(), hint }
    }
}
