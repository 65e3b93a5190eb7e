//! `poem-splitter` - split a Word poetry collection into Markdown files.
//!
//! The pipeline reads body paragraphs from a `.docx` file ([`docx`]), splits
//! them at numeric poem markers ([`segment`]), renders each record as Markdown
//! ([`markdown`]) and writes one file per poem ([`writer`]). [`pipeline`] ties
//! the stages together for a given [`config::Config`].

// Re-export public modules for use in integration tests and as a library
pub mod config;
pub mod constants;
pub mod docx;
pub mod error;
pub mod markdown;
pub mod pipeline;
pub mod segment;
pub mod types;
pub mod writer;
