//! Paragraph extraction from Word `.docx` documents.
//!
//! A `.docx` file is a ZIP archive; the body lives in `word/document.xml`.
//! Only top-level body paragraphs are returned, in document order. Paragraphs
//! inside tables and text boxes are skipped.

use std::io::Read;
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use zip::ZipArchive;

use crate::error::{Error, Result};
use crate::types::Paragraph;

/// Archive entry holding the main document body.
pub const DOCUMENT_PART: &str = "word/document.xml";

/// Read every body paragraph of a `.docx` file.
pub fn read_paragraphs(path: &Path) -> Result<Vec<Paragraph>> {
    let file = fs_err::File::open(path).map_err(|e| Error::io(e, path.to_path_buf()))?;

    let mut archive = ZipArchive::new(file)
        .map_err(|e| Error::docx(format!("not a ZIP archive: {e}"), path.to_path_buf()))?;

    let mut entry = archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| Error::docx(format!("missing {DOCUMENT_PART}: {e}"), path.to_path_buf()))?;

    let mut xml = Vec::new();
    entry
        .read_to_end(&mut xml)
        .map_err(|e| Error::io(e, path.to_path_buf()))?;

    let paragraphs = parse_document_xml(&xml)
        .map_err(|e| match e {
            Error::Docx { message, .. } => Error::docx(message, path.to_path_buf()),
            other => other,
        })?;

    tracing::info!("Read {} paragraphs from {}", paragraphs.len(), path.display());
    Ok(paragraphs)
}

/// Tracks where the reader is inside `document.xml`.
#[derive(Debug, Default)]
struct BodyWalker {
    paragraphs: Vec<Paragraph>,
    current: String,
    /// Nesting depth of `w:p` elements
    paragraph_depth: usize,
    /// Nesting depth of `w:tbl` elements
    table_depth: usize,
    /// Nesting depth of `w:txbxContent` elements
    textbox_depth: usize,
    /// Nesting depth of `w:r` runs; tab stops in `w:pPr` are not text
    run_depth: usize,
    in_text: bool,
}

impl BodyWalker {
    /// True while inside a top-level body paragraph.
    const fn collecting(&self) -> bool {
        self.paragraph_depth == 1 && self.table_depth == 0 && self.textbox_depth == 0
    }

    fn start(&mut self, e: &BytesStart<'_>) {
        match e.local_name().as_ref() {
            b"p" => {
                self.paragraph_depth += 1;
                if self.paragraph_depth == 1 {
                    self.current.clear();
                }
            }
            b"tbl" => self.table_depth += 1,
            b"txbxContent" => self.textbox_depth += 1,
            b"r" => self.run_depth += 1,
            b"t" if self.collecting() => self.in_text = true,
            _ => self.inline(e),
        }
    }

    fn end(&mut self, name: &[u8]) {
        match name {
            b"p" => {
                if self.paragraph_depth == 1 && self.table_depth == 0 {
                    self.paragraphs
                        .push(Paragraph::new(std::mem::take(&mut self.current)));
                }
                self.paragraph_depth = self.paragraph_depth.saturating_sub(1);
            }
            b"tbl" => self.table_depth = self.table_depth.saturating_sub(1),
            b"txbxContent" => self.textbox_depth = self.textbox_depth.saturating_sub(1),
            b"r" => self.run_depth = self.run_depth.saturating_sub(1),
            b"t" => self.in_text = false,
            _ => {}
        }
    }

    /// Self-closing elements: empty paragraphs and inline breaks.
    fn empty(&mut self, e: &BytesStart<'_>) {
        match e.local_name().as_ref() {
            b"p" if self.paragraph_depth == 0 && self.table_depth == 0 => {
                self.paragraphs.push(Paragraph::default());
            }
            _ => self.inline(e),
        }
    }

    /// Run-level elements that stand for characters.
    fn inline(&mut self, e: &BytesStart<'_>) {
        if !self.collecting() || self.run_depth == 0 {
            return;
        }
        match e.local_name().as_ref() {
            b"tab" | b"ptab" => self.current.push('\t'),
            // Page and column breaks carry no text
            b"br" if is_line_break(e) => self.current.push('\n'),
            b"cr" => self.current.push('\n'),
            b"noBreakHyphen" => self.current.push('-'),
            _ => {}
        }
    }

    fn text(&mut self, text: &str) {
        if self.in_text && self.collecting() {
            self.current.push_str(text);
        }
    }
}

/// True for a `w:br` without `w:type`, or with `w:type="textWrapping"`.
fn is_line_break(e: &BytesStart<'_>) -> bool {
    e.attributes()
        .filter_map(std::result::Result::ok)
        .find(|attr| attr.key.local_name().as_ref() == b"type")
        .is_none_or(|attr| attr.value.as_ref() == b"textWrapping")
}

fn docx_error(message: String) -> Error {
    Error::Docx { file: None, message }
}

/// Parse the XML of `word/document.xml` into paragraphs.
pub fn parse_document_xml(xml: &[u8]) -> Result<Vec<Paragraph>> {
    let mut reader = Reader::from_reader(xml);
    reader.trim_text(false);

    let mut walker = BodyWalker::default();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => walker.start(e),
            Ok(Event::Empty(ref e)) => walker.empty(e),
            Ok(Event::End(ref e)) => walker.end(e.local_name().as_ref()),
            Ok(Event::Text(ref e)) => {
                let text = e.unescape().map_err(|err| {
                    docx_error(format!("bad text at byte {}: {err}", reader.buffer_position()))
                })?;
                walker.text(&text);
            }
            Ok(Event::CData(ref e)) => {
                walker.text(&String::from_utf8_lossy(e));
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(err) => {
                return Err(docx_error(format!(
                    "malformed XML at byte {}: {err}",
                    reader.buffer_position()
                )));
            }
        }
        buf.clear();
    }

    Ok(walker.paragraphs)
}
