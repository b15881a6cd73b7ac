//! Writer factory.
//!
//! Writers are looked up by name, the way documents are handed to an output
//! format chosen at run time. Only the HTML writer is available.
use std::path::Path;
use std::str::FromStr;

use crate::common::{Error, Result};
use crate::document::Document;
use crate::html::HtmlWriter;

/// Output formats that can be requested by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriterKind {
    Html,
}

impl WriterKind {
    /// Canonical name of the format.
    pub fn name(&self) -> &'static str {
        match self {
            WriterKind::Html => "HTML",
        }
    }
}

impl FromStr for WriterKind {
    type Err = Error;

    /// Parse a writer name. Matching is case-insensitive.
    fn from_str(name: &str) -> Result<Self> {
        if name.trim().eq_ignore_ascii_case("html") {
            Ok(WriterKind::Html)
        } else {
            Err(Error::UnsupportedWriter(name.to_string()))
        }
    }
}

/// A renderer bound to one document.
pub trait DocumentWriter {
    /// Format produced by this writer.
    fn kind(&self) -> WriterKind;

    /// Render the document to a string.
    fn content(&self) -> String;

    /// Render the document and write it to `path`.
    fn save(&self, path: &Path) -> Result<()>;
}

impl DocumentWriter for HtmlWriter<'_> {
    fn kind(&self) -> WriterKind {
        WriterKind::Html
    }

    fn content(&self) -> String {
        HtmlWriter::content(self)
    }

    fn save(&self, path: &Path) -> Result<()> {
        HtmlWriter::save(self, path)
    }
}

/// Create a writer for `document` by format name.
///
/// # Examples
///
/// ```rust
/// use loquat::{Document, Error, create_writer};
///
/// let doc = Document::new();
/// let writer = create_writer(&doc, "html")?;
/// assert!(writer.content().starts_with("<!DOCTYPE html>"));
///
/// assert!(matches!(create_writer(&doc, "RTF"), Err(Error::UnsupportedWriter(_))));
/// # Ok::<(), loquat::Error>(())
/// ```
pub fn create_writer<'a>(document: &'a Document, name: &str) -> Result<Box<dyn DocumentWriter + 'a>> {
    let kind: WriterKind = name.parse()?;
    tracing::debug!(writer = kind.name(), "creating writer");
    match kind {
        WriterKind::Html => Ok(Box::new(HtmlWriter::new(document))),
    }
}
