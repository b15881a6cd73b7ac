//! HTML writer for in-memory documents.
//!
//! [`HtmlWriter`] renders a [`Document`] as a standalone HTML page. A render
//! runs in three stages:
//!
//! 1. the [`Head`](part::Head) and [`Body`](part::Body) parts write their
//!    markup into a line buffer, with list items recorded as structured
//!    lines;
//! 2. the list reconstruction pass wraps every contiguous run of list items
//!    in a `<ul>` or `<ol>` container;
//! 3. the closing `</html>` is appended and the optional edit callback gets
//!    the final word.
//!
//! # Example
//!
//! ```rust
//! use loquat::document::{Document, Element, ListItemRun, ListItemStyle};
//! use loquat::html::HtmlWriter;
//!
//! let mut doc = Document::new();
//! let section = doc.add_section();
//! for item in ["one", "two"] {
//!     section.add(Element::ListItemRun(ListItemRun::new(
//!         0,
//!         ListItemStyle::new("bullet", 8),
//!         vec![Element::text(item)],
//!     )));
//! }
//!
//! let html = HtmlWriter::new(&doc).content();
//! assert!(html.starts_with("<!DOCTYPE html>\n<html>\n<head>\n"));
//! assert!(html.contains("<ul>\n<li data-depth=\"0\""));
//! assert!(html.ends_with("</body>\n</html>\n"));
//! ```
use std::fmt;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::common::Result;
use crate::document::Document;

mod config;
mod context;
mod element;
pub mod lines;
pub mod lists;
mod part;
pub mod style;

pub use config::{HtmlOptions, UNORDERED_NUMBERING_ID};
pub use context::{NoteKind, RenderContext};
pub use element::{write_element, write_elements};
pub use lines::{Line, ListItemLine, MarkupBuffer};
pub use lists::{ListKind, ListRules, reconstruct_lists};
pub use part::{Body, Head, Part};

/// Post-processing hook applied to the finished page.
pub type EditCallback = Box<dyn Fn(String) -> String + Send + Sync>;

/// Renders a document to HTML.
pub struct HtmlWriter<'a> {
    document: &'a Document,
    options: HtmlOptions,
    edit_callback: Option<EditCallback>,
}

impl fmt::Debug for HtmlWriter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HtmlWriter")
            .field("options", &self.options)
            .field("edit_callback", &self.edit_callback.is_some())
            .finish_non_exhaustive()
    }
}

impl<'a> HtmlWriter<'a> {
    /// Create a writer with default options.
    pub fn new(document: &'a Document) -> Self {
        Self::with_options(document, HtmlOptions::default())
    }

    /// Create a writer with the given options.
    pub fn with_options(document: &'a Document, options: HtmlOptions) -> Self {
        Self {
            document,
            options,
            edit_callback: None,
        }
    }

    #[inline]
    pub fn document(&self) -> &'a Document {
        self.document
    }

    #[inline]
    pub fn options(&self) -> &HtmlOptions {
        &self.options
    }

    /// Set the generic font family appended to the default font.
    ///
    /// Fails with [`Error::InvalidCssValue`](crate::Error::InvalidCssValue)
    /// when `value` is not a CSS generic family keyword.
    pub fn set_default_generic_font(&mut self, value: &str) -> Result<&mut Self> {
        self.options.set_default_generic_font(value)?;
        Ok(self)
    }

    /// Set the default `white-space` of the page.
    ///
    /// Fails with [`Error::InvalidCssValue`](crate::Error::InvalidCssValue)
    /// when `value` is not a CSS `white-space` keyword.
    pub fn set_default_white_space(&mut self, value: &str) -> Result<&mut Self> {
        self.options.set_default_white_space(value)?;
        Ok(self)
    }

    /// Install a hook that receives the finished page and returns the text to
    /// emit in its place.
    pub fn set_edit_callback<F>(&mut self, callback: F) -> &mut Self
    where
        F: Fn(String) -> String + Send + Sync + 'static,
    {
        self.edit_callback = Some(Box::new(callback));
        self
    }

    /// Remove the edit callback.
    pub fn clear_edit_callback(&mut self) -> &mut Self {
        self.edit_callback = None;
        self
    }

    #[inline]
    pub fn has_edit_callback(&self) -> bool {
        self.edit_callback.is_some()
    }

    /// Render the whole document.
    ///
    /// Every call starts from a fresh render context, so the writer can be
    /// rendered any number of times with identical results.
    pub fn content(&self) -> String {
        let mut ctx = RenderContext::new(self.document, &self.options);
        let mut buffer = MarkupBuffer::new();

        buffer.push_markup("<!DOCTYPE html>\n<html>\n");
        Head.write(&mut ctx, &mut buffer);
        Body.write(&mut ctx, &mut buffer);

        let lines = buffer.into_lines();
        tracing::trace!(
            lines = lines.len(),
            list_items = lines.iter().filter(|line| line.is_list_item()).count(),
            "reconstructing list containers"
        );
        let mut content = reconstruct_lists(&lines, ListRules::from(&self.options));
        content.push_str("</html>\n");

        match &self.edit_callback {
            Some(callback) => callback(content),
            None => content,
        }
    }

    /// Render the document and write it to `path`.
    ///
    /// The page is written to a temporary file next to `path` and then moved
    /// over it, so a failed save leaves no partial file behind.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = self.content();

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut file = NamedTempFile::new_in(dir)?;
        file.write_all(content.as_bytes())?;
        file.persist(path)?;

        tracing::info!(path = %path.display(), bytes = content.len(), "saved HTML document");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::document::{
        Element, ListItemRun, ListItemStyle, Note, OleObject, PreserveText, Text,
    };

    fn list_item(numbering_id: u32, text: &str) -> Element {
        Element::ListItemRun(ListItemRun::new(
            0,
            ListItemStyle::new("bullet", numbering_id),
            vec![Element::text(text)],
        ))
    }

    fn li(numbering_id: u32, text: &str) -> String {
        format!(
            "<li data-depth=\"0\" data-liststyle=\"bullet\" data-numId=\"{}\">{}</li>\n",
            numbering_id, text
        )
    }

    fn body(html: &str) -> &str {
        let start = html.find("<body>\n").expect("body start") + "<body>\n".len();
        let end = html.find("</body>\n").expect("body end");
        &html[start..end]
    }

    #[test]
    fn test_document_shape() {
        let doc = Document::new();
        let html = HtmlWriter::new(&doc).content();
        assert!(html.starts_with("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"UTF-8\" />\n"));
        assert!(html.contains("</head>\n<body>\n</body>\n"));
        assert!(html.ends_with("</body>\n</html>\n"));
    }

    #[test]
    fn test_three_unordered_items_share_one_container() {
        let mut doc = Document::new();
        doc.add_section()
            .add(Element::text("before"))
            .add(list_item(8, "a"))
            .add(list_item(8, "b"))
            .add(list_item(8, "c"))
            .add(Element::text("after"));

        let html = HtmlWriter::new(&doc).content();
        let expected = format!(
            "<p>before</p>\n<ul>\n{}{}{}</ul>\n<p>after</p>\n",
            li(8, "a"),
            li(8, "b"),
            li(8, "c")
        );
        assert_eq!(body(&html), expected);
    }

    #[test]
    fn test_interrupted_ordered_items_get_separate_containers() {
        let mut doc = Document::new();
        doc.add_section()
            .add(list_item(3, "one"))
            .add(Element::text("between"))
            .add(list_item(3, "two"));

        let html = HtmlWriter::new(&doc).content();
        let expected = format!(
            "<ol>\n{}</ol>\n<p>between</p>\n<ol>\n{}</ol>\n",
            li(3, "one"),
            li(3, "two")
        );
        assert_eq!(body(&html), expected);
    }

    #[test]
    fn test_list_at_end_of_body_is_closed_before_body() {
        let mut doc = Document::new();
        doc.add_section().add(list_item(8, "last"));

        let html = HtmlWriter::new(&doc).content();
        assert_eq!(body(&html), format!("<ul>\n{}</ul>\n", li(8, "last")));
    }

    #[test]
    fn test_elements_without_converter_are_skipped() {
        let mut doc = Document::new();
        doc.add_section()
            .add(Element::text("first"))
            .add(Element::PageBreak)
            .add(Element::PreserveText(PreserveText {
                text: "{PAGE}".to_string(),
            }))
            .add(Element::Object(OleObject {
                source: "sheet.bin".to_string(),
            }))
            .add(Element::text("second"));

        let html = HtmlWriter::new(&doc).content();
        assert_eq!(body(&html), "<p>first</p>\n<p>second</p>\n");
    }

    #[test]
    fn test_reconstruction_runs_once() {
        let mut doc = Document::new();
        doc.add_section().add(list_item(8, "x")).add(list_item(5, "y"));

        let html = HtmlWriter::new(&doc).content();
        assert_eq!(html.matches("<ul>").count(), 1);
        assert_eq!(html.matches("</ul>").count(), 1);
        assert_eq!(html.matches("<ol>").count(), 0);
    }

    #[test]
    fn test_notes_are_numbered_and_listed() {
        let mut doc = Document::new();
        doc.add_section().add(Element::TextRun(crate::document::TextRun::new(vec![
            Element::text("claim"),
            Element::Footnote(Note::new(4, vec![Element::text("source")])),
            Element::Endnote(Note::new(9, vec![Element::text("aside")])),
        ])));

        let html = HtmlWriter::new(&doc).content();
        assert!(html.contains("<sup>1</sup>"));
        assert!(html.contains("<sup>2</sup>"));
        assert!(html.contains("<hr />\n"));
        assert!(html.contains("<p><a name=\"note-1\"></a><a href=\"#footnote-4\">1</a>source</p>\n"));
        assert!(html.contains("<p><a name=\"note-2\"></a><a href=\"#endnote-9\">2</a>aside</p>\n"));
    }

    #[test]
    fn test_notes_reset_between_renders() {
        let mut doc = Document::new();
        doc.add_section()
            .add(Element::Footnote(Note::new(1, vec![Element::text("n")])));

        let writer = HtmlWriter::new(&doc);
        let first = writer.content();
        let second = writer.content();
        assert_eq!(first, second);
        assert_eq!(second.matches("name=\"note-1\"").count(), 1);
    }

    #[test]
    fn test_escaping_override() {
        let mut doc = Document::new();
        doc.add_section().add(Element::Text(Text::new("a < b")));

        let escaped =
            HtmlWriter::with_options(&doc, HtmlOptions::new().with_output_escaping(true)).content();
        assert!(escaped.contains("<p>a &lt; b</p>"));

        let raw =
            HtmlWriter::with_options(&doc, HtmlOptions::new().with_output_escaping(false)).content();
        assert!(raw.contains("<p>a < b</p>"));
    }

    #[test]
    fn test_edit_callback_sees_final_page() {
        let doc = Document::new();
        let mut writer = HtmlWriter::new(&doc);
        writer.set_edit_callback(|html| html.replace("Untitled", "Edited"));
        assert!(writer.has_edit_callback());

        let html = writer.content();
        assert!(html.contains("<title>Edited</title>"));
        assert!(html.ends_with("</html>\n"));

        writer.clear_edit_callback();
        assert!(writer.content().contains("<title>Untitled</title>"));
    }

    #[test]
    fn test_invalid_configuration_is_rejected() {
        let doc = Document::new();
        let mut writer = HtmlWriter::new(&doc);

        assert!(matches!(
            writer.set_default_generic_font("comic"),
            Err(Error::InvalidCssValue { property: "font-family", .. })
        ));
        assert!(matches!(
            writer.set_default_white_space("wrap"),
            Err(Error::InvalidCssValue { property: "white-space", .. })
        ));

        writer
            .set_default_generic_font("monospace")
            .unwrap()
            .set_default_white_space("pre")
            .unwrap();
        assert!(writer.content().contains("'Arial', monospace"));
        assert!(writer.content().contains("white-space: pre;"));
    }

    #[test]
    fn test_save_writes_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.html");

        let mut doc = Document::new();
        doc.add_section().add(list_item(8, "saved"));
        let writer = HtmlWriter::new(&doc);
        writer.save(&path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), writer.content());
    }

    #[test]
    fn test_save_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.html");
        std::fs::write(&path, "stale").unwrap();

        let doc = Document::new();
        HtmlWriter::new(&doc).save(&path).unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn test_save_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.html");

        let doc = Document::new();
        let result = HtmlWriter::new(&doc).save(&path);
        assert!(matches!(result, Err(Error::Io(_))));
        assert!(!path.exists());
    }
}
