//! Document element types.
//!
//! [`Element`] is the closed set of node kinds a section, run, list item, note
//! or table cell can hold. Elements are serialized internally tagged by
//! `kind`:
//!
//! ```yaml
//! - kind: text_run
//!   elements:
//!     - kind: text
//!       text: Hello
//! ```
use serde::{Deserialize, Serialize};

use super::style::{FontStyle, ListItemStyle, ParagraphStyle, StyleRef};
use super::table::Table;

/// One node of the document content tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Element {
    /// Plain text with optional character and paragraph formatting
    Text(Text),
    /// Paragraph made of inline elements
    TextRun(TextRun),
    /// List item paragraph made of inline elements
    ListItemRun(ListItemRun),
    /// Hyperlink
    Link(Link),
    /// Line break
    TextBreak,
    /// Heading
    Title(Title),
    Table(Table),
    /// Footnote, placed where it is referenced
    Footnote(Note),
    /// Endnote, placed where it is referenced
    Endnote(Note),
    Image(Image),
    PageBreak,
    /// Field code text preserved from the source document
    PreserveText(PreserveText),
    /// Embedded OLE object
    Object(OleObject),
}

impl Element {
    /// Plain text element.
    pub fn text(text: impl Into<String>) -> Self {
        Element::Text(Text::new(text))
    }

    /// Stable name of the element kind, as used in serialized documents.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Element::Text(_) => "text",
            Element::TextRun(_) => "text_run",
            Element::ListItemRun(_) => "list_item_run",
            Element::Link(_) => "link",
            Element::TextBreak => "text_break",
            Element::Title(_) => "title",
            Element::Table(_) => "table",
            Element::Footnote(_) => "footnote",
            Element::Endnote(_) => "endnote",
            Element::Image(_) => "image",
            Element::PageBreak => "page_break",
            Element::PreserveText(_) => "preserve_text",
            Element::Object(_) => "object",
        }
    }

    /// Child elements of container kinds; empty for leaves.
    ///
    /// Table cells are not included, walk [`Table::rows`] for those.
    pub fn children(&self) -> &[Element] {
        match self {
            Element::TextRun(run) => &run.elements,
            Element::ListItemRun(item) => &item.elements,
            Element::Footnote(note) | Element::Endnote(note) => &note.elements,
            _ => &[],
        }
    }
}

/// A span of text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Text {
    pub text: String,
    pub font_style: Option<StyleRef<FontStyle>>,
    pub paragraph_style: Option<StyleRef<ParagraphStyle>>,
}

impl Text {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Set the character style.
    pub fn with_font_style(mut self, style: impl Into<StyleRef<FontStyle>>) -> Self {
        self.font_style = Some(style.into());
        self
    }

    /// Set the paragraph style.
    pub fn with_paragraph_style(mut self, style: impl Into<StyleRef<ParagraphStyle>>) -> Self {
        self.paragraph_style = Some(style.into());
        self
    }
}

/// A paragraph of inline elements.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextRun {
    pub paragraph_style: Option<StyleRef<ParagraphStyle>>,
    pub elements: Vec<Element>,
}

impl TextRun {
    pub fn new(elements: Vec<Element>) -> Self {
        Self {
            paragraph_style: None,
            elements,
        }
    }
}

/// A list item paragraph.
///
/// `depth` and `style` are assigned when the document is built and are not
/// changed by rendering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListItemRun {
    /// Nesting level, zero-based
    pub depth: u32,
    pub style: ListItemStyle,
    pub elements: Vec<Element>,
}

impl ListItemRun {
    pub fn new(depth: u32, style: ListItemStyle, elements: Vec<Element>) -> Self {
        Self {
            depth,
            style,
            elements,
        }
    }
}

/// A hyperlink.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Link {
    /// Target URL or in-document anchor
    pub source: String,
    pub text: String,
    pub font_style: Option<StyleRef<FontStyle>>,
    pub paragraph_style: Option<StyleRef<ParagraphStyle>>,
}

impl Link {
    pub fn new(source: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            text: text.into(),
            ..Self::default()
        }
    }
}

/// A heading.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Title {
    pub text: String,
    /// Heading level; 0 is the document title
    pub depth: u32,
}

impl Title {
    pub fn new(text: impl Into<String>, depth: u32) -> Self {
        Self {
            text: text.into(),
            depth,
        }
    }
}

/// Footnote or endnote content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Note {
    /// Identifier of the note within its footnote or endnote collection
    pub relation_id: u32,
    pub elements: Vec<Element>,
}

impl Note {
    pub fn new(relation_id: u32, elements: Vec<Element>) -> Self {
        Self {
            relation_id,
            elements,
        }
    }
}

/// An inline picture with its encoded bytes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Image {
    /// Where the picture came from (file name or URL), informational
    pub source: String,
    /// MIME type of `data`, such as `image/png`
    pub mime_type: String,
    pub data: Vec<u8>,
    /// Display width in pixels
    pub width: Option<u32>,
    /// Display height in pixels
    pub height: Option<u32>,
}

/// Field code text kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreserveText {
    pub text: String,
}

/// An embedded OLE object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OleObject {
    pub source: String,
}
