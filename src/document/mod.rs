/// In-memory word-processing document model.
///
/// A [`Document`] is an ordered list of [`Section`]s, each holding an ordered
/// list of [`Element`]s. Writers take the document by shared reference and
/// never modify it.
///
/// # Example
///
/// ```rust
/// use loquat::document::{Document, Element, ListItemRun, ListItemStyle, Section, TextRun};
///
/// let mut doc = Document::new();
/// doc.info.title = Some("Groceries".to_string());
///
/// let section = doc.add_section();
/// section.add(Element::TextRun(TextRun::new(vec![Element::text("To buy:")])));
/// for item in ["milk", "eggs"] {
///     section.add(Element::ListItemRun(ListItemRun::new(
///         0,
///         ListItemStyle::new("bullets", 8),
///         vec![Element::text(item)],
///     )));
/// }
///
/// assert_eq!(doc.sections[0].elements.len(), 3);
/// ```
mod element;
mod info;
mod style;
mod table;

use serde::{Deserialize, Serialize};

pub use element::{
    Element, Image, Link, ListItemRun, Note, OleObject, PreserveText, Text, TextRun, Title,
};
pub use info::DocInfo;
pub use style::{
    Alignment, FontEffects, FontStyle, ListItemStyle, NamedStyle, ParagraphStyle, StyleRef,
    StyleSheet, Underline,
};
pub use table::{Cell, Row, Table, TableStyle, VMerge};

/// A run of content sharing page settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Section {
    pub elements: Vec<Element>,
}

impl Section {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element.
    pub fn add(&mut self, element: Element) -> &mut Self {
        self.elements.push(element);
        self
    }
}

/// A word-processing document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Document {
    pub info: DocInfo,
    pub styles: StyleSheet,
    pub sections: Vec<Section>,
    /// Overrides the process-wide default font name
    pub default_font_name: Option<String>,
    /// Overrides the process-wide default font size, in points
    pub default_font_size: Option<f32>,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new empty section and return it.
    pub fn add_section(&mut self) -> &mut Section {
        self.sections.push(Section::new());
        let last = self.sections.len() - 1;
        &mut self.sections[last]
    }

    /// All top-level elements, section by section.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.sections.iter().flat_map(|section| section.elements.iter())
    }

    /// Load a document from its YAML description.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use loquat::document::Document;
    ///
    /// let doc = Document::from_yaml_str(
    ///     r#"
    /// info:
    ///   title: Notes
    /// sections:
    ///   - elements:
    ///       - kind: title
    ///         text: Introduction
    ///         depth: 1
    ///       - kind: page_break
    /// "#,
    /// )?;
    /// assert_eq!(doc.elements().count(), 2);
    /// # Ok::<(), loquat::Error>(())
    /// ```
    #[cfg(feature = "yaml")]
    pub fn from_yaml_str(yaml: &str) -> crate::common::Result<Self> {
        let document = serde_saphyr::from_str(yaml)?;
        Ok(document)
    }
}

#[cfg(all(test, feature = "yaml"))]
mod tests {
    use super::*;
    use crate::common::RGBColor;

    #[test]
    fn test_from_yaml_full_tree() {
        let yaml = r#"
info:
  title: Quarterly report
  creator: Ada
styles:
  - - Strong
    - type: font
      effects: BOLD
default_font_name: Georgia
sections:
  - elements:
      - kind: text
        text: Intro
        font_style:
          size: 12
          color: FF0000
      - kind: list_item_run
        depth: 1
        style:
          numbering_style: decimal
          numbering_id: 3
        elements:
          - kind: text
            text: first
            font_style: Strong
      - kind: text_break
      - kind: table
        rows:
          - header: true
            cells:
              - grid_span: 2
                elements:
                  - kind: text
                    text: wide
"#;
        let doc = Document::from_yaml_str(yaml).unwrap();
        assert_eq!(doc.info.title.as_deref(), Some("Quarterly report"));
        assert_eq!(doc.default_font_name.as_deref(), Some("Georgia"));
        assert!(matches!(doc.styles.get("Strong"), Some(NamedStyle::Font(_))));

        let elements: Vec<_> = doc.elements().collect();
        assert_eq!(elements.len(), 4);

        match elements[0] {
            Element::Text(text) => match &text.font_style {
                Some(StyleRef::Inline(font)) => {
                    assert_eq!(font.size, Some(12.0));
                    assert_eq!(font.color, Some(RGBColor::new(255, 0, 0)));
                },
                other => panic!("unexpected font style: {:?}", other),
            },
            other => panic!("unexpected element: {:?}", other),
        }

        match elements[1] {
            Element::ListItemRun(item) => {
                assert_eq!(item.depth, 1);
                assert_eq!(item.style, ListItemStyle::new("decimal", 3));
                match &item.elements[0] {
                    Element::Text(text) => {
                        assert_eq!(text.font_style, Some(StyleRef::named("Strong")))
                    },
                    other => panic!("unexpected child: {:?}", other),
                }
            },
            other => panic!("unexpected element: {:?}", other),
        }

        assert_eq!(elements[2], &Element::TextBreak);

        match elements[3] {
            Element::Table(table) => {
                assert!(table.rows[0].header);
                assert_eq!(table.rows[0].cells[0].grid_span, 2);
            },
            other => panic!("unexpected element: {:?}", other),
        }
    }

    #[test]
    fn test_from_yaml_rejects_unknown_kind() {
        let yaml = r#"
sections:
  - elements:
      - kind: chart
"#;
        let err = Document::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(err, crate::Error::Parse(_)));
    }

    #[test]
    fn test_add_section() {
        let mut doc = Document::new();
        doc.add_section().add(Element::PageBreak);
        doc.add_section().add(Element::text("x"));
        assert_eq!(doc.sections.len(), 2);
        assert_eq!(doc.elements().count(), 2);
    }
}
