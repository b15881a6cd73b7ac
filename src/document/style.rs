//! Style types referenced by document elements.
//!
//! Elements either name a style registered in the document's [`StyleSheet`]
//! or carry an inline style object, see [`StyleRef`].
use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::common::RGBColor;

/// Reference from an element to its style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleRef<T> {
    /// Name of a style in the document style sheet
    Named(String),
    /// Style defined directly on the element
    Inline(T),
}

impl<T> StyleRef<T> {
    /// Reference a named style.
    pub fn named(name: impl Into<String>) -> Self {
        StyleRef::Named(name.into())
    }

    /// Name of the referenced style, if this is a named reference.
    pub fn name(&self) -> Option<&str> {
        match self {
            StyleRef::Named(name) => Some(name),
            StyleRef::Inline(_) => None,
        }
    }
}

impl<T> From<T> for StyleRef<T> {
    fn from(style: T) -> Self {
        StyleRef::Inline(style)
    }
}

bitflags! {
    /// Boolean character effects of a font style.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct FontEffects: u16 {
        const BOLD = 1;
        const ITALIC = 1 << 1;
        const STRIKETHROUGH = 1 << 2;
        const DOUBLE_STRIKETHROUGH = 1 << 3;
        const SUPERSCRIPT = 1 << 4;
        const SUBSCRIPT = 1 << 5;
        const ALL_CAPS = 1 << 6;
        const SMALL_CAPS = 1 << 7;
        const HIDDEN = 1 << 8;
    }
}

/// Underline styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Underline {
    #[default]
    None,
    Single,
    Double,
    Dotted,
    Dash,
    Wavy,
}

/// Character formatting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontStyle {
    /// Font family name
    pub name: Option<String>,
    /// Size in points
    pub size: Option<f32>,
    /// Text color
    pub color: Option<RGBColor>,
    /// Highlight (background) color, any CSS color value
    pub highlight: Option<String>,
    pub underline: Underline,
    pub effects: FontEffects,
    /// Extra letter spacing in twips
    pub spacing: Option<i32>,
}

impl FontStyle {
    /// Create an empty font style.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the font family.
    #[inline]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the size in points.
    #[inline]
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = Some(size);
        self
    }

    /// Set the text color.
    #[inline]
    pub fn with_color(mut self, color: RGBColor) -> Self {
        self.color = Some(color);
        self
    }

    /// Set the underline style.
    #[inline]
    pub fn with_underline(mut self, underline: Underline) -> Self {
        self.underline = underline;
        self
    }

    /// Add character effects.
    #[inline]
    pub fn with_effects(mut self, effects: FontEffects) -> Self {
        self.effects |= effects;
        self
    }
}

/// Horizontal paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    Left,
    Center,
    Right,
    /// Justified on both edges
    Both,
}

/// Paragraph formatting. Lengths are in twips (1/20 pt).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParagraphStyle {
    pub alignment: Option<Alignment>,
    pub space_before: Option<u32>,
    pub space_after: Option<u32>,
    /// Line height as a multiple of the font size
    pub line_height: Option<f32>,
    /// Left indentation
    pub indent_left: Option<u32>,
    /// First line indentation (negative for a hanging indent)
    pub indent_first_line: Option<i32>,
    pub page_break_before: bool,
}

impl ParagraphStyle {
    /// Create an empty paragraph style.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    #[inline]
    pub fn with_spacing(mut self, before: u32, after: u32) -> Self {
        self.space_before = Some(before);
        self.space_after = Some(after);
        self
    }
}

/// Numbering attached to a list item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListItemStyle {
    /// Name of the numbering style (the list format token)
    pub numbering_style: String,
    /// Logical list instance the item belongs to
    pub numbering_id: u32,
}

impl ListItemStyle {
    pub fn new(numbering_style: impl Into<String>, numbering_id: u32) -> Self {
        Self {
            numbering_style: numbering_style.into(),
            numbering_id,
        }
    }
}

/// A style registered under a name in the style sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NamedStyle {
    /// Character style, rendered as a `.name` rule
    Font(FontStyle),
    /// Paragraph style, rendered as a `.name` rule
    Paragraph(ParagraphStyle),
    /// Heading style for titles of one depth, rendered as an `hN` rule
    Title {
        depth: u32,
        #[serde(default)]
        font: FontStyle,
    },
}

/// Named styles of a document, in registration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleSheet {
    styles: Vec<(String, NamedStyle)>,
}

impl StyleSheet {
    /// Create an empty style sheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `style` under `name`, replacing any style with that name.
    pub fn add(&mut self, name: impl Into<String>, style: NamedStyle) -> &mut Self {
        let name = name.into();
        match self.styles.iter_mut().find(|(n, _)| *n == name) {
            Some(existing) => existing.1 = style,
            None => self.styles.push((name, style)),
        }
        self
    }

    /// Look up a style by name.
    pub fn get(&self, name: &str) -> Option<&NamedStyle> {
        self.styles
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, style)| style)
    }

    /// Iterate over `(name, style)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &NamedStyle)> {
        self.styles.iter().map(|(name, style)| (name.as_str(), style))
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}
