//! Style to CSS conversion.
//!
//! Named style references become `class` attributes and the matching rules
//! are written into the head by [`super::part::Head`]; inline styles become
//! `style` attributes.
use super::context::RenderContext;
use crate::common::css::{CssDeclarations, points};
use crate::document::{
    Alignment, FontEffects, FontStyle, ParagraphStyle, StyleRef, TableStyle, Underline,
};

/// Twips per point.
const TWIPS_PER_POINT: f32 = 20.0;

#[inline]
fn twips(value: f32) -> String {
    points(value / TWIPS_PER_POINT)
}

/// HTML heading level for a title depth.
///
/// Depth 0 (the document title) and depth 1 both map to `h1`; depths past
/// six are clamped to `h6`.
#[inline]
pub fn heading_level(depth: u32) -> u32 {
    depth.clamp(1, 6)
}

/// CSS `font-family` value: the quoted family followed by the generic fallback.
///
/// # Examples
///
/// ```rust
/// use loquat::html::style::font_family;
///
/// assert_eq!(font_family("Times New Roman", "serif"), "'Times New Roman', serif");
/// assert_eq!(font_family("Arial", ""), "'Arial'");
/// ```
pub fn font_family(name: &str, generic: &str) -> String {
    let name = name.replace('\'', "\\'");
    if generic.is_empty() {
        format!("'{}'", name)
    } else {
        format!("'{}', {}", name, generic)
    }
}

/// Declarations for a character style.
pub fn font_css(font: &FontStyle) -> CssDeclarations {
    let mut css = CssDeclarations::new();
    let effects = font.effects;

    if let Some(name) = font.name.as_deref().filter(|n| !n.trim().is_empty()) {
        css.set("font-family", font_family(name, ""));
    }
    if let Some(size) = font.size.filter(|s| *s > 0.0) {
        css.set("font-size", points(size));
    }
    if let Some(color) = font.color {
        css.set("color", color.to_string());
    }
    if let Some(highlight) = font.highlight.as_deref() {
        css.set("background", highlight);
    }
    css.set_if(effects.contains(FontEffects::BOLD), "font-weight", "bold")
        .set_if(effects.contains(FontEffects::ITALIC), "font-style", "italic");

    if effects.contains(FontEffects::SUPERSCRIPT) {
        css.set("vertical-align", "super");
    } else if effects.contains(FontEffects::SUBSCRIPT) {
        css.set("vertical-align", "sub");
    }

    let strike = effects.intersects(FontEffects::STRIKETHROUGH | FontEffects::DOUBLE_STRIKETHROUGH);
    let underlined = font.underline != Underline::None;
    let decoration = match (underlined, strike) {
        (true, true) => "underline line-through",
        (true, false) => "underline",
        (false, true) => "line-through",
        (false, false) => "",
    };
    css.set("text-decoration", decoration);

    let decoration_style = match font.underline {
        Underline::Double => "double",
        Underline::Dotted => "dotted",
        Underline::Dash => "dashed",
        Underline::Wavy => "wavy",
        Underline::None | Underline::Single
            if effects.contains(FontEffects::DOUBLE_STRIKETHROUGH) =>
        {
            "double"
        },
        Underline::None | Underline::Single => "",
    };
    css.set("text-decoration-style", decoration_style);

    css.set_if(effects.contains(FontEffects::ALL_CAPS), "text-transform", "uppercase")
        .set_if(effects.contains(FontEffects::SMALL_CAPS), "font-variant", "small-caps")
        .set_if(effects.contains(FontEffects::HIDDEN), "display", "none");

    if let Some(spacing) = font.spacing.filter(|s| *s != 0) {
        css.set("letter-spacing", twips(spacing as f32));
    }

    css
}

/// Declarations for a paragraph style.
pub fn paragraph_css(paragraph: &ParagraphStyle) -> CssDeclarations {
    let mut css = CssDeclarations::new();

    if let Some(alignment) = paragraph.alignment {
        css.set(
            "text-align",
            match alignment {
                Alignment::Left => "left",
                Alignment::Center => "center",
                Alignment::Right => "right",
                Alignment::Both => "justify",
            },
        );
    }
    if let Some(before) = paragraph.space_before {
        css.set("margin-top", twips(before as f32));
    }
    if let Some(after) = paragraph.space_after {
        css.set("margin-bottom", twips(after as f32));
    }
    if let Some(line_height) = paragraph.line_height.filter(|h| *h > 0.0) {
        css.set("line-height", line_height.to_string());
    }
    if let Some(left) = paragraph.indent_left.filter(|l| *l > 0) {
        css.set("margin-left", twips(left as f32));
    }
    if let Some(first) = paragraph.indent_first_line.filter(|f| *f != 0) {
        css.set("text-indent", twips(first as f32));
    }
    css.set_if(paragraph.page_break_before, "page-break-before", "always");

    css
}

/// Declarations for a table.
pub fn table_css(table: &TableStyle) -> CssDeclarations {
    let mut css = CssDeclarations::new();
    if let Some(width) = table.width_percent {
        css.set("width", format!("{}%", width.min(100)));
    }
    match table.alignment {
        Some(Alignment::Center) => {
            css.set("margin-left", "auto").set("margin-right", "auto");
        },
        Some(Alignment::Right) => {
            css.set("margin-left", "auto");
        },
        _ => {},
    }
    css
}

/// ` class="..."` for a named style, ` style="..."` for a non-empty inline
/// one, nothing otherwise.
pub fn style_attribute<T>(
    ctx: &RenderContext<'_>,
    style: Option<&StyleRef<T>>,
    to_css: impl FnOnce(&T) -> CssDeclarations,
) -> String {
    match style {
        Some(StyleRef::Named(name)) if !name.is_empty() => {
            format!(" class=\"{}\"", ctx.escape(name))
        },
        Some(StyleRef::Inline(inline)) => inline_style_attribute(ctx, &to_css(inline)),
        _ => String::new(),
    }
}

/// ` style="..."` for non-empty declarations, nothing otherwise.
pub fn inline_style_attribute(ctx: &RenderContext<'_>, css: &CssDeclarations) -> String {
    if css.is_empty() {
        String::new()
    } else {
        format!(" style=\"{}\"", ctx.escape(&css.to_string()))
    }
}

/// Attribute for an element's character style.
#[inline]
pub fn font_attribute(ctx: &RenderContext<'_>, style: Option<&StyleRef<FontStyle>>) -> String {
    style_attribute(ctx, style, font_css)
}

/// Attribute for an element's paragraph style.
#[inline]
pub fn paragraph_attribute(
    ctx: &RenderContext<'_>,
    style: Option<&StyleRef<ParagraphStyle>>,
) -> String {
    style_attribute(ctx, style, paragraph_css)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::RGBColor;
    use crate::common::settings::Settings;
    use crate::document::Document;
    use crate::html::HtmlOptions;

    #[test]
    fn test_font_css_full() {
        let font = FontStyle {
            name: Some("Georgia".to_string()),
            size: Some(11.5),
            color: Some(RGBColor::new(0x33, 0x66, 0x99)),
            highlight: Some("yellow".to_string()),
            underline: Underline::Single,
            effects: FontEffects::BOLD
                | FontEffects::ITALIC
                | FontEffects::STRIKETHROUGH
                | FontEffects::SUPERSCRIPT
                | FontEffects::SMALL_CAPS,
            spacing: Some(40),
        };
        assert_eq!(
            font_css(&font).to_string(),
            "font-family: 'Georgia'; font-size: 11.5pt; color: #336699; background: yellow; \
             font-weight: bold; font-style: italic; vertical-align: super; \
             text-decoration: underline line-through; font-variant: small-caps; \
             letter-spacing: 2pt;"
        );
    }

    #[test]
    fn test_font_css_decoration_styles() {
        let font = FontStyle::new().with_underline(Underline::Wavy);
        let css = font_css(&font);
        assert_eq!(css.get("text-decoration"), Some("underline"));
        assert_eq!(css.get("text-decoration-style"), Some("wavy"));

        let font = FontStyle::new().with_effects(FontEffects::DOUBLE_STRIKETHROUGH);
        let css = font_css(&font);
        assert_eq!(css.get("text-decoration"), Some("line-through"));
        assert_eq!(css.get("text-decoration-style"), Some("double"));
    }

    #[test]
    fn test_font_css_empty() {
        assert!(font_css(&FontStyle::new()).is_empty());
    }

    #[test]
    fn test_paragraph_css() {
        let paragraph = ParagraphStyle {
            alignment: Some(Alignment::Both),
            space_before: Some(240),
            space_after: Some(120),
            line_height: Some(1.5),
            indent_left: Some(720),
            indent_first_line: Some(-360),
            page_break_before: true,
        };
        assert_eq!(
            paragraph_css(&paragraph).to_string(),
            "text-align: justify; margin-top: 12pt; margin-bottom: 6pt; line-height: 1.5; \
             margin-left: 36pt; text-indent: -18pt; page-break-before: always;"
        );
    }

    #[test]
    fn test_table_css() {
        let table = TableStyle {
            width_percent: Some(150),
            alignment: Some(Alignment::Center),
        };
        assert_eq!(
            table_css(&table).to_string(),
            "width: 100%; margin-left: auto; margin-right: auto;"
        );
    }

    #[test]
    fn test_style_attributes() {
        let doc = Document::new();
        let options = HtmlOptions::new();
        let ctx = RenderContext::with_settings(&doc, &options, Settings::default());

        let named = StyleRef::named("Heading");
        assert_eq!(font_attribute(&ctx, Some(&named)), " class=\"Heading\"");

        let inline: StyleRef<FontStyle> = FontStyle::new().with_effects(FontEffects::BOLD).into();
        assert_eq!(
            font_attribute(&ctx, Some(&inline)),
            " style=\"font-weight: bold;\""
        );

        let empty: StyleRef<ParagraphStyle> = ParagraphStyle::new().into();
        assert_eq!(paragraph_attribute(&ctx, Some(&empty)), "");
        assert_eq!(paragraph_attribute(&ctx, None), "");
    }
}
