use crate::document::{ParagraphStyle, StyleRef, Text};
use crate::html::context::RenderContext;
use crate::html::style::{font_attribute, paragraph_attribute};

/// Opening `<p>` of a paragraph-level element, unless it sits inside one.
pub(super) fn write_opening(
    ctx: &RenderContext<'_>,
    style: Option<&StyleRef<ParagraphStyle>>,
    without_p: bool,
) -> String {
    if without_p {
        String::new()
    } else {
        format!("<p{}>", paragraph_attribute(ctx, style))
    }
}

/// Closing `</p>` matching [`write_opening`].
pub(super) fn write_closing(without_p: bool) -> &'static str {
    if without_p { "" } else { "</p>\n" }
}

/// Writes a text element, as a `<span>` when it has a character style.
pub struct TextWriter<'a> {
    text: &'a Text,
    without_p: bool,
}

impl<'a> TextWriter<'a> {
    pub fn new(text: &'a Text, without_p: bool) -> Self {
        Self { text, without_p }
    }

    pub fn write(&self, ctx: &mut RenderContext<'a>) -> String {
        let mut content = write_opening(ctx, self.text.paragraph_style.as_ref(), self.without_p);

        let font = font_attribute(ctx, self.text.font_style.as_ref());
        let escaped = ctx.escape(&self.text.text);
        if font.is_empty() {
            content.push_str(&escaped);
        } else {
            content.push_str("<span");
            content.push_str(&font);
            content.push('>');
            content.push_str(&escaped);
            content.push_str("</span>");
        }

        content.push_str(write_closing(self.without_p));
        content
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::settings::Settings;
    use crate::document::{Alignment, Document, FontEffects, FontStyle};
    use crate::html::HtmlOptions;

    #[test]
    fn test_plain_text_paragraph() {
        let text = Text::new("Hello");
        let doc = Document::new();
        let options = HtmlOptions::new();
        let mut ctx = RenderContext::with_settings(&doc, &options, Settings::default());
        assert_eq!(TextWriter::new(&text, false).write(&mut ctx), "<p>Hello</p>\n");
        assert_eq!(TextWriter::new(&text, true).write(&mut ctx), "Hello");
    }

    #[test]
    fn test_styled_text() {
        let text = Text::new("Bold & centred")
            .with_font_style(FontStyle::new().with_effects(FontEffects::BOLD))
            .with_paragraph_style(ParagraphStyle::new().with_alignment(Alignment::Center));
        let doc = Document::new();
        let options = HtmlOptions::new().with_output_escaping(true);
        let mut ctx = RenderContext::with_settings(&doc, &options, Settings::default());
        assert_eq!(
            TextWriter::new(&text, false).write(&mut ctx),
            "<p style=\"text-align: center;\"><span style=\"font-weight: bold;\">Bold &amp; centred</span></p>\n"
        );
    }

    #[test]
    fn test_named_font_style() {
        let text = Text::new("x").with_font_style(StyleRef::named("Strong"));
        let doc = Document::new();
        let options = HtmlOptions::new();
        let mut ctx = RenderContext::with_settings(&doc, &options, Settings::default());
        assert_eq!(
            TextWriter::new(&text, true).write(&mut ctx),
            "<span class=\"Strong\">x</span>"
        );
    }
}
