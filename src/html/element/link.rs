use super::text::{write_closing, write_opening};
use crate::document::Link;
use crate::html::context::RenderContext;
use crate::html::style::font_attribute;

/// Writes a hyperlink.
pub(super) struct LinkWriter<'a> {
    link: &'a Link,
    without_p: bool,
}

impl<'a> LinkWriter<'a> {
    pub(super) fn new(link: &'a Link, without_p: bool) -> Self {
        Self { link, without_p }
    }

    pub(super) fn write(&self, ctx: &mut RenderContext<'a>) -> String {
        let mut content = write_opening(ctx, self.link.paragraph_style.as_ref(), self.without_p);
        content.push_str("<a href=\"");
        content.push_str(&ctx.escape(&self.link.source));
        content.push('"');
        content.push_str(&font_attribute(ctx, self.link.font_style.as_ref()));
        content.push('>');
        content.push_str(&ctx.escape(&self.link.text));
        content.push_str("</a>");
        content.push_str(write_closing(self.without_p));
        content
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::settings::Settings;
    use crate::document::{Document, StyleRef};
    use crate::html::HtmlOptions;

    #[test]
    fn test_link_escapes_source_and_text() {
        let link = Link {
            source: "https://example.com/?a=1&b=2".to_string(),
            text: "Q&A".to_string(),
            font_style: Some(StyleRef::named("Hyperlink")),
            paragraph_style: None,
        };
        let doc = Document::new();
        let options = HtmlOptions::new().with_output_escaping(true);
        let mut ctx = RenderContext::with_settings(&doc, &options, Settings::default());
        assert_eq!(
            LinkWriter::new(&link, false).write(&mut ctx),
            "<p><a href=\"https://example.com/?a=1&amp;b=2\" class=\"Hyperlink\">Q&amp;A</a></p>\n"
        );
    }
}
