use super::text::{write_closing, write_opening};
use super::write_elements;
use crate::document::TextRun;
use crate::html::context::RenderContext;

/// Writes a paragraph of inline elements.
pub struct TextRunWriter<'a> {
    run: &'a TextRun,
    without_p: bool,
}

impl<'a> TextRunWriter<'a> {
    pub fn new(run: &'a TextRun, without_p: bool) -> Self {
        Self { run, without_p }
    }

    pub fn write(&self, ctx: &mut RenderContext<'a>) -> String {
        let mut content = write_opening(ctx, self.run.paragraph_style.as_ref(), self.without_p);
        content.push_str(&write_elements(ctx, &self.run.elements, true));
        content.push_str(write_closing(self.without_p));
        content
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::settings::Settings;
    use crate::document::{Document, Element, Link, StyleRef};
    use crate::html::HtmlOptions;

    #[test]
    fn test_children_render_inline() {
        let run = TextRun {
            paragraph_style: Some(StyleRef::named("Body")),
            elements: vec![
                Element::text("See "),
                Element::Link(Link::new("https://example.com", "here")),
                Element::TextBreak,
                Element::text("."),
            ],
        };
        let doc = Document::new();
        let options = HtmlOptions::new();
        let mut ctx = RenderContext::with_settings(&doc, &options, Settings::default());
        assert_eq!(
            TextRunWriter::new(&run, false).write(&mut ctx),
            "<p class=\"Body\">See <a href=\"https://example.com\">here</a><br />.</p>\n"
        );
    }

    #[test]
    fn test_empty_run() {
        let run = TextRun::default();
        let doc = Document::new();
        let options = HtmlOptions::new();
        let mut ctx = RenderContext::with_settings(&doc, &options, Settings::default());
        assert_eq!(TextRunWriter::new(&run, false).write(&mut ctx), "<p></p>\n");
    }
}
