use super::Part;
use crate::common::css::{CssDeclarations, points};
use crate::document::NamedStyle;
use crate::html::context::RenderContext;
use crate::html::lines::MarkupBuffer;
use crate::html::style::{font_css, font_family, heading_level, paragraph_css};

/// Page title used when the document has none.
const UNTITLED: &str = "Untitled";

/// The `<head>` part: charset, title, document properties and the style sheet.
#[derive(Debug, Default, Clone, Copy)]
pub struct Head;

impl Head {
    fn write_meta(&self, ctx: &RenderContext<'_>) -> String {
        let info = &ctx.document().info;
        let title = info
            .title
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .unwrap_or(UNTITLED);

        let mut content = String::from("<meta charset=\"UTF-8\" />\n");
        content.push_str("<title>");
        content.push_str(&ctx.escape(title));
        content.push_str("</title>\n");
        for (name, value) in info.properties() {
            content.push_str("<meta name=\"");
            content.push_str(name);
            content.push_str("\" content=\"");
            content.push_str(&ctx.escape(value));
            content.push_str("\" />\n");
        }
        content
    }

    fn write_style(&self, ctx: &RenderContext<'_>) -> String {
        let options = ctx.options();

        let mut defaults = CssDeclarations::new();
        defaults
            .set(
                "font-family",
                font_family(
                    &ctx.escape(ctx.default_font_name()),
                    options.default_generic_font(),
                ),
            )
            .set("font-size", points(ctx.default_font_size()))
            .set("white-space", options.default_white_space());

        let mut note_ref = CssDeclarations::new();
        note_ref.set("text-decoration", "none");

        let mut hr = CssDeclarations::new();
        hr.set("height", "1px")
            .set("padding", "0")
            .set("margin", "1em 0")
            .set("border", "0")
            .set("border-top", "1px solid #CCC");

        let mut table = CssDeclarations::new();
        table
            .set("border", "1px solid black")
            .set("border-spacing", "0px")
            .set("width", "100%");

        let mut td = CssDeclarations::new();
        td.set("border", "1px solid black");

        let mut css = String::from("<style>\n");
        for (selector, declarations) in [
            ("*", defaults),
            ("a.NoteRef", note_ref),
            ("hr", hr),
            ("table", table),
            ("td", td),
        ] {
            push_rule(&mut css, selector, &declarations);
        }

        for (name, style) in ctx.document().styles.iter() {
            match style {
                NamedStyle::Font(font) => {
                    push_rule(&mut css, &format!(".{}", ctx.escape(name)), &font_css(font))
                },
                NamedStyle::Paragraph(paragraph) => push_rule(
                    &mut css,
                    &format!(".{}", ctx.escape(name)),
                    &paragraph_css(paragraph),
                ),
                NamedStyle::Title { depth, font } => {
                    push_rule(&mut css, &format!("h{}", heading_level(*depth)), &font_css(font))
                },
            }
        }

        css.push_str("</style>\n");
        css
    }
}

/// Append `selector {declarations}`; rules without declarations are omitted.
fn push_rule(css: &mut String, selector: &str, declarations: &CssDeclarations) {
    if declarations.is_empty() {
        return;
    }
    css.push_str(selector);
    css.push_str(" {");
    css.push_str(&declarations.to_string());
    css.push_str("}\n");
}

impl Part for Head {
    fn write<'a>(&self, ctx: &mut RenderContext<'a>, out: &mut MarkupBuffer) {
        out.push_markup("<head>\n");
        out.push_markup(&self.write_meta(ctx));
        out.push_markup(&self.write_style(ctx));
        out.push_markup("</head>\n");
    }
}
