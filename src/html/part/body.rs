use super::Part;
use crate::document::Element;
use crate::html::context::RenderContext;
use crate::html::element::{ListItemRunWriter, NoteWriter, write_element};
use crate::html::lines::MarkupBuffer;

/// The `<body>` part: section content followed by the notes section.
#[derive(Debug, Default, Clone, Copy)]
pub struct Body;

impl Part for Body {
    fn write<'a>(&self, ctx: &mut RenderContext<'a>, out: &mut MarkupBuffer) {
        out.push_markup("<body>\n");

        let document = ctx.document();
        for element in document.elements() {
            match element {
                Element::ListItemRun(item) => {
                    out.push_list_item(ListItemRunWriter::new(item).line(ctx));
                },
                _ => out.push_markup(&write_element(ctx, element, false)),
            }
        }

        if ctx.has_notes() {
            out.push_markup(&NoteWriter::write_notes(ctx));
        }

        out.push_markup("</body>\n");
    }
}
