//! Element converters and the dispatcher that selects them.
//!
//! Every element kind with an HTML rendering has a converter in this module.
//! [`write_element`] matches the element kind and runs its converter; kinds
//! without one produce an empty fragment and the render carries on.
//!
//! `without_p` tells a converter that it is placed inside an enclosing
//! paragraph-level element (a run, a list item, a note), so it must not open
//! a `<p>` of its own.
#[cfg(feature = "images")]
mod image;
mod link;
mod list_item_run;
mod note;
mod table;
mod text;
mod text_break;
mod text_run;
mod title;

pub use list_item_run::ListItemRunWriter;
pub use note::NoteWriter;
pub use table::TableWriter;
pub use text::TextWriter;
pub use text_run::TextRunWriter;

use super::context::{NoteKind, RenderContext};
use crate::document::Element;

/// Render one element to a markup fragment.
///
/// Returns an empty string for element kinds that have no HTML converter
/// (page breaks, preserved field text, embedded objects).
pub fn write_element<'a>(ctx: &mut RenderContext<'a>, element: &'a Element, without_p: bool) -> String {
    match element {
        Element::Text(text) => TextWriter::new(text, without_p).write(ctx),
        Element::TextRun(run) => TextRunWriter::new(run, without_p).write(ctx),
        Element::ListItemRun(item) => ListItemRunWriter::new(item).write(ctx),
        Element::Link(link) => link::LinkWriter::new(link, without_p).write(ctx),
        Element::TextBreak => text_break::write(without_p),
        Element::Title(title) => title::TitleWriter::new(title).write(ctx),
        Element::Table(table) => TableWriter::new(table).write(ctx),
        Element::Footnote(note) => NoteWriter::new(note, NoteKind::Footnote).write(ctx),
        Element::Endnote(note) => NoteWriter::new(note, NoteKind::Endnote).write(ctx),
        #[cfg(feature = "images")]
        Element::Image(image) => image::ImageWriter::new(image, without_p).write(ctx),
        #[cfg(not(feature = "images"))]
        Element::Image(_) => skip(element),
        Element::PageBreak | Element::PreserveText(_) | Element::Object(_) => skip(element),
    }
}

/// Render a sequence of sibling elements and concatenate the fragments.
pub fn write_elements<'a>(ctx: &mut RenderContext<'a>, elements: &'a [Element], without_p: bool) -> String {
    let mut content = String::new();
    for element in elements {
        content.push_str(&write_element(ctx, element, without_p));
    }
    content
}

fn skip(element: &Element) -> String {
    tracing::debug!(kind = element.kind_name(), "no HTML converter for element, skipped");
    String::new()
}
