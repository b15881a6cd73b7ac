use super::write_elements;
use crate::document::Note;
use crate::html::context::{NoteKind, RenderContext};

/// Writes the in-text reference of a footnote or endnote and registers the
/// note for the notes section.
pub struct NoteWriter<'a> {
    note: &'a Note,
    kind: NoteKind,
}

impl<'a> NoteWriter<'a> {
    pub fn new(note: &'a Note, kind: NoteKind) -> Self {
        Self { note, kind }
    }

    pub fn write(&self, ctx: &mut RenderContext<'a>) -> String {
        let id = ctx.add_note(self.kind, self.note);
        let mut id_buf = itoa::Buffer::new();
        let id = id_buf.format(id);
        format!(
            "<a name=\"{kind}-{rid}\"></a><a href=\"#note-{id}\" class=\"NoteRef\"><sup>{id}</sup></a>",
            kind = self.kind.as_str(),
            rid = self.note.relation_id,
            id = id,
        )
    }

    /// Write the notes section for every note referenced so far.
    ///
    /// Each note becomes one paragraph that starts with a back link to its
    /// reference. The collected notes are consumed.
    pub fn write_notes(ctx: &mut RenderContext<'a>) -> String {
        let notes = ctx.take_notes();
        if notes.is_empty() {
            return String::new();
        }

        let count = notes.len();
        let mut content = String::from("<hr />\n");
        for (id, entry) in notes {
            content.push_str("<p><a name=\"note-");
            content.push_str(itoa::Buffer::new().format(id));
            content.push_str("\"></a><a href=\"#");
            content.push_str(&entry.mark);
            content.push_str("\">");
            content.push_str(itoa::Buffer::new().format(id));
            content.push_str("</a>");
            content.push_str(&write_elements(ctx, &entry.note.elements, true));
            content.push_str("</p>\n");
        }
        tracing::debug!(notes = count, "notes section written");
        content
    }
}
