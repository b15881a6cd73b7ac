use super::write_elements;
use crate::document::ListItemRun;
use crate::html::context::RenderContext;
use crate::html::lines::ListItemLine;

/// Writes a list item as a bare `<li>` line.
///
/// The item tag carries the depth, list format and numbering id of the item
/// as `data-` attributes. No `<ul>`/`<ol>` container is written here: which
/// container an item belongs to depends on its neighbours, so containers are
/// added afterwards by [`crate::html::lists::reconstruct_lists`].
pub struct ListItemRunWriter<'a> {
    item: &'a ListItemRun,
}

impl<'a> ListItemRunWriter<'a> {
    pub fn new(item: &'a ListItemRun) -> Self {
        Self { item }
    }

    /// List format token of the item: its numbering style name.
    #[inline]
    pub fn list_format(&self) -> &'a str {
        &self.item.style.numbering_style
    }

    /// Numbering id of the list the item belongs to.
    #[inline]
    pub fn list_id(&self) -> u32 {
        self.item.style.numbering_id
    }

    /// Render the item as a structured line record.
    pub fn line(&self, ctx: &mut RenderContext<'a>) -> ListItemLine {
        let children = write_elements(ctx, &self.item.elements, true);

        let mut text = String::with_capacity(64 + children.len());
        text.push_str("<li data-depth=\"");
        text.push_str(itoa::Buffer::new().format(self.item.depth));
        text.push_str("\" data-liststyle=\"");
        text.push_str(&ctx.escape(self.list_format()));
        text.push_str("\" data-numId=\"");
        text.push_str(itoa::Buffer::new().format(self.list_id()));
        text.push_str("\">");
        text.push_str(&children);
        text.push_str("</li>");

        ListItemLine {
            depth: self.item.depth,
            list_style: self.list_format().to_string(),
            numbering_id: self.list_id(),
            text,
        }
    }

    /// Render the item as a markup fragment ending with a line terminator.
    pub fn write(&self, ctx: &mut RenderContext<'a>) -> String {
        let mut content = self.line(ctx).text;
        content.push('\n');
        content
    }
}
