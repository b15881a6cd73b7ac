use crate::document::Title;
use crate::html::context::RenderContext;
use crate::html::style::heading_level;

/// Writes a heading at the level given by [`heading_level`].
pub(super) struct TitleWriter<'a> {
    title: &'a Title,
}

impl<'a> TitleWriter<'a> {
    pub(super) fn new(title: &'a Title) -> Self {
        Self { title }
    }

    pub(super) fn level(&self) -> u32 {
        heading_level(self.title.depth)
    }

    pub(super) fn write(&self, ctx: &mut RenderContext<'a>) -> String {
        let mut level = itoa::Buffer::new();
        let level = level.format(self.level());
        format!(
            "<h{level}>{}</h{level}>\n",
            ctx.escape(&self.title.text),
            level = level
        )
    }
}
