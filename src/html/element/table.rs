use super::write_elements;
use crate::common::css::{CssDeclarations, points};
use crate::document::{Table, VMerge};
use crate::html::context::RenderContext;
use crate::html::style::{inline_style_attribute, table_css};

/// Writes a table with its rows and cells.
///
/// Horizontally merged cells get a `colspan`. A cell that starts a vertical
/// merge gets a `rowspan` covering the cells that continue it, and those are
/// not written.
pub struct TableWriter<'a> {
    table: &'a Table,
}

impl<'a> TableWriter<'a> {
    pub fn new(table: &'a Table) -> Self {
        Self { table }
    }

    pub fn write(&self, ctx: &mut RenderContext<'a>) -> String {
        let table_style = self
            .table
            .style
            .as_ref()
            .map(|style| inline_style_attribute(ctx, &table_css(style)))
            .unwrap_or_default();

        let mut content = format!("<table{}>\n", table_style);
        for (row_index, row) in self.table.rows.iter().enumerate() {
            let mut row_css = CssDeclarations::new();
            if let Some(height) = row.height {
                row_css.set("height", points(height as f32 / 20.0));
            }
            content.push_str("<tr");
            content.push_str(&inline_style_attribute(ctx, &row_css));
            content.push_str(">\n");

            let cell_tag = if row.header { "th" } else { "td" };
            for (cell, column) in row.cells.iter().zip(row.grid_columns()) {
                if cell.v_merge == Some(VMerge::Continue) {
                    continue;
                }

                content.push('<');
                content.push_str(cell_tag);
                let span = cell.span();
                if span > 1 {
                    content.push_str(" colspan=\"");
                    content.push_str(itoa::Buffer::new().format(span));
                    content.push('"');
                }
                let row_span = self.table.row_span(row_index, column);
                if row_span > 1 {
                    content.push_str(" rowspan=\"");
                    content.push_str(itoa::Buffer::new().format(row_span));
                    content.push('"');
                }
                if let Some(background) = cell.background {
                    let mut css = CssDeclarations::new();
                    css.set("background-color", background.to_string());
                    content.push_str(&inline_style_attribute(ctx, &css));
                }
                content.push_str(">\n");
                content.push_str(&write_elements(ctx, &cell.elements, false));
                content.push_str("</");
                content.push_str(cell_tag);
                content.push_str(">\n");
            }
            content.push_str("</tr>\n");
        }
        content.push_str("</table>\n");
        content
    }
}
