//! Tables, rows and cells.
use serde::{Deserialize, Serialize};

use super::element::Element;
use super::style::Alignment;
use crate::common::RGBColor;

/// Table-level formatting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableStyle {
    /// Width as a percentage of the page content width
    pub width_percent: Option<u32>,
    pub alignment: Option<Alignment>,
}

/// Vertical merge state of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VMerge {
    /// First cell of a vertically merged range
    Restart,
    /// Covered by the `Restart` cell above it
    Continue,
}

/// A table cell holding block content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cell {
    /// Number of grid columns the cell spans
    pub grid_span: u32,
    pub v_merge: Option<VMerge>,
    pub background: Option<RGBColor>,
    pub elements: Vec<Element>,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            grid_span: 1,
            v_merge: None,
            background: None,
            elements: Vec::new(),
        }
    }
}

impl Cell {
    /// Create an empty single-column cell.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cell holding `elements`.
    pub fn with_elements(elements: Vec<Element>) -> Self {
        Self {
            elements,
            ..Self::default()
        }
    }

    /// Number of grid columns covered, never less than one.
    #[inline]
    pub fn span(&self) -> usize {
        self.grid_span.max(1) as usize
    }
}

/// A table row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Row {
    /// Repeated header row, rendered with `<th>` cells
    pub header: bool,
    /// Row height in twips
    pub height: Option<u32>,
    pub cells: Vec<Cell>,
}

impl Row {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self {
            cells,
            ..Self::default()
        }
    }

    /// Grid column of every cell in this row.
    pub fn grid_columns(&self) -> Vec<usize> {
        let mut column = 0;
        self.cells
            .iter()
            .map(|cell| {
                let start = column;
                column += cell.span();
                start
            })
            .collect()
    }

    /// The cell starting at grid column `column`, if any.
    pub fn cell_at_column(&self, column: usize) -> Option<&Cell> {
        let mut start = 0;
        for cell in &self.cells {
            if start == column {
                return Some(cell);
            }
            if start > column {
                break;
            }
            start += cell.span();
        }
        None
    }
}

/// A table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Table {
    pub style: Option<TableStyle>,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { style: None, rows }
    }

    /// Get the number of rows in the table.
    #[inline]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of rows covered by the cell at (`row`, grid `column`).
    ///
    /// A cell that starts a vertical merge spans itself plus every directly
    /// following row whose cell at the same grid column continues the merge.
    pub fn row_span(&self, row: usize, column: usize) -> usize {
        let starts_merge = self
            .rows
            .get(row)
            .and_then(|r| r.cell_at_column(column))
            .is_some_and(|cell| cell.v_merge == Some(VMerge::Restart));
        if !starts_merge {
            return 1;
        }

        1 + self.rows[row + 1..]
            .iter()
            .take_while(|r| {
                r.cell_at_column(column)
                    .is_some_and(|cell| cell.v_merge == Some(VMerge::Continue))
            })
            .count()
    }
}
