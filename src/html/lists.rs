//! List container reconstruction.
//!
//! The list item converter writes bare `<li>` lines. This pass walks the
//! finished line stream once and wraps every contiguous run of list-item lines
//! in a `<ul>` or `<ol>` container. The container kind of a run is decided by
//! the numbering id of its first item: the unordered sentinel id gives `<ul>`,
//! any other id gives `<ol>`. Items inside a run are not checked against the
//! first one, and deeper items are not given containers of their own.
use super::config::HtmlOptions;
use super::lines::Line;

/// Kind of list container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// `<ul>`
    Unordered,
    /// `<ol>`
    Ordered,
}

impl ListKind {
    /// Container kind for a run whose first item has `numbering_id`.
    #[inline]
    pub fn for_numbering_id(numbering_id: u32, unordered_id: u32) -> Self {
        if numbering_id == unordered_id {
            ListKind::Unordered
        } else {
            ListKind::Ordered
        }
    }

    pub fn open_tag(&self) -> &'static str {
        match self {
            ListKind::Unordered => "<ul>",
            ListKind::Ordered => "<ol>",
        }
    }

    pub fn close_tag(&self) -> &'static str {
        match self {
            ListKind::Unordered => "</ul>",
            ListKind::Ordered => "</ol>",
        }
    }
}

/// Rules of the reconstruction pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListRules {
    /// Numbering id rendered as `<ul>`
    pub unordered_numbering_id: u32,
    /// Close a run still open when the stream ends
    pub close_trailing_list: bool,
}

impl From<&HtmlOptions> for ListRules {
    fn from(options: &HtmlOptions) -> Self {
        Self {
            unordered_numbering_id: options.unordered_numbering_id,
            close_trailing_list: options.close_trailing_list,
        }
    }
}

/// Wrap runs of list-item lines in list containers and join the lines.
///
/// Every output line, container tags included, ends with `\n`.
///
/// # Examples
///
/// ```rust
/// use loquat::html::lines::Line;
/// use loquat::html::lists::{reconstruct_lists, ListRules};
///
/// let item = r#"<li data-depth="0" data-liststyle="bullets" data-numId="8">tea</li>"#;
/// let lines = [Line::classify("<p>Drinks</p>"), Line::classify(item), Line::classify("<hr />")];
/// let rules = ListRules { unordered_numbering_id: 8, close_trailing_list: false };
///
/// assert_eq!(
///     reconstruct_lists(&lines, rules),
///     format!("<p>Drinks</p>\n<ul>\n{}\n</ul>\n<hr />\n", item),
/// );
/// ```
pub fn reconstruct_lists(lines: &[Line], rules: ListRules) -> String {
    let capacity = lines.iter().map(|line| line.text().len() + 1).sum::<usize>();
    let mut out = String::with_capacity(capacity + 64);
    // Kind of the run being written; `None` while outside a run.
    let mut open: Option<ListKind> = None;

    for line in lines {
        match line {
            Line::ListItem(item) => {
                if open.is_none() {
                    let kind =
                        ListKind::for_numbering_id(item.numbering_id, rules.unordered_numbering_id);
                    tracing::trace!(
                        numbering_id = item.numbering_id,
                        depth = item.depth,
                        ?kind,
                        "opening list"
                    );
                    out.push_str(kind.open_tag());
                    out.push('\n');
                    open = Some(kind);
                }
            },
            Line::Other(_) => {
                if let Some(kind) = open.take() {
                    out.push_str(kind.close_tag());
                    out.push('\n');
                }
            },
        }
        out.push_str(line.text());
        out.push('\n');
    }

    if let Some(kind) = open {
        if rules.close_trailing_list {
            out.push_str(kind.close_tag());
            out.push('\n');
        } else {
            tracing::debug!(?kind, "line stream ended inside a list, container left open");
        }
    }

    out
}
