//! Line model of the intermediate markup.
//!
//! Part writers fill a [`MarkupBuffer`] instead of a flat string. Every line
//! is either a list-item line, carrying the depth, list format and numbering
//! id of the item, or an opaque other line. The list reconstruction pass then
//! works on these records rather than on re-parsed text.
//!
//! List items written by the body writer arrive as structured
//! [`ListItemLine`]s. Markup pushed as text is split into lines and each line
//! is classified with [`ListItemLine::parse`], so a list-item tag that reached
//! the buffer as text is still recognised.
use memchr::{memchr_iter, memmem};
use smallvec::SmallVec;
use std::fmt;

/// Opening of a list-item tag as written by the list item converter.
pub const LIST_ITEM_TAG: &str = "<li data-depth";

/// One list item, rendered on a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItemLine {
    /// Nesting level, zero-based
    pub depth: u32,
    /// List format token (the numbering style name)
    pub list_style: String,
    /// Logical list the item belongs to
    pub numbering_id: u32,
    /// Full markup of the line, without the terminator
    pub text: String,
}

impl ListItemLine {
    /// Classify one line of markup.
    ///
    /// The line is a list item when it contains `<li data-depth` at the start
    /// of the line or right after a space, and the tag's `data-depth`,
    /// `data-liststyle` and `data-numid` attributes (names compared without
    /// case) are all present and well-formed. Anything else is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use loquat::html::lines::ListItemLine;
    ///
    /// let item = ListItemLine::parse(
    ///     r#"<li data-depth="1" data-liststyle="decimal" data-numId="3">x</li>"#,
    /// )
    /// .unwrap();
    /// assert_eq!((item.depth, item.numbering_id), (1, 3));
    ///
    /// assert!(ListItemLine::parse(r#"<li data-depth="one">x</li>"#).is_none());
    /// assert!(ListItemLine::parse(r#"<ul><li data-depth="0">x</li>"#).is_none());
    /// ```
    pub fn parse(line: &str) -> Option<Self> {
        let bytes = line.as_bytes();
        let start = memmem::find_iter(bytes, LIST_ITEM_TAG.as_bytes())
            .find(|&pos| pos == 0 || bytes[pos - 1] == b' ')?;

        let tag = &line[start + "<li".len()..];
        let end = tag.find('>')?;
        let attributes = parse_attributes(&tag[..end]);

        let lookup = |name: &str| {
            attributes
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(name))
                .map(|(_, value)| *value)
        };

        let parsed = (|| {
            Some(Self {
                depth: lookup("data-depth")?.trim().parse().ok()?,
                list_style: lookup("data-liststyle")?.to_string(),
                numbering_id: lookup("data-numid")?.trim().parse().ok()?,
                text: line.to_string(),
            })
        })();

        if parsed.is_none() {
            tracing::debug!(line, "list item tag with unreadable attributes, kept as markup");
        }
        parsed
    }
}

impl fmt::Display for ListItemLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Split the inside of a start tag into `name=value` pairs.
///
/// Values may be double-quoted, single-quoted or bare. Attributes without a
/// value are kept with an empty value. An unterminated quote ends the scan.
fn parse_attributes(tag: &str) -> SmallVec<[(&str, &str); 4]> {
    let mut attributes = SmallVec::new();
    let mut rest = tag.trim_start();

    while !rest.is_empty() {
        let name_end = rest
            .find(|c: char| c == '=' || c.is_ascii_whitespace() || c == '/')
            .unwrap_or(rest.len());
        let name = &rest[..name_end];
        rest = rest[name_end..].trim_start();

        if let Some(after_eq) = rest.strip_prefix('=') {
            let after_eq = after_eq.trim_start();
            let (value, remaining) = match after_eq.chars().next() {
                Some(quote @ ('"' | '\'')) => {
                    let body = &after_eq[1..];
                    match body.find(quote) {
                        Some(close) => (&body[..close], &body[close + 1..]),
                        None => break,
                    }
                },
                _ => {
                    let end = after_eq
                        .find(|c: char| c.is_ascii_whitespace())
                        .unwrap_or(after_eq.len());
                    (&after_eq[..end], &after_eq[end..])
                },
            };
            if !name.is_empty() {
                attributes.push((name, value));
            }
            rest = remaining.trim_start();
        } else {
            if !name.is_empty() {
                attributes.push((name, ""));
            }
            // Stray characters such as a self-closing slash.
            if name_end == 0 {
                rest = rest.get(1..).unwrap_or("").trim_start();
            }
        }
    }

    attributes
}

/// One line of intermediate markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// A list item, without its container
    ListItem(ListItemLine),
    /// Any other markup
    Other(String),
}

impl Line {
    /// Classify a line of markup text.
    pub fn classify(text: &str) -> Self {
        match ListItemLine::parse(text) {
            Some(item) => Line::ListItem(item),
            None => Line::Other(text.to_string()),
        }
    }

    /// Markup of the line, without the terminator.
    pub fn text(&self) -> &str {
        match self {
            Line::ListItem(item) => &item.text,
            Line::Other(text) => text,
        }
    }

    #[inline]
    pub fn is_list_item(&self) -> bool {
        matches!(self, Line::ListItem(_))
    }
}

/// Ordered buffer of rendered lines.
#[derive(Debug, Default)]
pub struct MarkupBuffer {
    lines: Vec<Line>,
    /// Text after the last line terminator
    pending: String,
}

impl MarkupBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append markup text; every completed line is classified.
    pub fn push_markup(&mut self, markup: &str) {
        let mut start = 0;
        for newline in memchr_iter(b'\n', markup.as_bytes()) {
            let piece = &markup[start..newline];
            if self.pending.is_empty() {
                self.lines.push(Line::classify(piece));
            } else {
                self.pending.push_str(piece);
                let line = std::mem::take(&mut self.pending);
                self.lines.push(Line::classify(&line));
            }
            start = newline + 1;
        }
        self.pending.push_str(&markup[start..]);
    }

    /// Append a list item as its own line.
    ///
    /// Unterminated text before it is closed off as a separate line first.
    pub fn push_list_item(&mut self, item: ListItemLine) {
        self.flush_pending();
        self.lines.push(Line::ListItem(item));
    }

    /// Lines so far, not counting unterminated text.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Finish the buffer; unterminated trailing text becomes the last line.
    pub fn into_lines(mut self) -> Vec<Line> {
        self.flush_pending();
        self.lines
    }

    fn flush_pending(&mut self) {
        if !self.pending.is_empty() {
            let line = std::mem::take(&mut self.pending);
            self.lines.push(Line::classify(&line));
        }
    }
}
