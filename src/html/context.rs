//! Render-scoped state.
//!
//! A [`RenderContext`] is created at the start of every render and dropped at
//! its end. It holds the notes collected while walking the body and a snapshot
//! of the process-wide settings, so nothing leaks from one render into the
//! next even when a writer is reused.
use std::borrow::Cow;
use std::collections::BTreeMap;

use super::config::HtmlOptions;
use crate::common::html::escape_html_if;
use crate::common::settings::{self, Settings};
use crate::document::{Document, Note};

/// Which note collection a reference points into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteKind {
    Footnote,
    Endnote,
}

impl NoteKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoteKind::Footnote => "footnote",
            NoteKind::Endnote => "endnote",
        }
    }
}

/// A note referenced from the body.
#[derive(Debug, Clone)]
pub struct NoteEntry<'a> {
    /// Anchor name of the reference, `footnote-{relation id}` or `endnote-{relation id}`
    pub mark: String,
    pub note: &'a Note,
}

/// Mutable state of one render.
#[derive(Debug)]
pub struct RenderContext<'a> {
    document: &'a Document,
    options: &'a HtmlOptions,
    settings: Settings,
    escaping: bool,
    notes: BTreeMap<u32, NoteEntry<'a>>,
}

impl<'a> RenderContext<'a> {
    /// Start a render of `document`, capturing the current process-wide settings.
    pub fn new(document: &'a Document, options: &'a HtmlOptions) -> Self {
        Self::with_settings(document, options, settings::snapshot())
    }

    /// Start a render with explicit settings instead of the process-wide ones.
    pub fn with_settings(document: &'a Document, options: &'a HtmlOptions, settings: Settings) -> Self {
        let escaping = options
            .output_escaping
            .unwrap_or(settings.output_escaping_enabled);
        Self {
            document,
            options,
            settings,
            escaping,
            notes: BTreeMap::new(),
        }
    }

    #[inline]
    pub fn document(&self) -> &'a Document {
        self.document
    }

    #[inline]
    pub fn options(&self) -> &'a HtmlOptions {
        self.options
    }

    /// Whether text is escaped in this render.
    #[inline]
    pub fn is_escaping(&self) -> bool {
        self.escaping
    }

    /// Escape `text` if escaping is enabled for this render.
    #[inline]
    pub fn escape<'s>(&self, text: &'s str) -> Cow<'s, str> {
        escape_html_if(text, self.escaping)
    }

    /// Default font name: the document's own, else the process-wide one.
    pub fn default_font_name(&self) -> &str {
        self.document
            .default_font_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(self.settings.default_font_name.as_str())
    }

    /// Default font size in points: the document's own, else the process-wide one.
    pub fn default_font_size(&self) -> f32 {
        self.document
            .default_font_size
            .filter(|size| *size > 0.0)
            .unwrap_or(self.settings.default_font_size)
    }

    /// Register a note reference and return its 1-based note id.
    ///
    /// Ids follow the order in which references are met in the body.
    pub fn add_note(&mut self, kind: NoteKind, note: &'a Note) -> u32 {
        let id = self.notes.len() as u32 + 1;
        let mark = format!("{}-{}", kind.as_str(), note.relation_id);
        self.notes.insert(id, NoteEntry { mark, note });
        id
    }

    /// Whether any note has been referenced so far.
    #[inline]
    pub fn has_notes(&self) -> bool {
        !self.notes.is_empty()
    }

    /// Note marks by note id.
    pub fn notes(&self) -> impl Iterator<Item = (u32, &str)> {
        self.notes.iter().map(|(id, entry)| (*id, entry.mark.as_str()))
    }

    /// Remove and return the collected notes, in note id order.
    pub fn take_notes(&mut self) -> BTreeMap<u32, NoteEntry<'a>> {
        std::mem::take(&mut self.notes)
    }
}
