/// Configuration for HTML rendering.
///
/// This module defines the per-writer settings read by a render. The CSS
/// keyword settings are validated when they are set, so a render never sees an
/// illegal value.
use crate::common::Result;
use crate::common::validate::{validate_css_generic_font, validate_css_white_space};

/// Numbering id that marks a list as unordered.
pub const UNORDERED_NUMBERING_ID: u32 = 8;

/// Configuration options for HTML rendering.
///
/// # Examples
///
/// ```rust
/// use loquat::html::HtmlOptions;
///
/// let options = HtmlOptions::new()
///     .with_default_generic_font("sans-serif")?
///     .with_default_white_space("pre-wrap")?
///     .with_output_escaping(true)
///     .with_close_trailing_list(true);
///
/// assert_eq!(options.default_generic_font(), "sans-serif");
/// assert!(HtmlOptions::new().with_default_white_space("wrap").is_err());
/// # Ok::<(), loquat::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlOptions {
    /// Generic family appended to the default font, empty for none
    default_generic_font: String,
    /// Default `white-space` of the document, empty for none
    default_white_space: String,
    /// Escaping override; `None` follows the process-wide setting
    pub output_escaping: Option<bool>,
    /// Numbering id whose lists render as `<ul>`; every other id gives `<ol>`
    pub unordered_numbering_id: u32,
    /// Close a list that is still open when the line stream ends
    pub close_trailing_list: bool,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            default_generic_font: String::new(),
            default_white_space: String::new(),
            output_escaping: None,
            unordered_numbering_id: UNORDERED_NUMBERING_ID,
            close_trailing_list: false,
        }
    }
}

impl HtmlOptions {
    /// Create a new `HtmlOptions` with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Generic font family used after the default font name.
    #[inline]
    pub fn default_generic_font(&self) -> &str {
        &self.default_generic_font
    }

    /// Default `white-space` value.
    #[inline]
    pub fn default_white_space(&self) -> &str {
        &self.default_white_space
    }

    /// Set the generic font family, such as `serif` or `monospace`.
    ///
    /// Fails with [`crate::Error::InvalidCssValue`] for anything that is not a
    /// CSS generic family name.
    pub fn set_default_generic_font(&mut self, value: &str) -> Result<()> {
        self.default_generic_font = validate_css_generic_font(value)?;
        Ok(())
    }

    /// Set the default `white-space` value.
    pub fn set_default_white_space(&mut self, value: &str) -> Result<()> {
        self.default_white_space = validate_css_white_space(value)?;
        Ok(())
    }

    /// Builder form of [`set_default_generic_font`](Self::set_default_generic_font).
    pub fn with_default_generic_font(mut self, value: &str) -> Result<Self> {
        self.set_default_generic_font(value)?;
        Ok(self)
    }

    /// Builder form of [`set_default_white_space`](Self::set_default_white_space).
    pub fn with_default_white_space(mut self, value: &str) -> Result<Self> {
        self.set_default_white_space(value)?;
        Ok(self)
    }

    /// Force escaping on or off for this writer.
    #[inline]
    pub fn with_output_escaping(mut self, enabled: bool) -> Self {
        self.output_escaping = Some(enabled);
        self
    }

    /// Set the numbering id rendered as an unordered list.
    #[inline]
    pub fn with_unordered_numbering_id(mut self, id: u32) -> Self {
        self.unordered_numbering_id = id;
        self
    }

    /// Close a list left open at the end of the line stream.
    ///
    /// Off by default: a list run that reaches the end of the stream is left
    /// without its closing tag.
    #[inline]
    pub fn with_close_trailing_list(mut self, close: bool) -> Self {
        self.close_trailing_list = close;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_html_options_default() {
        let options = HtmlOptions::default();
        assert_eq!(options.default_generic_font(), "");
        assert_eq!(options.default_white_space(), "");
        assert_eq!(options.output_escaping, None);
        assert_eq!(options.unordered_numbering_id, 8);
        assert!(!options.close_trailing_list);
    }

    #[test]
    fn test_html_options_builder() {
        let options = HtmlOptions::new()
            .with_default_generic_font("monospace")
            .unwrap()
            .with_default_white_space("nowrap")
            .unwrap()
            .with_unordered_numbering_id(1)
            .with_output_escaping(false);

        assert_eq!(options.default_generic_font(), "monospace");
        assert_eq!(options.default_white_space(), "nowrap");
        assert_eq!(options.unordered_numbering_id, 1);
        assert_eq!(options.output_escaping, Some(false));
    }

    #[test]
    fn test_invalid_value_keeps_previous() {
        let mut options = HtmlOptions::new().with_default_generic_font("serif").unwrap();
        let err = options.set_default_generic_font("Comic Sans").unwrap_err();
        assert!(matches!(err, Error::InvalidCssValue { property: "font-family", .. }));
        assert_eq!(options.default_generic_font(), "serif");
    }
}
