//! Validation of CSS keyword values accepted by the writer configuration.
//!
//! The keyword lists are compile-time perfect hash sets. The empty string is
//! accepted everywhere and means "do not emit the declaration".
use phf::phf_set;

use super::error::{Error, Result};

/// Generic font families defined by CSS Fonts Level 4.
static CSS_GENERIC_FONTS: phf::Set<&'static str> = phf_set! {
    "",
    "serif",
    "sans-serif",
    "monospace",
    "cursive",
    "fantasy",
    "system-ui",
    "ui-serif",
    "ui-sans-serif",
    "ui-monospace",
    "ui-rounded",
    "emoji",
    "math",
    "fangsong",
};

/// Keywords of the `white-space` property.
static CSS_WHITE_SPACE: phf::Set<&'static str> = phf_set! {
    "",
    "normal",
    "nowrap",
    "pre",
    "pre-wrap",
    "pre-line",
    "break-spaces",
};

/// Check that `value` names a CSS generic font family.
///
/// # Examples
///
/// ```
/// use loquat::common::validate::validate_css_generic_font;
///
/// assert_eq!(validate_css_generic_font("serif").unwrap(), "serif");
/// assert!(validate_css_generic_font("Times New Roman").is_err());
/// ```
pub fn validate_css_generic_font(value: &str) -> Result<String> {
    validate_keyword(&CSS_GENERIC_FONTS, "font-family", value)
}

/// Check that `value` is a legal `white-space` keyword.
pub fn validate_css_white_space(value: &str) -> Result<String> {
    validate_keyword(&CSS_WHITE_SPACE, "white-space", value)
}

fn validate_keyword(
    allowed: &phf::Set<&'static str>,
    property: &'static str,
    value: &str,
) -> Result<String> {
    if allowed.contains(value) {
        Ok(value.to_string())
    } else {
        Err(Error::InvalidCssValue {
            property,
            value: value.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generic_fonts() {
        for font in ["", "serif", "sans-serif", "monospace", "ui-rounded", "fangsong"] {
            assert_eq!(validate_css_generic_font(font).unwrap(), font);
        }
    }

    #[test]
    fn test_generic_font_rejects_family_names() {
        let err = validate_css_generic_font("Arial").unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidCssValue { property: "font-family", ref value } if value == "Arial"
        ));
    }

    #[test]
    fn test_generic_font_is_case_sensitive() {
        assert!(validate_css_generic_font("Serif").is_err());
    }

    #[test]
    fn test_white_space() {
        assert_eq!(validate_css_white_space("pre-wrap").unwrap(), "pre-wrap");
        assert_eq!(validate_css_white_space("").unwrap(), "");
        assert!(validate_css_white_space("wrap").is_err());
    }
}
