use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;
use std::borrow::Cow;

const HTML_SPECIAL: [&str; 5] = ["&", "<", ">", "\"", "'"];
const HTML_ENTITIES: [&str; 5] = ["&amp;", "&lt;", "&gt;", "&quot;", "&#039;"];

// Static initialization: automaton is built only once, thread-safe
static HTML_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .build(HTML_SPECIAL)
        .expect("Failed to build HTML escaper")
});

/// Escape the HTML special characters, quotes included.
///
/// Single quotes become the numeric reference `&#039;` so the output is safe
/// inside both double- and single-quoted attribute values.
///
/// # Examples
///
/// ```
/// use loquat::common::html::escape_html;
/// assert_eq!(escape_html("a & b"), "a &amp; b");
/// assert_eq!(escape_html("<b class='x'>"), "&lt;b class=&#039;x&#039;&gt;");
/// ```
#[inline]
pub fn escape_html(s: &str) -> String {
    HTML_ESCAPER.replace_all(s, &HTML_ENTITIES)
}

/// Escape `s` only when `enabled` is set, borrowing it untouched otherwise.
///
/// Writers call this with the escaping flag captured for the current render,
/// see [`crate::common::settings::is_output_escaping_enabled`].
#[inline]
pub fn escape_html_if(s: &str, enabled: bool) -> Cow<'_, str> {
    if enabled && HTML_ESCAPER.is_match(s) {
        Cow::Owned(escape_html(s))
    } else {
        Cow::Borrowed(s)
    }
}
