/// A line break inside a paragraph, an empty paragraph outside one.
pub(super) fn write(without_p: bool) -> String {
    if without_p {
        "<br />".to_string()
    } else {
        "<p>&nbsp;</p>\n".to_string()
    }
}
