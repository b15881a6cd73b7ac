//! HTML text utilities shared by the writers.

mod escape;

pub use escape::{escape_html, escape_html_if};
