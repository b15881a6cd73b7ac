//! Loquat - HTML rendering for in-memory word-processing documents
//!
//! A [`Document`] is a tree of sections and elements (text, runs, list items,
//! links, titles, tables, notes, images). [`HtmlWriter`] turns it into a
//! standalone HTML page: a `<head>` with the document properties and a style
//! sheet, and a `<body>` with one fragment per element. List items are written
//! as bare `<li>` lines and grouped into `<ul>`/`<ol>` containers afterwards.
//!
//! # Features
//!
//! - **yaml** (default): load documents with [`Document::from_yaml_str`]
//! - **images** (default): embed images as base64 data URIs
//!
//! # Example
//!
//! ```rust
//! use loquat::{Document, HtmlOptions, HtmlWriter};
//! use loquat::document::{Element, Text, Title};
//!
//! let mut doc = Document::new();
//! doc.info.title = Some("Notes".to_string());
//! doc.add_section()
//!     .add(Element::Title(Title::new("Notes", 1)))
//!     .add(Element::Text(Text::new("Fish & chips")));
//!
//! let options = HtmlOptions::new()
//!     .with_default_generic_font("sans-serif")?
//!     .with_output_escaping(true);
//! let html = HtmlWriter::with_options(&doc, options).content();
//!
//! assert!(html.contains("<h1>Notes</h1>"));
//! assert!(html.contains("<p>Fish &amp; chips</p>"));
//! # Ok::<(), loquat::Error>(())
//! ```
//!
//! # Example - Writer by name
//!
//! ```no_run
//! use loquat::{Document, create_writer};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let doc = Document::from_yaml_str(&std::fs::read_to_string("report.yaml")?)?;
//! create_writer(&doc, "HTML")?.save(std::path::Path::new("report.html"))?;
//! # Ok(())
//! # }
//! ```
pub mod common;
pub mod document;
pub mod html;
pub mod io;

pub use common::{Error, Result};
pub use document::Document;
pub use html::{HtmlOptions, HtmlWriter};
pub use io::{DocumentWriter, WriterKind, create_writer};
