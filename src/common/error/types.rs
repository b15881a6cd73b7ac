//! Unified error types for the loquat library.
//!
//! Configuration and sink failures surface through this type. Per-element and
//! per-line problems during rendering are absorbed by the writer and never
//! reach the caller.
use thiserror::Error;

/// Main error type for loquat operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error while writing the rendered output
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration value is not a legal CSS keyword for its property
    #[error("Invalid value for CSS property '{property}': \"{value}\"")]
    InvalidCssValue {
        /// CSS property being configured
        property: &'static str,
        /// The rejected value
        value: String,
    },

    /// No writer is registered under the requested name
    #[error("\"{0}\" is not a valid writer")]
    UnsupportedWriter(String),

    /// Document description could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Result type for loquat operations.
pub type Result<T> = std::result::Result<T, Error>;
