//! Common types and utilities shared by the document model and the writers.

// Submodule declarations
pub mod css;
pub mod error;
pub mod html;
pub mod settings;
pub mod style;
pub mod validate;

// Re-exports for convenience
pub use error::{Error, Result};
pub use style::RGBColor;
