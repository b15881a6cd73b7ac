//! Error conversion implementations.
//!
//! This module contains From trait implementations to convert from dependency
//! error types to the unified Error type.

use super::types::Error;

// A failed persist still owns the temporary file, which is removed when the
// error is dropped; only the underlying IO error is kept.
impl From<tempfile::PersistError> for Error {
    fn from(err: tempfile::PersistError) -> Self {
        Error::Io(err.error)
    }
}

#[cfg(feature = "yaml")]
impl From<serde_saphyr::Error> for Error {
    fn from(err: serde_saphyr::Error) -> Self {
        Error::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persist_error_keeps_io_error() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let missing = std::env::temp_dir()
            .join("loquat-missing-dir")
            .join("nested")
            .join("out.html");
        let err = file.persist(&missing).unwrap_err();
        let converted = Error::from(err);
        assert!(matches!(converted, Error::Io(_)));
    }

    #[test]
    fn test_error_messages() {
        let err = Error::InvalidCssValue {
            property: "white-space",
            value: "wrap".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for CSS property 'white-space': \"wrap\""
        );
        assert_eq!(
            Error::UnsupportedWriter("RTF".to_string()).to_string(),
            "\"RTF\" is not a valid writer"
        );
    }
}
