//! Error types for the volpath library.
//!
//! This module provides the error hierarchy for reference parsing and
//! environment queries, using `thiserror` for ergonomic error handling.
//!
//! Note that an unresolved *volume* is deliberately not an error: resolution
//! degrades to the filesystem root and reports the degradation through
//! [`crate::path::Resolution`]. The variants here cover inputs that cannot be
//! interpreted at all and environment queries that fail wholesale.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a volpath error.
///
/// # Examples
///
/// ```
/// use volpath::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("/storage/emulated/0".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the volpath library.
#[derive(Debug, Error)]
pub enum Error {
    /// A reference from which no volume key can be extracted.
    #[error("invalid reference '{reference}': {reason}")]
    InvalidReference {
        /// The offending reference string.
        reference: String,
        /// The reason the reference is unusable.
        reason: String,
    },

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// The platform environment could not be queried at all.
    #[error("storage environment unavailable: {detail}")]
    EnvironmentUnavailable {
        /// A description of the failed query.
        detail: String,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if error indicates an uninterpretable reference.
    ///
    /// # Examples
    ///
    /// ```
    /// use volpath::Error;
    ///
    /// let err = Error::InvalidReference {
    ///     reference: String::new(),
    ///     reason: "empty reference".to_string(),
    /// };
    /// assert!(err.is_invalid_reference());
    /// ```
    #[must_use]
    pub fn is_invalid_reference(&self) -> bool {
        matches!(self, Self::InvalidReference { .. })
    }

    /// Check if error indicates a failed environment query.
    ///
    /// # Examples
    ///
    /// ```
    /// use volpath::Error;
    ///
    /// let err = Error::EnvironmentUnavailable {
    ///     detail: "volume enumeration denied".to_string(),
    /// };
    /// assert!(err.is_environment_unavailable());
    /// ```
    #[must_use]
    pub fn is_environment_unavailable(&self) -> bool {
        matches!(self, Self::EnvironmentUnavailable { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_reference_error() {
        let err = Error::InvalidReference {
            reference: String::new(),
            reason: "empty reference".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("invalid reference"));
        assert!(display.contains("empty reference"));
        assert!(err.is_invalid_reference());
        assert!(!err.is_environment_unavailable());
    }

    #[test]
    fn test_invalid_path_error() {
        let err = Error::InvalidPath {
            path: PathBuf::from("relative/path"),
            reason: "must be absolute".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("invalid path"));
        assert!(display.contains("must be absolute"));
    }

    #[test]
    fn test_environment_unavailable_error() {
        let err = Error::EnvironmentUnavailable {
            detail: "no documents directory".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("storage environment unavailable"));
        assert!(display.contains("no documents directory"));
        assert!(err.is_environment_unavailable());
    }

    #[test]
    fn test_validation_error() {
        let err = Error::Validation {
            field: "VOLPATH_DOCUMENTS_DIR".to_string(),
            message: "must be an absolute path".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("validation error"));
        assert!(display.contains("VOLPATH_DOCUMENTS_DIR"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        let display = format!("{err}");
        assert!(display.contains("I/O error"));
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<String> {
            Err(Error::InvalidReference {
                reference: String::new(),
                reason: "test".to_string(),
            })
        }

        assert!(returns_result().is_err());
    }
}
