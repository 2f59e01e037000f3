//! CLI-specific error types with exit codes.
//!
//! This module defines error types specific to the CLI layer,
//! wrapping library errors and providing appropriate exit codes.

use std::fmt;
use volpath::Error as LibError;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Library error (wrapped).
    Library(LibError),

    /// I/O error.
    Io(std::io::Error),

    /// Configuration error.
    Config(String),

    /// Semantic failure (e.g., reference not available) - exit code 1.
    SemanticFailure(String),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: Operation-level failure (unavailable reference, strict fallback,
    ///   library or I/O error)
    /// - 2: Usage or validation error (also clap's default for bad
    ///   arguments)
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::SemanticFailure(_) | CliError::Library(_) | CliError::Io(_) => 1,
            CliError::Config(_) => 2,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Library(e) => write!(f, "{e}"),
            CliError::Io(e) => write!(f, "I/O error: {e}"),
            CliError::Config(msg) => write!(f, "Configuration error: {msg}"),
            CliError::SemanticFailure(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Library(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        CliError::Library(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_semantic_failure_exit_code() {
        let err = CliError::SemanticFailure("not available".to_string());
        assert_eq!(err.exit_code(), 1);
        assert_eq!(format!("{err}"), "not available");
    }

    #[test]
    fn test_config_exit_code() {
        let err = CliError::Config("bad override".to_string());
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_library_error_wrapping() {
        let err: CliError = LibError::InvalidReference {
            reference: String::new(),
            reason: "empty".to_string(),
        }
        .into();
        assert_eq!(err.exit_code(), 1);
        assert!(format!("{err}").contains("invalid reference"));
    }
}
