//! Configuration for the storage environment.
//!
//! There is no persistent configuration file. Configuration is a plain value
//! type with environment variable overrides (`VOLPATH_*`), applied with
//! higher precedence than the platform-derived defaults:
//!
//! - `VOLPATH_DOCUMENTS_DIR`: target directory of the "home" alias.
//! - `VOLPATH_DOWNLOADS_DIR`: target directory of the "downloads" alias.
//! - `VOLPATH_PRIMARY_ROOT`: mount path treated as the primary volume's
//!   root during enumeration.
//!
//! # Examples
//!
//! ```
//! use volpath::Config;
//! use std::path::PathBuf;
//!
//! let config = Config {
//!     documents_dir: Some(PathBuf::from("/home/user/Documents")),
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

use std::env;
use std::path::PathBuf;

use crate::error::{Error, Result};

/// Overrides for the directories the storage environment reports.
///
/// A `None` field means "use the platform default". All values must be
/// absolute paths.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Target directory of the "home" alias.
    pub documents_dir: Option<PathBuf>,

    /// Target directory of the "downloads" alias.
    pub downloads_dir: Option<PathBuf>,

    /// Mount path treated as the primary volume's root.
    pub primary_root: Option<PathBuf>,
}

impl Config {
    /// Build a configuration from `VOLPATH_*` environment variables.
    ///
    /// Unset variables leave the corresponding field at `None`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if a set variable is not an absolute
    /// path.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build a configuration from an arbitrary variable lookup.
    ///
    /// `from_env` delegates here; tests supply a closure instead of mutating
    /// process-global environment state.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if a returned value is not an absolute
    /// path.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self {
            documents_dir: Self::path_var(&lookup, "VOLPATH_DOCUMENTS_DIR")?,
            downloads_dir: Self::path_var(&lookup, "VOLPATH_DOWNLOADS_DIR")?,
            primary_root: Self::path_var(&lookup, "VOLPATH_PRIMARY_ROOT")?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that every set override is an absolute path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the offending field.
    pub fn validate(&self) -> Result<()> {
        Self::require_absolute("documents_dir", self.documents_dir.as_ref())?;
        Self::require_absolute("downloads_dir", self.downloads_dir.as_ref())?;
        Self::require_absolute("primary_root", self.primary_root.as_ref())?;
        Ok(())
    }

    fn path_var<F>(lookup: &F, name: &str) -> Result<Option<PathBuf>>
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(name) {
            Some(value) if value.is_empty() => Err(Error::Validation {
                field: name.to_string(),
                message: "must not be empty".to_string(),
            }),
            Some(value) => Ok(Some(PathBuf::from(value))),
            None => Ok(None),
        }
    }

    fn require_absolute(field: &str, path: Option<&PathBuf>) -> Result<()> {
        match path {
            Some(p) if !p.is_absolute() => Err(Error::Validation {
                field: field.to_string(),
                message: "must be an absolute path".to_string(),
            }),
            _ => Ok(()),
        }
    }
}
