//! Result types for path resolution.

use std::fmt;
use std::path::PathBuf;

use crate::path::compose::SEPARATOR;

/// An absolute filesystem path produced by resolution.
///
/// Invariant: starts with the separator and never ends with one unless it is
/// the bare root. The type is only constructed by the resolver; other code
/// consumes it as a string or `PathBuf`.
///
/// # Examples
///
/// ```
/// use volpath::{MockEnvironment, StorageVolume, TreeResolver, VolumeCatalog};
///
/// let resolver = TreeResolver::new(VolumeCatalog::new(Box::new(
///     MockEnvironment::new()
///         .with_volume(StorageVolume::primary().with_mount("/storage/emulated/0")),
/// )));
///
/// let resolution = resolver.resolve("primary:Documents").unwrap();
/// assert_eq!(resolution.path().as_str(), "/storage/emulated/0/Documents");
/// assert!(!resolution.path().is_root());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AbsolutePath(String);

impl AbsolutePath {
    /// Wrap a composed path. An empty composition denotes the filesystem
    /// root (a mount of `/` strips to the empty string before composition).
    pub(crate) fn new(composed: String) -> Self {
        if composed.is_empty() {
            Self::root()
        } else {
            Self(composed)
        }
    }

    /// The bare filesystem root.
    #[must_use]
    pub fn root() -> Self {
        Self(SEPARATOR.to_string())
    }

    /// The path as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the bare filesystem root.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.len() == 1 && self.0.starts_with(SEPARATOR)
    }

    /// Convert into the underlying string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for AbsolutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for AbsolutePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<AbsolutePath> for PathBuf {
    fn from(path: AbsolutePath) -> Self {
        PathBuf::from(path.0)
    }
}

/// The outcome of resolving a reference.
///
/// Resolution prefers a degraded result over failure: when the referenced
/// volume cannot be found, the path falls back to the filesystem root and
/// the `root_fallback` flag records that the path is a sentinel rather than
/// a real location. Callers that must not act on the sentinel check
/// [`is_root_fallback`] before using the path.
///
/// [`is_root_fallback`]: Resolution::is_root_fallback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    path: AbsolutePath,
    root_fallback: bool,
}

impl Resolution {
    /// A resolution that located the referenced volume.
    pub(crate) fn resolved(path: AbsolutePath) -> Self {
        Self {
            path,
            root_fallback: false,
        }
    }

    /// The degraded result for an unresolvable volume.
    pub(crate) fn root_fallback() -> Self {
        Self {
            path: AbsolutePath::root(),
            root_fallback: true,
        }
    }

    /// The resolved absolute path.
    #[must_use]
    pub fn path(&self) -> &AbsolutePath {
        &self.path
    }

    /// Whether the path is the degraded root sentinel rather than a real
    /// location.
    #[must_use]
    pub fn is_root_fallback(&self) -> bool {
        self.root_fallback
    }

    /// Convert into the underlying path.
    #[must_use]
    pub fn into_path(self) -> AbsolutePath {
        self.path
    }
}
