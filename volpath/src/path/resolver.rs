//! Reference-to-path resolution.
//!
//! This module provides the `TreeResolver` type, which is the main interface
//! for turning an opaque folder reference into an absolute path.

use crate::error::{Error, Result};
use crate::path::compose::{compose, strip_trailing_separator};
use crate::path::types::{AbsolutePath, Resolution};
use crate::reference::{self, DocumentRef};
use crate::volume::VolumeCatalog;

/// Resolves opaque folder references to absolute filesystem paths.
///
/// The pipeline is: parse the reference's document id, look the volume key
/// up in the catalog, then compose mount path and document path at the
/// string level. A volume the catalog cannot find degrades to the filesystem
/// root (flagged on the [`Resolution`]); only a reference from which no
/// volume key can be extracted is an error.
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
/// let resolution = resolver.resolve("primary:Documents/Notes").unwrap();
/// assert_eq!(resolution.path().as_str(), "/storage/emulated/0/Documents/Notes");
///
/// // Unknown volume: degraded root result, not an error.
/// let degraded = resolver.resolve("ZZZZ-0000:Photos").unwrap();
/// assert!(degraded.is_root_fallback());
/// assert_eq!(degraded.path().as_str(), "/");
/// ```
pub struct TreeResolver {
    catalog: VolumeCatalog,
}

impl TreeResolver {
    /// Create a resolver over the given catalog.
    #[must_use]
    pub fn new(catalog: VolumeCatalog) -> Self {
        Self { catalog }
    }

    /// Create a resolver over the real operating system.
    #[must_use]
    pub fn system() -> Self {
        Self::new(VolumeCatalog::system())
    }

    /// The catalog this resolver consults.
    #[must_use]
    pub fn catalog(&self) -> &VolumeCatalog {
        &self.catalog
    }

    /// Resolve a document id of the form `<volume-key>:<document-path>`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidReference`] when no volume key can be
    /// extracted (the empty id). Every other input resolves, possibly to the
    /// flagged root fallback.
    pub fn resolve(&self, document_id: &str) -> Result<Resolution> {
        let reference = DocumentRef::parse(document_id)?;
        Ok(self.resolve_ref(&reference))
    }

    /// Resolve a full picker reference in the `content://` wrapper syntax.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidReference`] when the wrapper carries no tree
    /// document id, or when the id yields no volume key.
    pub fn resolve_uri(&self, uri: &str) -> Result<Resolution> {
        let document_id =
            reference::tree_document_id(uri).ok_or_else(|| Error::InvalidReference {
                reference: uri.to_string(),
                reason: "no tree document id in reference".to_string(),
            })?;
        self.resolve(&document_id)
    }

    /// Resolve an already-parsed reference.
    #[must_use]
    pub fn resolve_ref(&self, reference: &DocumentRef) -> Resolution {
        let Some(mount) = self.catalog.resolve_mount_path(reference.volume_key()) else {
            // Deliberate tolerance: an unresolved volume degrades to the
            // filesystem root instead of failing the call.
            return Resolution::root_fallback();
        };

        let Some(mount) = mount.to_str() else {
            log::warn!(
                "mount path for '{}' is not valid UTF-8",
                reference.volume_key()
            );
            return Resolution::root_fallback();
        };

        let mount = strip_trailing_separator(mount);
        let document_path = strip_trailing_separator(reference.document_path());
        Resolution::resolved(AbsolutePath::new(compose(mount, document_path)))
    }
}
