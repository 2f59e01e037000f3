//! Core types for volume enumeration.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::reference::VolumeKey;

/// One enumerable storage location on the device.
///
/// A volume carries at most one of two identities: the primary flag (the
/// device's internal storage) or a UUID (a removable volume). A volume with
/// neither is not addressable and never matches a key.
///
/// The two mount-path fields model the two historical platform query styles;
/// which one is consulted is decided by the capability-probed strategy in
/// [`crate::volume::strategy`], not by the volume itself.
///
/// # Examples
///
/// ```
/// use volpath::{StorageVolume, VolumeKey};
///
/// let volume = StorageVolume::removable("ABCD-1234")
///     .with_directory("/storage/ABCD-1234");
/// assert!(volume.matches(&VolumeKey::from("ABCD-1234")));
/// assert!(!volume.matches(&VolumeKey::Primary));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StorageVolume {
    /// UUID of a removable volume, if any.
    uuid: Option<String>,
    /// Whether this is the device's primary internal volume.
    primary: bool,
    /// Mount path as reported by the current-generation query style.
    directory: Option<PathBuf>,
    /// Mount path as reported by the older query style.
    legacy_path: Option<PathBuf>,
}

impl StorageVolume {
    /// Create the primary internal volume. No mount paths are set yet.
    #[must_use]
    pub fn primary() -> Self {
        Self {
            uuid: None,
            primary: true,
            directory: None,
            legacy_path: None,
        }
    }

    /// Create a removable volume identified by UUID. No mount paths are set
    /// yet.
    #[must_use]
    pub fn removable(uuid: impl Into<String>) -> Self {
        Self {
            uuid: Some(uuid.into()),
            primary: false,
            directory: None,
            legacy_path: None,
        }
    }

    /// Create a volume with neither identity. Such a volume is enumerable
    /// but never matches a key.
    #[must_use]
    pub fn unaddressable() -> Self {
        Self {
            uuid: None,
            primary: false,
            directory: None,
            legacy_path: None,
        }
    }

    /// Set the mount path reported by the current-generation query style.
    #[must_use]
    pub fn with_directory(mut self, path: impl Into<PathBuf>) -> Self {
        self.directory = Some(path.into());
        self
    }

    /// Set the mount path reported by the older query style.
    #[must_use]
    pub fn with_legacy_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.legacy_path = Some(path.into());
        self
    }

    /// Set both mount-path fields to the same path.
    ///
    /// Real platforms that support the current query style report the same
    /// location through both; this is the common construction for them.
    #[must_use]
    pub fn with_mount(self, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        self.with_directory(path.clone()).with_legacy_path(path)
    }

    /// UUID of a removable volume, if any.
    #[must_use]
    pub fn uuid(&self) -> Option<&str> {
        self.uuid.as_deref()
    }

    /// Whether this is the device's primary internal volume.
    #[must_use]
    pub fn is_primary(&self) -> bool {
        self.primary
    }

    /// Mount path per the current-generation query style.
    #[must_use]
    pub fn directory(&self) -> Option<&Path> {
        self.directory.as_deref()
    }

    /// Mount path per the older query style.
    #[must_use]
    pub fn legacy_path(&self) -> Option<&Path> {
        self.legacy_path.as_deref()
    }

    /// Whether a key selects this volume.
    ///
    /// The primary marker matches the primary volume; a UUID key matches a
    /// volume carrying the same UUID. Alias keys never match an enumerated
    /// volume; they are resolved from the environment directly.
    #[must_use]
    pub fn matches(&self, key: &VolumeKey) -> bool {
        let primary_match = self.primary && *key == VolumeKey::Primary;
        let uuid_match = match (&self.uuid, key) {
            (Some(uuid), VolumeKey::Uuid(wanted)) => uuid == wanted,
            _ => false,
        };
        primary_match || uuid_match
    }
}

/// Which mount-path query generations the running platform supports.
///
/// # Examples
///
/// ```
/// use volpath::PlatformCapabilities;
///
/// let modern = PlatformCapabilities::modern();
/// assert!(modern.directory_query);
///
/// let legacy = PlatformCapabilities::legacy();
/// assert!(!legacy.directory_query);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformCapabilities {
    /// Whether the current-generation directory query is available.
    pub directory_query: bool,
}

impl PlatformCapabilities {
    /// A platform generation that supports the directory query.
    #[must_use]
    pub const fn modern() -> Self {
        Self {
            directory_query: true,
        }
    }

    /// A platform generation that predates the directory query.
    #[must_use]
    pub const fn legacy() -> Self {
        Self {
            directory_query: false,
        }
    }
}

impl Default for PlatformCapabilities {
    fn default() -> Self {
        Self::modern()
    }
}
