//! Providers of platform storage state.
//!
//! This module defines the trait seam between the resolution core and the
//! operating system. The design uses traits for testability, allowing both
//! real platform queries and deterministic in-memory providers for testing.

use std::path::PathBuf;

use sysinfo::{DiskExt, System, SystemExt};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::volume::types::{PlatformCapabilities, StorageVolume};

/// Source of the device's storage topology.
///
/// Implementations list the currently mounted volumes, resolve the two alias
/// directories, and report which mount-path query generation the platform
/// supports. The resolution core holds no state of its own; every call sees
/// a fresh snapshot from the provider.
///
/// # Examples
///
/// ```
/// use volpath::{MockEnvironment, StorageEnvironment, StorageVolume};
///
/// let env = MockEnvironment::new()
///     .with_volume(StorageVolume::primary().with_mount("/storage/emulated/0"));
/// assert_eq!(env.volumes().unwrap().len(), 1);
/// ```
pub trait StorageEnvironment: Send + Sync {
    /// Enumerate the currently mounted storage volumes.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform denies or cannot perform the
    /// enumeration.
    fn volumes(&self) -> Result<Vec<StorageVolume>>;

    /// The directory the "home" alias points at.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment has no documents directory.
    fn documents_dir(&self) -> Result<PathBuf>;

    /// The directory the "downloads" alias points at.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment has no downloads directory.
    fn downloads_dir(&self) -> Result<PathBuf>;

    /// Which mount-path query generations this platform supports.
    fn capabilities(&self) -> PlatformCapabilities;
}

/// Production provider backed by the operating system.
///
/// Volume enumeration walks the mounted disks: removable disks become
/// UUID-keyed volumes (keyed by the final component of their mount point,
/// the way removable media is mounted), and the disk mounted at the
/// configured primary root becomes the primary volume. Alias directories
/// come from the platform's user-directory registry, with [`Config`]
/// overrides winning.
///
/// # Examples
///
/// ```no_run
/// use volpath::{StorageEnvironment, SystemEnvironment};
///
/// let env = SystemEnvironment::new();
/// for volume in env.volumes().unwrap() {
///     println!("{volume:?}");
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct SystemEnvironment {
    config: Config,
}

impl SystemEnvironment {
    /// Create a provider with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a provider with explicit directory overrides.
    #[must_use]
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// The mount path treated as the primary volume's root.
    fn primary_root(&self) -> PathBuf {
        self.config
            .primary_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("/"))
    }
}

impl StorageEnvironment for SystemEnvironment {
    fn volumes(&self) -> Result<Vec<StorageVolume>> {
        let mut sys = System::new();
        sys.refresh_disks_list();

        let primary_root = self.primary_root();
        let mut volumes = Vec::new();
        let mut primary_seen = false;

        for disk in sys.disks() {
            let mount_point = disk.mount_point().to_path_buf();

            let volume = if disk.is_removable() {
                let uuid = mount_point
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned());
                match uuid {
                    Some(uuid) => StorageVolume::removable(uuid),
                    None => StorageVolume::unaddressable(),
                }
            } else if !primary_seen && mount_point == primary_root {
                // At most one volume per enumeration may be primary.
                primary_seen = true;
                StorageVolume::primary()
            } else {
                StorageVolume::unaddressable()
            };

            volumes.push(volume.with_mount(mount_point));
        }

        Ok(volumes)
    }

    fn documents_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.config.documents_dir {
            return Ok(dir.clone());
        }
        if let Some(dirs) = directories::UserDirs::new() {
            if let Some(dir) = dirs.document_dir() {
                return Ok(dir.to_path_buf());
            }
        }
        // Last resort: the conventional location under the home directory.
        home::home_dir()
            .map(|home| home.join("Documents"))
            .ok_or_else(|| Error::EnvironmentUnavailable {
                detail: "no documents directory configured or discoverable".to_string(),
            })
    }

    fn downloads_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.config.downloads_dir {
            return Ok(dir.clone());
        }
        if let Some(dirs) = directories::UserDirs::new() {
            if let Some(dir) = dirs.download_dir() {
                return Ok(dir.to_path_buf());
            }
        }
        home::home_dir()
            .map(|home| home.join("Downloads"))
            .ok_or_else(|| Error::EnvironmentUnavailable {
                detail: "no downloads directory configured or discoverable".to_string(),
            })
    }

    fn capabilities(&self) -> PlatformCapabilities {
        PlatformCapabilities::modern()
    }
}

/// Deterministic in-memory provider for testing.
///
/// Tests declare exactly which volumes and alias directories exist, which
/// platform generation to simulate, and whether enumeration should fail.
///
/// # Examples
///
/// ```
/// use volpath::{MockEnvironment, StorageEnvironment, StorageVolume};
///
/// let env = MockEnvironment::new()
///     .with_volume(StorageVolume::removable("ABCD-1234").with_mount("/storage/ABCD-1234"))
///     .with_documents_dir("/home/user/Documents");
///
/// assert_eq!(env.volumes().unwrap().len(), 1);
/// assert!(env.downloads_dir().is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockEnvironment {
    volumes: Vec<StorageVolume>,
    documents_dir: Option<PathBuf>,
    downloads_dir: Option<PathBuf>,
    capabilities: PlatformCapabilities,
    fail_enumeration: bool,
}

impl MockEnvironment {
    /// Create an empty environment: no volumes, no alias directories, a
    /// modern platform generation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a volume to the enumeration. Order is preserved.
    #[must_use]
    pub fn with_volume(mut self, volume: StorageVolume) -> Self {
        self.volumes.push(volume);
        self
    }

    /// Set the documents directory the "home" alias resolves to.
    #[must_use]
    pub fn with_documents_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.documents_dir = Some(dir.into());
        self
    }

    /// Set the downloads directory the "downloads" alias resolves to.
    #[must_use]
    pub fn with_downloads_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.downloads_dir = Some(dir.into());
        self
    }

    /// Simulate a particular platform generation.
    #[must_use]
    pub fn with_capabilities(mut self, capabilities: PlatformCapabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    /// Make every enumeration attempt fail.
    #[must_use]
    pub fn with_enumeration_failure(mut self) -> Self {
        self.fail_enumeration = true;
        self
    }
}

impl StorageEnvironment for MockEnvironment {
    fn volumes(&self) -> Result<Vec<StorageVolume>> {
        if self.fail_enumeration {
            return Err(Error::EnvironmentUnavailable {
                detail: "volume enumeration failed".to_string(),
            });
        }
        Ok(self.volumes.clone())
    }

    fn documents_dir(&self) -> Result<PathBuf> {
        self.documents_dir
            .clone()
            .ok_or_else(|| Error::EnvironmentUnavailable {
                detail: "no documents directory".to_string(),
            })
    }

    fn downloads_dir(&self) -> Result<PathBuf> {
        self.downloads_dir
            .clone()
            .ok_or_else(|| Error::EnvironmentUnavailable {
                detail: "no downloads directory".to_string(),
            })
    }

    fn capabilities(&self) -> PlatformCapabilities {
        self.capabilities
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::VolumeKey;

    #[test]
    fn test_mock_preserves_enumeration_order() {
        let env = MockEnvironment::new()
            .with_volume(StorageVolume::primary().with_mount("/storage/emulated/0"))
            .with_volume(StorageVolume::removable("ABCD-1234").with_mount("/storage/ABCD-1234"));

        let volumes = env.volumes().unwrap();
        assert_eq!(volumes.len(), 2);
        assert!(volumes[0].is_primary());
        assert_eq!(volumes[1].uuid(), Some("ABCD-1234"));
    }

    #[test]
    fn test_mock_enumeration_failure() {
        let env = MockEnvironment::new().with_enumeration_failure();
        assert!(env.volumes().unwrap_err().is_environment_unavailable());
    }

    #[test]
    fn test_mock_missing_alias_dirs_error() {
        let env = MockEnvironment::new();
        assert!(env.documents_dir().is_err());
        assert!(env.downloads_dir().is_err());
    }

    #[test]
    fn test_mock_alias_dirs() {
        let env = MockEnvironment::new()
            .with_documents_dir("/home/user/Documents")
            .with_downloads_dir("/home/user/Downloads");
        assert_eq!(
            env.documents_dir().unwrap(),
            PathBuf::from("/home/user/Documents")
        );
        assert_eq!(
            env.downloads_dir().unwrap(),
            PathBuf::from("/home/user/Downloads")
        );
    }

    #[test]
    fn test_system_config_overrides_win() {
        let config = Config {
            documents_dir: Some(PathBuf::from("/custom/docs")),
            downloads_dir: Some(PathBuf::from("/custom/downloads")),
            ..Default::default()
        };
        let env = SystemEnvironment::with_config(config);
        assert_eq!(env.documents_dir().unwrap(), PathBuf::from("/custom/docs"));
        assert_eq!(
            env.downloads_dir().unwrap(),
            PathBuf::from("/custom/downloads")
        );
    }

    #[test]
    fn test_system_enumeration_has_at_most_one_primary() {
        let env = SystemEnvironment::new();
        let volumes = env.volumes().unwrap();
        assert!(volumes.iter().filter(|v| v.is_primary()).count() <= 1);
    }

    #[test]
    fn test_system_removable_volumes_match_their_uuid() {
        let env = SystemEnvironment::new();
        for volume in env.volumes().unwrap() {
            if let Some(uuid) = volume.uuid() {
                assert!(volume.matches(&VolumeKey::Uuid(uuid.to_string())));
            }
        }
    }
}
