//! Volume lookup over a storage environment.

use std::path::PathBuf;

use crate::reference::VolumeKey;
use crate::volume::environment::{StorageEnvironment, SystemEnvironment};
use crate::volume::strategy;
use crate::volume::types::StorageVolume;

/// Resolves volume keys to mount paths against a [`StorageEnvironment`].
///
/// The catalog holds no state beyond its provider: every lookup re-reads the
/// environment, because the set of mounted volumes can change between calls
/// (media removal). Lookups never fail: an unrecognized key, a failed
/// enumeration, or a denied platform query all come back as `None`, and the
/// failure is recorded through the `log` crate at this boundary so a single
/// volume's unavailability cannot abort an unrelated resolution.
///
/// # Examples
///
/// ```
/// use volpath::{MockEnvironment, StorageVolume, VolumeCatalog, VolumeKey};
/// use std::path::PathBuf;
///
/// let catalog = VolumeCatalog::new(Box::new(
///     MockEnvironment::new()
///         .with_volume(StorageVolume::primary().with_mount("/storage/emulated/0")),
/// ));
///
/// assert_eq!(
///     catalog.resolve_mount_path(&VolumeKey::Primary),
///     Some(PathBuf::from("/storage/emulated/0")),
/// );
/// assert_eq!(catalog.resolve_mount_path(&VolumeKey::from("ABCD-1234")), None);
/// ```
pub struct VolumeCatalog {
    env: Box<dyn StorageEnvironment>,
}

impl VolumeCatalog {
    /// Create a catalog over the given provider.
    #[must_use]
    pub fn new(env: Box<dyn StorageEnvironment>) -> Self {
        Self { env }
    }

    /// Create a catalog over the real operating system.
    #[must_use]
    pub fn system() -> Self {
        Self::new(Box::new(SystemEnvironment::new()))
    }

    /// Resolve a volume key to its mount path.
    ///
    /// Alias keys resolve to the environment's fixed directories without
    /// touching the enumeration. Other keys walk the current enumeration in
    /// provider order and select the first volume whose primary flag or UUID
    /// matches; the capability-selected query style then supplies the mount
    /// path. `None` means the volume could not be resolved.
    #[must_use]
    pub fn resolve_mount_path(&self, key: &VolumeKey) -> Option<PathBuf> {
        match key {
            VolumeKey::Home => alias_dir("home", self.env.documents_dir()),
            VolumeKey::Downloads => alias_dir("downloads", self.env.downloads_dir()),
            VolumeKey::Primary | VolumeKey::Uuid(_) => self.enumerated_mount_path(key),
        }
    }

    /// The current enumeration, empty when the provider fails.
    #[must_use]
    pub fn volumes(&self) -> Vec<StorageVolume> {
        match self.env.volumes() {
            Ok(volumes) => volumes,
            Err(e) => {
                log::warn!("volume enumeration failed: {e}");
                Vec::new()
            }
        }
    }

    fn enumerated_mount_path(&self, key: &VolumeKey) -> Option<PathBuf> {
        let volumes = match self.env.volumes() {
            Ok(volumes) => volumes,
            Err(e) => {
                log::warn!("volume enumeration failed for key '{key}': {e}");
                return None;
            }
        };

        let capabilities = self.env.capabilities();
        let Some(query) = strategy::select(&capabilities) else {
            log::warn!("no mount-path query style available on this platform");
            return None;
        };

        for volume in &volumes {
            log::debug!(
                "found volume uuid={:?} primary={} against key '{key}'",
                volume.uuid(),
                volume.is_primary(),
            );
            if volume.matches(key) {
                // First match in enumeration order wins; the selected query
                // style is not retried through the other style if it cannot
                // answer for this volume.
                return query.mount_path(volume);
            }
        }

        log::warn!("no volume matched key '{key}'");
        None
    }
}

fn alias_dir(alias: &str, result: crate::error::Result<PathBuf>) -> Option<PathBuf> {
    match result {
        Ok(dir) => Some(dir),
        Err(e) => {
            log::warn!("alias '{alias}' has no target directory: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::volume::environment::MockEnvironment;
    use crate::volume::types::PlatformCapabilities;

    fn two_volume_env() -> MockEnvironment {
        MockEnvironment::new()
            .with_volume(StorageVolume::primary().with_mount("/storage/emulated/0"))
            .with_volume(StorageVolume::removable("ABCD-1234").with_mount("/storage/ABCD-1234"))
    }

    #[test]
    fn test_primary_key_resolves_primary_mount() {
        let catalog = VolumeCatalog::new(Box::new(two_volume_env()));
        assert_eq!(
            catalog.resolve_mount_path(&VolumeKey::Primary),
            Some(PathBuf::from("/storage/emulated/0"))
        );
    }

    #[test]
    fn test_uuid_key_resolves_matching_volume() {
        let catalog = VolumeCatalog::new(Box::new(two_volume_env()));
        assert_eq!(
            catalog.resolve_mount_path(&VolumeKey::from("ABCD-1234")),
            Some(PathBuf::from("/storage/ABCD-1234"))
        );
    }

    #[test]
    fn test_unmatched_uuid_is_none() {
        let catalog = VolumeCatalog::new(Box::new(two_volume_env()));
        assert_eq!(catalog.resolve_mount_path(&VolumeKey::from("ZZZZ-0000")), None);
    }

    #[test]
    fn test_first_match_in_enumeration_order_wins() {
        // Two volumes carrying the same UUID never happens in practice, but
        // the lookup must still be deterministic under the provider's order.
        let env = MockEnvironment::new()
            .with_volume(StorageVolume::removable("ABCD-1234").with_mount("/storage/first"))
            .with_volume(StorageVolume::removable("ABCD-1234").with_mount("/storage/second"));
        let catalog = VolumeCatalog::new(Box::new(env));
        assert_eq!(
            catalog.resolve_mount_path(&VolumeKey::from("ABCD-1234")),
            Some(PathBuf::from("/storage/first"))
        );
    }

    #[test]
    fn test_home_alias_ignores_enumeration() {
        let env = MockEnvironment::new()
            .with_documents_dir("/home/user/Documents")
            .with_enumeration_failure();
        let catalog = VolumeCatalog::new(Box::new(env));
        assert_eq!(
            catalog.resolve_mount_path(&VolumeKey::Home),
            Some(PathBuf::from("/home/user/Documents"))
        );
    }

    #[test]
    fn test_downloads_alias_ignores_enumeration() {
        let env = MockEnvironment::new()
            .with_downloads_dir("/home/user/Downloads")
            .with_enumeration_failure();
        let catalog = VolumeCatalog::new(Box::new(env));
        assert_eq!(
            catalog.resolve_mount_path(&VolumeKey::Downloads),
            Some(PathBuf::from("/home/user/Downloads"))
        );
    }

    #[test]
    fn test_missing_alias_dir_is_none() {
        let catalog = VolumeCatalog::new(Box::new(MockEnvironment::new()));
        assert_eq!(catalog.resolve_mount_path(&VolumeKey::Home), None);
        assert_eq!(catalog.resolve_mount_path(&VolumeKey::Downloads), None);
    }

    #[test]
    fn test_enumeration_failure_is_none_not_panic() {
        let env = MockEnvironment::new().with_enumeration_failure();
        let catalog = VolumeCatalog::new(Box::new(env));
        assert_eq!(catalog.resolve_mount_path(&VolumeKey::Primary), None);
        assert!(catalog.volumes().is_empty());
    }

    #[test]
    fn test_legacy_platform_uses_legacy_path() {
        let env = MockEnvironment::new()
            .with_capabilities(PlatformCapabilities::legacy())
            .with_volume(
                StorageVolume::primary()
                    .with_directory("/modern/mount")
                    .with_legacy_path("/legacy/mount"),
            );
        let catalog = VolumeCatalog::new(Box::new(env));
        assert_eq!(
            catalog.resolve_mount_path(&VolumeKey::Primary),
            Some(PathBuf::from("/legacy/mount"))
        );
    }

    #[test]
    fn test_selected_style_is_not_retried_on_miss() {
        // Modern platform, but the matched volume only answers the legacy
        // style: the lookup reports not-found instead of switching styles.
        let env = MockEnvironment::new()
            .with_volume(StorageVolume::primary().with_legacy_path("/legacy/mount"));
        let catalog = VolumeCatalog::new(Box::new(env));
        assert_eq!(catalog.resolve_mount_path(&VolumeKey::Primary), None);
    }

    #[test]
    fn test_unaddressable_volume_skipped() {
        let env = MockEnvironment::new()
            .with_volume(StorageVolume::unaddressable().with_mount("/mnt/obb"))
            .with_volume(StorageVolume::primary().with_mount("/storage/emulated/0"));
        let catalog = VolumeCatalog::new(Box::new(env));
        assert_eq!(
            catalog.resolve_mount_path(&VolumeKey::Primary),
            Some(PathBuf::from("/storage/emulated/0"))
        );
    }

    #[test]
    fn test_volumes_listing_reflects_provider() {
        let catalog = VolumeCatalog::new(Box::new(two_volume_env()));
        let volumes = catalog.volumes();
        assert_eq!(volumes.len(), 2);
    }
}
