//! Capability-probed mount-path query strategies.
//!
//! The platform has offered two ways of asking a volume for its mount path
//! over its lifetime. Instead of probing at runtime and falling back on
//! failure, each style is a [`MountQuery`] declaring the capability it
//! requires; [`select`] walks a fixed, ordered list and picks the first
//! style the running platform supports. The selected style is then the only
//! one consulted: a volume it cannot resolve is simply not found, it does
//! not trigger a retry with the other style.

use std::path::PathBuf;

use super::types::{PlatformCapabilities, StorageVolume};

/// One generation of the platform's mount-path query.
pub trait MountQuery: Sync {
    /// Short name for diagnostics.
    fn name(&self) -> &'static str;

    /// Whether the running platform supports this query style.
    fn applies(&self, capabilities: &PlatformCapabilities) -> bool;

    /// Ask the volume for its mount path through this style.
    fn mount_path(&self, volume: &StorageVolume) -> Option<PathBuf>;
}

/// The current-generation query: asks the volume for its directory.
#[derive(Debug, Clone, Copy)]
pub struct DirectoryQuery;

impl MountQuery for DirectoryQuery {
    fn name(&self) -> &'static str {
        "directory"
    }

    fn applies(&self, capabilities: &PlatformCapabilities) -> bool {
        capabilities.directory_query
    }

    fn mount_path(&self, volume: &StorageVolume) -> Option<PathBuf> {
        volume.directory().map(PathBuf::from)
    }
}

/// The older query: asks the volume for its raw path string.
#[derive(Debug, Clone, Copy)]
pub struct LegacyPathQuery;

impl MountQuery for LegacyPathQuery {
    fn name(&self) -> &'static str {
        "legacy-path"
    }

    fn applies(&self, _capabilities: &PlatformCapabilities) -> bool {
        // Present on every platform generation this library targets.
        true
    }

    fn mount_path(&self, volume: &StorageVolume) -> Option<PathBuf> {
        volume.legacy_path().map(PathBuf::from)
    }
}

/// Query styles in preference order: newest first.
static STRATEGIES: [&(dyn MountQuery); 2] = [&DirectoryQuery, &LegacyPathQuery];

/// Select the first query style the platform supports.
///
/// Selection is deterministic and depends only on the capabilities, never on
/// whether a particular volume can answer.
///
/// # Examples
///
/// ```
/// use volpath::volume::strategy::select;
/// use volpath::PlatformCapabilities;
///
/// assert_eq!(select(&PlatformCapabilities::modern()).unwrap().name(), "directory");
/// assert_eq!(select(&PlatformCapabilities::legacy()).unwrap().name(), "legacy-path");
/// ```
#[must_use]
pub fn select(capabilities: &PlatformCapabilities) -> Option<&'static dyn MountQuery> {
    STRATEGIES
        .iter()
        .find(|strategy| strategy.applies(capabilities))
        .copied()
}
