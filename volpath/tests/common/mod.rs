//! Shared test fixtures for integration tests.

#![allow(dead_code)] // Not every test file uses every helper.

use volpath::{
    MockEnvironment, PlatformCapabilities, StorageVolume, TreeResolver, VolumeCatalog,
};

/// Builder for a resolver over a declared storage topology.
///
/// Mirrors the device layouts the library is exercised against: a primary
/// internal volume, optional removable volumes, and the two alias
/// directories.
pub struct ResolverFixture {
    env: MockEnvironment,
}

impl ResolverFixture {
    /// An empty device: no volumes, no alias directories.
    pub fn new() -> Self {
        Self {
            env: MockEnvironment::new(),
        }
    }

    /// Add the primary internal volume at the given mount path.
    pub fn with_primary(mut self, mount: &str) -> Self {
        self.env = self
            .env
            .with_volume(StorageVolume::primary().with_mount(mount));
        self
    }

    /// Add a removable volume with the given UUID and mount path.
    pub fn with_removable(mut self, uuid: &str, mount: &str) -> Self {
        self.env = self
            .env
            .with_volume(StorageVolume::removable(uuid).with_mount(mount));
        self
    }

    /// Add a fully custom volume.
    pub fn with_volume(mut self, volume: StorageVolume) -> Self {
        self.env = self.env.with_volume(volume);
        self
    }

    /// Set the "home" alias target.
    pub fn with_documents_dir(mut self, dir: &str) -> Self {
        self.env = self.env.with_documents_dir(dir);
        self
    }

    /// Set the "downloads" alias target.
    pub fn with_downloads_dir(mut self, dir: &str) -> Self {
        self.env = self.env.with_downloads_dir(dir);
        self
    }

    /// Simulate a platform generation.
    pub fn with_capabilities(mut self, capabilities: PlatformCapabilities) -> Self {
        self.env = self.env.with_capabilities(capabilities);
        self
    }

    /// Make volume enumeration fail.
    pub fn with_enumeration_failure(mut self) -> Self {
        self.env = self.env.with_enumeration_failure();
        self
    }

    /// Build the resolver.
    pub fn build(self) -> TreeResolver {
        TreeResolver::new(VolumeCatalog::new(Box::new(self.env)))
    }

    /// Build just the catalog.
    pub fn build_catalog(self) -> VolumeCatalog {
        VolumeCatalog::new(Box::new(self.env))
    }
}

impl Default for ResolverFixture {
    fn default() -> Self {
        Self::new()
    }
}
