//! Storage volume enumeration and lookup.
//!
//! # Key Concepts
//!
//! ## Volumes and keys
//!
//! A device exposes the primary internal volume, zero or more removable
//! volumes identified by UUID, and two virtual aliases ("home", "downloads")
//! that point at fixed well-known directories instead of an enumerable
//! volume. A [`crate::VolumeKey`] names exactly one of these.
//!
//! ## The environment seam
//!
//! All platform state flows through the [`StorageEnvironment`] trait:
//! [`SystemEnvironment`] queries the operating system, while
//! [`MockEnvironment`] lets tests declare a storage topology outright. The
//! [`VolumeCatalog`] on top is stateless; every lookup sees a fresh
//! enumeration, since mounted volumes change between calls.
//!
//! ## Query generations
//!
//! Platforms have exposed a volume's mount path through two different query
//! styles over time. The [`strategy`] submodule models them as an ordered
//! list of capability-probed strategies; the first style the platform
//! supports is the only one consulted.
//!
//! # Examples
//!
//! ```
//! use volpath::{MockEnvironment, StorageVolume, VolumeCatalog, VolumeKey};
//!
//! let catalog = VolumeCatalog::new(Box::new(
//!     MockEnvironment::new()
//!         .with_volume(StorageVolume::removable("ABCD-1234").with_mount("/storage/ABCD-1234")),
//! ));
//!
//! let mount = catalog.resolve_mount_path(&VolumeKey::from("ABCD-1234"));
//! assert_eq!(mount.unwrap().to_str(), Some("/storage/ABCD-1234"));
//! ```

pub mod catalog;
pub mod environment;
pub mod strategy;
mod types;

// Re-export key types
pub use catalog::VolumeCatalog;
pub use environment::{MockEnvironment, StorageEnvironment, SystemEnvironment};
pub use types::{PlatformCapabilities, StorageVolume};
