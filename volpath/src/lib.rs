#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # volpath
//!
//! A library for resolving opaque storage-volume references to absolute
//! filesystem paths, and back.
//!
//! A device exposes a primary internal volume, removable volumes identified
//! by UUID, and two virtual aliases ("home", "downloads") mapped to fixed
//! well-known directories. A folder picker hands out references whose
//! trailing document id encodes a volume key and a path relative to that
//! volume; this library turns such a reference into a path usable for file
//! I/O, and builds the reverse reference for the application's own private
//! storage.
//!
//! ## Core Types
//!
//! - [`DocumentRef`] and [`VolumeKey`]: reference parsing and serialization
//! - [`VolumeCatalog`] and [`StorageEnvironment`]: volume lookup over a
//!   substitutable platform provider
//! - [`TreeResolver`] and [`Resolution`]: reference-to-path resolution
//! - [`Error`] and [`Result`]: error handling types
//!
//! ## Examples
//!
//! ```
//! use volpath::{MockEnvironment, StorageVolume, TreeResolver, VolumeCatalog};
//!
//! let catalog = VolumeCatalog::new(Box::new(
//!     MockEnvironment::new()
//!         .with_volume(StorageVolume::primary().with_mount("/storage/emulated/0"))
//!         .with_volume(StorageVolume::removable("ABCD-1234").with_mount("/storage/ABCD-1234")),
//! ));
//! let resolver = TreeResolver::new(catalog);
//!
//! let resolution = resolver.resolve("primary:Documents/Notes").unwrap();
//! assert_eq!(resolution.path().as_str(), "/storage/emulated/0/Documents/Notes");
//!
//! let rooted = resolver.resolve("ABCD-1234:").unwrap();
//! assert_eq!(rooted.path().as_str(), "/storage/ABCD-1234");
//! ```
//!
//! Against the real operating system, use [`TreeResolver::system`].

pub mod config;
pub mod error;
pub mod logging;
pub mod path;
pub mod reference;
pub mod reverse;
pub mod volume;

// Re-export key types at crate root for convenience
pub use config::Config;
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{AbsolutePath, Resolution, TreeResolver};
pub use reference::{DocumentRef, VolumeKey};
pub use reverse::private_files_reference;
pub use volume::{
    MockEnvironment, PlatformCapabilities, StorageEnvironment, StorageVolume, SystemEnvironment,
    VolumeCatalog,
};
