//! Reference-to-path resolution and composition.
//!
//! # Key Concepts
//!
//! ## Composition
//!
//! A resolved path is the string-level join of a volume's mount path and the
//! reference's document path. The join rules live in [`compose`] and are
//! exact: one trailing separator is stripped from each side, an
//! absolute-looking document path concatenates without a joining separator,
//! and an empty document path yields the mount path alone.
//!
//! ## Degradation
//!
//! An unresolvable volume does not fail the call. The result is the bare
//! filesystem root with an explicit flag ([`Resolution::is_root_fallback`])
//! so callers can tell the sentinel from a real location.
//!
//! # Examples
//!
//! ```
//! use volpath::{MockEnvironment, StorageVolume, TreeResolver, VolumeCatalog};
//!
//! let resolver = TreeResolver::new(VolumeCatalog::new(Box::new(
//!     MockEnvironment::new()
//!         .with_volume(StorageVolume::primary().with_mount("/storage/emulated/0")),
//! )));
//!
//! let resolution = resolver.resolve("primary:Documents").unwrap();
//! assert_eq!(resolution.path().as_str(), "/storage/emulated/0/Documents");
//! ```

pub mod compose;
pub mod resolver;
mod types;

// Re-export key types
pub use resolver::TreeResolver;
pub use types::{AbsolutePath, Resolution};
