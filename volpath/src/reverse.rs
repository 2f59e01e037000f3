//! Reverse reference construction for the application's private storage.
//!
//! The platform will not hand out a picker-compatible reference for the
//! application's own files directory on a removable volume, so one has to be
//! built by hand: take the private directory's absolute path, pull the
//! volume key out of it, and wrap a fixed package-qualified document path in
//! the picker's syntax. The result lets a folder-picker UI land directly in
//! a directory the application is guaranteed to be able to write.

use std::path::{Path, PathBuf};

use crate::path::compose::SEPARATOR;
use crate::reference::document_uri;

/// Authority of the external-storage document provider.
pub const EXTERNAL_STORAGE_AUTHORITY: &str = "com.android.externalstorage.documents";

/// Index of the volume-key component in an absolute private-storage path.
///
/// Splitting `/storage/ABCD-1234/...` on the separator yields two leading
/// segments induced by the absolute prefix (`""`, `"storage"`) before the
/// volume key.
const VOLUME_KEY_SEGMENT: usize = 2;

/// Build a picker reference for the application's private files directory on
/// a non-primary volume.
///
/// `private_dirs` is the application's private storage directory on every
/// mounted volume; `default_dir` is the distinguished one on the primary
/// volume. The default is removed from the list, and the first remaining
/// entry supplies the volume key (the path segment at index 2 of its
/// absolute path).
///
/// Returns `None` when no non-default private directory exists, or when the
/// remaining path is structurally too short to carry a volume key. Callers
/// use `None` to omit the corresponding UI affordance.
///
/// # Examples
///
/// ```
/// use volpath::reverse::private_files_reference;
/// use std::path::PathBuf;
///
/// let private_dirs = vec![
///     PathBuf::from("/storage/emulated/0/Android/data/pkg/files"),
///     PathBuf::from("/storage/ABCD-1234/Android/data/pkg/files"),
/// ];
/// let reference =
///     private_files_reference(&private_dirs, &private_dirs[0].clone(), "pkg").unwrap();
/// assert!(reference.ends_with("ABCD-1234%3AAndroid%2Fdata%2Fpkg%2Ffiles"));
///
/// // Only the default exists: nothing to offer.
/// let only_default = vec![PathBuf::from("/storage/emulated/0/Android/data/pkg/files")];
/// assert!(private_files_reference(&only_default, &only_default[0].clone(), "pkg").is_none());
/// ```
#[must_use]
pub fn private_files_reference(
    private_dirs: &[PathBuf],
    default_dir: &Path,
    package_id: &str,
) -> Option<String> {
    let external = private_dirs
        .iter()
        .find(|dir| dir.as_path() != default_dir)?;

    let volume_key = volume_key_from_private_path(external)?;
    let document_id = format!("{volume_key}:Android/data/{package_id}/files");
    Some(document_uri(EXTERNAL_STORAGE_AUTHORITY, &document_id))
}

/// Extract the volume key from a private-storage path.
fn volume_key_from_private_path(path: &Path) -> Option<&str> {
    let path = path.to_str()?;
    path.split(SEPARATOR).nth(VOLUME_KEY_SEGMENT)
}
