//! Reverse reference construction scenarios.

mod common;

use std::path::PathBuf;

use common::ResolverFixture;
use volpath::reverse::private_files_reference;

/// Two private directories: the non-default one supplies the volume key.
#[test]
fn test_reference_from_second_private_dir() {
    let private_dirs = vec![
        PathBuf::from("/storage/emulated/0/Android/data/pkg/files"),
        PathBuf::from("/storage/ABCD-1234/Android/data/pkg/files"),
    ];

    let reference =
        private_files_reference(&private_dirs, &private_dirs[0].clone(), "pkg").unwrap();
    assert_eq!(
        reference,
        "content://com.android.externalstorage.documents/document/ABCD-1234%3AAndroid%2Fdata%2Fpkg%2Ffiles"
    );
}

/// Only the default private directory exists: the reference is unavailable.
#[test]
fn test_only_default_dir_unavailable() {
    let private_dirs = vec![PathBuf::from("/storage/emulated/0/Android/data/pkg/files")];

    assert!(private_files_reference(&private_dirs, &private_dirs[0].clone(), "pkg").is_none());
}

/// A structurally short private path carries no volume key.
#[test]
fn test_short_path_unavailable() {
    let private_dirs = vec![
        PathBuf::from("/storage/emulated/0/Android/data/pkg/files"),
        PathBuf::from("/storage"),
    ];

    assert!(private_files_reference(&private_dirs, &private_dirs[0].clone(), "pkg").is_none());
}

/// A built reference resolves back to the private directory it names once
/// the volume is mounted.
#[test]
fn test_built_reference_resolves_round_trip() {
    let private_dirs = vec![
        PathBuf::from("/storage/emulated/0/Android/data/pkg/files"),
        PathBuf::from("/storage/ABCD-1234/Android/data/pkg/files"),
    ];
    let reference =
        private_files_reference(&private_dirs, &private_dirs[0].clone(), "pkg").unwrap();

    // The picker hands tree references back; the document id inside is the
    // same either way.
    let tree_reference = reference.replace("/document/", "/tree/");

    let resolver = ResolverFixture::new()
        .with_removable("ABCD-1234", "/storage/ABCD-1234")
        .build();
    let resolution = resolver.resolve_uri(&tree_reference).unwrap();
    assert_eq!(
        resolution.path().as_str(),
        "/storage/ABCD-1234/Android/data/pkg/files"
    );
}
