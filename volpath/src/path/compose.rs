//! Pure string-level path composition.
//!
//! These functions carry the exact separator semantics the resolver relies
//! on: they decide whether a composed path gets a doubled separator or a
//! missing one, and the composed result is handed straight to file I/O.

/// The canonical path separator.
pub const SEPARATOR: char = '/';

/// Strip exactly one trailing separator, if present.
///
/// Only a single separator is removed; the bare root `/` becomes the empty
/// string, which [`compose`] treats as a mount at the filesystem root.
///
/// # Examples
///
/// ```
/// use volpath::path::compose::strip_trailing_separator;
///
/// assert_eq!(strip_trailing_separator("/storage/ABCD-1234/"), "/storage/ABCD-1234");
/// assert_eq!(strip_trailing_separator("/storage/ABCD-1234"), "/storage/ABCD-1234");
/// assert_eq!(strip_trailing_separator("a//"), "a/");
/// assert_eq!(strip_trailing_separator("/"), "");
/// ```
#[must_use]
pub fn strip_trailing_separator(path: &str) -> &str {
    path.strip_suffix(SEPARATOR).unwrap_or(path)
}

/// Join a volume mount path and a document path.
///
/// - Empty document path: the result is the mount path alone.
/// - Document path already starting with a separator: plain concatenation
///   (no doubled separator).
/// - Otherwise: a joining separator is inserted.
///
/// Both inputs are expected to have been through
/// [`strip_trailing_separator`]; `compose` itself never removes anything.
///
/// # Examples
///
/// ```
/// use volpath::path::compose::compose;
///
/// assert_eq!(compose("/storage/emulated/0", "Documents"), "/storage/emulated/0/Documents");
/// assert_eq!(compose("/storage/emulated/0", "/Documents"), "/storage/emulated/0/Documents");
/// assert_eq!(compose("/storage/emulated/0", ""), "/storage/emulated/0");
/// ```
#[must_use]
pub fn compose(mount: &str, document_path: &str) -> String {
    if document_path.is_empty() {
        mount.to_string()
    } else if document_path.starts_with(SEPARATOR) {
        format!("{mount}{document_path}")
    } else {
        format!("{mount}{SEPARATOR}{document_path}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_removes_one_separator() {
        assert_eq!(strip_trailing_separator("/a/b/"), "/a/b");
        assert_eq!(strip_trailing_separator("/a/b//"), "/a/b/");
    }

    #[test]
    fn test_strip_leaves_bare_path() {
        assert_eq!(strip_trailing_separator("/a/b"), "/a/b");
        assert_eq!(strip_trailing_separator(""), "");
    }

    #[test]
    fn test_strip_root_becomes_empty() {
        assert_eq!(strip_trailing_separator("/"), "");
    }

    #[test]
    fn test_compose_empty_document_path() {
        assert_eq!(compose("/storage/ABCD-1234", ""), "/storage/ABCD-1234");
    }

    #[test]
    fn test_compose_relative_document_path() {
        assert_eq!(
            compose("/storage/emulated/0", "Documents/Notes"),
            "/storage/emulated/0/Documents/Notes"
        );
    }

    #[test]
    fn test_compose_absolute_looking_document_path() {
        assert_eq!(
            compose("/storage/emulated/0", "/Documents/Notes"),
            "/storage/emulated/0/Documents/Notes"
        );
    }

    #[test]
    fn test_compose_root_mount() {
        // A mount of "/" arrives here stripped to "".
        assert_eq!(compose("", "Documents"), "/Documents");
        assert_eq!(compose("", "/Documents"), "/Documents");
    }

    // Property-based tests
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn segment_strategy() -> impl Strategy<Value = String> {
            "[a-zA-Z0-9_. -]{1,12}"
        }

        fn mount_strategy() -> impl Strategy<Value = String> {
            prop::collection::vec(segment_strategy(), 1..=4)
                .prop_map(|parts| format!("/{}", parts.join("/")))
        }

        proptest! {
            /// Stripping is idempotent once a separator has been removed,
            /// provided the input does not stack separators.
            #[test]
            fn strip_idempotent_on_clean_paths(mount in mount_strategy()) {
                let once = strip_trailing_separator(&mount);
                prop_assert_eq!(strip_trailing_separator(once), once);
            }

            /// Composition never produces a doubled separator at the join
            /// point when both sides are stripped.
            #[test]
            fn compose_never_doubles_join_separator(
                mount in mount_strategy(),
                doc in prop::collection::vec(segment_strategy(), 0..=3).prop_map(|p| p.join("/")),
            ) {
                let composed = compose(strip_trailing_separator(&mount), &doc);
                prop_assert!(!composed.contains("//"));
            }

            /// A document path with a leading separator composes to the same
            /// result as its relative twin.
            #[test]
            fn leading_separator_is_equivalent(
                mount in mount_strategy(),
                doc in prop::collection::vec(segment_strategy(), 1..=3).prop_map(|p| p.join("/")),
            ) {
                let mount = strip_trailing_separator(&mount);
                let absolute_looking = format!("/{doc}");
                prop_assert_eq!(compose(mount, &doc), compose(mount, &absolute_looking));
            }

            /// The mount path is always a prefix of the composition.
            #[test]
            fn mount_is_prefix(
                mount in mount_strategy(),
                doc in "[a-zA-Z0-9/_. -]{0,30}",
            ) {
                let mount = strip_trailing_separator(&mount).to_string();
                let composed = compose(&mount, &doc);
                prop_assert!(composed.starts_with(&mount));
            }
        }
    }
}
