//! Opaque folder-reference parsing and serialization.
//!
//! A folder-picker reference carries a trailing *document id* of the form
//! `<volume-key>:<document-path>`. This module splits that id into a
//! [`DocumentRef`], joins it back, and handles the outer `content://` wrapper
//! syntax the external picker uses (including the percent-encoding of the id
//! segment).
//!
//! Parsing is deliberately permissive: the only uninterpretable input is the
//! empty id, which cannot yield a volume key. A missing colon means "root of
//! that volume", not an error.

use std::fmt;

use crate::error::{Error, Result};

/// The literal volume key of the primary internal volume.
pub const PRIMARY_VOLUME: &str = "primary";

/// The alias key mapped to the environment's documents directory.
pub const HOME_VOLUME: &str = "home";

/// The alias key mapped to the environment's downloads directory.
pub const DOWNLOADS_VOLUME: &str = "downloads";

/// The key of a storage volume: the primary marker, one of the two virtual
/// aliases, or a removable volume's UUID.
///
/// Conversion from a string is total: any string that is not one of the
/// three well-known markers is treated as a UUID. `Display` is the exact
/// inverse.
///
/// # Examples
///
/// ```
/// use volpath::VolumeKey;
///
/// assert_eq!(VolumeKey::from("primary"), VolumeKey::Primary);
/// assert_eq!(VolumeKey::from("ABCD-1234"), VolumeKey::Uuid("ABCD-1234".into()));
/// assert_eq!(VolumeKey::from("home").to_string(), "home");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VolumeKey {
    /// The device's main, always-present internal storage volume.
    Primary,
    /// Virtual alias for the environment's documents directory.
    Home,
    /// Virtual alias for the environment's downloads directory.
    Downloads,
    /// A removable volume identified by UUID.
    Uuid(String),
}

impl From<&str> for VolumeKey {
    fn from(s: &str) -> Self {
        match s {
            PRIMARY_VOLUME => Self::Primary,
            HOME_VOLUME => Self::Home,
            DOWNLOADS_VOLUME => Self::Downloads,
            _ => Self::Uuid(s.to_string()),
        }
    }
}

impl fmt::Display for VolumeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primary => write!(f, "{PRIMARY_VOLUME}"),
            Self::Home => write!(f, "{HOME_VOLUME}"),
            Self::Downloads => write!(f, "{DOWNLOADS_VOLUME}"),
            Self::Uuid(uuid) => write!(f, "{uuid}"),
        }
    }
}

/// A parsed document id: volume key plus the path relative to that volume's
/// mount point.
///
/// Immutable once constructed. Produced by [`DocumentRef::parse`] or built
/// directly for serialization with [`DocumentRef::new`].
///
/// # Examples
///
/// ```
/// use volpath::{DocumentRef, VolumeKey};
///
/// let reference = DocumentRef::parse("primary:Documents/Notes").unwrap();
/// assert_eq!(reference.volume_key(), &VolumeKey::Primary);
/// assert_eq!(reference.document_path(), "Documents/Notes");
/// assert_eq!(reference.document_id(), "primary:Documents/Notes");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentRef {
    volume_key: VolumeKey,
    document_path: String,
}

impl DocumentRef {
    /// Create a reference from its two components.
    #[must_use]
    pub fn new(volume_key: VolumeKey, document_path: impl Into<String>) -> Self {
        Self {
            volume_key,
            document_path: document_path.into(),
        }
    }

    /// Split a document id on its first colon.
    ///
    /// The portion before the colon is the volume key; the portion after it
    /// (possibly empty) is the document path. An id with no colon references
    /// the root of its volume: the document path becomes `/`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidReference`] only for the empty id, from which
    /// no volume key can be extracted.
    ///
    /// # Examples
    ///
    /// ```
    /// use volpath::DocumentRef;
    ///
    /// let rooted = DocumentRef::parse("ABCD-1234").unwrap();
    /// assert_eq!(rooted.document_path(), "/");
    ///
    /// let empty_path = DocumentRef::parse("ABCD-1234:").unwrap();
    /// assert_eq!(empty_path.document_path(), "");
    ///
    /// assert!(DocumentRef::parse("").is_err());
    /// ```
    pub fn parse(document_id: &str) -> Result<Self> {
        if document_id.is_empty() {
            return Err(Error::InvalidReference {
                reference: String::new(),
                reason: "empty reference yields no volume key".to_string(),
            });
        }

        match document_id.split_once(':') {
            Some((key, path)) => Ok(Self::new(VolumeKey::from(key), path)),
            None => Ok(Self::new(VolumeKey::from(document_id), "/")),
        }
    }

    /// The key of the volume this reference points into.
    #[must_use]
    pub fn volume_key(&self) -> &VolumeKey {
        &self.volume_key
    }

    /// The path relative to the volume's mount point. May be empty.
    #[must_use]
    pub fn document_path(&self) -> &str {
        &self.document_path
    }

    /// The canonical string form: `<volume-key>:<document-path>`.
    ///
    /// This is the exact inverse of the split performed by [`parse`].
    ///
    /// [`parse`]: DocumentRef::parse
    #[must_use]
    pub fn document_id(&self) -> String {
        format!("{}:{}", self.volume_key, self.document_path)
    }
}

/// Extract the percent-decoded tree document id from a picker reference.
///
/// Handles both wrapper forms the external picker produces:
/// `content://<authority>/tree/<id>` and
/// `content://<authority>/tree/<id>/document/<id>`. In both cases the id
/// following the `tree` segment is returned.
///
/// Returns `None` when the reference has no `tree` segment, no id after it,
/// or a malformed percent escape.
///
/// # Examples
///
/// ```
/// use volpath::reference::tree_document_id;
///
/// let id = tree_document_id(
///     "content://com.android.externalstorage.documents/tree/primary%3ADocuments",
/// );
/// assert_eq!(id.as_deref(), Some("primary:Documents"));
///
/// assert_eq!(tree_document_id("content://authority/root"), None);
/// ```
#[must_use]
pub fn tree_document_id(uri: &str) -> Option<String> {
    let rest = uri.strip_prefix("content://")?;
    let (_authority, path) = rest.split_once('/')?;

    let mut segments = path.split('/');
    while let Some(segment) = segments.next() {
        if segment == "tree" {
            let id = segments.next().filter(|id| !id.is_empty())?;
            return percent_decode(id);
        }
    }
    None
}

/// Build a `document` reference in the picker's wrapper syntax.
///
/// The document id segment is percent-encoded the way the external picker
/// expects (`:` as `%3A`, `/` as `%2F`).
///
/// # Examples
///
/// ```
/// use volpath::reference::document_uri;
///
/// let uri = document_uri(
///     "com.android.externalstorage.documents",
///     "ABCD-1234:Android/data/pkg/files",
/// );
/// assert_eq!(
///     uri,
///     "content://com.android.externalstorage.documents/document/ABCD-1234%3AAndroid%2Fdata%2Fpkg%2Ffiles",
/// );
/// ```
#[must_use]
pub fn document_uri(authority: &str, document_id: &str) -> String {
    format!(
        "content://{authority}/document/{}",
        percent_encode(document_id)
    )
}

/// Decode `%XX` escapes. Returns `None` on a truncated or non-hex escape.
fn percent_decode(s: &str) -> Option<String> {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hex = bytes.get(i + 1..i + 3)?;
            let hex = std::str::from_utf8(hex).ok()?;
            out.push(u8::from_str_radix(hex, 16).ok()?);
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    String::from_utf8(out).ok()
}

/// Encode the characters the picker's id segment reserves.
fn percent_encode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '%' => out.push_str("%25"),
            ':' => out.push_str("%3A"),
            '/' => out.push_str("%2F"),
            _ => out.push(c),
        }
    }
    out
}
