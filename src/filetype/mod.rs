//! Magic byte and structural file type classification.
//!
//! Classification never fails: every input maps to an ordered, non-empty list of
//! [`FileType`] records, most specific first, always terminated by one of the generic
//! fallbacks `Empty`, `Binary` or `Text`.
//!
//! # Key Components
//!
//! - [`FileTypeId`] - Stable identifiers of all known types
//! - [`FileType`] / [`FileTypes`] - Classification results
//! - [`Signature`] / [`SignatureEntry`] / [`SignatureTable`] - Nibble patterns with wildcards
//!   and the ordered registry built from them
//! - [`Classifier`] - Detectors, signatures and fallback combined
//!
//! # Examples
//!
//! ```rust
//! use bintriage::filetype::{classify, classify1, FileTypeId};
//!
//! let types = classify(b"MZ");
//! assert!(types.matches(FileTypeId::Dos));
//! assert!(types.matches(FileTypeId::Text));
//!
//! assert_eq!(classify1(b"%PDF-1.4\n").description, "PDF Document");
//! assert_eq!(classify1(b"").id, FileTypeId::Empty);
//! ```
//!
//! # Thread Safety
//!
//! The built-in [`SignatureTable`] is initialized once and only read afterwards, so
//! classification can run from any number of threads concurrently.

mod classifier;
mod detect;
mod id;
mod signature;
mod table;

pub use classifier::Classifier;
pub use id::FileTypeId;
pub use signature::{Signature, SignatureEntry};
pub use table::SignatureTable;

use serde::{Deserialize, Serialize};

/// One classification result.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileType {
    /// Type identifier
    pub id: FileTypeId,
    /// Human readable name, e.g. `"PE Executable"`
    pub description: String,
    /// Customary file extensions without the leading dot; may be empty
    pub extensions: Vec<String>,
}

impl FileType {
    /// Creates a file type, dropping empty extensions.
    #[must_use]
    pub fn new(id: FileTypeId, description: &str, extensions: &[&str]) -> Self {
        FileType {
            id,
            description: description.to_string(),
            extensions: extensions
                .iter()
                .filter(|extension| !extension.is_empty())
                .map(|extension| (*extension).to_string())
                .collect(),
        }
    }

    /// Returns `true` if this is `id`.
    #[must_use]
    pub fn matches(&self, id: FileTypeId) -> bool {
        self.id == id
    }
}

/// All file types a buffer matched, most specific first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileTypes(Vec<FileType>);

impl FileTypes {
    /// Returns `true` if any entry is `id`.
    #[must_use]
    pub fn matches(&self, id: FileTypeId) -> bool {
        self.0.iter().any(|file_type| file_type.matches(id))
    }

    /// The most specific entry.
    #[must_use]
    pub fn first(&self) -> Option<&FileType> {
        self.0.first()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the entries, most specific first.
    pub fn iter(&self) -> std::slice::Iter<'_, FileType> {
        self.0.iter()
    }

    /// The entries as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[FileType] {
        &self.0
    }

    /// Consumes the list and returns the entries.
    #[must_use]
    pub fn into_vec(self) -> Vec<FileType> {
        self.0
    }
}

impl From<Vec<FileType>> for FileTypes {
    fn from(types: Vec<FileType>) -> Self {
        FileTypes(types)
    }
}

impl IntoIterator for FileTypes {
    type Item = FileType;
    type IntoIter = std::vec::IntoIter<FileType>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a FileTypes {
    type Item = &'a FileType;
    type IntoIter = std::slice::Iter<'a, FileType>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Classifies `data` with the built-in signature table.
///
/// See [`Classifier::get`].
#[must_use]
pub fn classify(data: &[u8]) -> FileTypes {
    Classifier::default().get(data)
}

/// Returns the most specific file type of `data` using the built-in signature table.
///
/// See [`Classifier::get1`].
#[must_use]
pub fn classify1(data: &[u8]) -> FileType {
    Classifier::default().get1(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_type_drops_empty_extensions() {
        let file_type = FileType::new(FileTypeId::Office, "Office Document", &["doc", "", "xls"]);
        assert_eq!(file_type.extensions, vec!["doc", "xls"]);
        assert!(file_type.matches(FileTypeId::Office));
        assert!(!file_type.matches(FileTypeId::OpenOfficeXml));
    }

    #[test]
    fn file_types_matches() {
        let types = classify(b"\x1F\x8B\x08\x00\x00\x00\x00\x00");
        assert!(types.matches(FileTypeId::Gzip));
        assert!(types.matches(FileTypeId::Binary));
        assert!(!types.matches(FileTypeId::Text));
        assert_eq!(types.len(), 2);
        assert_eq!(types.iter().count(), 2);
        assert_eq!((&types).into_iter().count(), 2);
    }

    #[test]
    fn serializes_as_list() {
        let types = classify(b"MZ");
        let json = serde_json::to_string(&types).unwrap();
        assert_eq!(
            json,
            r#"[{"id":"Dos","description":"DOS Executable","extensions":["exe"]},{"id":"Text","description":"Text","extensions":["txt"]}]"#
        );

        let back: FileTypes = serde_json::from_str(&json).unwrap();
        assert_eq!(back, types);
    }
}
