//! Ordered classification: structural detectors, signatures, then one fallback.

use super::{detect::DETECTORS, FileType, FileTypeId, FileTypes, SignatureTable};

/// Classifies byte buffers against a [`SignatureTable`].
///
/// Every classification runs in three stages:
///
/// 1. the structural detectors (PE behind a DOS stub, Office Open XML packages), most specific
///    finding first
/// 2. every table entry with at least one matching alternative, in table order
/// 3. exactly one fallback: `Empty` for zero-length input, `Binary` if any byte is zero or
///    `>= 0x80`, `Text` otherwise
///
/// The result therefore always holds at least one type and always ends in a fallback.
///
/// # Examples
///
/// ```rust
/// use bintriage::filetype::{Classifier, FileTypeId};
///
/// let classifier = Classifier::default();
/// let types = classifier.get(b"\x7FELF\x02\x01\x01\x00");
///
/// assert_eq!(types.first().map(|t| t.id), Some(FileTypeId::Elf));
/// assert!(types.matches(FileTypeId::Binary));
/// assert_eq!(classifier.get1(b"plain text\n").id, FileTypeId::Text);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Classifier<'a> {
    table: &'a SignatureTable,
}

impl<'a> Classifier<'a> {
    /// Creates a classifier over `table`.
    #[must_use]
    pub fn new(table: &'a SignatureTable) -> Self {
        Classifier { table }
    }

    /// The signature table in use.
    #[must_use]
    pub fn table(&self) -> &'a SignatureTable {
        self.table
    }

    /// Returns every file type `data` matches, most specific first.
    #[must_use]
    pub fn get(&self, data: &[u8]) -> FileTypes {
        let mut result = Vec::new();

        for detect in DETECTORS {
            result.extend(detect(data).into_iter().rev());
        }

        result.extend(
            self.table
                .iter()
                .filter(|entry| entry.matches(data))
                .map(|entry| entry.file_type().clone()),
        );

        result.push(fallback(data));

        log::trace!(
            "classified {} bytes as {:?}",
            data.len(),
            result.iter().map(|t| t.id).collect::<Vec<_>>()
        );

        FileTypes::from(result)
    }

    /// Returns the most specific file type of `data`.
    ///
    /// Equivalent to the first element of [`Classifier::get`].
    #[must_use]
    pub fn get1(&self, data: &[u8]) -> FileType {
        for detect in DETECTORS {
            if let Some(most_specific) = detect(data).pop() {
                return most_specific;
            }
        }

        if let Some(entry) = self.table.iter().find(|entry| entry.matches(data)) {
            return entry.file_type().clone();
        }

        fallback(data)
    }
}

impl Default for Classifier<'static> {
    /// Classifier over [`SignatureTable::builtin`].
    fn default() -> Self {
        Classifier::new(SignatureTable::builtin())
    }
}

fn fallback(data: &[u8]) -> FileType {
    if data.is_empty() {
        return FileType::new(FileTypeId::Empty, "Empty", &[]);
    }

    if data.iter().any(|&b| b >= 0x80 || b == 0x00) {
        return FileType::new(FileTypeId::Binary, "Binary", &["dat", "bin"]);
    }

    FileType::new(FileTypeId::Text, "Text", &["txt"])
}
