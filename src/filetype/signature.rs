//! Magic byte patterns and the table entries built from them.

use super::{FileType, FileTypeId};
use crate::Result;

/// A magic byte pattern anchored at offset 0.
///
/// Patterns are written as hex text, one character per nibble. Whitespace is ignored and `?`
/// matches any nibble, so `"52 49 46 46 ?? ?? ?? ?? 57 41 56 45"` describes a RIFF WAVE
/// header with an arbitrary chunk size.
///
/// # Examples
///
/// ```rust
/// use bintriage::filetype::Signature;
///
/// let riff = Signature::parse("52 49 46 46 ?? ?? ?? ?? 57 41 56 45")?;
/// assert!(riff.matches(b"RIFF\x24\x08\x00\x00WAVEfmt "));
/// assert!(!riff.matches(b"RIFF\x24\x08"));
/// # Ok::<(), bintriage::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    /// One entry per nibble, high nibble first; `None` is a wildcard
    nibbles: Vec<Option<u8>>,
}

impl Signature {
    /// Parses a hex pattern.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Malformed`] if the pattern has an odd number of nibbles,
    /// contains a character that is neither a hex digit nor `?`, or is empty.
    #[allow(clippy::cast_possible_truncation)]
    pub fn parse(pattern: &str) -> Result<Signature> {
        let compact: Vec<char> = pattern.chars().filter(|c| !c.is_whitespace()).collect();

        if compact.len() % 2 != 0 {
            return Err(malformed_error!("Odd-length signature - '{}'", pattern));
        }

        let mut nibbles = Vec::with_capacity(compact.len());
        for c in compact {
            if c == '?' {
                nibbles.push(None);
                continue;
            }

            match c.to_digit(16) {
                Some(value) => nibbles.push(Some(value as u8)),
                None => {
                    return Err(malformed_error!(
                        "Invalid character '{}' in signature '{}'",
                        c,
                        pattern
                    ))
                }
            }
        }

        if nibbles.is_empty() {
            return Err(malformed_error!("Signature can not be zero bytes"));
        }

        Ok(Signature { nibbles })
    }

    /// Returns `true` if `data` starts with this pattern.
    ///
    /// Data shorter than the pattern never matches, even if the missing part is a wildcard.
    #[must_use]
    pub fn matches(&self, data: &[u8]) -> bool {
        if self.nibbles.len() > data.len() * 2 {
            return false;
        }

        self.nibbles
            .iter()
            .enumerate()
            .all(|(index, nibble)| match nibble {
                None => true,
                Some(expected) => {
                    let byte = data[index / 2];
                    let actual = if index % 2 == 0 { byte >> 4 } else { byte & 0x0F };
                    actual == *expected
                }
            })
    }

    /// Number of bytes covered by the pattern.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nibbles.len() / 2
    }

    /// Always `false`; empty patterns are rejected by [`Signature::parse`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nibbles.is_empty()
    }
}

/// A file type together with the alternative signatures that identify it.
#[derive(Debug, Clone, PartialEq)]
pub struct SignatureEntry {
    file_type: FileType,
    signatures: Vec<Signature>,
}

impl SignatureEntry {
    /// Parses `"<pattern>[,<pattern>..]|<description>|<ext>[,<ext>..]"`.
    ///
    /// Description and extensions are trimmed; empty extensions are dropped, so an entry like
    /// `"7F 45 4C 46|ELF Executable|"` has no extensions at all.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Malformed`] if there are fewer than three `|` separated fields
    /// or any alternative is not a valid [`Signature`].
    pub fn parse(text: &str, id: FileTypeId) -> Result<SignatureEntry> {
        let fields: Vec<&str> = text.splitn(3, '|').collect();
        let [patterns, description, extensions] = fields.as_slice() else {
            return Err(malformed_error!(
                "Expected 3 '|' separated fields in signature entry '{}'",
                text
            ));
        };

        let signatures = patterns
            .split(',')
            .map(Signature::parse)
            .collect::<Result<Vec<_>>>()?;

        let extensions: Vec<&str> = extensions.split(',').map(str::trim).collect();

        Ok(SignatureEntry {
            file_type: FileType::new(id, description.trim(), &extensions),
            signatures,
        })
    }

    /// The file type reported when one of the signatures matches.
    #[must_use]
    pub fn file_type(&self) -> &FileType {
        &self.file_type
    }

    /// The alternative patterns, in table order.
    #[must_use]
    pub fn signatures(&self) -> &[Signature] {
        &self.signatures
    }

    /// Returns `true` if any alternative matches `data`.
    #[must_use]
    pub fn matches(&self, data: &[u8]) -> bool {
        self.signatures.iter().any(|signature| signature.matches(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn parse_ignores_whitespace_and_case() {
        let signature = Signature::parse(" 7f 45\t4C\n46 ").unwrap();
        assert_eq!(signature.len(), 4);
        assert!(signature.matches(b"\x7FELF\x02\x01"));
    }

    #[test]
    fn parse_errors() {
        for pattern in ["", "   ", "7F 4", "7F 4G", "ZZ", "7F-45"] {
            assert!(
                matches!(Signature::parse(pattern), Err(Error::Malformed { .. })),
                "{pattern:?} should be rejected"
            );
        }
    }

    #[test]
    fn nibble_wildcards() {
        let signature = Signature::parse("4?5A").unwrap();
        assert!(signature.matches(b"MZ"));
        assert!(signature.matches(b"\x40\x5A"));
        assert!(!signature.matches(b"\x50\x5A"));

        let low = Signature::parse("?D").unwrap();
        assert!(low.matches(b"M"));
        assert!(!low.matches(b"N"));
    }

    #[test]
    fn short_data_never_matches() {
        let signature = Signature::parse("4D 5A ??").unwrap();
        assert!(!signature.matches(b"MZ"));
        assert!(signature.matches(b"MZ\x00"));
        assert!(!signature.matches(&[]));
    }

    #[test]
    fn entry_parse() {
        let entry = SignatureEntry::parse(
            "47 49 46 38 37 61,47 49 46 38 39 61| GIF Image |gif, ",
            FileTypeId::Gif,
        )
        .unwrap();

        assert_eq!(entry.signatures().len(), 2);
        assert_eq!(entry.file_type().description, "GIF Image");
        assert_eq!(entry.file_type().extensions, vec!["gif".to_string()]);
        assert!(entry.matches(b"GIF89a\x01\x00"));
        assert!(entry.matches(b"GIF87a"));
        assert!(!entry.matches(b"GIF88a"));
    }

    #[test]
    fn entry_without_extensions() {
        let entry = SignatureEntry::parse("7F 45 4C 46 |ELF Executable|", FileTypeId::Elf).unwrap();
        assert!(entry.file_type().extensions.is_empty());
    }

    #[test]
    fn entry_errors() {
        assert!(SignatureEntry::parse("7F 45 4C 46|ELF", FileTypeId::Elf).is_err());
        assert!(SignatureEntry::parse("7F 45,|ELF|", FileTypeId::Elf).is_err());
        assert!(SignatureEntry::parse("|ELF|", FileTypeId::Elf).is_err());
    }
}
