//! Cryptographic digests of the triaged buffer.
//!
//! The pipeline only depends on the [`DigestProvider`] trait, so callers can swap in a
//! hardware-accelerated or precomputed provider. [`StandardDigests`] is the default, backed by
//! the RustCrypto `md-5`, `sha1` and `sha2` crates.

use std::fmt::Write;

use md5::Md5;
use serde::{Deserialize, Serialize};
use sha1::{Digest, Sha1};
use sha2::Sha256;

/// Helper function to convert bytes to an uppercase hex string
fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut hex_string = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        let _ = write!(&mut hex_string, "{byte:02X}");
    }
    hex_string
}

/// MD5, SHA-1 and SHA-256 of one buffer as uppercase hex strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Digests {
    /// MD5, 32 hex characters
    pub md5: String,
    /// SHA-1, 40 hex characters
    pub sha1: String,
    /// SHA-256, 64 hex characters
    pub sha256: String,
}

/// Computes the cryptographic digests reported by the triage pipeline.
pub trait DigestProvider: Send + Sync {
    /// Hashes `data` with every supported algorithm.
    fn digests(&self, data: &[u8]) -> Digests;
}

/// [`DigestProvider`] backed by the RustCrypto hash implementations.
///
/// # Examples
///
/// ```rust
/// use bintriage::hash::{DigestProvider, StandardDigests};
///
/// let digests = StandardDigests.digests(b"");
/// assert_eq!(digests.md5, "D41D8CD98F00B204E9800998ECF8427E");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardDigests;

impl DigestProvider for StandardDigests {
    fn digests(&self, data: &[u8]) -> Digests {
        Digests {
            md5: bytes_to_hex(&Md5::digest(data)),
            sha1: bytes_to_hex(&Sha1::digest(data)),
            sha256: bytes_to_hex(&Sha256::digest(data)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::pe_sample;

    #[test]
    fn empty_input() {
        let digests = StandardDigests.digests(&[]);
        assert_eq!(digests.md5, "D41D8CD98F00B204E9800998ECF8427E");
        assert_eq!(digests.sha1, "DA39A3EE5E6B4B0D3255BFEF95601890AFD80709");
        assert_eq!(
            digests.sha256,
            "E3B0C44298FC1C149AFBF4C8996FB92427AE41E4649B934CA495991B7852B855"
        );
    }

    #[test]
    fn pe_sample_digests() {
        let digests = StandardDigests.digests(&pe_sample());
        assert_eq!(digests.md5, "DE1C4F31BEAEB0C3DFD961A5F3624881");
        assert_eq!(digests.sha1, "E6CDC2C50DE232BA0A562D63F2D8D3422E17E25A");
        assert_eq!(
            digests.sha256,
            "9C95B9CBB6153508A548A3C1932D33D73EB4DA016C3F1A9F205CEB38D92E7781"
        );
    }

    #[test]
    fn hex_is_uppercase_and_padded() {
        assert_eq!(bytes_to_hex(&[0x00, 0x0A, 0xFF]), "000AFF");
        assert_eq!(bytes_to_hex(&[]), "");
    }
}
