//! Byte frequency histograms and Shannon entropy.
//!
//! Entropy is measured in bits per byte, from `0.0` for a buffer of one repeated value up to
//! `8.0` for uniformly distributed bytes. Packed or encrypted payloads typically score above
//! `7.0`, while plain code and text stay well below.
//!
//! # Examples
//!
//! ```rust
//! use bintriage::entropy::{entropy, ByteHistogram};
//!
//! assert_eq!(entropy(b"AAAA"), 0.0);
//! assert_eq!(entropy(b"AB"), 1.0);
//!
//! let histogram = ByteHistogram::from_bytes(b"ABBA");
//! assert_eq!(histogram.count(b'B'), 2);
//! assert_eq!(histogram.total(), 4);
//! ```

use std::{collections::BTreeMap, io};

use serde::{Deserialize, Serialize};

use crate::Result;

/// Occurrence count of every byte value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ByteHistogram(#[serde(with = "counts_serde")] [u64; 256]);

impl ByteHistogram {
    /// Counts the bytes of `data`.
    #[must_use]
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut histogram = Self::default();
        histogram.update(data);
        histogram
    }

    /// Counts all bytes read from `reader` until end of input.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::FileError`] if reading fails.
    pub fn from_reader<R: io::Read>(mut reader: R) -> Result<Self> {
        let mut histogram = Self::default();
        let mut buffer = [0_u8; 8192];

        loop {
            let read = match reader.read(&mut buffer) {
                Ok(0) => break,
                Ok(read) => read,
                Err(error) if error.kind() == io::ErrorKind::Interrupted => continue,
                Err(error) => return Err(error.into()),
            };
            histogram.update(&buffer[..read]);
        }

        Ok(histogram)
    }

    /// Adds the bytes of `data` to the counts.
    pub fn update(&mut self, data: &[u8]) {
        for &byte in data {
            self.0[usize::from(byte)] += 1;
        }
    }

    /// Count of one byte value.
    #[must_use]
    pub fn count(&self, byte: u8) -> u64 {
        self.0[usize::from(byte)]
    }

    /// All 256 counts, indexed by byte value.
    #[must_use]
    pub fn counts(&self) -> &[u64; 256] {
        &self.0
    }

    /// Number of bytes counted.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.0.iter().sum()
    }

    /// The counts keyed by byte value, including zero counts.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_map(&self) -> BTreeMap<u8, u64> {
        self.0
            .iter()
            .enumerate()
            .map(|(byte, &count)| (byte as u8, count))
            .collect()
    }

    /// Shannon entropy of the counted bytes, see [`shannon_entropy`].
    #[must_use]
    pub fn entropy(&self) -> f64 {
        shannon_entropy(self)
    }
}

impl Default for ByteHistogram {
    fn default() -> Self {
        ByteHistogram([0; 256])
    }
}

/// Fixed size arrays beyond 32 elements have no serde support; go through a sequence.
mod counts_serde {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(counts: &[u64; 256], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(counts.iter())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<[u64; 256], D::Error> {
        let counts = Vec::<u64>::deserialize(deserializer)?;
        let len = counts.len();
        counts
            .try_into()
            .map_err(|_| de::Error::invalid_length(len, &"256 byte counts"))
    }
}

/// Shannon entropy in bits per byte, `-sum(p * log2(p))` over all byte values with `p > 0`.
///
/// Returns `0.0` for an empty histogram. The result is clamped to `[0.0, 8.0]`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn shannon_entropy(histogram: &ByteHistogram) -> f64 {
    let total = histogram.total() as f64;
    if total == 0.0 {
        return 0.0;
    }

    let mut entropy: f64 = 0.0;
    for &count in histogram.counts() {
        let p = count as f64 / total;
        if p != 0.0 {
            entropy += -p * p.log2();
        }
    }

    entropy.clamp(0.0, 8.0)
}

/// Shannon entropy of `data` in bits per byte.
#[must_use]
pub fn entropy(data: &[u8]) -> f64 {
    shannon_entropy(&ByteHistogram::from_bytes(data))
}

/// Shannon entropy of everything read from `reader`.
///
/// # Errors
///
/// Returns [`crate::Error::FileError`] if reading fails.
pub fn entropy_from_reader<R: io::Read>(reader: R) -> Result<f64> {
    Ok(shannon_entropy(&ByteHistogram::from_reader(reader)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::{pe_sample, PE_SAMPLE_ENTROPY};

    #[test]
    fn empty() {
        assert_eq!(entropy(&[]), 0.0);
        assert_eq!(ByteHistogram::default().total(), 0);
    }

    #[test]
    fn text_vector() {
        let value = entropy(b"aalsjflasjfkljasklfjalksjflkj");
        assert!((value - 2.560_422_702_607_203_5).abs() < 1e-12);
    }

    #[test]
    fn bounds() {
        assert_eq!(entropy(&[0x41; 1000]), 0.0);

        let uniform: Vec<u8> = (0..=255).collect();
        assert!((entropy(&uniform) - 8.0).abs() < 1e-12);
        assert!(entropy(&uniform) <= 8.0);
    }

    #[test]
    fn pe_sample_values() {
        let histogram = ByteHistogram::from_bytes(&pe_sample());
        assert_eq!(histogram.total(), 1024);
        assert_eq!(histogram.count(0x00), 813);
        assert_eq!(histogram.count(0x01), 10);
        assert!((histogram.entropy() - PE_SAMPLE_ENTROPY).abs() < 1e-12);
    }

    #[test]
    fn reader_matches_slice() {
        let data = pe_sample();
        let from_reader = ByteHistogram::from_reader(data.as_slice()).unwrap();
        assert_eq!(from_reader, ByteHistogram::from_bytes(&data));
        assert!((entropy_from_reader(data.as_slice()).unwrap() - PE_SAMPLE_ENTROPY).abs() < 1e-12);
    }

    #[test]
    fn map_has_every_byte() {
        let map = ByteHistogram::from_bytes(b"\x00\x00\xFF").to_map();
        assert_eq!(map.len(), 256);
        assert_eq!(map[&0x00], 2);
        assert_eq!(map[&0x7F], 0);
        assert_eq!(map[&0xFF], 1);
    }

    #[test]
    fn serde_roundtrip() {
        let histogram = ByteHistogram::from_bytes(b"hello");
        let json = serde_json::to_string(&histogram).unwrap();
        let back: ByteHistogram = serde_json::from_str(&json).unwrap();
        assert_eq!(back, histogram);

        assert!(serde_json::from_str::<ByteHistogram>("[1,2,3]").is_err());
    }
}
