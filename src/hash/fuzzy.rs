//! Context-triggered piecewise hashing.
//!
//! A fuzzy hash is produced by cutting the input into content-defined blocks with a
//! [`RollingHash`] and condensing every block into a single base64 character. Two block
//! granularities are kept: `hash1` at the chosen block size and `hash2` at twice that size,
//! which lets hashes of inputs whose sizes differ by roughly a factor of two still be compared.

use std::{fmt, str::FromStr};

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use super::rolling::RollingHash;
use crate::{Error, Result};

/// Maximum number of characters in `hash1`.
pub const SPAMSUM_LENGTH: usize = 64;

/// Smallest block size the engine will use.
pub const MIN_BLOCK_SIZE: u32 = 3;

/// Multiplier of the per-block accumulator.
const HASH_PRIME: u32 = 0x0100_0193;

/// Start value of the per-block accumulator.
const HASH_INIT: u32 = 0x2802_1967;

/// Characters used to encode one block.
const BASE64_ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Largest block size the doubling search is allowed to reach.
const MAX_BLOCK_SIZE: u32 = u32::MAX / 2;

fn sum_hash(state: u32, byte: u8) -> u32 {
    state.wrapping_mul(HASH_PRIME) ^ u32::from(byte)
}

/// Smallest `3 * 2^k` such that `block_size * SPAMSUM_LENGTH >= len`.
fn initial_block_size(len: usize) -> u32 {
    let mut block_size = MIN_BLOCK_SIZE;
    while (u64::from(block_size) * SPAMSUM_LENGTH as u64) < len as u64
        && block_size <= MAX_BLOCK_SIZE
    {
        block_size *= 2;
    }
    block_size
}

/// One half of a fuzzy hash under construction, holding at most `N` characters.
struct BlockDigest<const N: usize> {
    chars: [u8; N],
    len: usize,
    state: u32,
}

impl<const N: usize> BlockDigest<N> {
    fn new() -> Self {
        BlockDigest {
            chars: [0; N],
            len: 0,
            state: HASH_INIT,
        }
    }

    fn update(&mut self, byte: u8) {
        self.state = sum_hash(self.state, byte);
    }

    /// Writes the character for the current block. The last slot keeps absorbing
    /// input and is overwritten by every further block boundary.
    fn cut(&mut self) {
        self.chars[self.len] = BASE64_ALPHABET[(self.state % 64) as usize];
        if self.len < N - 1 {
            self.state = HASH_INIT;
            self.len += 1;
        }
    }

    fn finalize(&mut self) {
        self.chars[self.len] = BASE64_ALPHABET[(self.state % 64) as usize];
        self.len += 1;
    }

    fn into_string(self) -> String {
        self.chars[..self.len].iter().map(|&c| char::from(c)).collect()
    }
}

/// Result of hashing the input once at a fixed block size.
struct Pass {
    hash1: BlockDigest<SPAMSUM_LENGTH>,
    hash2: BlockDigest<{ SPAMSUM_LENGTH / 2 }>,
    trigger: u32,
}

impl Pass {
    fn run(data: &[u8], block_size: u32) -> Pass {
        let double_size = u64::from(block_size) * 2;

        let mut rolling = RollingHash::new();
        let mut hash1 = BlockDigest::new();
        let mut hash2 = BlockDigest::new();

        for &byte in data {
            let trigger = rolling.update(byte);
            hash1.update(byte);
            hash2.update(byte);

            if trigger % block_size == block_size - 1 {
                hash1.cut();
            }
            if u64::from(trigger) % double_size == double_size - 1 {
                hash2.cut();
            }
        }

        Pass {
            hash1,
            hash2,
            trigger: rolling.value(),
        }
    }
}

/// A context-triggered piecewise hash of a byte buffer.
///
/// The text form is `"<block_size>:<hash1>:<hash2>"`, e.g. `3:iKFSMPn:rJPn`. `hash1` holds at
/// most 64 characters, `hash2` at most 32, and `block_size` is always `3 * 2^k`.
///
/// Values are immutable once built and can be shared freely between threads.
///
/// # Examples
///
/// ```rust
/// use bintriage::FuzzyHash;
///
/// let hash = FuzzyHash::generate(b"hello world");
/// assert_eq!(hash.to_string(), "3:iKFSMPn:rJPn");
///
/// let parsed: FuzzyHash = "3:iKFSMPn:rJPn".parse()?;
/// assert_eq!(parsed, hash);
/// assert_eq!(hash.similarity(&parsed), 1.0);
/// # Ok::<(), bintriage::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FuzzyHash {
    block_size: u32,
    hash1: String,
    hash2: String,
}

impl FuzzyHash {
    /// Computes the fuzzy hash of `data`.
    ///
    /// The block size starts at the smallest `3 * 2^k` for which 64 blocks cover the input
    /// and is halved, re-hashing from scratch, as long as fewer than 32 `hash1` characters
    /// were produced. Never fails; the empty input hashes to `3::`.
    #[must_use]
    pub fn generate(data: &[u8]) -> FuzzyHash {
        let mut block_size = initial_block_size(data.len());

        loop {
            let mut pass = Pass::run(data, block_size);

            if block_size > MIN_BLOCK_SIZE && pass.hash1.len < SPAMSUM_LENGTH / 2 {
                log::trace!(
                    "block size {} produced {} characters, retrying",
                    block_size,
                    pass.hash1.len
                );
                block_size /= 2;
                continue;
            }

            if pass.trigger != 0 {
                pass.hash1.finalize();
                pass.hash2.finalize();
            }

            return FuzzyHash {
                block_size,
                hash1: pass.hash1.into_string(),
                hash2: pass.hash2.into_string(),
            };
        }
    }

    /// Block size used for `hash1`; `hash2` uses twice this size.
    #[must_use]
    pub fn block_size(&self) -> u32 {
        self.block_size
    }

    /// Digest at the base block size.
    #[must_use]
    pub fn hash1(&self) -> &str {
        &self.hash1
    }

    /// Digest at twice the base block size.
    #[must_use]
    pub fn hash2(&self) -> &str {
        &self.hash2
    }

    /// Similarity to `other` in `[0.0, 1.0]`, see [`crate::hash::similarity`].
    #[must_use]
    pub fn similarity(&self, other: &FuzzyHash) -> f64 {
        super::similarity::similarity(self, other)
    }
}

/// Computes the fuzzy hash of `data`.
///
/// Shorthand for [`FuzzyHash::generate`].
#[must_use]
pub fn fuzzy_hash(data: &[u8]) -> FuzzyHash {
    FuzzyHash::generate(data)
}

/// Computes the fuzzy hash of `data` and returns its text form.
#[must_use]
pub fn hash_to_string(data: &[u8]) -> String {
    FuzzyHash::generate(data).to_string()
}

impl fmt::Display for FuzzyHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.block_size, self.hash1, self.hash2)
    }
}

impl FromStr for FuzzyHash {
    type Err = Error;

    /// Parses `"<block_size>:<hash1>:<hash2>"`.
    ///
    /// Only the structure and the block size are validated; the digest characters are taken
    /// as they are.
    fn from_str(s: &str) -> Result<Self> {
        let fields: Vec<&str> = s.split(':').collect();
        let [block_size, hash1, hash2] = fields.as_slice() else {
            return Err(Error::InvalidFormat(format!(
                "expected 3 ':' separated fields, found {}",
                fields.len()
            )));
        };

        if block_size.is_empty() || !block_size.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidFormat(format!(
                "block size '{block_size}' is not a decimal number"
            )));
        }

        let block_size: u32 = block_size.parse().map_err(|_| {
            Error::InvalidFormat(format!("block size '{block_size}' is out of range"))
        })?;

        if block_size < MIN_BLOCK_SIZE {
            return Err(Error::InvalidFormat(format!(
                "block size {block_size} is below the minimum of {MIN_BLOCK_SIZE}"
            )));
        }

        Ok(FuzzyHash {
            block_size,
            hash1: (*hash1).to_string(),
            hash2: (*hash2).to_string(),
        })
    }
}

impl Serialize for FuzzyHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for FuzzyHash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::{pe_sample, PE_SAMPLE_FUZZY_HASH};

    #[test]
    fn empty_input() {
        let hash = FuzzyHash::generate(&[]);
        assert_eq!(hash.block_size(), 3);
        assert_eq!(hash.hash1(), "");
        assert_eq!(hash.hash2(), "");
        assert_eq!(hash.to_string(), "3::");
    }

    #[test]
    fn short_text() {
        assert_eq!(hash_to_string(b"hello world"), "3:iKFSMPn:rJPn");
    }

    #[test]
    fn pe_sample_golden() {
        let hash = fuzzy_hash(&pe_sample());
        assert_eq!(hash.to_string(), PE_SAMPLE_FUZZY_HASH);
        assert_eq!(hash.block_size(), 6);
    }

    #[test]
    fn last_slot_absorbs_remaining_blocks() {
        // 10240 bytes cycling through every byte value: block size search settles on 192
        // and hash1 fills all 64 slots.
        let data: Vec<u8> = (0..40).flat_map(|_| 0..=255_u8).collect();
        let hash = FuzzyHash::generate(&data);

        let mut expected_hash1 = String::from("z");
        expected_hash1.push_str(&"n".repeat(62));
        expected_hash1.push('b');

        assert_eq!(hash.block_size(), 192);
        assert_eq!(hash.hash1(), expected_hash1);
        assert_eq!(hash.hash2(), "n");
        assert_eq!(hash.hash1().len(), SPAMSUM_LENGTH);
    }

    #[test]
    fn invariants_hold_for_varied_inputs() {
        let mut seed = 0x1234_5678_u32;
        for len in [1_usize, 7, 100, 1_000, 5_000, 70_000] {
            let data: Vec<u8> = (0..len)
                .map(|_| {
                    seed ^= seed << 13;
                    seed ^= seed >> 17;
                    seed ^= seed << 5;
                    (seed >> 24) as u8
                })
                .collect();

            let hash = FuzzyHash::generate(&data);
            assert!(hash.hash1().len() <= SPAMSUM_LENGTH);
            assert!(hash.hash2().len() <= SPAMSUM_LENGTH / 2);
            assert_eq!(hash.block_size() % 3, 0);
            assert!((hash.block_size() / 3).is_power_of_two());
            assert_eq!(hash, FuzzyHash::generate(&data));
        }
    }

    #[test]
    fn initial_block_size_doubles() {
        assert_eq!(initial_block_size(0), 3);
        assert_eq!(initial_block_size(192), 3);
        assert_eq!(initial_block_size(193), 6);
        assert_eq!(initial_block_size(1024), 24);
    }

    #[test]
    fn largest_block_size_does_not_overflow() {
        let block_size = initial_block_size(usize::MAX);
        assert!(block_size <= 3 << 30);
        assert!((block_size / 3).is_power_of_two());

        let pass = Pass::run(b"hello world", 3 << 30);
        assert_eq!(pass.hash1.len, 0);
        assert_eq!(pass.hash2.len, 0);
    }

    #[test]
    fn parse_roundtrip() {
        let text = "6:MxlEh/jKjXFeyclltA9izeUD0r9llUMIotp0P/3BWwKXGO:OEh/G70yUQ9iKUAhPAnQwu";
        let hash: FuzzyHash = text.parse().unwrap();
        assert_eq!(hash.block_size(), 6);
        assert_eq!(hash.hash2(), "OEh/G70yUQ9iKUAhPAnQwu");
        assert_eq!(hash.to_string(), text);
    }

    #[test]
    fn parse_rejects_malformed() {
        for text in [
            "",
            "3:abc",
            "3:a:b:c",
            "x:a:b",
            "+3:a:b",
            ":a:b",
            "2:a:b",
            "0::",
            "99999999999:a:b",
        ] {
            assert!(
                matches!(text.parse::<FuzzyHash>(), Err(Error::InvalidFormat(_))),
                "{text} should be rejected"
            );
        }
    }

    #[test]
    fn parse_keeps_unusual_characters() {
        let hash: FuzzyHash = "3:a-b:c.d".parse().unwrap();
        assert_eq!(hash.hash1(), "a-b");
        assert_eq!(hash.hash2(), "c.d");
    }

    #[test]
    fn serde_uses_text_form() {
        let hash = fuzzy_hash(b"hello world");
        let json = serde_json::to_string(&hash).unwrap();
        assert_eq!(json, "\"3:iKFSMPn:rJPn\"");

        let back: FuzzyHash = serde_json::from_str(&json).unwrap();
        assert_eq!(back, hash);
        assert!(serde_json::from_str::<FuzzyHash>("\"1:a:b\"").is_err());
    }
}
