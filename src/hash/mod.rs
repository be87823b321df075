//! Fuzzy and cryptographic hashing of sample buffers.
//!
//! The centerpiece is a context-triggered piecewise hash (CTPH, the `ssdeep` format): content
//! defined blocks are located with a 7-byte [`RollingHash`], every block is condensed into one
//! base64 character, and the resulting [`FuzzyHash`] values can be compared with
//! [`similarity`] to find near-duplicate samples.
//!
//! # Key Components
//!
//! - [`RollingHash`] - Block boundary detection over a 7-byte window
//! - [`FuzzyHash`] - The `<block_size>:<hash1>:<hash2>` fuzzy hash and its generator
//! - [`similarity`] - Weighted edit distance based comparison of two fuzzy hashes
//! - [`DigestProvider`] / [`StandardDigests`] - MD5, SHA-1 and SHA-256
//!
//! # Examples
//!
//! ```rust
//! use bintriage::hash::{fuzzy_hash, similarity_from_strings};
//!
//! let original = fuzzy_hash(b"hello world");
//! assert_eq!(original.to_string(), "3:iKFSMPn:rJPn");
//! assert_eq!(similarity_from_strings("3:iKFSMPn:rJPn", &original.to_string()), 1.0);
//! ```

mod digest;
mod fuzzy;
mod rolling;
mod similarity;

pub use digest::{DigestProvider, Digests, StandardDigests};
pub use fuzzy::{fuzzy_hash, hash_to_string, FuzzyHash, MIN_BLOCK_SIZE, SPAMSUM_LENGTH};
pub use rolling::{RollingHash, ROLLING_WINDOW};
pub use similarity::{similarity, similarity_from_strings, similarity_with};
