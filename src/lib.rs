// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
//#![deny(unsafe_code)]
// - 'file/physical.rs' uses mmap to map a file into memory

//! # bintriage
//!
//! [![Crates.io](https://img.shields.io/crates/v/bintriage.svg)](https://crates.io/crates/bintriage)
//! [![Documentation](https://docs.rs/bintriage/badge.svg)](https://docs.rs/bintriage)
//! [![License](https://img.shields.io/badge/license-Apache--2.0-blue.svg)](https://github.com/BinFlip/bintriage/blob/main/LICENSE-APACHE)
//!
//! Fast, structure-agnostic first look at unknown binaries. `bintriage` does not parse any
//! particular executable format in depth; instead it produces the cheap, comparable facts an
//! analyst or a sample database wants before deciding what to do with a file.
//!
//! ## Features
//!
//! - **🧩 Fuzzy hashing** - ssdeep compatible context triggered piecewise hashes and similarity scores
//! - **📏 Edit distance** - Weighted Damerau-Levenshtein distance with per character replacement costs
//! - **🔍 File type classification** - Magic byte signatures plus structural PE and Office Open XML detection
//! - **📊 Entropy** - Byte histograms and Shannon entropy
//! - **⚡ Analyzer pipeline** - Independent analyzers, run sequentially or on the rayon pool
//!
//! ## Quick Start
//!
//! Add `bintriage` to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! bintriage = "0.3"
//! ```
//!
//! ### Using the Prelude
//!
//! ```rust,no_run
//! use bintriage::prelude::*;
//!
//! let sample = Sample::from_path("suspicious.bin")?;
//! let report = triage(sample.data())?;
//! println!("{:?} {:?}", report.file_type, report.fuzzy_hash);
//! # Ok::<(), bintriage::Error>(())
//! ```
//!
//! ### Basic Usage
//!
//! ```rust
//! use bintriage::{classify1, entropy, fuzzy_hash, similarity, FileTypeId, FuzzyHash};
//!
//! let data = b"MZ\x90\x00\x03\x00\x00\x00\x04\x00\x00\x00\xff\xff\x00\x00";
//!
//! assert_eq!(classify1(data).id, FileTypeId::Dos);
//! assert!(entropy(data) > 0.0);
//!
//! let a: FuzzyHash = fuzzy_hash(b"hello world");
//! assert_eq!(a.to_string(), "3:iKFSMPn:rJPn");
//! assert_eq!(similarity(&a, &a), 1.0);
//! ```
//!
//! ## Architecture
//!
//! - [`prelude`] - Convenient re-exports of commonly used types and traits
//! - [`file`] - The byte buffer under triage and bounds-checked integer decoding
//! - [`hash`] - Rolling hash, fuzzy hash, similarity and cryptographic digests
//! - [`distance`] - Configurable edit distance used by the similarity score
//! - [`filetype`] - Signature table, structural detectors and the classifier
//! - [`entropy`] - Byte histograms and Shannon entropy
//! - [`triage`] - Analyzers, the pipeline and the aggregated report
//! - [`Error`] and [`Result`] - Error handling
//!
//! ### Compatibility
//!
//! The fuzzy hash output is byte-for-byte identical to `ssdeep` for inputs whose hash does
//! not need more than one block size pass, and the text form can be exchanged with other
//! ssdeep implementations. Similarity scores are computed with this crate's own weighted edit
//! distance and are not the classic ssdeep 0-100 score.
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result<T, Error>`](Result):
//!
//! ```rust
//! use bintriage::{Error, FuzzyHash};
//!
//! match "3:abc".parse::<FuzzyHash>() {
//!     Ok(_) => unreachable!(),
//!     Err(Error::InvalidFormat(reason)) => println!("Invalid fuzzy hash: {}", reason),
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```
//!
//! ## Development and Testing
//!
//! ### Fuzzing
//!
//! ```bash
//! # Install fuzzing tools
//! cargo install cargo-fuzz
//!
//! # Run fuzzers
//! cargo +nightly fuzz run classify --release
//! cargo +nightly fuzz run parse_fuzzy_hash --release -- -jobs=4 -fork=1
//! ```
//!
//! ### Testing
//!
//! ```bash
//! cargo test
//! cargo bench
//! ```
#[macro_use]
pub(crate) mod error;

/// Shared functionality which is used in unit- and integration-tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use bintriage::prelude::*;
///
/// let report = triage_with_config(b"hello world", &TriageConfig::offline())?;
/// assert_eq!(report.file_type.map(|t| t.id), Some(FileTypeId::Text));
/// # Ok::<(), bintriage::Error>(())
/// ```
pub mod prelude;

pub mod file;

pub mod hash;

/// Weighted Damerau-Levenshtein edit distance
///
/// Insertions, deletions, adjacent transpositions and replacements each carry their own cost,
/// and individual character pairs can be given a cheaper or more expensive replacement cost
/// through a [`distance::ReplacementTable`]. The fuzzy hash similarity score is built on top
/// of this distance.
///
/// # Examples
///
/// ```rust
/// use bintriage::DistanceConfig;
///
/// let config = DistanceConfig::new(1.0, 1.0, 1.0, 1.0, true);
/// assert_eq!(config.distance("kitten", "sitting"), 3.0);
/// ```
pub mod distance;

pub mod filetype;

/// Byte histograms and Shannon entropy
///
/// # Examples
///
/// ```rust
/// use bintriage::entropy::{entropy, ByteHistogram};
///
/// assert_eq!(entropy(b""), 0.0);
/// assert_eq!(entropy(b"abab"), 1.0);
///
/// let histogram = ByteHistogram::from_bytes(b"abab");
/// assert_eq!(histogram.count(b'a'), 2);
/// ```
pub mod entropy;

pub mod triage;

/// `bintriage` Result type
///
/// A type alias for `std::result::Result<T, Error>` where the error type is always
/// [`crate::Error`].
///
/// # Examples
///
/// ```rust
/// use bintriage::{FuzzyHash, Result};
///
/// fn parse_all(hashes: &[&str]) -> Result<Vec<FuzzyHash>> {
///     hashes.iter().map(|h| h.parse()).collect()
/// }
/// assert!(parse_all(&["3::", "6:abc:de"]).is_ok());
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// `bintriage` Error type
///
/// The main error type for all operations in this crate. Provides detailed error information
/// for buffer decoding, fuzzy hash parsing, replacement tables and the analyzer pipeline.
pub use error::Error;

/// The byte buffer under triage, backed by memory or a memory-mapped file.
pub use file::Sample;

/// Fuzzy hashing and similarity.
///
/// # Example
///
/// ```rust
/// use bintriage::{similarity_from_strings, fuzzy_hash, hash_to_string};
///
/// assert_eq!(hash_to_string(b""), "3::");
/// assert_eq!(fuzzy_hash(b"").to_string(), "3::");
/// assert_eq!(similarity_from_strings("3:iKFSMPn:rJPn", "3:iKFSMPn:rJPn"), 1.0);
/// assert_eq!(similarity_from_strings("3:iKFSMPn:rJPn", "garbage"), 0.0);
/// ```
pub use hash::{fuzzy_hash, hash_to_string, similarity, similarity_from_strings, FuzzyHash};

/// Edit distance configuration.
pub use distance::DistanceConfig;

/// File type classification.
pub use filetype::{classify, classify1, FileType, FileTypeId, FileTypes};

/// Shannon entropy of a buffer.
pub use entropy::entropy;

/// Running the analyzer pipeline.
pub use triage::{triage, triage_with_config, TriageConfig, TriageReport};
