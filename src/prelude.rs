//! # bintriage Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the bintriage library. Import this module to get quick access to the essential
//! types for triaging unknown buffers.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all bintriage operations
pub use crate::Error;

/// The result type used throughout bintriage
pub use crate::Result;

/// The byte buffer under triage
pub use crate::Sample;

// ================================================================================================
// Triage
// ================================================================================================

/// Main entry points for running every analyzer at once
pub use crate::triage::{triage, triage_with_config, TriageReport};

/// Analyzer selection and execution mode
pub use crate::triage::{AnalyzerSet, TriageConfig};

/// Building blocks for custom analyzers and pipelines
pub use crate::triage::{Analyzer, AnalyzerState, DefaultAnalyzers, Pipeline};

// ================================================================================================
// Hashing and Similarity
// ================================================================================================

/// Fuzzy hashing
pub use crate::hash::{fuzzy_hash, hash_to_string, FuzzyHash, RollingHash};

/// Fuzzy hash similarity
pub use crate::hash::{similarity, similarity_from_strings, similarity_with};

/// Cryptographic digests
pub use crate::hash::{DigestProvider, Digests, StandardDigests};

/// Edit distance
pub use crate::distance::{DistanceConfig, ReplacementTable};

// ================================================================================================
// Classification and Statistics
// ================================================================================================

/// File type classification
pub use crate::filetype::{classify, classify1, Classifier, FileType, FileTypeId, FileTypes};

/// Entropy and byte histograms
pub use crate::entropy::{entropy, ByteHistogram};
