//! # Triage of Unknown Buffers
//!
//! This module runs a set of independent analyzers over one byte buffer and aggregates their
//! outcomes into a [`TriageReport`]: cryptographic digests, size, entropy, file types, the
//! byte histogram, the fuzzy hash and a timestamp.
//!
//! ## Architecture
//!
//! - [`Analyzer`] is the capability every measurement implements; [`AnalyzerState`] holds the
//!   acceptance flag and error each analyzer carries
//! - [`Pipeline`] runs an ordered list of analyzers, sequentially or on the rayon pool, and
//!   selects the error to report
//! - [`DefaultAnalyzers`] bundles the built-in analyzers in their declared order and builds
//!   the [`TriageReport`]
//! - [`TriageConfig`] selects analyzers and the execution mode
//!
//! ## Error Semantics
//!
//! All selected analyzers always run. Only the first error of an analyzer that accepted its
//! input, in declared order, fails the run; the report can still be built afterwards from
//! whatever the analyzers produced.
//!
//! ## Usage Examples
//!
//! ```rust
//! use bintriage::triage::{triage, triage_with_config, TriageConfig};
//!
//! let report = triage(b"\x7FELF\x02\x01\x01\x00")?;
//! assert_eq!(report.size, Some(8));
//! assert_eq!(report.md5.as_deref(), Some("DC953D7C0BACE545DB61AEC229F44746"));
//! assert!(report.time.is_some());
//!
//! let offline = triage_with_config(b"hello world", &TriageConfig::offline())?;
//! assert!(offline.md5.is_none());
//! assert_eq!(offline.fuzzy_hash.map(|h| h.to_string()).as_deref(), Some("3:iKFSMPn:rJPn"));
//! # Ok::<(), bintriage::Error>(())
//! ```

mod analyzer;
mod analyzers;
mod config;
mod pipeline;
mod report;

pub use analyzer::{Analyzer, AnalyzerState};
pub use analyzers::{
    ByteHistogramAnalyzer, Clock, DigestAnalyzer, EntropyAnalyzer, FileTypeAnalyzer,
    FuzzyHashAnalyzer, SizeAnalyzer, TimestampAnalyzer,
};
pub use config::{AnalyzerSet, TriageConfig};
pub use pipeline::Pipeline;
pub use report::TriageReport;

use crate::Result;

/// The built-in analyzers, one field each.
///
/// The declared order, which decides error selection, is: digests, size, entropy, file type,
/// byte histogram, fuzzy hash, timestamp.
#[derive(Default)]
pub struct DefaultAnalyzers {
    /// MD5, SHA-1, SHA-256
    pub digests: DigestAnalyzer,
    /// Input length
    pub size: SizeAnalyzer,
    /// Shannon entropy
    pub entropy: EntropyAnalyzer,
    /// File type classification
    pub file_type: FileTypeAnalyzer,
    /// Byte value counts
    pub byte_histogram: ByteHistogramAnalyzer,
    /// CTPH fuzzy hash
    pub fuzzy_hash: FuzzyHashAnalyzer,
    /// Time of the run
    pub timestamp: TimestampAnalyzer,
}

impl DefaultAnalyzers {
    /// The analyzers selected by `set`, in declared order.
    pub fn analyzers_mut(&mut self, set: AnalyzerSet) -> Vec<&mut dyn Analyzer> {
        let mut analyzers: Vec<&mut dyn Analyzer> = Vec::with_capacity(7);

        if set.contains(AnalyzerSet::DIGESTS) {
            analyzers.push(&mut self.digests);
        }
        if set.contains(AnalyzerSet::SIZE) {
            analyzers.push(&mut self.size);
        }
        if set.contains(AnalyzerSet::ENTROPY) {
            analyzers.push(&mut self.entropy);
        }
        if set.contains(AnalyzerSet::FILE_TYPE) {
            analyzers.push(&mut self.file_type);
        }
        if set.contains(AnalyzerSet::BYTE_HISTOGRAM) {
            analyzers.push(&mut self.byte_histogram);
        }
        if set.contains(AnalyzerSet::FUZZY_HASH) {
            analyzers.push(&mut self.fuzzy_hash);
        }
        if set.contains(AnalyzerSet::TIMESTAMP) {
            analyzers.push(&mut self.timestamp);
        }

        analyzers
    }

    /// Runs the analyzers selected by `config` over `data`.
    ///
    /// Analyzers outside the selection are reset, so a reused bundle never reports stale
    /// results.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Analyzer`] for the first accepting analyzer that failed; see
    /// [`Pipeline`].
    pub fn run(&mut self, data: &[u8], config: &TriageConfig) -> Result<()> {
        for analyzer in self.analyzers_mut(config.analyzers.complement()) {
            analyzer.reset();
        }

        let mut analyzers = self.analyzers_mut(config.analyzers);
        if config.parallel {
            Pipeline::run_parallel(data, &mut analyzers)
        } else {
            Pipeline::run(data, &mut analyzers)
        }
    }

    /// Collects the outcomes of all accepting analyzers.
    #[must_use]
    pub fn report(&self) -> TriageReport {
        let mut report = TriageReport::default();

        if self.digests.did_accept() {
            let digests = self.digests.digests();
            report.md5 = Some(digests.md5.clone());
            report.sha1 = Some(digests.sha1.clone());
            report.sha256 = Some(digests.sha256.clone());
        }

        if self.size.did_accept() {
            report.size = Some(self.size.size());
        }

        if self.entropy.did_accept() {
            report.entropy = Some(self.entropy.entropy());
        }

        if self.file_type.did_accept() {
            report.file_type = self.file_type.file_type().cloned();
            report.file_types = Some(self.file_type.file_types().clone());
        }

        if self.byte_histogram.did_accept() {
            report.byte_histogram = Some(self.byte_histogram.distribution());
        }

        if self.fuzzy_hash.did_accept() {
            if let Some(hash) = self.fuzzy_hash.hash() {
                report.fuzzy_hash1 = Some(hash.hash1().to_string());
                report.fuzzy_hash2 = Some(hash.hash2().to_string());
                report.fuzzy_hash_block_size = Some(hash.block_size());
                report.fuzzy_hash = Some(hash.clone());
            }
        }

        if self.timestamp.did_accept() {
            report.time = self.timestamp.time();
        }

        report
    }
}

/// Runs every built-in analyzer over `data`.
///
/// # Errors
///
/// Returns [`crate::Error::Analyzer`] if an analyzer that accepted the input failed.
pub fn triage(data: &[u8]) -> Result<TriageReport> {
    triage_with_config(data, &TriageConfig::default())
}

/// Runs the built-in analyzers selected by `config` over `data`.
///
/// # Errors
///
/// Returns [`crate::Error::Analyzer`] if an analyzer that accepted the input failed.
pub fn triage_with_config(data: &[u8], config: &TriageConfig) -> Result<TriageReport> {
    let mut analyzers = DefaultAnalyzers::default();
    analyzers.run(data, config)?;
    Ok(analyzers.report())
}
