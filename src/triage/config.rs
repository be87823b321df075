//! Triage configuration
//!
//! Selects which analyzers run and whether they run sequentially or on the rayon pool.

use bitflags::bitflags;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    /// The analyzers a triage run includes
    pub struct AnalyzerSet: u32 {
        /// MD5, SHA-1 and SHA-256
        const DIGESTS = 0x0001;
        /// Input length
        const SIZE = 0x0002;
        /// Shannon entropy
        const ENTROPY = 0x0004;
        /// Magic byte and structural classification
        const FILE_TYPE = 0x0008;
        /// Per byte value counts
        const BYTE_HISTOGRAM = 0x0010;
        /// CTPH fuzzy hash
        const FUZZY_HASH = 0x0020;
        /// Wall clock time of the run
        const TIMESTAMP = 0x0040;
    }
}

/// Configuration for a triage run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriageConfig {
    /// Analyzers to run; the others report nothing
    pub analyzers: AnalyzerSet,

    /// Run the analyzers concurrently on the rayon thread pool
    /// Results and error selection are identical to a sequential run
    pub parallel: bool,
}

impl Default for TriageConfig {
    fn default() -> Self {
        Self {
            analyzers: AnalyzerSet::all(),
            parallel: false,
        }
    }
}

impl TriageConfig {
    /// Creates a configuration running every analyzer sequentially
    #[must_use]
    pub fn comprehensive() -> Self {
        Self::default()
    }

    /// Creates a cheap configuration that only measures the size and classifies the input
    #[must_use]
    pub fn minimal() -> Self {
        Self {
            analyzers: AnalyzerSet::SIZE | AnalyzerSet::FILE_TYPE,
            parallel: false,
        }
    }

    /// Creates a configuration running every analyzer on the rayon pool
    ///
    /// Worth it for large inputs, where digests, entropy and the fuzzy hash each take a full
    /// pass over the data.
    #[must_use]
    pub fn parallel() -> Self {
        Self {
            analyzers: AnalyzerSet::all(),
            parallel: true,
        }
    }

    /// Creates a configuration whose report only depends on the input bytes
    ///
    /// Skips the timestamp, and the cryptographic digests, which are usually looked up against
    /// online services.
    #[must_use]
    pub fn offline() -> Self {
        Self {
            analyzers: AnalyzerSet::all() - AnalyzerSet::DIGESTS - AnalyzerSet::TIMESTAMP,
            parallel: false,
        }
    }

    /// Returns a copy with `analyzers` selected
    #[must_use]
    pub fn with_analyzers(mut self, analyzers: AnalyzerSet) -> Self {
        self.analyzers = analyzers;
        self
    }

    /// Returns a copy with parallel execution switched on or off
    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
