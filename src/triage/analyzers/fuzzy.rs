//! Fuzzy hash of the input.

use crate::{
    hash::FuzzyHash,
    triage::{Analyzer, AnalyzerState},
    Error,
};

/// Computes the CTPH fuzzy hash of the input.
#[derive(Debug, Default)]
pub struct FuzzyHashAnalyzer {
    state: AnalyzerState,
    hash: Option<FuzzyHash>,
}

impl FuzzyHashAnalyzer {
    /// Fuzzy hash of the last input.
    #[must_use]
    pub fn hash(&self) -> Option<&FuzzyHash> {
        self.hash.as_ref()
    }
}

impl Analyzer for FuzzyHashAnalyzer {
    fn name(&self) -> &'static str {
        "fuzzy_hash"
    }

    fn run(&mut self, data: &[u8]) {
        self.reset();
        self.hash = Some(FuzzyHash::generate(data));
        self.state.accept();
    }

    fn reset(&mut self) {
        self.state.reset();
        self.hash = None;
    }

    fn did_accept(&self) -> bool {
        self.state.accepted()
    }

    fn error(&self) -> Option<&Error> {
        self.state.error()
    }
}
