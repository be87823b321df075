//! Shannon entropy of the input.

use crate::{
    entropy::ByteHistogram,
    triage::{Analyzer, AnalyzerState},
    Error,
};

/// Measures the Shannon entropy of the input in bits per byte.
#[derive(Debug, Default)]
pub struct EntropyAnalyzer {
    state: AnalyzerState,
    histogram: ByteHistogram,
    entropy: f64,
}

impl EntropyAnalyzer {
    /// Entropy of the last input, in `[0.0, 8.0]`.
    #[must_use]
    pub fn entropy(&self) -> f64 {
        self.entropy
    }

    /// The byte counts the entropy was computed from.
    #[must_use]
    pub fn histogram(&self) -> &ByteHistogram {
        &self.histogram
    }
}

impl Analyzer for EntropyAnalyzer {
    fn name(&self) -> &'static str {
        "entropy"
    }

    fn run(&mut self, data: &[u8]) {
        self.reset();
        self.histogram = ByteHistogram::from_bytes(data);
        self.entropy = self.histogram.entropy();
        self.state.accept();
    }

    fn reset(&mut self) {
        self.state.reset();
        self.histogram = ByteHistogram::default();
        self.entropy = 0.0;
    }

    fn did_accept(&self) -> bool {
        self.state.accepted()
    }

    fn error(&self) -> Option<&Error> {
        self.state.error()
    }
}
