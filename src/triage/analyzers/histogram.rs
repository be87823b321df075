//! Byte frequency table of the input.

use std::collections::BTreeMap;

use crate::{
    entropy::ByteHistogram,
    triage::{Analyzer, AnalyzerState},
    Error,
};

/// Counts every byte value of the input.
#[derive(Debug, Default)]
pub struct ByteHistogramAnalyzer {
    state: AnalyzerState,
    histogram: ByteHistogram,
}

impl ByteHistogramAnalyzer {
    /// Counts of the last input.
    #[must_use]
    pub fn histogram(&self) -> &ByteHistogram {
        &self.histogram
    }

    /// Counts of the last input keyed by byte value, all 256 keys present.
    #[must_use]
    pub fn distribution(&self) -> BTreeMap<u8, u64> {
        self.histogram.to_map()
    }
}

impl Analyzer for ByteHistogramAnalyzer {
    fn name(&self) -> &'static str {
        "byte_histogram"
    }

    fn run(&mut self, data: &[u8]) {
        self.reset();
        self.histogram = ByteHistogram::from_bytes(data);
        self.state.accept();
    }

    fn reset(&mut self) {
        self.state.reset();
        self.histogram = ByteHistogram::default();
    }

    fn did_accept(&self) -> bool {
        self.state.accepted()
    }

    fn error(&self) -> Option<&Error> {
        self.state.error()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::pe_sample;

    #[test]
    fn distribution() {
        let mut analyzer = ByteHistogramAnalyzer::default();
        analyzer.run(&pe_sample());

        let distribution = analyzer.distribution();
        assert_eq!(distribution.len(), 256);
        assert_eq!(distribution[&0], 813);
        assert_eq!(distribution[&1], 10);
        assert_eq!(distribution.values().sum::<u64>(), 1024);
    }
}
