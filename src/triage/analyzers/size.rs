//! Input length.

use crate::{
    triage::{Analyzer, AnalyzerState},
    Error,
};

/// Records the input length in bytes.
#[derive(Debug, Default)]
pub struct SizeAnalyzer {
    state: AnalyzerState,
    size: u64,
}

impl SizeAnalyzer {
    /// Length of the last input.
    #[must_use]
    pub fn size(&self) -> u64 {
        self.size
    }
}

impl Analyzer for SizeAnalyzer {
    fn name(&self) -> &'static str {
        "size"
    }

    fn run(&mut self, data: &[u8]) {
        self.reset();
        self.size = data.len() as u64;
        self.state.accept();
    }

    fn reset(&mut self) {
        self.state.reset();
        self.size = 0;
    }

    fn did_accept(&self) -> bool {
        self.state.accepted()
    }

    fn error(&self) -> Option<&Error> {
        self.state.error()
    }
}
