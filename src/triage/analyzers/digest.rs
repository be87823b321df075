//! Cryptographic digests of the input.

use crate::{
    hash::{DigestProvider, Digests, StandardDigests},
    triage::{Analyzer, AnalyzerState},
    Error,
};

/// Computes MD5, SHA-1 and SHA-256 through a [`DigestProvider`].
pub struct DigestAnalyzer {
    state: AnalyzerState,
    provider: Box<dyn DigestProvider>,
    digests: Digests,
}

impl DigestAnalyzer {
    /// Creates an analyzer backed by `provider`.
    #[must_use]
    pub fn new(provider: Box<dyn DigestProvider>) -> Self {
        DigestAnalyzer {
            state: AnalyzerState::default(),
            provider,
            digests: Digests::default(),
        }
    }

    /// Digests of the last input.
    #[must_use]
    pub fn digests(&self) -> &Digests {
        &self.digests
    }
}

impl Default for DigestAnalyzer {
    fn default() -> Self {
        Self::new(Box::new(StandardDigests))
    }
}

impl Analyzer for DigestAnalyzer {
    fn name(&self) -> &'static str {
        "digests"
    }

    fn run(&mut self, data: &[u8]) {
        self.reset();
        self.digests = self.provider.digests(data);
        self.state.accept();
    }

    fn reset(&mut self) {
        self.state.reset();
        self.digests = Digests::default();
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

    struct Fixed;

    impl DigestProvider for Fixed {
        fn digests(&self, data: &[u8]) -> Digests {
            Digests {
                md5: format!("md5-{}", data.len()),
                sha1: String::new(),
                sha256: String::new(),
            }
        }
    }

    #[test]
    fn standard_provider() {
        let mut analyzer = DigestAnalyzer::default();
        analyzer.run(b"");

        assert!(analyzer.did_accept());
        assert_eq!(analyzer.digests().md5, "D41D8CD98F00B204E9800998ECF8427E");
    }

    #[test]
    fn custom_provider() {
        let mut analyzer = DigestAnalyzer::new(Box::new(Fixed));
        analyzer.run(b"four");
        assert_eq!(analyzer.digests().md5, "md5-4");

        analyzer.reset();
        assert!(!analyzer.did_accept());
        assert!(analyzer.digests().md5.is_empty());
    }
}
