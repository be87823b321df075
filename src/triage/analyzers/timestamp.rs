//! Time of analysis.

use chrono::{DateTime, Utc};

use crate::{
    triage::{Analyzer, AnalyzerState},
    Error,
};

/// Source of the current time.
pub type Clock = fn() -> DateTime<Utc>;

/// Records when the input was triaged.
#[derive(Debug)]
pub struct TimestampAnalyzer {
    state: AnalyzerState,
    clock: Clock,
    time: Option<DateTime<Utc>>,
}

impl TimestampAnalyzer {
    /// Creates an analyzer reading the time from `clock`.
    #[must_use]
    pub fn with_clock(clock: Clock) -> Self {
        TimestampAnalyzer {
            state: AnalyzerState::default(),
            clock,
            time: None,
        }
    }

    /// Time of the last run.
    #[must_use]
    pub fn time(&self) -> Option<DateTime<Utc>> {
        self.time
    }
}

impl Default for TimestampAnalyzer {
    fn default() -> Self {
        Self::with_clock(Utc::now)
    }
}

impl Analyzer for TimestampAnalyzer {
    fn name(&self) -> &'static str {
        "timestamp"
    }

    fn run(&mut self, _data: &[u8]) {
        self.reset();
        self.time = Some((self.clock)());
        self.state.accept();
    }

    fn reset(&mut self) {
        self.state.reset();
        self.time = None;
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

    #[test]
    fn injected_clock() {
        let mut analyzer = TimestampAnalyzer::with_clock(|| DateTime::<Utc>::UNIX_EPOCH);
        analyzer.run(b"");

        assert!(analyzer.did_accept());
        assert_eq!(analyzer.time(), Some(DateTime::<Utc>::UNIX_EPOCH));
    }

    #[test]
    fn system_clock() {
        let before = Utc::now();
        let mut analyzer = TimestampAnalyzer::default();
        analyzer.run(b"");
        let after = Utc::now();

        let time = analyzer.time().unwrap();
        assert!(before <= time && time <= after);
    }
}
