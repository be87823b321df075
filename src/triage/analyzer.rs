//! The analyzer contract and the state every analyzer carries.

use crate::Error;

/// One independent measurement over the triaged buffer.
///
/// An analyzer runs once per buffer, records whether it recognized the input as something it
/// can describe ("accepted" it) and keeps its own outcome. Analyzers never see each other's
/// results, which lets the [`crate::triage::Pipeline`] run them in any order or concurrently.
///
/// The pipeline reports an analyzer's error only if that analyzer also accepted the input;
/// errors of analyzers that declined the input are logged and otherwise ignored.
///
/// # Examples
///
/// ```rust
/// use bintriage::triage::{Analyzer, AnalyzerState, Pipeline};
/// use bintriage::Error;
///
/// /// Counts ASCII line feeds, accepts any input.
/// #[derive(Default)]
/// struct LineCounter {
///     state: AnalyzerState,
///     lines: usize,
/// }
///
/// impl Analyzer for LineCounter {
///     fn name(&self) -> &'static str { "lines" }
///     fn run(&mut self, data: &[u8]) {
///         self.reset();
///         self.lines = data.iter().filter(|&&b| b == b'\n').count();
///         self.state.accept();
///     }
///     fn reset(&mut self) {
///         self.state.reset();
///         self.lines = 0;
///     }
///     fn did_accept(&self) -> bool { self.state.accepted() }
///     fn error(&self) -> Option<&Error> { self.state.error() }
/// }
///
/// let mut counter = LineCounter::default();
/// Pipeline::run(b"a\nb\n", &mut [&mut counter])?;
/// assert_eq!(counter.lines, 2);
/// # Ok::<(), bintriage::Error>(())
/// ```
pub trait Analyzer: Send {
    /// Stable, unique name used in logs and errors.
    fn name(&self) -> &'static str;

    /// Measures `data`, replacing the outcome of any previous run.
    fn run(&mut self, data: &[u8]);

    /// Clears the outcome of the previous run.
    fn reset(&mut self);

    /// Returns `true` if the last run recognized its input.
    fn did_accept(&self) -> bool;

    /// The error of the last run, if any.
    fn error(&self) -> Option<&Error>;
}

/// Acceptance flag and error of the last run, embedded by every analyzer.
#[derive(Debug, Default)]
pub struct AnalyzerState {
    accepted: bool,
    error: Option<Error>,
}

impl AnalyzerState {
    /// Marks the input as accepted.
    pub fn accept(&mut self) {
        self.accepted = true;
    }

    /// Records `error` for the current run.
    pub fn fail(&mut self, error: Error) {
        self.error = Some(error);
    }

    /// Forgets the previous run.
    pub fn reset(&mut self) {
        self.accepted = false;
        self.error = None;
    }

    /// Returns `true` if the input was accepted.
    #[must_use]
    pub fn accepted(&self) -> bool {
        self.accepted
    }

    /// The recorded error, if any.
    #[must_use]
    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }
}
