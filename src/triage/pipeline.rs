//! Running analyzers over a buffer and selecting the error to report.

use rayon::prelude::*;

use super::Analyzer;
use crate::{Error, Result};

/// Runs a fixed, ordered list of analyzers over one buffer.
///
/// Every analyzer runs, regardless of what the others report. Afterwards the analyzers are
/// scanned in declared order and the error of the first one that both accepted its input and
/// failed is returned as [`crate::Error::Analyzer`]. Errors of analyzers that did not accept
/// their input are logged at `warn` level and suppressed. The analyzers keep their own
/// outcomes either way, so partial results stay readable after an error.
///
/// ## Thread Safety
///
/// [`Pipeline::run_parallel`] hands every analyzer to the rayon pool. Each analyzer is
/// exclusively borrowed by one task and the input is shared read-only, so no locking is
/// involved; the declared order is only used for error selection after all tasks finished.
pub struct Pipeline;

impl Pipeline {
    /// Runs `analyzers` over `data` one after another.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Analyzer`] for the first accepting analyzer that failed.
    pub fn run(data: &[u8], analyzers: &mut [&mut dyn Analyzer]) -> Result<()> {
        log::debug!("running {} analyzers over {} bytes", analyzers.len(), data.len());

        for analyzer in analyzers.iter_mut() {
            analyzer.run(data);
        }

        Self::first_error(analyzers)
    }

    /// Runs `analyzers` over `data` concurrently on the rayon pool.
    ///
    /// Produces the same analyzer outcomes and the same error as [`Pipeline::run`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Analyzer`] for the first accepting analyzer that failed, in
    /// declared order.
    pub fn run_parallel(data: &[u8], analyzers: &mut [&mut dyn Analyzer]) -> Result<()> {
        log::debug!(
            "running {} analyzers over {} bytes in parallel",
            analyzers.len(),
            data.len()
        );

        analyzers
            .par_iter_mut()
            .for_each(|analyzer| analyzer.run(data));

        Self::first_error(analyzers)
    }

    fn first_error(analyzers: &[&mut dyn Analyzer]) -> Result<()> {
        let mut selected = None;

        for analyzer in analyzers {
            let Some(error) = analyzer.error() else {
                continue;
            };

            if !analyzer.did_accept() {
                log::warn!(
                    "analyzer '{}' declined the input: {}",
                    analyzer.name(),
                    error
                );
                continue;
            }

            if selected.is_none() {
                selected = Some(Error::Analyzer {
                    analyzer: analyzer.name(),
                    message: error.to_string(),
                });
            } else {
                log::warn!("analyzer '{}' failed: {}", analyzer.name(), error);
            }
        }

        match selected {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}
