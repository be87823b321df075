//! The built-in analyzers.
//!
//! Each analyzer accepts every input, including the empty buffer, and never fails; they
//! differ only in what they measure.

mod digest;
mod entropy;
mod filetype;
mod fuzzy;
mod histogram;
mod size;
mod timestamp;

pub use digest::DigestAnalyzer;
pub use entropy::EntropyAnalyzer;
pub use filetype::FileTypeAnalyzer;
pub use fuzzy::FuzzyHashAnalyzer;
pub use histogram::ByteHistogramAnalyzer;
pub use size::SizeAnalyzer;
pub use timestamp::{Clock, TimestampAnalyzer};
