//! Input buffers under triage and bounds-checked binary decoding.
//!
//! This module abstracts over the source of the bytes being triaged (an owned memory buffer
//! or a memory-mapped file on disk) and provides the endian-aware, bounds-checked integer
//! decoding primitives used by the structural file type detectors.
//!
//! # Key Components
//!
//! - [`crate::file::Sample`] - The byte buffer under triage, independent of its backing store
//! - [`crate::file::io`] - Bounds-checked fixed-width integer decoding in both endiannesses
//!
//! # Examples
//!
//! ```rust,no_run
//! use bintriage::Sample;
//!
//! let sample = Sample::from_path("suspicious.bin")?;
//! println!("{} bytes, starts with {:02x?}", sample.len(), sample.data_slice(0, 2)?);
//! # Ok::<(), bintriage::Error>(())
//! ```
//!
//! # Thread Safety
//!
//! [`Sample`] is [`Send`] and [`Sync`]; all access is read-only.

pub mod io;

mod memory;
mod physical;

use std::path::Path;

use crate::Result;
use memory::Memory;
use physical::Physical;

/// Backend trait for sample data sources.
///
/// This trait abstracts over the source of the triaged bytes, allowing for both in-memory
/// and on-disk representations. All implementations must be thread-safe.
pub trait Backend: Send + Sync {
    /// Returns a slice of the data at the given offset and length.
    ///
    /// # Arguments
    ///
    /// * `offset` - The starting offset within the data.
    /// * `len` - The length of the slice in bytes.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::OutOfBounds`] if the requested range is out of bounds.
    fn data_slice(&self, offset: usize, len: usize) -> Result<&[u8]>;

    /// Returns the entire data buffer.
    fn data(&self) -> &[u8];

    /// Returns the total length of the data buffer.
    fn len(&self) -> usize;
}

/// Returns `data[offset..offset + len]`, or [`crate::Error::OutOfBounds`] if the range does not
/// fit or `offset + len` overflows.
fn bounded_slice(data: &[u8], offset: usize, len: usize) -> Result<&[u8]> {
    offset
        .checked_add(len)
        .and_then(|end| data.get(offset..end))
        .ok_or(crate::Error::OutOfBounds)
}

/// The byte buffer under triage.
///
/// A `Sample` owns its backing store, either a heap buffer handed over by the caller or a
/// read-only memory map of a file. Every analyzer in the crate operates on `&[u8]`, so the
/// sample only exists to make loading convenient and cheap for large files.
///
/// # Examples
///
/// ```rust
/// use bintriage::Sample;
///
/// let sample = Sample::from_mem(b"MZ\x90\x00".to_vec());
/// assert_eq!(sample.len(), 4);
/// assert_eq!(sample.data_slice(0, 2)?, b"MZ");
/// assert!(sample.data_slice(2, 8).is_err());
/// # Ok::<(), bintriage::Error>(())
/// ```
pub struct Sample {
    data: Box<dyn Backend>,
}

impl Sample {
    /// Memory-maps the file at `path`.
    ///
    /// Empty files are accepted; they simply produce an empty sample.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::FileError`] if the file can not be opened, or
    /// [`crate::Error::Error`] if mapping it fails.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Sample> {
        let input = Physical::new(path)?;

        Ok(Sample {
            data: Box::new(input),
        })
    }

    /// Wraps an owned buffer.
    #[must_use]
    pub fn from_mem(data: Vec<u8>) -> Sample {
        Sample {
            data: Box::new(Memory::new(data)),
        }
    }

    /// Returns the full sample.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        self.data.data()
    }

    /// Returns a bounds-checked slice of the sample.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::OutOfBounds`] if `offset + len` exceeds the sample length
    /// or overflows.
    pub fn data_slice(&self, offset: usize, len: usize) -> Result<&[u8]> {
        self.data.data_slice(offset, len)
    }

    /// Returns the sample length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the sample has a length of zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.len() == 0
    }
}

impl AsRef<[u8]> for Sample {
    fn as_ref(&self) -> &[u8] {
        self.data()
    }
}

impl std::fmt::Debug for Sample {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sample").field("len", &self.len()).finish()
    }
}
