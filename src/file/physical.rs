//! Memory-mapped sample storage for files on disk.

use super::{bounded_slice, Backend};
use crate::{
    Error::{Error, FileError},
    Result,
};

use memmap2::Mmap;
use std::{fs, path::Path};

/// A read-only memory map of a file.
#[derive(Debug)]
pub struct Physical {
    data: Mmap,
}

impl Physical {
    /// Opens and maps the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::FileError`] if the file can not be opened, or
    /// [`crate::Error::Error`] if the mapping fails.
    pub fn new(path: impl AsRef<Path>) -> Result<Physical> {
        let file = match fs::File::open(path) {
            Ok(file) => file,
            Err(error) => return Err(FileError(error)),
        };

        // SAFETY: read-only map owned by `Physical`; the file must not be truncated while mapped
        let mmap = match unsafe { Mmap::map(&file) } {
            Ok(mmap) => mmap,
            Err(error) => return Err(Error(error.to_string())),
        };

        Ok(Physical { data: mmap })
    }
}

impl Backend for Physical {
    fn data_slice(&self, offset: usize, len: usize) -> Result<&[u8]> {
        bounded_slice(self.data(), offset, len)
    }

    fn data(&self) -> &[u8] {
        self.data.as_ref()
    }

    fn len(&self) -> usize {
        self.data.len()
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn physical() {
        let path = std::env::temp_dir().join("bintriage_physical_test.bin");
        std::fs::write(&path, [0x4D, 0x5A, 0x90, 0x00, 0x03, 0x00, 0xFF, 0xFF]).unwrap();

        let physical = Physical::new(&path).unwrap();

        assert_eq!(physical.len(), 8);
        assert_eq!(physical.data()[0], 0x4D);
        assert_eq!(physical.data()[1], 0x5A);
        assert_eq!(physical.data_slice(4, 4).unwrap(), &[0x03, 0x00, 0xFF, 0xFF]);
        assert!(physical.data_slice(u32::MAX as usize, u32::MAX as usize).is_err());
        assert!(physical.data_slice(6, 4).is_err());

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_physical_invalid_file_path() {
        let result = Physical::new(PathBuf::from("/nonexistent/path/to/sample.bin"));
        assert!(result.is_err());
        match result.unwrap_err() {
            FileError(io_error) => {
                assert_eq!(io_error.kind(), std::io::ErrorKind::NotFound);
            }
            _ => panic!("Expected FileError"),
        }
    }

    #[test]
    fn test_physical_empty_file() {
        let temp_path = std::env::temp_dir().join("bintriage_empty_test_file.bin");
        std::fs::write(&temp_path, b"").unwrap();

        let physical = Physical::new(&temp_path).unwrap();
        assert_eq!(physical.len(), 0);
        assert_eq!(physical.data().len(), 0);
        assert!(physical.data_slice(0, 1).is_err());

        std::fs::remove_file(&temp_path).unwrap();
    }
}
