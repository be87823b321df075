//! Bounds-checked, endian-aware integer decoding over untrusted buffers.
//!
//! This module is the byte decoder used by the structural file type detectors. Every read is
//! validated against the buffer length before a single byte is touched, so decoding attacker
//! controlled offsets (like the `e_lfanew` pointer of a DOS stub) can never read out of bounds.
//!
//! # Architecture
//!
//! The module is built around one generic primitive, [`crate::file::io::read_uint`], which
//! folds `width` bytes at `offset` into a `u64`:
//!
//! - Big-endian folds the most significant byte first
//! - Little-endian folds the least significant byte first
//!
//! Both use the same `value = value << 8 | byte` accumulation. [`crate::file::io::read_int`]
//! reinterprets that value with two's-complement sign extension, and the [`Decode`] trait
//! derives the fixed-width accessors for all primitive integers from the two functions above.
//!
//! ## Reading Functions
//! - [`crate::file::io::read_le`] / [`crate::file::io::read_be`] - Read a `T` at an offset
//! - [`crate::file::io::read_le_at`] / [`crate::file::io::read_be_at`] - Read and advance the offset
//!
//! ## Supported Types
//! The [`Decode`] trait is implemented for:
//! - **Unsigned integers**: `u8`, `u16`, `u32`, `u64`
//! - **Signed integers**: `i8`, `i16`, `i32`, `i64`
//!
//! # Usage Examples
//!
//! ```rust
//! use bintriage::file::io::{read_be, read_le, read_uint, Endianness};
//!
//! let data = [0x4D, 0x5A, 0x90, 0x00];
//!
//! assert_eq!(read_be::<u16>(&data, 0)?, 0x4D5A);
//! assert_eq!(read_le::<u16>(&data, 0)?, 0x5A4D);
//! assert_eq!(read_uint(Endianness::Little, &data, 1, 3)?, 0x90_5A);
//! assert!(read_le::<u32>(&data, 1).is_err());
//! # Ok::<(), bintriage::Error>(())
//! ```
//!
//! # Error Handling
//!
//! All functions return [`crate::Error::OutOfBounds`] when `offset + width` exceeds the buffer
//! length (or overflows `usize`). No other failure exists; callers must check the result before
//! trusting the value.
//!
//! # Thread Safety
//!
//! All functions are pure and can be called concurrently from multiple threads.

use crate::{Error::OutOfBounds, Result};

/// Byte order of a multi-byte field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endianness {
    /// Least significant byte first
    Little,
    /// Most significant byte first
    Big,
}

/// Reads `width` bytes at `offset` as an unsigned integer.
///
/// Widths above 8 are accepted; only the low 64 bits of the accumulated value survive.
/// A width of 0 yields 0.
///
/// # Arguments
///
/// * `endianness` - Byte order of the field
/// * `data` - The buffer to read from
/// * `offset` - Offset of the first byte of the field
/// * `width` - Field width in bytes
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] if the field does not fit in `data`.
pub fn read_uint(endianness: Endianness, data: &[u8], offset: usize, width: usize) -> Result<u64> {
    let Some(end) = offset.checked_add(width) else {
        return Err(OutOfBounds);
    };

    let Some(field) = data.get(offset..end) else {
        return Err(OutOfBounds);
    };

    let fold = |value: u64, byte: &u8| (value << 8) | u64::from(*byte);
    let value = match endianness {
        Endianness::Big => field.iter().fold(0, fold),
        Endianness::Little => field.iter().rev().fold(0, fold),
    };

    Ok(value)
}

/// Reads `width` bytes at `offset` as a signed integer.
///
/// Two's-complement sign extension is applied from the top bit of the declared width for
/// widths of 1, 2 and 4 bytes. A width of 8 already fills an `i64` and is reinterpreted
/// as-is. Any other width (3, 5, 6, 7, ...) is returned without sign extension.
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] if the field does not fit in `data`.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub fn read_int(endianness: Endianness, data: &[u8], offset: usize, width: usize) -> Result<i64> {
    let value = read_uint(endianness, data, offset, width)?;

    let signed = match width {
        1 => i64::from(value as u8 as i8),
        2 => i64::from(value as u16 as i16),
        4 => i64::from(value as u32 as i32),
        _ => value as i64,
    };

    Ok(signed)
}

/// Trait for primitive integers that can be decoded with [`read_uint`] / [`read_int`].
///
/// Each implementation fixes the field width to the size of the type, which is how the
/// fixed-width accessors ([`read_le`], [`read_be`], ...) are derived from the generic primitive.
pub trait Decode: Sized + Copy {
    /// Width of the encoded value in bytes.
    const WIDTH: usize;

    /// Decode a value of this type at `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::OutOfBounds`] if the value does not fit in `data`.
    fn decode(endianness: Endianness, data: &[u8], offset: usize) -> Result<Self>;
}

macro_rules! impl_decode_unsigned {
    ($($ty:ty),*) => {
        $(
            impl Decode for $ty {
                const WIDTH: usize = std::mem::size_of::<$ty>();

                #[allow(clippy::cast_possible_truncation)]
                fn decode(endianness: Endianness, data: &[u8], offset: usize) -> Result<Self> {
                    Ok(read_uint(endianness, data, offset, Self::WIDTH)? as $ty)
                }
            }
        )*
    };
}

macro_rules! impl_decode_signed {
    ($($ty:ty),*) => {
        $(
            impl Decode for $ty {
                const WIDTH: usize = std::mem::size_of::<$ty>();

                #[allow(clippy::cast_possible_truncation)]
                fn decode(endianness: Endianness, data: &[u8], offset: usize) -> Result<Self> {
                    Ok(read_int(endianness, data, offset, Self::WIDTH)? as $ty)
                }
            }
        )*
    };
}

impl_decode_unsigned!(u8, u16, u32, u64);
impl_decode_signed!(i8, i16, i32, i64);

/// Reads a little-endian `T` at `offset`.
///
/// # Examples
///
/// ```rust
/// use bintriage::file::io::read_le;
///
/// let data = [0x00, 0x01, 0x00, 0x00, 0x00];
/// assert_eq!(read_le::<u32>(&data, 1)?, 1);
/// # Ok::<(), bintriage::Error>(())
/// ```
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] if there are insufficient bytes.
pub fn read_le<T: Decode>(data: &[u8], offset: usize) -> Result<T> {
    T::decode(Endianness::Little, data, offset)
}

/// Reads a big-endian `T` at `offset`.
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] if there are insufficient bytes.
pub fn read_be<T: Decode>(data: &[u8], offset: usize) -> Result<T> {
    T::decode(Endianness::Big, data, offset)
}

/// Reads a little-endian `T` at `offset` and advances `offset` past it.
///
/// The offset is left untouched when the read fails.
///
/// # Examples
///
/// ```rust
/// use bintriage::file::io::read_le_at;
///
/// let data = [0x01, 0x00, 0x02, 0x00];
/// let mut offset = 0;
///
/// assert_eq!(read_le_at::<u16>(&data, &mut offset)?, 1);
/// assert_eq!(read_le_at::<u16>(&data, &mut offset)?, 2);
/// assert_eq!(offset, 4);
/// # Ok::<(), bintriage::Error>(())
/// ```
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] if there are insufficient bytes.
pub fn read_le_at<T: Decode>(data: &[u8], offset: &mut usize) -> Result<T> {
    let value = read_le(data, *offset)?;
    *offset += T::WIDTH;

    Ok(value)
}

/// Reads a big-endian `T` at `offset` and advances `offset` past it.
///
/// The offset is left untouched when the read fails.
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] if there are insufficient bytes.
pub fn read_be_at<T: Decode>(data: &[u8], offset: &mut usize) -> Result<T> {
    let value = read_be(data, *offset)?;
    *offset += T::WIDTH;

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_BUFFER: [u8; 8] = [1, 2, 3, 4, 5, 6, 7, 8];

    const TEST_VECTORS: [[u8; 8]; 5] = [
        [0x12, 0x34, 0x56, 0x78, 0x87, 0x65, 0x43, 0x21],
        [0xFF, 0xEE, 0xDD, 0xCC, 0xCC, 0xDD, 0xEE, 0xFF],
        [0x88, 0x00, 0x88, 0x00, 0x88, 0x00, 0x88, 0x00],
        [0x00, 0x88, 0x00, 0x88, 0x00, 0x88, 0x00, 0x88],
        [0x18, 0x28, 0x38, 0x48, 0x58, 0x68, 0x78, 0x98],
    ];

    #[test]
    fn read_le_u8() {
        let result = read_le::<u8>(&TEST_BUFFER, 0).unwrap();
        assert_eq!(result, 0x01);
    }

    #[test]
    fn read_le_u16() {
        let result = read_le::<u16>(&TEST_BUFFER, 0).unwrap();
        assert_eq!(result, 0x0201);
    }

    #[test]
    fn read_le_u32() {
        let result = read_le::<u32>(&TEST_BUFFER, 0).unwrap();
        assert_eq!(result, 0x0403_0201);
    }

    #[test]
    fn read_le_u64() {
        let result = read_le::<u64>(&TEST_BUFFER, 0).unwrap();
        assert_eq!(result, 0x0807_0605_0403_0201);
    }

    #[test]
    fn read_be_u16() {
        let result = read_be::<u16>(&TEST_BUFFER, 0).unwrap();
        assert_eq!(result, 0x0102);
    }

    #[test]
    fn read_be_u32() {
        let result = read_be::<u32>(&TEST_BUFFER, 0).unwrap();
        assert_eq!(result, 0x0102_0304);
    }

    #[test]
    fn read_be_u64() {
        let result = read_be::<u64>(&TEST_BUFFER, 0).unwrap();
        assert_eq!(result, 0x0102_0304_0506_0708);
    }

    #[test]
    fn read_be_from() {
        let result = read_be::<u16>(&TEST_BUFFER, 2).unwrap();
        assert_eq!(result, 0x304);
    }

    #[test]
    fn read_le_from() {
        let result = read_le::<u16>(&TEST_BUFFER, 2).unwrap();
        assert_eq!(result, 0x403);
    }

    #[test]
    fn matches_std_interpretation() {
        for data in &TEST_VECTORS {
            assert_eq!(read_be::<u64>(data, 0).unwrap(), u64::from_be_bytes(*data));
            assert_eq!(
                read_be::<u32>(data, 0).unwrap(),
                u32::from_be_bytes([data[0], data[1], data[2], data[3]])
            );
            assert_eq!(
                read_be::<u16>(data, 0).unwrap(),
                u16::from_be_bytes([data[0], data[1]])
            );
            assert_eq!(read_be::<u8>(data, 0).unwrap(), data[0]);

            assert_eq!(read_le::<u64>(data, 0).unwrap(), u64::from_le_bytes(*data));
            assert_eq!(
                read_le::<u32>(data, 0).unwrap(),
                u32::from_le_bytes([data[0], data[1], data[2], data[3]])
            );
            assert_eq!(
                read_le::<u16>(data, 0).unwrap(),
                u16::from_le_bytes([data[0], data[1]])
            );
            assert_eq!(read_le::<u8>(data, 0).unwrap(), data[0]);

            assert_eq!(read_be::<i64>(data, 0).unwrap(), i64::from_be_bytes(*data));
            assert_eq!(
                read_be::<i32>(data, 0).unwrap(),
                i32::from_be_bytes([data[0], data[1], data[2], data[3]])
            );
            assert_eq!(
                read_be::<i16>(data, 0).unwrap(),
                i16::from_be_bytes([data[0], data[1]])
            );
            assert_eq!(read_be::<i8>(data, 0).unwrap(), data[0] as i8);

            assert_eq!(read_le::<i64>(data, 0).unwrap(), i64::from_le_bytes(*data));
            assert_eq!(
                read_le::<i32>(data, 0).unwrap(),
                i32::from_le_bytes([data[0], data[1], data[2], data[3]])
            );
            assert_eq!(
                read_le::<i16>(data, 0).unwrap(),
                i16::from_le_bytes([data[0], data[1]])
            );
            assert_eq!(read_le::<i8>(data, 0).unwrap(), data[0] as i8);
        }
    }

    #[test]
    fn signed_byte_with_high_bit() {
        assert_eq!(read_le::<i8>(&[0x88], 0).unwrap(), -120);
        assert_eq!(read_int(Endianness::Big, &[0xFF], 0, 1).unwrap(), -1);
        assert_eq!(read_int(Endianness::Little, &[0x00, 0x80], 0, 2).unwrap(), -32768);
        assert_eq!(
            read_int(Endianness::Big, &[0xFF, 0xFF, 0xFF, 0xFE], 0, 4).unwrap(),
            -2
        );
    }

    #[test]
    fn odd_widths_are_not_sign_extended() {
        let data = [0xFF, 0xFF, 0xFF];
        assert_eq!(read_uint(Endianness::Big, &data, 0, 3).unwrap(), 0x00FF_FFFF);
        assert_eq!(read_int(Endianness::Big, &data, 0, 3).unwrap(), 0x00FF_FFFF);
        assert_eq!(read_int(Endianness::Little, &data, 0, 0).unwrap(), 0);
    }

    #[test]
    fn odd_widths_fold_in_order() {
        let data = [0x01, 0x02, 0x03];
        assert_eq!(read_uint(Endianness::Big, &data, 0, 3).unwrap(), 0x01_0203);
        assert_eq!(read_uint(Endianness::Little, &data, 0, 3).unwrap(), 0x03_0201);
    }

    #[test]
    fn wide_fields_keep_low_bits() {
        let data = [0xAA, 1, 2, 3, 4, 5, 6, 7, 8];
        assert_eq!(
            read_uint(Endianness::Big, &data, 0, 9).unwrap(),
            0x0102_0304_0506_0708
        );
    }

    #[test]
    fn sequential_reads() {
        let mut offset = 0;

        assert_eq!(read_le_at::<u16>(&TEST_BUFFER, &mut offset).unwrap(), 0x0201);
        assert_eq!(read_be_at::<u16>(&TEST_BUFFER, &mut offset).unwrap(), 0x0304);
        assert_eq!(read_le_at::<u32>(&TEST_BUFFER, &mut offset).unwrap(), 0x0807_0605);
        assert_eq!(offset, 8);

        assert!(read_le_at::<u8>(&TEST_BUFFER, &mut offset).is_err());
        assert_eq!(offset, 8);
    }

    #[test]
    fn errors() {
        let buffer = [0xFF, 0xFF, 0xFF, 0xFF];

        assert!(matches!(read_le::<u64>(&buffer, 0), Err(OutOfBounds)));
        assert!(matches!(read_be::<u32>(&buffer, 1), Err(OutOfBounds)));
        assert!(matches!(read_le::<u8>(&buffer, 4), Err(OutOfBounds)));
        assert!(matches!(
            read_uint(Endianness::Big, &buffer, usize::MAX, 2),
            Err(OutOfBounds)
        ));
        assert!(matches!(
            read_int(Endianness::Little, &[], 0, 1),
            Err(OutOfBounds)
        ));
        assert_eq!(read_uint(Endianness::Big, &buffer, 4, 0).unwrap(), 0);
    }
}
