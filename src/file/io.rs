//! Low-level byte order and safe reading utilities for debug information blobs.
//!
//! This module provides bounds-checked little-endian reading of primitive values from byte
//! buffers. It is the foundation of [`crate::file::parser::Parser`], which every blob decoder
//! in this crate uses.
//!
//! # Key Components
//!
//! - [`crate::file::io::CilIO`] - Trait defining endian-aware conversion for primitive types
//! - [`crate::file::io::read_le_at`] - Read a value at an offset and advance the offset
//! - [`crate::file::io::write_compressed_uint`] / [`crate::file::io::write_compressed_int`] -
//!   ECMA-335 II.23.2 compressed integer encoding, used when building blobs in memory
//!
//! # Error Handling
//!
//! All reading functions return [`crate::Result<T>`] and will return
//! [`crate::Error::OutOfBounds`] if there are insufficient bytes in the buffer.

use crate::Result;

/// Trait for primitive types that can be decoded from little-endian bytes.
///
/// Implemented for the unsigned and signed integer types used by the Portable PDB
/// blob formats.
pub trait CilIO: Sized {
    /// Associated type representing the byte array type for this numeric type.
    type Bytes: Sized + for<'a> TryFrom<&'a [u8]>;

    /// Read T from a byte buffer in little-endian
    fn from_le_bytes(bytes: Self::Bytes) -> Self;
}

macro_rules! impl_cil_io {
    ($($ty:ty),*) => {
        $(
            impl CilIO for $ty {
                type Bytes = [u8; std::mem::size_of::<$ty>()];

                fn from_le_bytes(bytes: Self::Bytes) -> Self {
                    <$ty>::from_le_bytes(bytes)
                }
            }
        )*
    };
}

impl_cil_io!(u8, i8, u16, i16, u32, i32, u64, i64);

/// Safely reads a value of type `T` in little-endian byte order at `offset`.
///
/// The offset is advanced by the size of `T` on success and left untouched on failure.
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] if there are insufficient bytes.
pub fn read_le_at<T: CilIO>(data: &[u8], offset: &mut usize) -> Result<T> {
    let type_len = std::mem::size_of::<T>();
    let end = offset
        .checked_add(type_len)
        .ok_or(out_of_bounds_error!())?;
    if end > data.len() {
        return Err(out_of_bounds_error!());
    }

    let Ok(read) = data[*offset..end].try_into() else {
        return Err(out_of_bounds_error!());
    };

    *offset = end;

    Ok(T::from_le_bytes(read))
}

fn push_compressed(value: u32, width: usize, buffer: &mut Vec<u8>) {
    match width {
        1 => buffer.push((value & 0x7F) as u8),
        2 => {
            buffer.push(0x80 | ((value >> 8) & 0x3F) as u8);
            buffer.push(value as u8);
        }
        _ => {
            buffer.push(0xC0 | ((value >> 24) & 0x1F) as u8);
            buffer.push((value >> 16) as u8);
            buffer.push((value >> 8) as u8);
            buffer.push(value as u8);
        }
    }
}

/// Append `value` as an ECMA-335 compressed unsigned integer.
///
/// # Errors
///
/// Returns [`crate::Error::Malformed`] for values above `0x1FFF_FFFF`, which have no
/// compressed encoding. `buffer` is left untouched in that case.
pub fn write_compressed_uint(value: u32, buffer: &mut Vec<u8>) -> Result<()> {
    if value < 0x80 {
        push_compressed(value, 1, buffer);
    } else if value < 0x4000 {
        push_compressed(value, 2, buffer);
    } else if value <= 0x1FFF_FFFF {
        push_compressed(value, 4, buffer);
    } else {
        return Err(malformed_error!(
            "Value too large for a compressed uint - 0x{:x}",
            value
        ));
    }
    Ok(())
}

/// Append `value` as an ECMA-335 compressed signed integer.
///
/// The two's complement value is rotated left by one bit within the encoding width, so
/// the sign ends up in the least significant bit.
///
/// # Errors
///
/// Returns [`crate::Error::Malformed`] for values outside `-0x1000_0000..=0x0FFF_FFFF`.
/// `buffer` is left untouched in that case.
#[allow(clippy::cast_sign_loss)]
pub fn write_compressed_int(value: i32, buffer: &mut Vec<u8>) -> Result<()> {
    if !(-0x1000_0000..=0x0FFF_FFFF).contains(&value) {
        return Err(malformed_error!(
            "Value out of range for a compressed int - {}",
            value
        ));
    }

    let bits = value as u32;
    let rotated = (bits << 1) | (bits >> 31);

    if (-0x40..0x40).contains(&value) {
        push_compressed(rotated & 0x7F, 1, buffer);
    } else if (-0x2000..0x2000).contains(&value) {
        push_compressed(rotated & 0x3FFF, 2, buffer);
    } else {
        push_compressed(rotated & 0x1FFF_FFFF, 4, buffer);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    const TEST_BUFFER: [u8; 8] = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];

    #[test]
    fn read_le_u16() {
        let mut offset = 0;
        let result = read_le_at::<u16>(&TEST_BUFFER, &mut offset).unwrap();
        assert_eq!(result, 0x0201);
    }

    #[test]
    fn read_le_at_advances() {
        let mut offset = 0;
        assert_eq!(read_le_at::<u32>(&TEST_BUFFER, &mut offset).unwrap(), 0x0403_0201);
        assert_eq!(offset, 4);
        assert_eq!(read_le_at::<i32>(&TEST_BUFFER, &mut offset).unwrap(), 0x0807_0605);
        assert_eq!(offset, 8);
    }

    #[test]
    fn compressed_uint_encoding() {
        let cases: [(u32, &[u8]); 6] = [
            (0x03, &[0x03]),
            (0x7F, &[0x7F]),
            (0x80, &[0x80, 0x80]),
            (0x2E57, &[0xAE, 0x57]),
            (0x4000, &[0xC0, 0x00, 0x40, 0x00]),
            (0x1FFF_FFFF, &[0xDF, 0xFF, 0xFF, 0xFF]),
        ];

        for (value, expected) in cases {
            let mut buffer = Vec::new();
            write_compressed_uint(value, &mut buffer).unwrap();
            assert_eq!(buffer, expected, "value 0x{value:x}");
        }
    }

    #[test]
    fn compressed_int_encoding() {
        let cases: [(i32, &[u8]); 8] = [
            (3, &[0x06]),
            (-3, &[0x7B]),
            (64, &[0x80, 0x80]),
            (-64, &[0x01]),
            (8192, &[0xC0, 0x00, 0x40, 0x00]),
            (-8192, &[0x80, 0x01]),
            (268_435_455, &[0xDF, 0xFF, 0xFF, 0xFE]),
            (-268_435_456, &[0xC0, 0x00, 0x00, 0x01]),
        ];

        for (value, expected) in cases {
            let mut buffer = Vec::new();
            write_compressed_int(value, &mut buffer).unwrap();
            assert_eq!(buffer, expected, "value {value}");
        }
    }

    #[test]
    fn compressed_out_of_range_is_rejected() {
        let mut buffer = vec![0xAA];

        let result = write_compressed_uint(0x2000_0000, &mut buffer);
        assert!(matches!(result, Err(Error::Malformed { .. })));

        let result = write_compressed_int(0x1000_0000, &mut buffer);
        assert!(matches!(result, Err(Error::Malformed { .. })));

        let result = write_compressed_int(-0x1000_0001, &mut buffer);
        assert!(matches!(result, Err(Error::Malformed { .. })));

        assert_eq!(buffer, [0xAA]);
    }

    #[test]
    fn errors() {
        let buffer = [0xFF, 0xFF];
        let mut offset = 1;

        let result = read_le_at::<u32>(&buffer, &mut offset);
        assert!(matches!(result, Err(Error::OutOfBounds { .. })));
        assert_eq!(offset, 1);

        let mut offset = usize::MAX;
        let result = read_le_at::<u8>(&buffer, &mut offset);
        assert!(matches!(result, Err(Error::OutOfBounds { .. })));
    }
}
