//! Low-level byte stream parser for Portable PDB blob decoding.
//!
//! This module provides the [`crate::file::parser::Parser`] type, a cursor-based binary data
//! parser used by every blob decoder in this crate: sequence point blobs, document name blobs
//! and the custom debug information sub-formats.
//!
//! # Key Components
//!
//! ## Navigation Methods
//! - [`crate::file::parser::Parser::pos`] - Get current position
//! - [`crate::file::parser::Parser::remaining`] - Bytes left after the cursor
//! - [`crate::file::parser::Parser::index_of`] - Distance to the next occurrence of a byte
//!
//! ## Data Access Methods
//! - [`crate::file::parser::Parser::read_le`] - Read primitive types (little-endian)
//! - [`crate::file::parser::Parser::read_bytes`] - Read a raw byte run
//! - [`crate::file::parser::Parser::read_utf8`] - Read a UTF-8 run of known length
//!
//! ## Metadata Reading Methods
//! - [`crate::file::parser::Parser::read_compressed_uint`] - Read compressed unsigned integers
//! - [`crate::file::parser::Parser::read_compressed_int`] - Read compressed signed integers
//!
//! # Usage Examples
//!
//! ```rust
//! use pdbscope::Parser;
//!
//! let data = b"Item1\0Item2\0";
//! let mut parser = Parser::new(data);
//!
//! let length = parser.index_of(0).unwrap();
//! assert_eq!(parser.read_utf8(length)?, "Item1");
//! assert_eq!(parser.read_le::<u8>()?, 0);
//! assert_eq!(parser.remaining(), 6);
//! # Ok::<(), pdbscope::Error>(())
//! ```

use crate::{
    file::io::{read_le_at, CilIO},
    Result,
};

/// A cursor over a blob.
///
/// `Parser` maintains an internal position and provides bounds checking on every read, so
/// that truncated or malformed blobs surface as [`crate::Error::OutOfBounds`] or
/// [`crate::Error::Malformed`] instead of a panic.
///
/// # Examples
///
/// ```rust
/// use pdbscope::Parser;
///
/// let data = [0x01, 0x02, 0x03, 0x04];
/// let mut parser = Parser::new(&data);
///
/// assert_eq!(parser.read_le::<u16>()?, 0x0201);
/// assert_eq!(parser.pos(), 2);
/// # Ok::<(), pdbscope::Error>(())
/// ```
pub struct Parser<'a> {
    /// The binary data being parsed
    data: &'a [u8],
    /// Current position within the data buffer
    position: usize,
}

impl<'a> Parser<'a> {
    /// Create a new [`crate::file::parser::Parser`] from a byte slice.
    ///
    /// # Arguments
    /// * `data` - The byte slice to read from
    #[must_use]
    pub fn new(data: &'a [u8]) -> Self {
        Parser { data, position: 0 }
    }

    /// Returns the length of the underlying data buffer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the parser has no data.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns `true` if there is more data available to parse.
    #[must_use]
    pub fn has_more_data(&self) -> bool {
        self.position < self.data.len()
    }

    /// Get the current position of the parser within the data buffer.
    #[must_use]
    pub fn pos(&self) -> usize {
        self.position
    }

    /// Get access to the underlying data buffer.
    #[must_use]
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Number of bytes between the cursor and the end of the buffer.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.position)
    }

    /// Distance from the cursor to the next occurrence of `value`.
    ///
    /// Returns `None` if `value` does not occur in the remaining data. The position is not
    /// modified.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pdbscope::Parser;
    ///
    /// let parser = Parser::new(&[0x41, 0x42, 0x00]);
    /// assert_eq!(parser.index_of(0), Some(2));
    /// assert_eq!(parser.index_of(0xFF), None);
    /// ```
    #[must_use]
    pub fn index_of(&self, value: u8) -> Option<usize> {
        self.data
            .get(self.position..)?
            .iter()
            .position(|&byte| byte == value)
    }

    /// Read a value of type `T` in little-endian format and advance the position.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if reading `T` would exceed the data length.
    pub fn read_le<T: CilIO>(&mut self) -> Result<T> {
        read_le_at::<T>(self.data, &mut self.position)
    }

    /// Read a compressed unsigned integer as defined in ECMA-335 II.23.2.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if reading would exceed the data length or
    /// [`crate::Error::Malformed`] for an invalid leading byte.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pdbscope::Parser;
    ///
    /// let mut parser = Parser::new(&[0x7F, 0x80, 0x80]);
    /// assert_eq!(parser.read_compressed_uint()?, 127);
    /// assert_eq!(parser.read_compressed_uint()?, 128);
    /// # Ok::<(), pdbscope::Error>(())
    /// ```
    pub fn read_compressed_uint(&mut self) -> Result<u32> {
        let first_byte = self.read_le::<u8>()?;

        // 1-byte encoding: 0xxxxxxx
        if (first_byte & 0x80) == 0 {
            return Ok(u32::from(first_byte));
        }

        // 2-byte encoding: 10xxxxxx xxxxxxxx
        if (first_byte & 0xC0) == 0x80 {
            let second_byte = self.read_le::<u8>()?;
            let value = ((u32::from(first_byte) & 0x3F) << 8) | u32::from(second_byte);
            return Ok(value);
        }

        // 4-byte encoding: 110xxxxx xxxxxxxx xxxxxxxx xxxxxxxx
        if (first_byte & 0xE0) == 0xC0 {
            let b1 = u32::from(self.read_le::<u8>()?);
            let b2 = u32::from(self.read_le::<u8>()?);
            let b3 = u32::from(self.read_le::<u8>()?);
            let value = ((u32::from(first_byte) & 0x1F) << 24) | (b1 << 16) | (b2 << 8) | b3;
            return Ok(value);
        }

        Err(malformed_error!("Invalid compressed uint - {}", first_byte))
    }

    /// Read a compressed signed integer as defined in ECMA-335 II.23.2.
    ///
    /// The value is rotated so that the sign lives in the least significant bit; the width
    /// of the encoding determines how many bits are sign-extended.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if reading would exceed the data length or
    /// [`crate::Error::Malformed`] for invalid encoding.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pdbscope::Parser;
    ///
    /// // +3 is 0x06, -3 is 0x7B
    /// let mut parser = Parser::new(&[0x06, 0x7B]);
    /// assert_eq!(parser.read_compressed_int()?, 3);
    /// assert_eq!(parser.read_compressed_int()?, -3);
    /// # Ok::<(), pdbscope::Error>(())
    /// ```
    pub fn read_compressed_int(&mut self) -> Result<i32> {
        let start = self.position;
        let unsigned = self.read_compressed_uint()?;
        let sign_bits: u32 = match self.position - start {
            1 => 0xFFFF_FFC0,
            2 => 0xFFFF_E000,
            _ => 0xF000_0000,
        };

        let value = unsigned >> 1;
        #[allow(clippy::cast_possible_wrap)]
        let signed = if (unsigned & 1) == 0 {
            value as i32
        } else {
            (value | sign_bits) as i32
        };

        Ok(signed)
    }

    /// Read `length` raw bytes and advance the position.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if fewer than `length` bytes remain.
    pub fn read_bytes(&mut self, length: usize) -> Result<&'a [u8]> {
        let end = self
            .position
            .checked_add(length)
            .ok_or(out_of_bounds_error!())?;

        if end > self.data.len() {
            return Err(out_of_bounds_error!());
        }

        let bytes = &self.data[self.position..end];
        self.position = end;
        Ok(bytes)
    }

    /// Read `length` bytes as UTF-8 and advance the position.
    ///
    /// Invalid sequences are replaced with U+FFFD rather than rejected, matching how
    /// compilers' own PDB readers surface damaged names.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if fewer than `length` bytes remain.
    pub fn read_utf8(&mut self, length: usize) -> Result<String> {
        let bytes = self.read_bytes(length)?;
        Ok(String::from_utf8_lossy(bytes).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn compressed_uint() {
        let test_cases = vec![
            (vec![0x03], 3),
            (vec![0x7F], 0x7F),
            (vec![0x80, 0x80], 0x80),
            (vec![0xAE, 0x57], 0x2E57),
            (vec![0xBF, 0xFF], 0x3FFF),
            (vec![0xC0, 0x00, 0x40, 0x00], 0x4000),
            (vec![0xC0, 0xFE, 0xEF, 0xEE], 0x00FE_EFEE),
            (vec![0xDF, 0xFF, 0xFF, 0xFF], 0x1FFF_FFFF),
        ];

        for (input, expected) in test_cases {
            let mut parser = Parser::new(&input);
            let result = parser.read_compressed_uint().unwrap();
            assert_eq!(result, expected, "Failed for input: {input:X?}");
            assert!(!parser.has_more_data());
        }
    }

    #[test]
    fn compressed_uint_invalid_lead() {
        let mut parser = Parser::new(&[0xE0, 0x00, 0x00, 0x00]);
        assert!(matches!(
            parser.read_compressed_uint(),
            Err(Error::Malformed { .. })
        ));
    }

    #[test]
    fn compressed_uint_truncated() {
        let mut parser = Parser::new(&[0xC0, 0x00]);
        assert!(matches!(
            parser.read_compressed_uint(),
            Err(Error::OutOfBounds { .. })
        ));
    }

    #[test]
    fn compressed_int() {
        // Values from ECMA-335 II.23.2
        let test_cases = vec![
            (vec![0x06], 3),
            (vec![0x7B], -3),
            (vec![0x80, 0x80], 64),
            (vec![0x01], -64),
            (vec![0xC0, 0x00, 0x40, 0x00], 8192),
            (vec![0x80, 0x01], -8192),
            (vec![0xDF, 0xFF, 0xFF, 0xFE], 268_435_455),
            (vec![0xC0, 0x00, 0x00, 0x01], -268_435_456),
        ];

        for (input, expected) in test_cases {
            let mut parser = Parser::new(&input);
            let result = parser.read_compressed_int().unwrap();
            assert_eq!(result, expected, "Failed for input: {input:X?}");
        }
    }

    #[test]
    fn index_of_is_relative_to_cursor() {
        let data = [0x00, 0x41, 0x00];
        let mut parser = Parser::new(&data);
        assert_eq!(parser.index_of(0), Some(0));
        parser.read_le::<u8>().unwrap();
        assert_eq!(parser.index_of(0), Some(1));
        parser.read_bytes(2).unwrap();
        assert_eq!(parser.index_of(0), None);
        assert_eq!(parser.remaining(), 0);
    }

    #[test]
    fn read_utf8_lossy() {
        let data = [0x48, 0xFF, 0x69];
        let mut parser = Parser::new(&data);
        assert_eq!(parser.read_utf8(3).unwrap(), "H\u{FFFD}i");
        assert!(matches!(parser.read_utf8(1), Err(Error::OutOfBounds { .. })));
    }
}
