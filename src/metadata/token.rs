//! Metadata tokens referencing rows of Portable PDB and ECMA-335 tables.
//!
//! A token packs the table identifier into its high byte and the 1-based row id into the low
//! 24 bits. The row id 0 never designates a row, which makes the all-zero token the "nil"
//! value of the underlying format. Typed handles in [`crate::metadata::handles`] wrap tokens
//! so that nil never escapes into the crate's API.

use std::fmt;

use crate::metadata::tables::TableId;

/// A raw metadata token: `table << 24 | row`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Token(pub u32);

impl Token {
    /// Create a new token from its raw value.
    #[must_use]
    pub fn new(value: u32) -> Self {
        Token(value)
    }

    /// Create a token for `row` in `table`.
    ///
    /// The row id is truncated to the 24 bits a token can carry.
    #[must_use]
    pub fn from_parts(table: TableId, row: u32) -> Self {
        Token((u32::from(table as u8) << 24) | (row & 0x00FF_FFFF))
    }

    /// Raw token value.
    #[must_use]
    pub fn value(&self) -> u32 {
        self.0
    }

    /// Raw table byte.
    #[must_use]
    pub fn table(&self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// The table this token points into, if it is one this crate knows about.
    #[must_use]
    pub fn table_id(&self) -> Option<TableId> {
        TableId::from_u8(self.table())
    }

    /// 1-based row id, 0 for nil tokens.
    #[must_use]
    pub fn row(&self) -> u32 {
        self.0 & 0x00FF_FFFF
    }

    /// `true` if the token does not designate any row.
    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.row() == 0
    }
}

impl From<u32> for Token {
    fn from(value: u32) -> Self {
        Token(value)
    }
}

impl From<Token> for u32 {
    fn from(token: Token) -> Self {
        token.0
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Token(0x{:08x}, table: 0x{:02x}, row: {})",
            self.0,
            self.table(),
            self.row()
        )
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08x}", self.0)
    }
}
