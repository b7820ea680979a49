//! LocalVariable table (0x33) rows.
//!
//! # Reference
//! - [Portable PDB Format - LocalVariable Table](https://github.com/dotnet/runtime/blob/main/docs/design/specs/PortablePdb-Metadata.md#localvariable-table-0x33)

use bitflags::bitflags;

use crate::metadata::token::Token;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    /// Attributes of a local variable
    pub struct LocalVariableAttributes: u16 {
        /// The variable is compiler generated and should be hidden from the user
        const DEBUGGER_HIDDEN = 0x0001;
    }
}

/// A row of the LocalVariable table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalVariable {
    /// Row identifier (1-based index in the table)
    pub rid: u32,

    /// Metadata token for this LocalVariable entry
    pub token: Token,

    /// Variable attribute flags
    pub attributes: LocalVariableAttributes,

    /// Slot index of the variable in the method's local signature
    pub index: u16,

    /// Variable name, empty for anonymous variables
    pub name: String,
}

impl LocalVariable {
    /// `true` if the variable is compiler generated.
    #[must_use]
    pub fn is_debugger_hidden(&self) -> bool {
        self.attributes
            .contains(LocalVariableAttributes::DEBUGGER_HIDDEN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::tables::TableId;

    #[test]
    fn attributes() {
        let mut variable = LocalVariable {
            rid: 1,
            token: Token::from_parts(TableId::LocalVariable, 1),
            attributes: LocalVariableAttributes::empty(),
            index: 0,
            name: "value".to_string(),
        };
        assert!(!variable.is_debugger_hidden());

        variable.attributes = LocalVariableAttributes::from_bits_truncate(0xFFFF);
        assert!(variable.is_debugger_hidden());
        assert_eq!(variable.attributes.bits(), 0x0001);
    }
}
