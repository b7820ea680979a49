//! LocalScope table (0x32) rows.
//!
//! Rows are sorted by method and then by start offset. A scope does not store its variables
//! directly: `variable_list` is the first `LocalVariable` row of the scope, and the run ends
//! where the next scope's run begins (or at the end of the `LocalVariable` table).
//!
//! # Reference
//! - [Portable PDB Format - LocalScope Table](https://github.com/dotnet/runtime/blob/main/docs/design/specs/PortablePdb-Metadata.md#localscope-table-0x32)

use crate::metadata::{handles::MethodHandle, token::Token};

/// A row of the LocalScope table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalScope {
    /// Row identifier (1-based index in the table)
    pub rid: u32,

    /// Metadata token for this LocalScope entry
    pub token: Token,

    /// Method the scope belongs to
    pub method: MethodHandle,

    /// `ImportScope` row id, 0 if none
    pub import_scope: u32,

    /// First `LocalVariable` row id of this scope
    pub variable_list: u32,

    /// First `LocalConstant` row id of this scope
    pub constant_list: u32,

    /// IL offset the scope starts at
    pub start_offset: u32,

    /// Length of the scope in IL bytes
    pub length: u32,
}

impl LocalScope {
    /// IL offset just past the end of the scope.
    #[must_use]
    pub fn end_offset(&self) -> u32 {
        self.start_offset.saturating_add(self.length)
    }

    /// `true` if `il_offset` lies within the scope.
    #[must_use]
    pub fn contains(&self, il_offset: u32) -> bool {
        il_offset >= self.start_offset && il_offset < self.end_offset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::tables::TableId;

    #[test]
    fn offsets() {
        let scope = LocalScope {
            rid: 1,
            token: Token::from_parts(TableId::LocalScope, 1),
            method: MethodHandle::new(1).unwrap(),
            import_scope: 0,
            variable_list: 1,
            constant_list: 1,
            start_offset: 0x10,
            length: 0x20,
        };

        assert_eq!(scope.end_offset(), 0x30);
        assert!(scope.contains(0x10));
        assert!(scope.contains(0x2F));
        assert!(!scope.contains(0x30));
        assert!(!scope.contains(0x0F));
    }
}
