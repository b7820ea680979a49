//! CustomDebugInformation table (0x37) rows.
//!
//! Each row attaches a GUID-identified blob to a parent entity (a method, a local variable, a
//! document, the module, ...). The blob format is defined by the GUID, see
//! [`crate::metadata::customdebuginformation`].
//!
//! # Reference
//! - [Portable PDB Format - CustomDebugInformation Table](https://github.com/dotnet/runtime/blob/main/docs/design/specs/PortablePdb-Metadata.md#customdebuginformation-table-0x37)

use crate::metadata::{
    customdebuginformation::CustomDebugKind,
    tables::TableId,
    token::Token,
};

/// A row of the CustomDebugInformation table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomDebugInformation {
    /// Row identifier (1-based index in the table)
    pub rid: u32,

    /// Metadata token for this CustomDebugInformation entry
    pub token: Token,

    /// Entity the information is attached to (a `HasCustomDebugInformation` coded index)
    pub parent: Token,

    /// Kind of the information, `None` for a nil GUID reference
    pub kind: Option<uguid::Guid>,

    /// Encoded information
    pub value: Vec<u8>,
}

impl CustomDebugInformation {
    /// Table of the parent entity, `None` for nil or unknown parents.
    #[must_use]
    pub fn parent_table(&self) -> Option<TableId> {
        if self.parent.is_nil() {
            return None;
        }
        self.parent.table_id()
    }

    /// Classified kind, `None` for a nil GUID reference.
    #[must_use]
    pub fn debug_kind(&self) -> Option<CustomDebugKind> {
        self.kind.map(CustomDebugKind::from_guid)
    }
}
