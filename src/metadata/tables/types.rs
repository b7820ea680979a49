use strum::{Display, EnumCount, EnumIter, IntoEnumIterator};

/// Identifiers of the metadata tables this crate reads or references.
///
/// The numeric values are the table ids of ECMA-335 and the Portable PDB format, i.e. the high
/// byte of a [`crate::metadata::token::Token`] pointing into that table.
///
/// ## Table Categories
///
/// ### Type system tables referenced from debug information
/// - **`Module`**, **`TypeDef`**, **`MethodDef`**: possible parents of custom debug
///   information; `MethodDef` rows also key the `MethodDebugInformation` table
///
/// ### Portable PDB tables
/// - **`Document`**: source documents
/// - **`MethodDebugInformation`**: per-method sequence points
/// - **`LocalScope`**, **`LocalVariable`**, **`LocalConstant`**, **`ImportScope`**: scopes
/// - **`StateMachineMethod`**: kickoff method mapping for async/iterator methods
/// - **`CustomDebugInformation`**: GUID keyed extension records
///
/// ## Reference
/// * [Portable PDB Format](https://github.com/dotnet/runtime/blob/main/docs/design/specs/PortablePdb-Metadata.md)
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Display, EnumIter, EnumCount)]
pub enum TableId {
    /// `Module` table (0x00)
    Module = 0x00,
    /// `TypeDef` table (0x02)
    TypeDef = 0x02,
    /// `MethodDef` table (0x06)
    MethodDef = 0x06,
    /// `Document` table (0x30) - source documents referenced by sequence points.
    Document = 0x30,
    /// `MethodDebugInformation` table (0x31) - one row per `MethodDef` row, sharing its row id.
    MethodDebugInformation = 0x31,
    /// `LocalScope` table (0x32) - IL ranges and the variables visible within them.
    LocalScope = 0x32,
    /// `LocalVariable` table (0x33) - slot index and name of a local variable.
    LocalVariable = 0x33,
    /// `LocalConstant` table (0x34)
    LocalConstant = 0x34,
    /// `ImportScope` table (0x35)
    ImportScope = 0x35,
    /// `StateMachineMethod` table (0x36)
    StateMachineMethod = 0x36,
    /// `CustomDebugInformation` table (0x37) - GUID keyed extension records.
    CustomDebugInformation = 0x37,
}

impl TableId {
    /// Map a raw table byte to a known table.
    #[must_use]
    pub fn from_u8(value: u8) -> Option<TableId> {
        TableId::iter().find(|table| *table as u8 == value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_all_tables() {
        for table in TableId::iter() {
            assert_eq!(TableId::from_u8(table as u8), Some(table));
        }
        assert_eq!(TableId::COUNT, 11);
    }

    #[test]
    fn unknown_table_byte() {
        assert_eq!(TableId::from_u8(0x01), None);
        assert_eq!(TableId::from_u8(0xFF), None);
    }

    #[test]
    fn display() {
        assert_eq!(TableId::LocalVariable.to_string(), "LocalVariable");
    }
}
