//! MethodDebugInformation table (0x31) rows.
//!
//! The table is parallel to the `MethodDef` table: row *n* carries the debug information of
//! method definition *n*. Methods without sequence points keep a row with a nil blob.
//!
//! # Reference
//! - [Portable PDB Format - MethodDebugInformation Table](https://github.com/dotnet/runtime/blob/main/docs/design/specs/PortablePdb-Metadata.md#methoddebuginformation-table-0x31)

use crate::{
    metadata::{
        handles::DocumentHandle,
        sequencepoints::{parse_sequence_points, SequencePoints},
        token::Token,
    },
    Result,
};

/// Represents a Portable PDB method debug information entry
pub struct MethodDebugInformation {
    /// Row identifier, equal to the row id of the described `MethodDef`
    pub rid: u32,

    /// Metadata token for this method debug information entry
    pub token: Token,

    /// Document containing all sequence points of the method, `None` if the method spans
    /// several documents (the blob then names its initial document)
    pub document: Option<DocumentHandle>,

    /// Encoded sequence points, `None` if the method has none
    pub sequence_points: Option<Vec<u8>>,
}

impl MethodDebugInformation {
    /// Decode the sequence points blob of this row.
    ///
    /// # Errors
    /// Returns an error if the blob is malformed, see [`parse_sequence_points`].
    pub fn decode_sequence_points(&self) -> Result<SequencePoints> {
        match &self.sequence_points {
            Some(blob) => parse_sequence_points(blob, self.document),
            None => Ok(SequencePoints::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::tables::TableId;

    fn row(document: Option<DocumentHandle>, blob: Option<Vec<u8>>) -> MethodDebugInformation {
        MethodDebugInformation {
            rid: 1,
            token: Token::from_parts(TableId::MethodDebugInformation, 1),
            document,
            sequence_points: blob,
        }
    }

    #[test]
    fn nil_blob_has_no_points() {
        let points = row(None, None).decode_sequence_points().unwrap();
        assert!(points.0.is_empty());
    }

    #[test]
    fn uses_row_document() {
        let document = DocumentHandle::new(2);
        // LocalSignature=0, IL=0, ΔLines=0, ΔColumns=4, line=3, column=1
        let points = row(document, Some(vec![0x00, 0x00, 0x00, 0x04, 0x03, 0x01]))
            .decode_sequence_points()
            .unwrap();

        assert_eq!(points.0.len(), 1);
        assert_eq!(points.0[0].document, document);
        assert_eq!(points.0[0].start_line, 3);
        assert_eq!(points.0[0].end_column, 5);
    }
}
