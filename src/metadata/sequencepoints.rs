//! Sequence points decoding for Portable PDB `MethodDebugInformation` rows.
//!
//! Sequence points map IL offsets of a method body to regions of a source document. They are
//! stored delta-encoded in a blob referenced from the
//! [`crate::metadata::tables::MethodDebugInformation`] row of the method.
//!
//! # Key Components
//!
//! - [`SequencePoint`] - a single IL offset to source region mapping
//! - [`SequencePoints`] - the points of one method, in blob order
//! - [`parse_sequence_points`] - decodes a blob into [`SequencePoints`]
//!
//! # Sequence Points Blob Format
//!
//! ```text
//! Blob         ::= header SequencePointRecord (SequencePointRecord | DocumentRecord)*
//! header       ::= LocalSignature:uint [InitialDocument:uint]
//! DocumentRecord      ::= 0:uint Document:uint
//! SequencePointRecord ::= δIL:uint ΔLines:uint ΔColumns:(uint|int) [δStartLine δStartColumn]
//! ```
//!
//! - `InitialDocument` is only present when the row itself does not name a document.
//! - `δIL` is absolute for the first record and a positive delta afterwards. A zero `δIL` on a
//!   later record introduces a document change instead of a sequence point.
//! - `ΔColumns` is unsigned when `ΔLines` is 0 and signed otherwise.
//! - `ΔLines` and `ΔColumns` both 0 mark a hidden point, which carries no start position.
//! - `δStartLine` and `δStartColumn` are unsigned absolute values for the first non-hidden
//!   point and signed deltas to the previous non-hidden point afterwards.
//!
//! All values use ECMA-335 compressed integer encoding (II.23.2).
//!
//! # Examples
//!
//! ```rust
//! use pdbscope::metadata::{handles::DocumentHandle, sequencepoints::parse_sequence_points};
//!
//! let document = DocumentHandle::new(1);
//! // LocalSignature=0, IL_0000, one line, columns 5..13, line 12 column 5
//! let points = parse_sequence_points(&[0x00, 0x00, 0x00, 0x08, 0x0C, 0x05], document)?;
//!
//! assert_eq!(points.0.len(), 1);
//! assert_eq!(points.0[0].start_line, 12);
//! assert_eq!(points.0[0].end_column, 13);
//! # Ok::<(), pdbscope::Error>(())
//! ```
//!
//! # References
//!
//! - [Portable PDB Format - Sequence Points Blob](https://github.com/dotnet/runtime/blob/main/docs/design/specs/PortablePdb-Metadata.md#sequence-points-blob)

use crate::{file::parser::Parser, metadata::handles::DocumentHandle, Result};

/// Line number reserved for hidden sequence points.
pub const HIDDEN_LINE: u32 = 0x00FE_EFEE;

/// Represents a single sequence point mapping IL offset to source code location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequencePoint {
    /// Offset in the method's IL stream.
    pub il_offset: u32,
    /// Starting line in the source file, [`HIDDEN_LINE`] for hidden points.
    pub start_line: u32,
    /// Starting column in the source file.
    pub start_column: u16,
    /// Ending line in the source file, [`HIDDEN_LINE`] for hidden points.
    pub end_line: u32,
    /// Ending column in the source file (exclusive).
    pub end_column: u16,
    /// True if this point hides the IL range from the debugger.
    pub is_hidden: bool,
    /// Document the point belongs to.
    pub document: Option<DocumentHandle>,
}

/// Collection of sequence points for a method.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SequencePoints(pub Vec<SequencePoint>);

impl SequencePoints {
    /// Returns the sequence point for a given IL offset, if any.
    #[must_use]
    pub fn find_by_il_offset(&self, il_offset: u32) -> Option<&SequencePoint> {
        self.0.iter().find(|sp| sp.il_offset == il_offset)
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` if the method has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn read_document(parser: &mut Parser) -> Result<DocumentHandle> {
    let rid = parser.read_compressed_uint()?;
    DocumentHandle::new(rid)
        .ok_or_else(|| malformed_error!("Invalid document row in sequence points - {}", rid))
}

fn absolute_line(value: u32) -> Result<u32> {
    if value >= HIDDEN_LINE {
        return Err(malformed_error!("Sequence point line out of range - {}", value));
    }
    Ok(value)
}

fn absolute_column(value: u32) -> Result<u16> {
    match u16::try_from(value) {
        Ok(column) if column != u16::MAX => Ok(column),
        _ => Err(malformed_error!(
            "Sequence point column out of range - {}",
            value
        )),
    }
}

fn add_lines(value: u32, delta: i64) -> Result<u32> {
    let result = i64::from(value) + delta;
    match u32::try_from(result) {
        Ok(line) if line < HIDDEN_LINE => Ok(line),
        _ => Err(malformed_error!(
            "Sequence point line out of range - {}",
            result
        )),
    }
}

fn add_columns(value: u16, delta: i64) -> Result<u16> {
    let result = i64::from(value) + delta;
    match u16::try_from(result) {
        Ok(column) if column != u16::MAX => Ok(column),
        _ => Err(malformed_error!(
            "Sequence point column out of range - {}",
            result
        )),
    }
}

/// Parses a Portable PDB sequence points blob into a [`SequencePoints`] collection.
///
/// `document` is the document of the owning `MethodDebugInformation` row; when it is `None`
/// the blob header names the initial document. An empty blob yields no points.
///
/// # Arguments
/// * `blob` - The raw sequence points blob from MethodDebugInformation.
/// * `document` - The document named by the row, if any.
///
/// # Errors
/// Returns [`crate::Error::OutOfBounds`] for a truncated blob and [`crate::Error::Malformed`]
/// for invalid documents, a non-increasing IL offset, or lines and columns outside their
/// valid ranges.
pub fn parse_sequence_points(
    blob: &[u8],
    document: Option<DocumentHandle>,
) -> Result<SequencePoints> {
    let mut parser = Parser::new(blob);
    let mut points = Vec::new();
    if parser.is_empty() {
        return Ok(SequencePoints(points));
    }

    let _local_signature = parser.read_compressed_uint()?;
    let mut current_document = match document {
        Some(document) => Some(document),
        None => Some(read_document(&mut parser)?),
    };

    let mut il_offset = 0u32;
    let mut previous_start: Option<(u32, u16)> = None;
    let mut first = true;

    while parser.has_more_data() {
        if first {
            il_offset = parser.read_compressed_uint()?;
        } else {
            let mut delta_il = parser.read_compressed_uint()?;
            while delta_il == 0 {
                current_document = Some(read_document(&mut parser)?);
                delta_il = parser.read_compressed_uint()?;
            }
            il_offset = il_offset
                .checked_add(delta_il)
                .ok_or_else(|| malformed_error!("Sequence point IL offset overflow"))?;
        }
        first = false;

        let delta_lines = parser.read_compressed_uint()?;
        let delta_columns = if delta_lines == 0 {
            i64::from(parser.read_compressed_uint()?)
        } else {
            i64::from(parser.read_compressed_int()?)
        };

        if delta_lines == 0 && delta_columns == 0 {
            points.push(SequencePoint {
                il_offset,
                start_line: HIDDEN_LINE,
                start_column: 0,
                end_line: HIDDEN_LINE,
                end_column: 0,
                is_hidden: true,
                document: current_document,
            });
            continue;
        }

        let (start_line, start_column) = match previous_start {
            None => (
                absolute_line(parser.read_compressed_uint()?)?,
                absolute_column(parser.read_compressed_uint()?)?,
            ),
            Some((line, column)) => (
                add_lines(line, i64::from(parser.read_compressed_int()?))?,
                add_columns(column, i64::from(parser.read_compressed_int()?))?,
            ),
        };
        previous_start = Some((start_line, start_column));

        points.push(SequencePoint {
            il_offset,
            start_line,
            start_column,
            end_line: add_lines(start_line, i64::from(delta_lines))?,
            end_column: add_columns(start_column, delta_columns)?,
            is_hidden: false,
            document: current_document,
        });
    }

    Ok(SequencePoints(points))
}
