//! Document table (0x30) rows and document name decoding.
//!
//! A document name is not stored as a string. Its blob holds a separator byte followed by a
//! list of compressed blob indices, each naming one UTF-8 part of the path:
//!
//! ```text
//! Blob ::= separator part+
//! part ::= compressed_uint  // blob index of the UTF-8 part, 0 = empty part
//! ```
//!
//! The full name is the parts joined with the separator; separator 0 means the parts are
//! concatenated directly.
//!
//! # References
//!
//! - [Portable PDB Format - Document Table](https://github.com/dotnet/runtime/blob/main/docs/design/specs/PortablePdb-Metadata.md#document-table-0x30)

use crate::{
    file::parser::Parser,
    metadata::{blobs::BlobHeap, token::Token},
    Error, Result,
};

/// A row of the Document table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Row identifier (1-based index in the table)
    pub rid: u32,

    /// Metadata token for this Document entry
    pub token: Token,

    /// Encoded document name blob (separator + part indices)
    pub name: Vec<u8>,

    /// Hash algorithm of `hash`, `None` if the document carries no hash
    pub hash_algorithm: Option<uguid::Guid>,

    /// Hash of the document content
    pub hash: Vec<u8>,

    /// Source language of the document
    pub language: Option<uguid::Guid>,
}

impl Document {
    /// Decode this document's name against `blobs`.
    ///
    /// # Errors
    /// See [`parse_document_name`].
    pub fn resolve_name(&self, blobs: &BlobHeap) -> Result<String> {
        parse_document_name(&self.name, blobs)
    }
}

/// Decode a document name blob.
///
/// # Errors
/// - [`crate::Error::Empty`] if the blob has no separator byte
/// - [`crate::Error::Malformed`] for a non-ASCII separator or a part that is not a valid
///   compressed integer
/// - [`crate::Error::OutOfBounds`] for part indices outside `blobs`
///
/// # Examples
///
/// ```rust
/// use pdbscope::metadata::blobs::BlobHeap;
/// use pdbscope::metadata::tables::parse_document_name;
///
/// let mut blobs = BlobHeap::new();
/// let src = blobs.add(b"src") as u8;
/// let file = blobs.add(b"Program.cs") as u8;
///
/// let name = parse_document_name(&[b'/', 0x00, src, file], &blobs)?;
/// assert_eq!(name, "/src/Program.cs");
/// # Ok::<(), pdbscope::Error>(())
/// ```
pub fn parse_document_name(blob: &[u8], blobs: &BlobHeap) -> Result<String> {
    if blob.is_empty() {
        return Err(Error::Empty);
    }

    let mut parser = Parser::new(blob);
    let separator = parser.read_le::<u8>()?;
    if separator > 0x7F {
        return Err(malformed_error!(
            "Invalid document name separator - 0x{:02x}",
            separator
        ));
    }

    let mut name = String::new();
    let mut first = true;
    while parser.has_more_data() {
        if !first && separator != 0 {
            name.push(char::from(separator));
        }

        let part_index = parser.read_compressed_uint()?;
        let part = blobs.get(part_index)?;
        name.push_str(&String::from_utf8_lossy(part));
        first = false;
    }

    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heap_with(parts: &[&str]) -> (BlobHeap, Vec<u8>) {
        let mut heap = BlobHeap::new();
        let indices = parts
            .iter()
            .map(|part| heap.add(part.as_bytes()) as u8)
            .collect();
        (heap, indices)
    }

    #[test]
    fn windows_path() {
        let (heap, indices) = heap_with(&["C:", "src", "Program.cs"]);
        let mut blob = vec![b'\\'];
        blob.extend(indices);

        assert_eq!(
            parse_document_name(&blob, &heap).unwrap(),
            "C:\\src\\Program.cs"
        );
    }

    #[test]
    fn leading_empty_part() {
        let (heap, indices) = heap_with(&["home", "a.cs"]);
        let blob = [b'/', 0x00, indices[0], indices[1]];

        assert_eq!(parse_document_name(&blob, &heap).unwrap(), "/home/a.cs");
    }

    #[test]
    fn no_separator() {
        let (heap, indices) = heap_with(&["Program", ".cs"]);
        let blob = [0x00, indices[0], indices[1]];

        assert_eq!(parse_document_name(&blob, &heap).unwrap(), "Program.cs");
    }

    #[test]
    fn separator_only() {
        let heap = BlobHeap::new();
        assert_eq!(parse_document_name(&[b'/'], &heap).unwrap(), "");
    }

    #[test]
    fn errors() {
        let heap = BlobHeap::new();
        assert!(matches!(parse_document_name(&[], &heap), Err(Error::Empty)));
        assert!(matches!(
            parse_document_name(&[0x80, 0x00], &heap),
            Err(Error::Malformed { .. })
        ));
        assert!(matches!(
            parse_document_name(&[b'/', 0x05], &heap),
            Err(Error::OutOfBounds { .. })
        ));
        assert!(matches!(
            parse_document_name(&[b'/', 0xC0, 0x00], &heap),
            Err(Error::OutOfBounds { .. })
        ));
    }
}
