//! Custom debug information parser for Portable PDB CustomDebugInformation table.
//!
//! The blob format depends on the Kind GUID of the CustomDebugInformation row.
//!
//! ## Tuple Element Names Format
//! ```text
//! TupleElementNamesBlob ::= (utf8_name 0x00)*
//! ```
//! An empty or whitespace-only name stands for an element without an explicit name.
//!
//! ## Dynamic Local Variables Format
//! ```text
//! DynamicLocalVariablesBlob ::= flag_byte*
//! ```
//! Each byte carries eight flags, least significant bit first.
//!
//! ## Source Link Format
//! ```text
//! SourceLinkBlob ::= utf8_json_document
//! ```
//!
//! ## Other Formats
//! For kinds without a decoder, the blob is returned as raw bytes.
//!
//! # Examples
//!
//! ```rust
//! use pdbscope::metadata::customdebuginformation::{
//!     parse_custom_debug_blob, CustomDebugInfo, CustomDebugKind,
//! };
//!
//! let info = parse_custom_debug_blob(b"a\0\0b\0", CustomDebugKind::TupleElementNames)?;
//! assert_eq!(
//!     info,
//!     CustomDebugInfo::TupleElementNames {
//!         names: vec![Some("a".to_string()), None, Some("b".to_string())],
//!     }
//! );
//! # Ok::<(), pdbscope::Error>(())
//! ```

use tracing::trace;

use crate::{file::parser::Parser, metadata::customdebuginformation::types::*, Result};

/// Parser for custom debug information blob binary data implementing the Portable PDB specification.
///
/// This parser handles different blob formats based on the debug information kind GUID.
pub struct CustomDebugParser<'a> {
    /// Binary data parser for reading blob data
    parser: Parser<'a>,
    /// The kind of debug information being parsed
    kind: CustomDebugKind,
}

impl<'a> CustomDebugParser<'a> {
    /// Creates a new parser for the given custom debug information blob data.
    ///
    /// # Arguments
    /// * `data` - The byte slice containing the debug information blob to parse
    /// * `kind` - The debug information kind that determines the blob format
    #[must_use]
    pub fn new(data: &'a [u8], kind: CustomDebugKind) -> Self {
        CustomDebugParser {
            parser: Parser::new(data),
            kind,
        }
    }

    /// Parse the complete custom debug information blob into structured debug information.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if the blob is truncated in a way the kind's
    /// format does not tolerate.
    pub fn parse_debug_info(&mut self) -> Result<CustomDebugInfo> {
        match self.kind {
            CustomDebugKind::TupleElementNames => Ok(CustomDebugInfo::TupleElementNames {
                names: self.read_tuple_element_names()?,
            }),
            CustomDebugKind::DynamicLocalVariables => Ok(CustomDebugInfo::DynamicLocalVariables {
                flags: self.read_dynamic_flags()?,
            }),
            CustomDebugKind::SourceLink => {
                let remaining = self.parser.remaining();
                let document = self.parser.read_utf8(remaining)?;
                Ok(CustomDebugInfo::SourceLink { document })
            }
            _ => {
                let remaining = self.parser.remaining();
                let data = self.parser.read_bytes(remaining)?.to_vec();
                Ok(CustomDebugInfo::Raw {
                    kind: self.kind,
                    data,
                })
            }
        }
    }

    fn read_tuple_element_names(&mut self) -> Result<Vec<Option<String>>> {
        let mut names = Vec::new();

        while self.parser.has_more_data() {
            let Some(length) = self.parser.index_of(0) else {
                trace!(
                    remaining = self.parser.remaining(),
                    "ignoring unterminated tuple element name"
                );
                break;
            };

            let name = self.parser.read_utf8(length)?;
            self.parser.read_le::<u8>()?;

            if name.trim().is_empty() {
                names.push(None);
            } else {
                names.push(Some(name));
            }
        }

        Ok(names)
    }

    fn read_dynamic_flags(&mut self) -> Result<Vec<bool>> {
        let mut flags = Vec::with_capacity(self.parser.remaining() * 8);

        while self.parser.has_more_data() {
            let byte = self.parser.read_le::<u8>()?;
            for bit in 0..8 {
                flags.push(byte & (1 << bit) != 0);
            }
        }

        Ok(flags)
    }
}

/// Decode a tuple element names blob.
///
/// # Errors
/// See [`CustomDebugParser::parse_debug_info`].
pub fn parse_tuple_element_names(data: &[u8]) -> Result<Vec<Option<String>>> {
    CustomDebugParser::new(data, CustomDebugKind::TupleElementNames).read_tuple_element_names()
}

/// Decode a dynamic local variables blob into one flag per bit.
///
/// # Errors
/// See [`CustomDebugParser::parse_debug_info`].
pub fn parse_dynamic_local_variables(data: &[u8]) -> Result<Vec<bool>> {
    CustomDebugParser::new(data, CustomDebugKind::DynamicLocalVariables).read_dynamic_flags()
}

/// Parse a custom debug information blob according to its kind.
///
/// # Arguments
/// * `data` - The blob data to parse
/// * `kind` - The debug information kind that determines the blob format
///
/// # Errors
/// See [`CustomDebugParser::parse_debug_info`].
pub fn parse_custom_debug_blob(data: &[u8], kind: CustomDebugKind) -> Result<CustomDebugInfo> {
    let mut parser = CustomDebugParser::new(data, kind);
    parser.parse_debug_info()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tuple_names_with_unnamed_element() {
        let names = parse_tuple_element_names(b"a\0\0b\0").unwrap();
        assert_eq!(
            names,
            vec![Some("a".to_string()), None, Some("b".to_string())]
        );
    }

    #[test]
    fn tuple_names_whitespace_is_unnamed() {
        let names = parse_tuple_element_names(b"  \0\t\0x\0").unwrap();
        assert_eq!(names, vec![None, None, Some("x".to_string())]);
    }

    #[test]
    fn tuple_names_unterminated_tail_is_ignored() {
        let names = parse_tuple_element_names(b"first\0second").unwrap();
        assert_eq!(names, vec![Some("first".to_string())]);
    }

    #[test]
    fn tuple_names_invalid_utf8_is_replaced() {
        let names = parse_tuple_element_names(&[0x61, 0xFF, 0x00]).unwrap();
        assert_eq!(names, vec![Some("a\u{FFFD}".to_string())]);
    }

    #[test]
    fn tuple_names_empty_blob() {
        assert!(parse_tuple_element_names(&[]).unwrap().is_empty());
    }

    #[test]
    fn dynamic_flags_lsb_first() {
        let flags = parse_dynamic_local_variables(&[0x05]).unwrap();
        assert_eq!(
            flags,
            vec![true, false, true, false, false, false, false, false]
        );
    }

    #[test]
    fn dynamic_flags_multiple_bytes() {
        let flags = parse_dynamic_local_variables(&[0x00, 0x80]).unwrap();
        assert_eq!(flags.len(), 16);
        assert!(flags[..15].iter().all(|flag| !flag));
        assert!(flags[15]);
    }

    #[test]
    fn parse_source_link() {
        let info = parse_custom_debug_blob(b"{\"documents\":{}}", CustomDebugKind::SourceLink)
            .unwrap();
        assert_eq!(
            info,
            CustomDebugInfo::SourceLink {
                document: "{\"documents\":{}}".to_string()
            }
        );
    }

    #[test]
    fn parse_raw_kinds() {
        let data = [0x01, 0x02, 0x03];
        let info = parse_custom_debug_blob(&data, CustomDebugKind::EncLocalSlotMap).unwrap();
        assert_eq!(
            info,
            CustomDebugInfo::Raw {
                kind: CustomDebugKind::EncLocalSlotMap,
                data: data.to_vec(),
            }
        );

        let unknown = CustomDebugKind::Unknown(uguid::guid!("00000000-0000-0000-0000-000000000001"));
        let info = parse_custom_debug_blob(&[], unknown).unwrap();
        assert_eq!(info.kind(), unknown);
    }
}
