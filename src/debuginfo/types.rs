//! Values returned by debug information providers.

use crate::{metadata::sequencepoints::HIDDEN_LINE, Result};

/// Maps an IL offset of a method body to a region of a source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequencePoint {
    /// IL offset the region starts at
    pub offset: u32,
    /// First line of the region
    pub start_line: u32,
    /// First column of the region
    pub start_column: u16,
    /// Last line of the region
    pub end_line: u32,
    /// Column just past the region
    pub end_column: u16,
    /// Name of the source document, empty if the point has no document
    pub document_url: String,
}

impl SequencePoint {
    /// `true` if the IL range is hidden from the debugger.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.start_line == HIDDEN_LINE
    }
}

/// A named local variable slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    /// Slot index in the method's local signature
    pub index: u16,
    /// Declared name
    pub name: String,
}

/// Type facts about a local variable that its signature cannot express.
///
/// Each field is written at most once. The first record that supplies a value wins; later
/// values for the same field are not even decoded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtraTypeInfo {
    tuple_element_names: Option<Vec<Option<String>>>,
    dynamic_flags: Option<Vec<bool>>,
}

fn set_if_unset<T>(slot: &mut Option<T>, decode: impl FnOnce() -> Result<T>) -> Result<bool> {
    if slot.is_some() {
        return Ok(false);
    }

    *slot = Some(decode()?);
    Ok(true)
}

impl ExtraTypeInfo {
    /// Tuple element names of the variable's type, `None` entries for unnamed elements.
    #[must_use]
    pub fn tuple_element_names(&self) -> Option<&[Option<String>]> {
        self.tuple_element_names.as_deref()
    }

    /// `dynamic` flags of the variable's type.
    #[must_use]
    pub fn dynamic_flags(&self) -> Option<&[bool]> {
        self.dynamic_flags.as_deref()
    }

    /// Set the tuple element names from `decode` unless they are already set.
    ///
    /// Returns `true` if the names were set by this call.
    ///
    /// # Errors
    /// Propagates the error of `decode`; the field stays unset.
    pub fn set_tuple_element_names_with(
        &mut self,
        decode: impl FnOnce() -> Result<Vec<Option<String>>>,
    ) -> Result<bool> {
        set_if_unset(&mut self.tuple_element_names, decode)
    }

    /// Set the dynamic flags from `decode` unless they are already set.
    ///
    /// Returns `true` if the flags were set by this call.
    ///
    /// # Errors
    /// Propagates the error of `decode`; the field stays unset.
    pub fn set_dynamic_flags_with(
        &mut self,
        decode: impl FnOnce() -> Result<Vec<bool>>,
    ) -> Result<bool> {
        set_if_unset(&mut self.dynamic_flags, decode)
    }

    /// `true` once both fields are set.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.tuple_element_names.is_some() && self.dynamic_flags.is_some()
    }

    /// `true` while neither field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tuple_element_names.is_none() && self.dynamic_flags.is_none()
    }
}
