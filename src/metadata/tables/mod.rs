//! Portable PDB table rows held by [`crate::metadata::pdb::PdbMetadata`].
//!
//! Each table is stored as a [`crossbeam_skiplist::SkipMap`] keyed by row token, so iteration
//! yields rows in table order and lookups by handle are logarithmic. Rows are shared through
//! [`std::sync::Arc`] aliases (`...Rc`), following the dual map/reference-counted layout used
//! for all tables.
//!
//! # Key Components
//!
//! - [`Document`] - source document, name decoded by [`parse_document_name`]
//! - [`MethodDebugInformation`] - per-method sequence points blob
//! - [`LocalScope`] - IL range with a run of local variables
//! - [`LocalVariable`] - slot index and name
//! - [`CustomDebugInformation`] - GUID keyed extension blob
//! - [`TableId`] - table identifiers used in tokens

use crossbeam_skiplist::SkipMap;
use std::sync::Arc;

use crate::metadata::token::Token;

mod customdebuginformation;
mod document;
mod localscope;
mod localvariable;
mod methoddebuginformation;
mod types;

pub use customdebuginformation::*;
pub use document::*;
pub use localscope::*;
pub use localvariable::*;
pub use methoddebuginformation::*;
pub use types::*;

/// A reference-counted pointer to a [`Document`]
pub type DocumentRc = Arc<Document>;
/// A map that holds the mapping of [`Token`] to [`Document`]
pub type DocumentMap = SkipMap<Token, DocumentRc>;

/// A reference-counted pointer to a [`MethodDebugInformation`]
pub type MethodDebugInformationRc = Arc<MethodDebugInformation>;
/// A map that holds the mapping of [`Token`] to [`MethodDebugInformation`]
pub type MethodDebugInformationMap = SkipMap<Token, MethodDebugInformationRc>;

/// A reference-counted pointer to a [`LocalScope`]
pub type LocalScopeRc = Arc<LocalScope>;
/// A map that holds the mapping of [`Token`] to [`LocalScope`]
pub type LocalScopeMap = SkipMap<Token, LocalScopeRc>;

/// A reference-counted pointer to a [`LocalVariable`]
pub type LocalVariableRc = Arc<LocalVariable>;
/// A map that holds the mapping of [`Token`] to [`LocalVariable`]
pub type LocalVariableMap = SkipMap<Token, LocalVariableRc>;

/// A reference-counted pointer to a [`CustomDebugInformation`]
pub type CustomDebugInformationRc = Arc<CustomDebugInformation>;
/// A map that holds the mapping of [`Token`] to [`CustomDebugInformation`]
pub type CustomDebugInformationMap = SkipMap<Token, CustomDebugInformationRc>;
