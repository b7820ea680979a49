//! Portable PDB debug table representation.
//!
//! This module holds the table-level view of a Portable PDB: typed handles and tokens, the
//! table rows, the blob formats stored in them and the [`accessor::MetadataAccessor`] seam
//! the debug information providers read through.
//!
//! # Key Components
//!
//! - [`token`] - Metadata table row references
//! - [`handles`] - Typed, never-nil handles to debug table rows
//! - [`tables`] - Rows of the Document, MethodDebugInformation, LocalScope, LocalVariable and
//!   CustomDebugInformation tables
//! - [`sequencepoints`] - Sequence points blob decoding
//! - [`customdebuginformation`] - Custom debug information kinds and blob decoding
//! - [`accessor`] - The [`accessor::MetadataAccessor`] trait
//! - [`pdb`] - In-memory tables implementing the accessor
//!
//! # Examples
//!
//! ```rust
//! use pdbscope::prelude::*;
//!
//! let mut builder = PdbMetadataBuilder::new();
//! let method = MethodHandle::new(1).unwrap();
//! builder.local_scope(method, 0, 8, &[(0, "result")])?;
//! let metadata = builder.build();
//!
//! let scopes = metadata.local_scopes(method)?;
//! let variables = metadata.local_variables(scopes[0])?;
//! assert_eq!(metadata.local_variable(variables[0])?.name, "result");
//! # Ok::<(), pdbscope::Error>(())
//! ```

/// The accessor trait through which debug tables are read
pub mod accessor;
/// In-memory blob storage
pub mod blobs;
/// Custom debug information kinds and blob decoding
pub mod customdebuginformation;
/// Typed table row handles
pub mod handles;
/// In-memory debug tables and their builder
pub mod pdb;
/// Sequence points blob decoding
pub mod sequencepoints;
/// Debug table rows
pub mod tables;
/// Commonly used metadata token type
pub mod token;
