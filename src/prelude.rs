//! # pdbscope Prelude
//!
//! Re-exports of the types and traits needed to build debug tables and query them for
//! sequence points, local variable names and extra type info.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all pdbscope operations
pub use crate::Error;

/// The result type used throughout pdbscope
pub use crate::Result;

/// Low-level blob parsing
pub use crate::Parser;

// ================================================================================================
// Debug Information
// ================================================================================================

/// The capability a decompiler depends on, and its Portable PDB implementation
pub use crate::debuginfo::{DebugInfoConfig, DebugInfoProvider, PortableDebugInfoProvider};

/// Query results
pub use crate::debuginfo::{ExtraTypeInfo, SequencePoint, Variable};

// ================================================================================================
// Metadata
// ================================================================================================

/// Metadata token and table identifiers
pub use crate::metadata::{tables::TableId, token::Token};

/// Typed row handles
pub use crate::metadata::handles::{
    CustomDebugInformationHandle, DocumentHandle, LocalScopeHandle, LocalVariableHandle,
    MethodHandle,
};

/// Row access and the in-memory tables
pub use crate::metadata::{
    accessor::MetadataAccessor,
    pdb::{LocalScopeHandles, PdbMetadata, PdbMetadataBuilder},
};

/// Local variable flags
pub use crate::metadata::tables::LocalVariableAttributes;

/// Custom debug information kinds and decoded values
pub use crate::metadata::customdebuginformation::{debug_guids, CustomDebugInfo, CustomDebugKind};
