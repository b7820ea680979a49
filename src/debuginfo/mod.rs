//! Source level debug information for decompiled methods.
//!
//! This module answers the questions a decompiler asks about a method: which source region
//! an IL offset belongs to, what its local variable slots are called, and which tuple element
//! names and `dynamic` flags their types carry.
//!
//! # Architecture
//!
//! [`DebugInfoProvider`] is the capability the decompiler depends on. Its one implementation
//! here, [`PortableDebugInfoProvider`], reads Portable PDB tables through a
//! [`crate::metadata::accessor::MetadataAccessor`] and delegates each query to one of three
//! independent components:
//!
//! - [`SequencePointExtractor`] - sequence points with resolved document names
//! - [`LocalScopeIndexer`] - local variable names per slot
//! - [`CustomDebugInfoDecoder`] - [`ExtraTypeInfo`] from custom debug information
//!
//! # Examples
//!
//! ```rust
//! use pdbscope::prelude::*;
//!
//! let mut builder = PdbMetadataBuilder::new();
//! let method = MethodHandle::new(1).unwrap();
//! let document = builder.document("/src/Program.cs")?;
//! builder.method_debug_information(method, Some(document), &[0x00, 0x00, 0x00, 0x04, 0x03, 0x01]);
//!
//! let provider = PortableDebugInfoProvider::new(builder.build(), DebugInfoConfig::default());
//! let points = provider.sequence_points(method)?;
//!
//! assert_eq!(points[0].start_line, 3);
//! assert_eq!(points[0].document_url, "/src/Program.cs");
//! # Ok::<(), pdbscope::Error>(())
//! ```

mod config;
mod extratypeinfo;
mod localscopes;
mod portable;
mod sequencepoints;
mod types;

pub use config::DebugInfoConfig;
pub use extratypeinfo::CustomDebugInfoDecoder;
pub use localscopes::LocalScopeIndexer;
pub use portable::PortableDebugInfoProvider;
pub use sequencepoints::SequencePointExtractor;
pub use types::{ExtraTypeInfo, SequencePoint, Variable};

use crate::{metadata::handles::MethodHandle, Result};

/// Debug information about the methods of one module.
///
/// "Not found" is never an error: a method or slot without information yields an empty
/// result. Errors report debug information that is structurally broken.
pub trait DebugInfoProvider {
    /// Human readable origin of the debug information.
    fn description(&self) -> String;

    /// File the debug information was loaded from, `None` if it is embedded in the module.
    fn source_file_name(&self) -> Option<&str>;

    /// Sequence points of `method`, in the order they are stored.
    ///
    /// # Errors
    /// Returns an error if the method's debug information is malformed.
    fn sequence_points(&self, method: MethodHandle) -> Result<Vec<SequencePoint>>;

    /// Local variables declared by the scopes of `method`, duplicated slots included.
    ///
    /// # Errors
    /// Returns an error if the method's scopes are malformed.
    fn variables(&self, method: MethodHandle) -> Result<Vec<Variable>>;

    /// Name of the first variable of `method` declared for slot `index`.
    ///
    /// # Errors
    /// Returns an error if the method's scopes are malformed.
    fn try_get_name(&self, method: MethodHandle, index: u16) -> Result<Option<String>>;

    /// Tuple element names and `dynamic` flags of the variable in slot `index`.
    ///
    /// # Errors
    /// Returns an error if the method's scopes or the variable's custom debug information
    /// are malformed.
    fn try_get_extra_type_info(
        &self,
        method: MethodHandle,
        index: u16,
    ) -> Result<Option<ExtraTypeInfo>>;
}
