//! Custom debug information parsing for Portable PDB format.
//!
//! Custom debug information rows attach compiler-specific data to metadata entities. Each row
//! carries a GUID naming the format and a blob holding the data. This module classifies the
//! GUIDs and decodes the blobs of the kinds consumers of local variable information need.
//!
//! # Key Components
//!
//! - [`CustomDebugKind`] - GUID-based type identification
//! - [`CustomDebugInfo`] - Parsed debug information variants
//! - [`parse_custom_debug_blob`] - Main parsing function
//! - [`parse_tuple_element_names`] and [`parse_dynamic_local_variables`] - the per-local kinds
//!
//! # Examples
//!
//! ```rust
//! use pdbscope::metadata::customdebuginformation::{parse_custom_debug_blob, CustomDebugInfo, CustomDebugKind};
//!
//! let debug_info = parse_custom_debug_blob(&[0x05], CustomDebugKind::DynamicLocalVariables)?;
//! match debug_info {
//!     CustomDebugInfo::DynamicLocalVariables { flags } => {
//!         assert_eq!(flags.len(), 8);
//!         assert!(flags[0] && flags[2]);
//!     }
//!     other => panic!("unexpected {:?}", other),
//! }
//! # Ok::<(), pdbscope::Error>(())
//! ```
//!
//! # References
//!
//! - [Portable PDB Format - CustomDebugInformation](https://github.com/dotnet/runtime/blob/main/docs/design/specs/PortablePdb-Metadata.md#customdebuginformation-table-0x37)

mod parser;
mod types;

pub use parser::{
    parse_custom_debug_blob, parse_dynamic_local_variables, parse_tuple_element_names,
    CustomDebugParser,
};
pub use types::{debug_guids, CustomDebugInfo, CustomDebugKind};
