// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # pdbscope
//!
//! Source level debug information for .NET decompilers, read from Portable PDB debug tables.
//!
//! `pdbscope` maps IL offsets of method bodies back to source regions, recovers the names of
//! local variable slots, and decodes the tuple element names and `dynamic` flags compilers
//! store as custom debug information. It works on the table level: rows are supplied through
//! the [`metadata::accessor::MetadataAccessor`] trait, for which the crate provides the
//! in-memory [`metadata::pdb::PdbMetadata`].
//!
//! ## Features
//!
//! - **Sequence points** - full decoding of the sequence points blob, including document
//!   records and hidden points
//! - **Local variables** - scope walking with first-match slot lookups
//! - **Custom debug information** - classification of all well-known kinds and decoding of
//!   tuple element names and dynamic local flags
//! - **Optional caching** - per (method, slot) cache of extra type info
//!
//! ## Quick Start
//!
//! ```rust
//! use pdbscope::prelude::*;
//!
//! let mut builder = PdbMetadataBuilder::new();
//! let method = MethodHandle::new(1).unwrap();
//! let scope = builder.local_scope(method, 0, 32, &[(0, "pair")])?;
//! builder.custom_debug_information(
//!     scope.variables[0].token(),
//!     Some(debug_guids::TUPLE_ELEMENT_NAMES),
//!     b"Key\0Value\0",
//! )?;
//!
//! let provider = PortableDebugInfoProvider::new(builder.build(), DebugInfoConfig::default());
//!
//! assert_eq!(provider.try_get_name(method, 0)?.as_deref(), Some("pair"));
//! let info = provider.try_get_extra_type_info(method, 0)?.unwrap();
//! assert_eq!(info.tuple_element_names().unwrap().len(), 2);
//! # Ok::<(), pdbscope::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`prelude`] - Convenient re-exports of commonly used types and traits
//! - [`debuginfo`] - The [`debuginfo::DebugInfoProvider`] capability and its Portable PDB
//!   implementation
//! - [`metadata`] - Debug table rows, handles, blob formats and the accessor trait
//! - [`Error`] and [`Result`] - Error handling
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events and never installs a subscriber.

#[macro_use]
pub(crate) mod error;
pub(crate) mod file;

/// Shared functionality which is used in unit- and integration-tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use pdbscope::prelude::*;
///
/// let provider = PortableDebugInfoProvider::new(
///     PdbMetadataBuilder::new().build(),
///     DebugInfoConfig::default(),
/// );
/// assert_eq!(provider.description(), "Embedded in this assembly");
/// ```
pub mod prelude;

/// Sequence points, local variable names and extra type info per method
pub mod debuginfo;

/// Portable PDB debug tables and their blob formats
pub mod metadata;

/// `pdbscope` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `pdbscope` Error type
///
/// Structural problems of debug information; lookups that find nothing are not errors.
pub use error::Error;

/// Cursor over a byte buffer, used by every blob decoder of this crate.
///
/// # Example
///
/// ```rust
/// use pdbscope::Parser;
///
/// let mut parser = Parser::new(&[0x80, 0x80, 0x7B]);
/// assert_eq!(parser.read_compressed_uint()?, 0x80);
/// assert_eq!(parser.read_compressed_int()?, -3);
/// # Ok::<(), pdbscope::Error>(())
/// ```
pub use file::parser::Parser;

/// ECMA-335 compressed integer encoders, the inverse of the [`Parser`] reads.
///
/// # Example
///
/// ```rust
/// use pdbscope::{write_compressed_int, write_compressed_uint};
///
/// let mut blob = Vec::new();
/// write_compressed_uint(0x80, &mut blob)?;
/// write_compressed_int(-3, &mut blob)?;
/// assert_eq!(blob, [0x80, 0x80, 0x7B]);
///
/// assert!(write_compressed_uint(0x2000_0000, &mut blob).is_err());
/// # Ok::<(), pdbscope::Error>(())
/// ```
pub use file::io::{write_compressed_int, write_compressed_uint};
