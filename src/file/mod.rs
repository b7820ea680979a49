//! Bounds-checked binary reading for debug information blobs.
//!
//! - [`crate::file::parser::Parser`] - cursor used by all blob decoders
//! - [`crate::file::io`] - little-endian primitive reads backing the parser

pub mod io;
pub mod parser;
