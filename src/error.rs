use thiserror::Error;

use crate::metadata::token::Token;

macro_rules! malformed_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::Malformed {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::Malformed {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

macro_rules! out_of_bounds_error {
    () => {
        crate::Error::OutOfBounds {
            file: file!(),
            line: line!(),
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Only structural problems of the debug information container are reported as errors. A
/// method, slot or record that simply does not exist is never an error; such lookups return
/// `None` or an empty collection instead.
///
/// # Error Categories
///
/// - [`Error::Malformed`] - Corrupted or invalid container structure
/// - [`Error::OutOfBounds`] - Attempted to read beyond the end of a blob
/// - [`Error::InvalidHandle`] - A handle that does not resolve to a table row
/// - [`Error::Empty`] - Empty input provided where data was required
///
/// # Examples
///
/// ```rust
/// use pdbscope::{Error, prelude::*};
///
/// let metadata = PdbMetadataBuilder::new().build();
/// let provider = PortableDebugInfoProvider::new(metadata, DebugInfoConfig::default());
///
/// match provider.sequence_points(MethodHandle::new(1).unwrap()) {
///     Ok(points) => println!("{} sequence points", points.len()),
///     Err(Error::Malformed { message, file, line }) => {
///         eprintln!("Malformed PDB: {} ({}:{})", message, file, line);
///     }
///     Err(e) => eprintln!("Other error: {}", e),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// The container is damaged and could not be decoded.
    ///
    /// The error includes the source location where the malformation was detected for
    /// debugging purposes.
    ///
    /// # Fields
    ///
    /// * `message` - Detailed description of what was malformed
    /// * `file` - Source file where the error was detected
    /// * `line` - Source line where the error was detected
    #[error("Malformed - {file}:{line}: {message}")]
    Malformed {
        /// The message to be printed for the Malformed error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// An out of bound access was attempted while decoding a blob.
    ///
    /// Truncated blobs surface as this error instead of a panic.
    #[error("Out of Bound read would have occurred - {file}:{line}")]
    OutOfBounds {
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// A handle does not resolve to a row of its table.
    ///
    /// The associated [`Token`] identifies the handle that failed to resolve.
    #[error("Handle does not resolve to a valid row - {0}")]
    InvalidHandle(Token),

    /// Provided input was empty.
    #[error("Provided input was empty")]
    Empty,
}
