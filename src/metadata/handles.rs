//! Typed, never-nil handles to rows of the debug information tables.
//!
//! Every handle wraps a [`Token`] whose table byte is fixed by the handle type and whose row id
//! is non-zero. Absence is expressed as `Option<Handle>`, so a handle that was not found can
//! never compare equal to anything by accident.
//!
//! # Examples
//!
//! ```rust
//! use pdbscope::metadata::handles::LocalVariableHandle;
//! use pdbscope::metadata::token::Token;
//!
//! let handle = LocalVariableHandle::new(3).unwrap();
//! assert_eq!(handle.token(), Token::new(0x3300_0003));
//!
//! assert!(LocalVariableHandle::new(0).is_none());
//! assert!(LocalVariableHandle::try_from(Token::new(0x0600_0003)).is_err());
//! ```

use crate::{
    metadata::{tables::TableId, token::Token},
    Error,
};

macro_rules! define_handle {
    ($(#[$meta:meta])* $name:ident, $table:expr) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
        pub struct $name(Token);

        impl $name {
            /// Table this handle points into.
            pub const TABLE: TableId = $table;

            /// Create a handle for the 1-based `rid`.
            ///
            /// Returns `None` for the nil row id 0 and for ids that do not fit in a token.
            #[must_use]
            pub fn new(rid: u32) -> Option<Self> {
                if rid == 0 || rid > 0x00FF_FFFF {
                    return None;
                }
                Some($name(Token::from_parts(Self::TABLE, rid)))
            }

            /// The underlying metadata token.
            #[must_use]
            pub fn token(&self) -> Token {
                self.0
            }

            /// 1-based row id.
            #[must_use]
            pub fn rid(&self) -> u32 {
                self.0.row()
            }
        }

        impl TryFrom<Token> for $name {
            type Error = Error;

            fn try_from(token: Token) -> Result<Self, Self::Error> {
                if token.table_id() != Some(Self::TABLE) || token.is_nil() {
                    return Err(Error::InvalidHandle(token));
                }
                Ok($name(token))
            }
        }

        impl From<$name> for Token {
            fn from(handle: $name) -> Self {
                handle.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}#{}", Self::TABLE, self.rid())
            }
        }
    };
}

define_handle!(
    /// A method definition. Also identifies the method's `MethodDebugInformation` row, which
    /// shares the `MethodDef` row id.
    MethodHandle,
    TableId::MethodDef
);

define_handle!(
    /// A row of the `Document` table.
    DocumentHandle,
    TableId::Document
);

define_handle!(
    /// A row of the `LocalScope` table.
    LocalScopeHandle,
    TableId::LocalScope
);

define_handle!(
    /// A row of the `LocalVariable` table.
    LocalVariableHandle,
    TableId::LocalVariable
);

define_handle!(
    /// A row of the `CustomDebugInformation` table.
    CustomDebugInformationHandle,
    TableId::CustomDebugInformation
);
