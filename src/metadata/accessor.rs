//! The metadata accessor seam between debug information decoding and container reading.
//!
//! [`MetadataAccessor`] resolves handles of the Portable PDB debug tables to rows and
//! decoded values. Everything in [`crate::debuginfo`] is written against this trait only, so
//! any reader able to produce table rows can back a
//! [`crate::debuginfo::PortableDebugInfoProvider`]. The crate ships one implementation,
//! [`crate::metadata::pdb::PdbMetadata`], which keeps rows in memory.
//!
//! Lookups that find nothing are not errors: a method without debug information has no
//! sequence points and no scopes. Handles that do not resolve to a row are reported as
//! [`crate::Error::InvalidHandle`], since a well-formed container never produces them.

use std::sync::Arc;

use crate::{
    metadata::{
        handles::{
            CustomDebugInformationHandle, DocumentHandle, LocalScopeHandle, LocalVariableHandle,
            MethodHandle,
        },
        sequencepoints::SequencePoints,
        tables::{CustomDebugInformationRc, LocalVariableRc},
    },
    Result,
};

/// Read access to the debug information tables of one module.
///
/// Implementations must yield rows in table order. Concurrent use of a provider requires the
/// implementation to tolerate concurrent reads.
pub trait MetadataAccessor {
    /// Decoded sequence points of `method`, in blob order. Empty if the method has none.
    ///
    /// # Errors
    /// Returns an error if the method's sequence points blob is malformed.
    fn sequence_points(&self, method: MethodHandle) -> Result<SequencePoints>;

    /// Local scopes of `method`, in table order.
    ///
    /// # Errors
    /// Returns an error if the scope table is inconsistent.
    fn local_scopes(&self, method: MethodHandle) -> Result<Vec<LocalScopeHandle>>;

    /// Local variables declared by `scope`, in table order.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidHandle`] for an unknown scope and
    /// [`crate::Error::Malformed`] if the scope's variable run is out of range.
    fn local_variables(&self, scope: LocalScopeHandle) -> Result<Vec<LocalVariableHandle>>;

    /// The LocalVariable row behind `handle`.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidHandle`] if no such row exists.
    fn local_variable(&self, handle: LocalVariableHandle) -> Result<LocalVariableRc>;

    /// Decoded name of `document`.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidHandle`] if no such row exists, or an error from
    /// decoding the name blob.
    fn document_name(&self, document: DocumentHandle) -> Result<String>;

    /// Every CustomDebugInformation row of the module, in table order.
    ///
    /// # Errors
    /// Returns an error if the table cannot be enumerated.
    fn custom_debug_information(&self) -> Result<Vec<CustomDebugInformationHandle>>;

    /// The CustomDebugInformation row behind `handle`.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidHandle`] if no such row exists.
    fn custom_debug_record(
        &self,
        handle: CustomDebugInformationHandle,
    ) -> Result<CustomDebugInformationRc>;
}

macro_rules! forward_accessor {
    ($($ty:ty),*) => {
        $(
            impl<T: MetadataAccessor + ?Sized> MetadataAccessor for $ty {
                fn sequence_points(&self, method: MethodHandle) -> Result<SequencePoints> {
                    (**self).sequence_points(method)
                }

                fn local_scopes(&self, method: MethodHandle) -> Result<Vec<LocalScopeHandle>> {
                    (**self).local_scopes(method)
                }

                fn local_variables(
                    &self,
                    scope: LocalScopeHandle,
                ) -> Result<Vec<LocalVariableHandle>> {
                    (**self).local_variables(scope)
                }

                fn local_variable(&self, handle: LocalVariableHandle) -> Result<LocalVariableRc> {
                    (**self).local_variable(handle)
                }

                fn document_name(&self, document: DocumentHandle) -> Result<String> {
                    (**self).document_name(document)
                }

                fn custom_debug_information(&self) -> Result<Vec<CustomDebugInformationHandle>> {
                    (**self).custom_debug_information()
                }

                fn custom_debug_record(
                    &self,
                    handle: CustomDebugInformationHandle,
                ) -> Result<CustomDebugInformationRc> {
                    (**self).custom_debug_record(handle)
                }
            }
        )*
    };
}

forward_accessor!(&T, Arc<T>, Box<T>);
