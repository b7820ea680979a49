//! Tuple element names and `dynamic` flags of local variables.
//!
//! Compilers record type facts that a local signature cannot carry as custom debug
//! information attached to the LocalVariable row:
//!
//! - *Tuple Element Names* (`ED9FDF71-8879-4747-8ED3-FE5EDE3CE710`): NUL-terminated UTF-8
//!   names of the tuple elements, empty for unnamed elements
//! - *Dynamic Local Variables* (`83C563C4-B4F3-47D5-B824-BA5441477EA8`): one bit per type
//!   node, set where the source declared `dynamic`
//!
//! Only the first record of each kind counts. The whole CustomDebugInformation table is
//! scanned since rows are not grouped by method.

use tracing::{debug, trace};

use crate::{
    debuginfo::{localscopes::LocalScopeIndexer, types::ExtraTypeInfo},
    metadata::{
        accessor::MetadataAccessor,
        customdebuginformation::{
            parse_dynamic_local_variables, parse_tuple_element_names, CustomDebugKind,
        },
        handles::MethodHandle,
        tables::TableId,
    },
    Result,
};

/// Decodes [`ExtraTypeInfo`] for local variable slots.
pub struct CustomDebugInfoDecoder<'a, A: ?Sized> {
    metadata: Option<&'a A>,
}

impl<'a, A: MetadataAccessor + ?Sized> CustomDebugInfoDecoder<'a, A> {
    /// Create a decoder. Without metadata every query finds nothing.
    #[must_use]
    pub fn new(metadata: Option<&'a A>) -> Self {
        CustomDebugInfoDecoder { metadata }
    }

    /// Extra type info of the first variable of `method` declared for slot `index`.
    ///
    /// Returns `None` if there is no metadata, no such variable, or no record of either kind
    /// attached to it.
    ///
    /// # Errors
    /// Propagates rows that cannot be resolved and malformed blobs.
    pub fn try_get_extra_type_info(
        &self,
        method: MethodHandle,
        index: u16,
    ) -> Result<Option<ExtraTypeInfo>> {
        let Some(metadata) = self.metadata else {
            return Ok(None);
        };

        let Some(variable) = LocalScopeIndexer::new(metadata).find_local_variable(method, index)?
        else {
            return Ok(None);
        };
        let target = variable.token();

        let mut info = ExtraTypeInfo::default();
        for handle in metadata.custom_debug_information()? {
            let record = metadata.custom_debug_record(handle)?;

            if record.parent_table() != Some(TableId::LocalVariable)
                || record.parent != target
                || record.value.is_empty()
            {
                continue;
            }

            let Some(kind) = record.debug_kind() else {
                trace!(record = %handle, "skipping record without kind");
                continue;
            };

            match kind {
                CustomDebugKind::TupleElementNames => {
                    let decode = || parse_tuple_element_names(&record.value);
                    if info.set_tuple_element_names_with(decode)? {
                        debug!(%variable, "decoded tuple element names");
                    } else {
                        trace!(record = %handle, "ignoring repeated tuple element names");
                    }
                }
                CustomDebugKind::DynamicLocalVariables => {
                    let decode = || parse_dynamic_local_variables(&record.value);
                    if info.set_dynamic_flags_with(decode)? {
                        debug!(%variable, "decoded dynamic local flags");
                    } else {
                        trace!(record = %handle, "ignoring repeated dynamic local flags");
                    }
                }
                other => {
                    trace!(record = %handle, kind = ?other, "skipping unrelated record");
                    continue;
                }
            }

            if info.is_complete() {
                break;
            }
        }

        Ok((!info.is_empty()).then_some(info))
    }
}
