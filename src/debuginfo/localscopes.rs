//! Local variable names from the local scopes of a method.
//!
//! Scopes are walked in accessor order and the variables of each scope in declaration order.
//! The same slot index may be declared by several scopes; [`LocalScopeIndexer::variables`]
//! keeps every declaration while the slot lookups stop at the first one.

use tracing::trace;

use crate::{
    debuginfo::types::Variable,
    metadata::{
        accessor::MetadataAccessor,
        handles::{LocalVariableHandle, MethodHandle},
        tables::LocalVariableRc,
    },
    Result,
};

/// Answers local variable queries for methods.
pub struct LocalScopeIndexer<'a, A: ?Sized> {
    metadata: &'a A,
}

impl<'a, A: MetadataAccessor + ?Sized> LocalScopeIndexer<'a, A> {
    /// Create an indexer reading through `metadata`.
    #[must_use]
    pub fn new(metadata: &'a A) -> Self {
        LocalScopeIndexer { metadata }
    }

    /// Every variable declared by the scopes of `method`, duplicates included.
    ///
    /// # Errors
    /// Propagates scope and variable rows that cannot be resolved.
    pub fn variables(&self, method: MethodHandle) -> Result<Vec<Variable>> {
        let mut variables = Vec::new();

        for scope in self.metadata.local_scopes(method)? {
            for handle in self.metadata.local_variables(scope)? {
                let variable = self.metadata.local_variable(handle)?;
                variables.push(Variable {
                    index: variable.index,
                    name: variable.name.clone(),
                });
            }
        }

        Ok(variables)
    }

    /// Name of the first variable of `method` declared for slot `index`.
    ///
    /// # Errors
    /// Propagates scope and variable rows that cannot be resolved.
    pub fn try_get_name(&self, method: MethodHandle, index: u16) -> Result<Option<String>> {
        Ok(self
            .first_match(method, index)?
            .map(|(_, variable)| variable.name.clone()))
    }

    /// Handle of the first variable of `method` declared for slot `index`.
    ///
    /// # Errors
    /// Propagates scope and variable rows that cannot be resolved.
    pub fn find_local_variable(
        &self,
        method: MethodHandle,
        index: u16,
    ) -> Result<Option<LocalVariableHandle>> {
        Ok(self.first_match(method, index)?.map(|(handle, _)| handle))
    }

    fn first_match(
        &self,
        method: MethodHandle,
        index: u16,
    ) -> Result<Option<(LocalVariableHandle, LocalVariableRc)>> {
        for scope in self.metadata.local_scopes(method)? {
            for handle in self.metadata.local_variables(scope)? {
                let variable = self.metadata.local_variable(handle)?;
                if variable.index == index {
                    return Ok(Some((handle, variable)));
                }
            }
        }

        trace!(%method, index, "no local variable declared for slot");
        Ok(None)
    }
}
