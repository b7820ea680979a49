//! In-memory Portable PDB debug tables.
//!
//! [`PdbMetadata`] holds already-decoded rows of the debug tables together with the blobs
//! they reference, and implements [`MetadataAccessor`] over them. It is populated through
//! [`PdbMetadataBuilder`], either by a container reader that decoded the tables or directly
//! by code that synthesises debug information.
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
//! let scope = builder.local_scope(method, 0, 16, &[(0, "count"), (1, "name")])?;
//!
//! let metadata = builder.build();
//! assert_eq!(metadata.document_name(document)?, "/src/Program.cs");
//! assert_eq!(metadata.local_variables(scope.scope)?, scope.variables);
//! # Ok::<(), pdbscope::Error>(())
//! ```

use std::sync::Arc;

use tracing::debug;

use crate::{
    file::io::write_compressed_uint,
    metadata::{
        accessor::MetadataAccessor,
        blobs::BlobHeap,
        handles::{
            CustomDebugInformationHandle, DocumentHandle, LocalScopeHandle, LocalVariableHandle,
            MethodHandle,
        },
        sequencepoints::SequencePoints,
        tables::{
            CustomDebugInformation, CustomDebugInformationMap, CustomDebugInformationRc, Document,
            DocumentMap, DocumentRc, LocalScope, LocalScopeMap, LocalScopeRc, LocalVariable,
            LocalVariableAttributes, LocalVariableMap, LocalVariableRc, MethodDebugInformation,
            MethodDebugInformationMap, MethodDebugInformationRc, TableId,
        },
        token::Token,
    },
    Error, Result,
};

/// Debug tables of one module, held in memory.
///
/// All tables are keyed by row token and iterate in row order. The type is `Send` and `Sync`
/// and tolerates concurrent reads.
#[derive(Default)]
pub struct PdbMetadata {
    blobs: BlobHeap,
    documents: DocumentMap,
    method_debug_information: MethodDebugInformationMap,
    local_scopes: LocalScopeMap,
    local_variables: LocalVariableMap,
    custom_debug_information: CustomDebugInformationMap,
}

impl PdbMetadata {
    /// Blobs referenced by document names.
    #[must_use]
    pub fn blobs(&self) -> &BlobHeap {
        &self.blobs
    }

    /// The Document row behind `handle`, if present.
    #[must_use]
    pub fn document(&self, handle: DocumentHandle) -> Option<DocumentRc> {
        self.documents
            .get(&handle.token())
            .map(|entry| entry.value().clone())
    }

    /// The MethodDebugInformation row of `method`, if present.
    #[must_use]
    pub fn method_debug_information(&self, method: MethodHandle) -> Option<MethodDebugInformationRc> {
        self.method_debug_information
            .get(&Token::from_parts(TableId::MethodDebugInformation, method.rid()))
            .map(|entry| entry.value().clone())
    }

    /// The LocalScope row behind `handle`, if present.
    #[must_use]
    pub fn local_scope(&self, handle: LocalScopeHandle) -> Option<LocalScopeRc> {
        self.local_scopes
            .get(&handle.token())
            .map(|entry| entry.value().clone())
    }

    /// Number of rows in the given table, 0 for tables this type does not hold.
    #[must_use]
    pub fn row_count(&self, table: TableId) -> usize {
        match table {
            TableId::Document => self.documents.len(),
            TableId::MethodDebugInformation => self.method_debug_information.len(),
            TableId::LocalScope => self.local_scopes.len(),
            TableId::LocalVariable => self.local_variables.len(),
            TableId::CustomDebugInformation => self.custom_debug_information.len(),
            _ => 0,
        }
    }

    fn local_variable_count(&self) -> Result<u32> {
        u32::try_from(self.local_variables.len())
            .map_err(|_| malformed_error!("LocalVariable table too large"))
    }
}

impl MetadataAccessor for PdbMetadata {
    fn sequence_points(&self, method: MethodHandle) -> Result<SequencePoints> {
        match self.method_debug_information(method) {
            Some(row) => row.decode_sequence_points(),
            None => Ok(SequencePoints::default()),
        }
    }

    fn local_scopes(&self, method: MethodHandle) -> Result<Vec<LocalScopeHandle>> {
        Ok(self
            .local_scopes
            .iter()
            .filter(|entry| entry.value().method == method)
            .filter_map(|entry| LocalScopeHandle::new(entry.value().rid))
            .collect())
    }

    fn local_variables(&self, scope: LocalScopeHandle) -> Result<Vec<LocalVariableHandle>> {
        let row = self
            .local_scope(scope)
            .ok_or(Error::InvalidHandle(scope.token()))?;

        let table_end = self.local_variable_count()? + 1;
        let start = row.variable_list;
        let end = match self
            .local_scopes
            .get(&Token::from_parts(TableId::LocalScope, scope.rid() + 1))
        {
            Some(next) => next.value().variable_list,
            None => table_end,
        };

        if start == 0 || start > end || end > table_end {
            return Err(malformed_error!(
                "Invalid variable list of {} - {}..{}",
                scope,
                start,
                end
            ));
        }

        Ok((start..end).filter_map(LocalVariableHandle::new).collect())
    }

    fn local_variable(&self, handle: LocalVariableHandle) -> Result<LocalVariableRc> {
        self.local_variables
            .get(&handle.token())
            .map(|entry| entry.value().clone())
            .ok_or(Error::InvalidHandle(handle.token()))
    }

    fn document_name(&self, document: DocumentHandle) -> Result<String> {
        self.document(document)
            .ok_or(Error::InvalidHandle(document.token()))?
            .resolve_name(&self.blobs)
    }

    fn custom_debug_information(&self) -> Result<Vec<CustomDebugInformationHandle>> {
        Ok(self
            .custom_debug_information
            .iter()
            .filter_map(|entry| CustomDebugInformationHandle::new(entry.value().rid))
            .collect())
    }

    fn custom_debug_record(
        &self,
        handle: CustomDebugInformationHandle,
    ) -> Result<CustomDebugInformationRc> {
        self.custom_debug_information
            .get(&handle.token())
            .map(|entry| entry.value().clone())
            .ok_or(Error::InvalidHandle(handle.token()))
    }
}

/// Handles created by [`PdbMetadataBuilder::local_scope`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalScopeHandles {
    /// The new scope
    pub scope: LocalScopeHandle,
    /// Its variables, in declaration order
    pub variables: Vec<LocalVariableHandle>,
}

/// Builder for [`PdbMetadata`].
///
/// Rows are appended in call order and receive consecutive row ids. Scopes own the variables
/// passed with them, so the variable runs of the LocalScope table stay contiguous.
#[derive(Default)]
pub struct PdbMetadataBuilder {
    metadata: PdbMetadata,
}

fn next_rid(len: usize) -> Result<u32> {
    u32::try_from(len + 1)
        .ok()
        .filter(|rid| *rid <= 0x00FF_FFFF)
        .ok_or_else(|| malformed_error!("Table row limit reached"))
}

fn path_separator(path: &str) -> u8 {
    let slashes = path.matches('/').count();
    let backslashes = path.matches('\\').count();

    match (slashes, backslashes) {
        (0, 0) => 0,
        (s, b) if s >= b => b'/',
        _ => b'\\',
    }
}

impl PdbMetadataBuilder {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        PdbMetadataBuilder::default()
    }

    /// Add a document named `path`.
    ///
    /// The name is stored in its encoded form: split at the separator that occurs most often
    /// (`/` on ties, none if the path contains neither `/` nor `\`), each part in the blob
    /// heap.
    ///
    /// # Errors
    /// Returns an error if the Document table is full.
    pub fn document(&mut self, path: &str) -> Result<DocumentHandle> {
        let separator = path_separator(path);

        let mut name = vec![separator];
        if separator == 0 {
            write_compressed_uint(self.metadata.blobs.add(path.as_bytes()), &mut name)?;
        } else {
            for part in path.split(char::from(separator)) {
                write_compressed_uint(self.metadata.blobs.add(part.as_bytes()), &mut name)?;
            }
        }

        self.document_with_name(name, None, Vec::new(), None)
    }

    /// Add a document from its raw columns.
    ///
    /// `name` is the encoded name blob; parts must already be present in the heap, see
    /// [`PdbMetadataBuilder::blob`].
    ///
    /// # Errors
    /// Returns an error if the Document table is full.
    pub fn document_with_name(
        &mut self,
        name: Vec<u8>,
        hash_algorithm: Option<uguid::Guid>,
        hash: Vec<u8>,
        language: Option<uguid::Guid>,
    ) -> Result<DocumentHandle> {
        let rid = next_rid(self.metadata.documents.len())?;
        let token = Token::from_parts(TableId::Document, rid);

        self.metadata.documents.insert(
            token,
            Arc::new(Document {
                rid,
                token,
                name,
                hash_algorithm,
                hash,
                language,
            }),
        );

        DocumentHandle::new(rid).ok_or(Error::InvalidHandle(token))
    }

    /// Store `data` in the blob heap and return its index.
    pub fn blob(&mut self, data: &[u8]) -> u32 {
        self.metadata.blobs.add(data)
    }

    /// Set the MethodDebugInformation row of `method`.
    ///
    /// `sequence_points` is the encoded sequence points blob; an empty blob means the method
    /// has none. A second call for the same method replaces the row.
    pub fn method_debug_information(
        &mut self,
        method: MethodHandle,
        document: Option<DocumentHandle>,
        sequence_points: &[u8],
    ) {
        let token = Token::from_parts(TableId::MethodDebugInformation, method.rid());
        let sequence_points = if sequence_points.is_empty() {
            None
        } else {
            Some(sequence_points.to_vec())
        };

        self.metadata.method_debug_information.insert(
            token,
            Arc::new(MethodDebugInformation {
                rid: method.rid(),
                token,
                document,
                sequence_points,
            }),
        );
    }

    /// Add a local scope of `method` declaring `variables` as `(slot index, name)` pairs.
    ///
    /// Scopes are not re-sorted. They are traversed in the order they were added, so callers
    /// mirroring a real PDB should add them sorted by method, then start offset.
    ///
    /// # Errors
    /// Returns an error if the LocalScope or LocalVariable table is full.
    pub fn local_scope(
        &mut self,
        method: MethodHandle,
        start_offset: u32,
        length: u32,
        variables: &[(u16, &str)],
    ) -> Result<LocalScopeHandles> {
        let variables: Vec<_> = variables
            .iter()
            .map(|(index, name)| (LocalVariableAttributes::empty(), *index, *name))
            .collect();
        self.local_scope_with_attributes(method, start_offset, length, &variables)
    }

    /// Add a local scope whose variables carry explicit attributes.
    ///
    /// # Errors
    /// Returns an error if the LocalScope or LocalVariable table is full.
    pub fn local_scope_with_attributes(
        &mut self,
        method: MethodHandle,
        start_offset: u32,
        length: u32,
        variables: &[(LocalVariableAttributes, u16, &str)],
    ) -> Result<LocalScopeHandles> {
        let rid = next_rid(self.metadata.local_scopes.len())?;
        let token = Token::from_parts(TableId::LocalScope, rid);
        let variable_list = next_rid(self.metadata.local_variables.len())?;

        let mut handles = Vec::with_capacity(variables.len());
        for (attributes, index, name) in variables {
            let variable_rid = next_rid(self.metadata.local_variables.len())?;
            let variable_token = Token::from_parts(TableId::LocalVariable, variable_rid);

            self.metadata.local_variables.insert(
                variable_token,
                Arc::new(LocalVariable {
                    rid: variable_rid,
                    token: variable_token,
                    attributes: *attributes,
                    index: *index,
                    name: (*name).to_string(),
                }),
            );
            handles.push(
                LocalVariableHandle::new(variable_rid)
                    .ok_or(Error::InvalidHandle(variable_token))?,
            );
        }

        self.metadata.local_scopes.insert(
            token,
            Arc::new(LocalScope {
                rid,
                token,
                method,
                import_scope: 0,
                variable_list,
                constant_list: 0,
                start_offset,
                length,
            }),
        );

        Ok(LocalScopeHandles {
            scope: LocalScopeHandle::new(rid).ok_or(Error::InvalidHandle(token))?,
            variables: handles,
        })
    }

    /// Attach custom debug information to `parent`.
    ///
    /// # Errors
    /// Returns an error if the CustomDebugInformation table is full.
    pub fn custom_debug_information(
        &mut self,
        parent: Token,
        kind: Option<uguid::Guid>,
        value: &[u8],
    ) -> Result<CustomDebugInformationHandle> {
        let rid = next_rid(self.metadata.custom_debug_information.len())?;
        let token = Token::from_parts(TableId::CustomDebugInformation, rid);

        self.metadata.custom_debug_information.insert(
            token,
            Arc::new(CustomDebugInformation {
                rid,
                token,
                parent,
                kind,
                value: value.to_vec(),
            }),
        );

        CustomDebugInformationHandle::new(rid).ok_or(Error::InvalidHandle(token))
    }

    /// Finish building.
    #[must_use]
    pub fn build(self) -> PdbMetadata {
        debug!(
            documents = self.metadata.documents.len(),
            methods = self.metadata.method_debug_information.len(),
            scopes = self.metadata.local_scopes.len(),
            variables = self.metadata.local_variables.len(),
            custom_debug_information = self.metadata.custom_debug_information.len(),
            "built portable pdb metadata"
        );
        self.metadata
    }
}
