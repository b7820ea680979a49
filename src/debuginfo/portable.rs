//! The Portable PDB backed [`DebugInfoProvider`].

use dashmap::DashMap;
use tracing::{trace, warn};

use crate::{
    debuginfo::{
        config::DebugInfoConfig,
        extratypeinfo::CustomDebugInfoDecoder,
        localscopes::LocalScopeIndexer,
        sequencepoints::SequencePointExtractor,
        types::{ExtraTypeInfo, SequencePoint, Variable},
        DebugInfoProvider,
    },
    metadata::{
        accessor::MetadataAccessor,
        handles::{LocalVariableHandle, MethodHandle},
    },
    Result,
};

/// Debug information read from Portable PDB tables through a [`MetadataAccessor`].
///
/// The provider itself holds no mutable state apart from the optional extra type info cache,
/// which is internally synchronised. It is `Send` and `Sync` exactly when `A` is; sharing it
/// between threads is only sound if the accessor tolerates concurrent reads.
///
/// # Examples
///
/// ```rust
/// use pdbscope::prelude::*;
///
/// let mut builder = PdbMetadataBuilder::new();
/// let method = MethodHandle::new(1).unwrap();
/// builder.local_scope(method, 0, 8, &[(0, "total")])?;
///
/// let provider = PortableDebugInfoProvider::new(
///     builder.build(),
///     DebugInfoConfig::new().with_pdb_file_name("Program.pdb"),
/// );
///
/// assert_eq!(provider.description(), "Loaded from portable PDB: Program.pdb");
/// assert_eq!(provider.try_get_name(method, 0)?.as_deref(), Some("total"));
/// # Ok::<(), pdbscope::Error>(())
/// ```
pub struct PortableDebugInfoProvider<A> {
    metadata: Option<A>,
    config: DebugInfoConfig,
    extra_type_info: Option<DashMap<(MethodHandle, u16), Option<ExtraTypeInfo>>>,
}

impl<A: MetadataAccessor> PortableDebugInfoProvider<A> {
    /// Create a provider reading through `metadata`.
    #[must_use]
    pub fn new(metadata: A, config: DebugInfoConfig) -> Self {
        Self::with_metadata(Some(metadata), config)
    }

    /// Create a provider whose metadata is unavailable.
    ///
    /// Every query returns an empty result. The missing metadata is logged once, here.
    #[must_use]
    pub fn without_metadata(config: DebugInfoConfig) -> Self {
        warn!(
            pdb_file_name = config.pdb_file_name.as_deref(),
            "debug metadata unavailable"
        );
        Self::with_metadata(None, config)
    }

    fn with_metadata(metadata: Option<A>, config: DebugInfoConfig) -> Self {
        let extra_type_info = config.cache_extra_type_info.then(DashMap::new);
        PortableDebugInfoProvider {
            metadata,
            config,
            extra_type_info,
        }
    }

    /// The accessor, if available.
    #[must_use]
    pub fn metadata(&self) -> Option<&A> {
        self.metadata.as_ref()
    }

    /// The configuration this provider was created with.
    #[must_use]
    pub fn config(&self) -> &DebugInfoConfig {
        &self.config
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
        match &self.metadata {
            Some(metadata) => LocalScopeIndexer::new(metadata).find_local_variable(method, index),
            None => Ok(None),
        }
    }

    fn available(&self, operation: &str) -> Option<&A> {
        if self.metadata.is_none() {
            trace!(operation, "debug metadata unavailable");
        }
        self.metadata.as_ref()
    }

    fn decode_extra_type_info(
        &self,
        method: MethodHandle,
        index: u16,
    ) -> Result<Option<ExtraTypeInfo>> {
        CustomDebugInfoDecoder::new(self.metadata.as_ref()).try_get_extra_type_info(method, index)
    }
}

impl<A: MetadataAccessor> DebugInfoProvider for PortableDebugInfoProvider<A> {
    fn description(&self) -> String {
        match &self.config.pdb_file_name {
            Some(file_name) => format!("Loaded from portable PDB: {file_name}"),
            None => "Embedded in this assembly".to_string(),
        }
    }

    fn source_file_name(&self) -> Option<&str> {
        self.config.pdb_file_name.as_deref()
    }

    fn sequence_points(&self, method: MethodHandle) -> Result<Vec<SequencePoint>> {
        match self.available("sequence_points") {
            Some(metadata) => SequencePointExtractor::new(metadata).sequence_points(method),
            None => Ok(Vec::new()),
        }
    }

    fn variables(&self, method: MethodHandle) -> Result<Vec<Variable>> {
        match self.available("variables") {
            Some(metadata) => LocalScopeIndexer::new(metadata).variables(method),
            None => Ok(Vec::new()),
        }
    }

    fn try_get_name(&self, method: MethodHandle, index: u16) -> Result<Option<String>> {
        match self.available("try_get_name") {
            Some(metadata) => LocalScopeIndexer::new(metadata).try_get_name(method, index),
            None => Ok(None),
        }
    }

    fn try_get_extra_type_info(
        &self,
        method: MethodHandle,
        index: u16,
    ) -> Result<Option<ExtraTypeInfo>> {
        let Some(cache) = &self.extra_type_info else {
            return self.decode_extra_type_info(method, index);
        };

        let key = (method, index);
        if let Some(cached) = cache.get(&key) {
            trace!(%method, index, "extra type info cache hit");
            return Ok(cached.value().clone());
        }

        let decoded = self.decode_extra_type_info(method, index)?;
        Ok(cache.entry(key).or_insert(decoded).value().clone())
    }
}
