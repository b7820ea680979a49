//! Configuration for debug information providers.

/// Configuration for [`crate::debuginfo::PortableDebugInfoProvider`].
///
/// # Examples
///
/// ```rust
/// use pdbscope::debuginfo::DebugInfoConfig;
///
/// let config = DebugInfoConfig::new()
///     .with_pdb_file_name("Program.pdb")
///     .with_extra_type_info_cache(true);
///
/// assert!(!config.is_embedded());
/// assert!(config.cache_extra_type_info);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DebugInfoConfig {
    /// File the debug information was loaded from, `None` if it is embedded in the module
    /// (default: `None`).
    pub pdb_file_name: Option<String>,

    /// Keep the result of every extra type info query per (method, slot) and answer repeated
    /// queries from it (default: `false`).
    pub cache_extra_type_info: bool,
}

impl DebugInfoConfig {
    /// Create a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the file the debug information was loaded from.
    #[must_use]
    pub fn with_pdb_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.pdb_file_name = Some(file_name.into());
        self
    }

    /// Enable or disable the extra type info cache.
    #[must_use]
    pub fn with_extra_type_info_cache(mut self, enable: bool) -> Self {
        self.cache_extra_type_info = enable;
        self
    }

    /// `true` if no external file backs the debug information.
    #[must_use]
    pub fn is_embedded(&self) -> bool {
        self.pdb_file_name.is_none()
    }
}
