//! Snapshot store configuration

use std::path::{Path, PathBuf};

/// Default expected source identifier, matching the snapshot's
/// `map_metadata.source_name`.
pub const DEFAULT_SOURCE_NAME: &str = "GO";

/// Configuration for opening a GO snapshot
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Path to the snapshot file
    pub path: PathBuf,

    /// Source identifier callers must supply to `query`
    pub source_name: String,

    /// Busy timeout applied to each read session, in milliseconds
    pub busy_timeout_ms: u64,
}

impl StoreConfig {
    /// Configuration with defaults for the given snapshot path
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            source_name: DEFAULT_SOURCE_NAME.to_string(),
            busy_timeout_ms: 5000,
        }
    }

    /// Override the expected source identifier
    pub fn with_source_name(mut self, source_name: impl Into<String>) -> Self {
        self.source_name = source_name.into();
        self
    }
}
