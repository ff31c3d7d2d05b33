//! Storage configuration.

use std::path::PathBuf;

use serde::Deserialize;

use crate::error::{ConfigError, Result};

/// Where persisted carts and favorites live.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StorageConfig {
    /// Data directory. Defaults to the platform data directory plus `basin`.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

impl StorageConfig {
    /// Resolve the data directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoDataDir`] when no directory is configured and
    /// the platform has no data directory.
    pub fn resolve_data_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        dirs::data_dir()
            .map(|dir| dir.join("basin"))
            .ok_or_else(|| ConfigError::NoDataDir.into())
    }
}
