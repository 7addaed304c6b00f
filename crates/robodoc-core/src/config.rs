//! Application configuration.
//!
//! Loaded from a JSON file. Every field has a default, so a missing file or
//! a partial file is fine.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::auth::DEFAULT_USERS_KEY;
use crate::catalog::{Catalog, CatalogResult};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
    /// JSON catalog replacing the compiled-in one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,
    #[serde(default = "AppConfig::default_log_filter")]
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
            analysis: AnalysisConfig::default(),
            catalog_path: None,
            log_filter: Self::default_log_filter(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct StorageConfig {
    #[serde(default = "StorageConfig::default_database_path")]
    pub database_path: PathBuf,
    #[serde(default = "StorageConfig::default_users_key")]
    pub users_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: Self::default_database_path(),
            users_key: Self::default_users_key(),
        }
    }
}

impl StorageConfig {
    fn default_database_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("robodoc")
            .join("robodoc.db")
    }

    fn default_users_key() -> String {
        DEFAULT_USERS_KEY.to_string()
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AnalysisConfig {
    /// Display delay before results are shown, in milliseconds
    #[serde(default = "AnalysisConfig::default_delay_ms")]
    pub delay_ms: u64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            delay_ms: Self::default_delay_ms(),
        }
    }
}

impl AnalysisConfig {
    const fn default_delay_ms() -> u64 {
        2000
    }
}

impl AppConfig {
    fn default_log_filter() -> String {
        "info".to_string()
    }

    /// Load configuration from `path`, falling back to defaults if the file
    /// does not exist.
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            info!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config at {}: {}", path.display(), e))?;

        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// The configured catalog, or the compiled-in one.
    pub fn catalog(&self) -> CatalogResult<Catalog> {
        match &self.catalog_path {
            Some(path) => Catalog::load(path),
            None => Ok(Catalog::builtin()),
        }
    }
}
