//! Store configuration
//!
//! Kept as JSON at `.store/config.json`. A missing file means defaults.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Name of the config file inside the metadata directory
pub const CONFIG_FILE: &str = "config.json";

/// Per-store settings
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// zlib level used when writing objects (0-9)
    #[serde(default = "default_compression_level")]
    pub compression_level: u32,
    /// Branch named by the HEAD file at init
    #[serde(default = "default_branch")]
    pub default_branch: String,
}

fn default_compression_level() -> u32 {
    6
}

fn default_branch() -> String {
    "main".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            compression_level: default_compression_level(),
            default_branch: default_branch(),
        }
    }
}

impl StoreConfig {
    /// Load the config from a metadata directory
    pub fn load(meta_dir: &Path) -> Result<Self> {
        let path = meta_dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path)
            .map_err(|e| Error::Config(format!("Failed to read {}: {}", path.display(), e)))?;
        let config: StoreConfig = serde_json::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse {}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Save the config into a metadata directory
    pub fn save(&self, meta_dir: &Path) -> Result<()> {
        self.validate()?;
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(meta_dir.join(CONFIG_FILE), content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.compression_level > 9 {
            return Err(Error::Config(format!(
                "compression_level must be 0-9, got {}",
                self.compression_level
            )));
        }
        if self.default_branch.is_empty()
            || self
                .default_branch
                .chars()
                .any(|c| c.is_whitespace() || c.is_control())
        {
            return Err(Error::Config(format!(
                "invalid default_branch: {:?}",
                self.default_branch
            )));
        }
        Ok(())
    }

    /// Content of the HEAD file for this config
    pub fn head_contents(&self) -> String {
        format!("ref: refs/heads/{}\n", self.default_branch)
    }
}
