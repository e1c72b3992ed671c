// src/config.rs
//! Generator configuration.
//!
//! Every field has a default, and TOML files only need to name the fields
//! they change:
//!
//! ```toml
//! seed = 42
//! scan_module = "fixtures"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Recursion ceiling applied when no config overrides it.
pub const DEFAULT_MAX_DEPTH: usize = 100;

/// Module scanned for interface implementations by default.
pub const DEFAULT_SCAN_MODULE: &str = "fixtures";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Depth beyond which a branch yields empty.
    pub max_depth: usize,
    /// Seed for reproducible runs. Unset draws from OS entropy.
    pub seed: Option<u64>,
    /// Root module for implementation discovery.
    pub scan_module: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            seed: None,
            scan_module: DEFAULT_SCAN_MODULE.to_string(),
        }
    }
}

impl GeneratorConfig {
    pub fn from_toml_str(toml_str: &str) -> Result<Self, ConfigError> {
        Self::parse(toml_str, "<inline>")
    }

    /// Load from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, &path.display().to_string())
    }

    fn parse(toml_str: &str, origin: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|source| ConfigError::Parse {
            origin: origin.to_string(),
            source,
        })
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
