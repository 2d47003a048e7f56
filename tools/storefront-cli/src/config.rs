//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use storefront_data::StoreConfig;

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Catalog store configuration.
    #[serde(default)]
    pub store: StoreConfig,

    /// Listing defaults.
    #[serde(default)]
    pub display: DisplayConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        Self::parse(path, &content)
    }

    /// Parse config text; `.json` paths are JSON, everything else TOML.
    pub fn parse(path: &str, content: &str) -> Result<Self> {
        if path.ends_with(".json") {
            serde_json::from_str(content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }
}

/// Listing defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Size of the featured and new-arrival strips on the home page.
    #[serde(default = "default_home_limit")]
    pub home_limit: usize,

    /// Related products shown on a product page.
    #[serde(default = "default_related_limit")]
    pub related_limit: usize,
}

fn default_home_limit() -> usize {
    storefront_data::DEFAULT_HOME_LIMIT
}

fn default_related_limit() -> usize {
    storefront_data::DEFAULT_RELATED_LIMIT
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            home_limit: default_home_limit(),
            related_limit: default_related_limit(),
        }
    }
}
