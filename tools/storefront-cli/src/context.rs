//! CLI execution context.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context as _, Result};
use storefront_data::{CatalogService, StoreConfig, StoreMode};

use crate::config::CliConfig;
use crate::output::Output;

const CONFIG_NAMES: [&str; 3] = ["storefront.toml", ".storefront.toml", "storefront.json"];

/// Store settings given on the command line. They win over the config file
/// and the environment.
#[derive(Debug, Default)]
pub struct StoreOverrides {
    pub mode: Option<String>,
    pub base_url: Option<String>,
    pub delay_ms: Option<u64>,
}

impl StoreOverrides {
    fn apply(&self, mut store: StoreConfig) -> Result<StoreConfig> {
        if let Some(mode) = &self.mode {
            store.mode = mode
                .parse::<StoreMode>()
                .context("Invalid --mode")?;
        }
        if let Some(base_url) = &self.base_url {
            store.base_url = Some(base_url.clone());
        }
        if let Some(delay_ms) = self.delay_ms {
            store = store.with_mock_delay(Duration::from_millis(delay_ms));
        }
        Ok(store)
    }
}

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Catalog service built from the resolved store configuration.
    pub service: CatalogService,
}

impl Context {
    /// Load config, overlay environment and flags, then build the service.
    pub fn load(config_path: Option<&str>, overrides: &StoreOverrides, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let mut config = if let Some(path) = config_path {
            CliConfig::load(path)?
        } else {
            // Try to find config in current directory or parent directories
            match find_config(&cwd) {
                Some(path) => {
                    output.debug(&format!("Using config {}", path.display()));
                    CliConfig::load(&path.to_string_lossy())?
                }
                None => CliConfig::default(),
            }
        };

        let store = config
            .store
            .clone()
            .apply_env()
            .context("Invalid STOREFRONT_* environment")?;
        config.store = resolve_dataset_paths(overrides.apply(store)?, &cwd);

        let service = CatalogService::from_config(&config.store)
            .with_context(|| format!("Failed to start {} catalog store", config.store.mode))?;

        Ok(Self {
            config,
            output,
            service,
        })
    }
}

/// Find a config file in `start` or its ancestors.
fn find_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        for name in &CONFIG_NAMES {
            let config_path = current.join(name);
            if config_path.is_file() {
                return Some(config_path);
            }
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Dataset paths are relative to the working directory.
fn resolve_dataset_paths(mut store: StoreConfig, cwd: &Path) -> StoreConfig {
    let resolve = |path: PathBuf| if path.is_absolute() { path } else { cwd.join(path) };
    store.categories_path = store.categories_path.map(resolve);
    store.products_path = store.products_path.map(resolve);
    store
}
