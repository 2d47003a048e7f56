//! Store configuration.

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::DataError;
use crate::timeout::TimeoutConfig;

/// Environment variable selecting the store mode (`mock` or `remote`).
pub const ENV_MODE: &str = "STOREFRONT_MODE";
/// Environment variable holding the remote API base URL.
pub const ENV_API_BASE_URL: &str = "STOREFRONT_API_BASE_URL";
/// Environment variable overriding the mock latency in milliseconds.
pub const ENV_MOCK_DELAY_MS: &str = "STOREFRONT_MOCK_DELAY_MS";

/// Which backing store answers catalog queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreMode {
    /// Static in-memory dataset with simulated latency.
    #[default]
    Mock,
    /// HTTP catalog API.
    Remote,
}

impl StoreMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreMode::Mock => "mock",
            StoreMode::Remote => "remote",
        }
    }
}

impl FromStr for StoreMode {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mock" => Ok(StoreMode::Mock),
            "remote" => Ok(StoreMode::Remote),
            other => Err(DataError::Config(format!(
                "unknown store mode '{}' (expected mock or remote)",
                other
            ))),
        }
    }
}

impl std::fmt::Display for StoreMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Catalog store configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store mode.
    #[serde(default)]
    pub mode: StoreMode,

    /// Base URL of the catalog API (remote mode).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Simulated latency for the mock store.
    #[serde(default = "default_mock_delay_ms")]
    pub mock_delay_ms: u64,

    /// Total timeout for remote calls.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Category dataset file; the embedded dataset is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories_path: Option<PathBuf>,

    /// Product dataset file; the embedded dataset is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub products_path: Option<PathBuf>,
}

fn default_mock_delay_ms() -> u64 {
    300
}

fn default_timeout_ms() -> u64 {
    5000
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            mode: StoreMode::Mock,
            base_url: None,
            mock_delay_ms: default_mock_delay_ms(),
            timeout_ms: default_timeout_ms(),
            categories_path: None,
            products_path: None,
        }
    }
}

impl StoreConfig {
    /// Mock store over the embedded dataset.
    pub fn mock() -> Self {
        Self::default()
    }

    /// Remote store at `base_url`.
    pub fn remote(base_url: impl Into<String>) -> Self {
        Self {
            mode: StoreMode::Remote,
            base_url: Some(base_url.into()),
            ..Self::default()
        }
    }

    pub fn with_mock_delay(mut self, delay: Duration) -> Self {
        self.mock_delay_ms = delay.as_millis() as u64;
        self
    }

    pub fn with_timeout(mut self, total: Duration) -> Self {
        self.timeout_ms = total.as_millis() as u64;
        self
    }

    pub fn mock_delay(&self) -> Duration {
        Duration::from_millis(self.mock_delay_ms)
    }

    pub fn timeout(&self) -> TimeoutConfig {
        TimeoutConfig::from_total(Duration::from_millis(self.timeout_ms))
    }

    /// Overlay `STOREFRONT_*` environment variables.
    pub fn apply_env(self) -> Result<Self, DataError> {
        self.apply_vars(|key| std::env::var(key).ok())
    }

    /// Overlay variables from an arbitrary source.
    pub fn apply_vars(mut self, var: impl Fn(&str) -> Option<String>) -> Result<Self, DataError> {
        if let Some(mode) = var(ENV_MODE) {
            self.mode = mode
                .parse()
                .map_err(|e| DataError::Config(format!("{}: {}", ENV_MODE, e)))?;
        }
        if let Some(url) = var(ENV_API_BASE_URL).filter(|u| !u.is_empty()) {
            self.base_url = Some(url);
        }
        if let Some(delay) = var(ENV_MOCK_DELAY_MS) {
            self.mock_delay_ms = delay.trim().parse().map_err(|_| {
                DataError::Config(format!("{}={} is not a number", ENV_MOCK_DELAY_MS, delay))
            })?;
        }
        Ok(self)
    }

    /// Check that the selected mode has what it needs.
    pub fn validate(&self) -> Result<(), DataError> {
        match self.mode {
            StoreMode::Remote if self.base_url.as_deref().map_or(true, str::is_empty) => Err(
                DataError::Config("remote mode requires a base_url".to_string()),
            ),
            StoreMode::Remote if self.timeout_ms == 0 => Err(DataError::Config(
                "timeout_ms must be greater than zero in remote mode".to_string(),
            )),
            StoreMode::Mock if self.categories_path.is_some() != self.products_path.is_some() => {
                Err(DataError::Config(
                    "categories_path and products_path must be set together".to_string(),
                ))
            }
            _ => Ok(()),
        }
    }
}
