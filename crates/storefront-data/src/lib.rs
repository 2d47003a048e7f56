//! Catalog data access for the storefront.
//!
//! A [`CatalogService`] answers every storefront query through a
//! [`CatalogStore`] selected once at construction:
//!
//! - [`MockStore`]: the embedded (or file-backed) dataset with simulated latency
//! - [`RemoteStore`]: the HTTP catalog API under `{base}/api/v1`
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_data::{CatalogService, StoreConfig};
//!
//! let service = CatalogService::from_config(&StoreConfig::default().apply_env()?)?;
//! let home = service.home_page(6).await?;
//! println!("{} featured", home.featured.len());
//! ```

pub mod config;
pub mod error;
pub mod loader;
pub mod mock;
pub mod remote;
pub mod service;
pub mod store;
pub mod timeout;

pub use config::{StoreConfig, StoreMode};
pub use error::{DataError, FetchError};
pub use loader::{embedded_dataset, load_dataset};
pub use mock::{MockStore, DEFAULT_MOCK_DELAY};
pub use remote::RemoteStore;
pub use service::{
    CatalogService, CategoryListing, HomePage, Listing, ProductDetail, DEFAULT_HOME_LIMIT,
    DEFAULT_RELATED_LIMIT,
};
pub use store::{CatalogStore, FetchResult};
pub use timeout::TimeoutConfig;

pub use storefront_catalog as catalog;
