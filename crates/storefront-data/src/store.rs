//! The catalog store seam.

use async_trait::async_trait;
use storefront_catalog::{Category, Product, ProductFilters};

use crate::error::FetchError;

/// Result type for store queries.
pub type FetchResult<T> = Result<T, FetchError>;

/// Read-only access to categories and products.
///
/// Implementations must not mutate shared state: queries may be issued
/// concurrently and a dropped query future must leave nothing behind.
/// Not-found is `Ok(None)`; `Err` is reserved for transport failures.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// All categories, in dataset order.
    async fn list_categories(&self) -> FetchResult<Vec<Category>>;

    /// Category with exactly this slug.
    async fn category_by_slug(&self, slug: &str) -> FetchResult<Option<Category>>;

    /// Filtered, sorted, optionally paged products.
    async fn list_products(&self, filters: &ProductFilters) -> FetchResult<Vec<Product>>;

    /// Product with exactly this slug.
    async fn product_by_slug(&self, slug: &str) -> FetchResult<Option<Product>>;

    /// Short name for logs.
    fn name(&self) -> &'static str;
}
