//! In-memory store with simulated latency.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use storefront_catalog::{Category, Dataset, Product, ProductFilters};

use crate::store::{CatalogStore, FetchResult};

/// Default simulated network latency.
pub const DEFAULT_MOCK_DELAY: Duration = Duration::from_millis(300);

/// Catalog store backed by a static dataset.
///
/// Every query waits `delay` before answering so loading states can be
/// exercised. Never fails.
#[derive(Debug, Clone)]
pub struct MockStore {
    dataset: Arc<Dataset>,
    delay: Duration,
}

impl MockStore {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset: Arc::new(dataset),
            delay: DEFAULT_MOCK_DELAY,
        }
    }

    /// Set the simulated latency. Zero answers immediately.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    async fn simulate_latency(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

#[async_trait]
impl CatalogStore for MockStore {
    async fn list_categories(&self) -> FetchResult<Vec<Category>> {
        self.simulate_latency().await;
        Ok(self.dataset.categories().to_vec())
    }

    async fn category_by_slug(&self, slug: &str) -> FetchResult<Option<Category>> {
        self.simulate_latency().await;
        Ok(self.dataset.category_by_slug(slug).cloned())
    }

    async fn list_products(&self, filters: &ProductFilters) -> FetchResult<Vec<Product>> {
        self.simulate_latency().await;
        Ok(self.dataset.list_products(filters))
    }

    async fn product_by_slug(&self, slug: &str) -> FetchResult<Option<Product>> {
        self.simulate_latency().await;
        Ok(self.dataset.product_by_slug(slug).cloned())
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    fn dataset() -> Dataset {
        let mut a = Product::new("p-1", "Bande LED RGB", "bande-led-rgb");
        a.sort_order = Some(2);
        let mut b = Product::new("p-2", "Cache jante", "cache-jante");
        b.sort_order = Some(1);
        Dataset::new(vec![Category::new("cat-1", "Éclairage", "eclairage")], vec![a, b]).unwrap()
    }

    #[tokio::test]
    async fn test_list_products_sorted() {
        let store = MockStore::new(dataset()).with_delay(Duration::ZERO);
        let products = store.list_products(&ProductFilters::new()).await.unwrap();
        assert_eq!(products[0].slug, "cache-jante");
    }

    #[tokio::test]
    async fn test_unknown_slug_is_none() {
        let store = MockStore::new(dataset()).with_delay(Duration::ZERO);
        assert!(store.product_by_slug("nope").await.unwrap().is_none());
        assert!(store.category_by_slug("nope").await.unwrap().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_delay_is_applied() {
        let store = MockStore::new(dataset()).with_delay(Duration::from_millis(300));
        let started = tokio::time::Instant::now();
        store.list_categories().await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(300));
    }

    #[tokio::test]
    async fn test_zero_delay_resolves_immediately() {
        let store = MockStore::new(dataset()).with_delay(Duration::ZERO);
        let started = Instant::now();
        store.list_categories().await.unwrap();
        assert!(started.elapsed() < Duration::from_millis(100));
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_query_is_silent() {
        let store = MockStore::new(dataset());
        let filters = ProductFilters::new();
        let pending = store.list_products(&filters);
        let outcome = tokio::time::timeout(Duration::from_millis(10), pending).await;
        assert!(outcome.is_err());

        // The store is still usable after a cancelled query.
        let products = store.list_products(&filters).await.unwrap();
        assert_eq!(products.len(), 2);
    }
}
