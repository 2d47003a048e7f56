//! The catalog query engine.

use std::sync::Arc;

use serde::Serialize;
use storefront_catalog::{Category, Dataset, Pagination, Product, ProductFilters};

use crate::config::{StoreConfig, StoreMode};
use crate::error::DataError;
use crate::loader;
use crate::mock::MockStore;
use crate::remote::RemoteStore;
use crate::store::{CatalogStore, FetchResult};

/// Default size of the featured and new-arrival strips.
pub const DEFAULT_HOME_LIMIT: usize = 6;

/// Default number of related products on a product page.
pub const DEFAULT_RELATED_LIMIT: usize = 4;

/// Home page data.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomePage {
    pub categories: Vec<Category>,
    pub featured: Vec<Product>,
    pub new_arrivals: Vec<Product>,
}

/// A category with its visible products.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryListing {
    pub category: Category,
    pub products: Vec<Product>,
}

/// A product with related products from its primary category.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetail {
    pub product: Product,
    pub related: Vec<Product>,
}

/// One page of a listing plus its footer metadata.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub products: Vec<Product>,
    /// Present when the filters carried a page window.
    pub pagination: Option<Pagination>,
}

/// Catalog query engine.
///
/// Wraps a [`CatalogStore`] chosen at construction time and derives the
/// storefront queries (featured, new, search, related) from its primitive
/// operations. Cheap to clone; clones share the store.
#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn CatalogStore>,
}

impl std::fmt::Debug for CatalogService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogService")
            .field("store", &self.store.name())
            .finish()
    }
}

impl CatalogService {
    pub fn new(store: impl CatalogStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Build the store described by `config`.
    pub fn from_config(config: &StoreConfig) -> Result<Self, DataError> {
        config.validate()?;

        let service = match config.mode {
            StoreMode::Mock => {
                let dataset: Dataset = match (&config.categories_path, &config.products_path) {
                    (Some(categories), Some(products)) => loader::load_dataset(categories, products)?,
                    _ => loader::embedded_dataset()?,
                };
                Self::new(MockStore::new(dataset).with_delay(config.mock_delay()))
            }
            StoreMode::Remote => {
                let base_url = config.base_url.as_deref().unwrap_or_default();
                Self::new(RemoteStore::new(base_url, config.timeout())?)
            }
        };

        tracing::info!(store = service.store_name(), "catalog service ready");
        Ok(service)
    }

    /// Name of the backing store ("mock" or "remote").
    pub fn store_name(&self) -> &'static str {
        self.store.name()
    }

    /// All categories, in dataset order.
    pub async fn list_categories(&self) -> FetchResult<Vec<Category>> {
        let categories = self.store.list_categories().await?;
        tracing::debug!(store = self.store_name(), count = categories.len(), "list_categories");
        Ok(categories)
    }

    /// Category by exact slug; `None` when unknown.
    pub async fn category_by_slug(&self, slug: &str) -> FetchResult<Option<Category>> {
        let category = self.store.category_by_slug(slug).await?;
        tracing::debug!(store = self.store_name(), slug, found = category.is_some(), "category_by_slug");
        Ok(category)
    }

    /// Filtered, sorted, optionally paged products.
    pub async fn list_products(&self, filters: &ProductFilters) -> FetchResult<Vec<Product>> {
        let products = self.store.list_products(filters).await?;
        tracing::debug!(
            store = self.store_name(),
            filters = ?filters,
            count = products.len(),
            "list_products"
        );
        Ok(products)
    }

    /// Product by exact slug; `None` when unknown.
    pub async fn product_by_slug(&self, slug: &str) -> FetchResult<Option<Product>> {
        let product = self.store.product_by_slug(slug).await?;
        tracing::debug!(store = self.store_name(), slug, found = product.is_some(), "product_by_slug");
        Ok(product)
    }

    /// First `limit` visible featured products.
    pub async fn featured_products(&self, limit: usize) -> FetchResult<Vec<Product>> {
        self.first_n(ProductFilters::new().with_visible(true).featured_only(), limit)
            .await
    }

    /// First `limit` visible new arrivals.
    pub async fn new_products(&self, limit: usize) -> FetchResult<Vec<Product>> {
        self.first_n(ProductFilters::new().with_visible(true).new_only(), limit)
            .await
    }

    /// Visible products matching `query`. An empty query matches all of them.
    pub async fn search_products(&self, query: &str) -> FetchResult<Vec<Product>> {
        let filters = ProductFilters::new().with_search(query).with_visible(true);
        self.list_products(&filters).await
    }

    /// Visible products sharing `product`'s primary category, itself excluded.
    pub async fn related_products(&self, product: &Product, limit: usize) -> FetchResult<Vec<Product>> {
        let Some(primary) = product.primary_category() else {
            return Ok(Vec::new());
        };

        let filters = ProductFilters::new()
            .with_category(primary.clone())
            .with_visible(true);
        let related = self
            .list_products(&filters)
            .await?
            .into_iter()
            .filter(|p| p.id != product.id)
            .take(limit)
            .collect();
        Ok(related)
    }

    /// Category page: the category and its visible products.
    pub async fn category_listing(&self, slug: &str) -> FetchResult<Option<CategoryListing>> {
        let Some(category) = self.category_by_slug(slug).await? else {
            return Ok(None);
        };

        let filters = ProductFilters::new()
            .with_category(category.id.clone())
            .with_visible(true);
        let products = self.list_products(&filters).await?;
        Ok(Some(CategoryListing { category, products }))
    }

    /// Product page: the product and up to `related_limit` related products.
    pub async fn product_detail(
        &self,
        slug: &str,
        related_limit: usize,
    ) -> FetchResult<Option<ProductDetail>> {
        let Some(product) = self.product_by_slug(slug).await? else {
            return Ok(None);
        };

        let related = self.related_products(&product, related_limit).await?;
        Ok(Some(ProductDetail { product, related }))
    }

    /// Home page: categories, featured and new arrivals, fetched concurrently.
    pub async fn home_page(&self, limit: usize) -> FetchResult<HomePage> {
        let (categories, featured, new_arrivals) = futures::try_join!(
            self.list_categories(),
            self.featured_products(limit),
            self.new_products(limit),
        )?;

        Ok(HomePage {
            categories,
            featured,
            new_arrivals,
        })
    }

    /// A listing page with pagination metadata.
    ///
    /// The unpaged total comes from a second, concurrent query.
    pub async fn browse_products(&self, filters: &ProductFilters) -> FetchResult<Listing> {
        let Some((page, per_page)) = filters.page_window() else {
            let products = self.list_products(filters).await?;
            return Ok(Listing {
                products,
                pagination: None,
            });
        };

        let unpaged = filters.without_pagination();
        let (products, all) =
            futures::try_join!(self.list_products(filters), self.list_products(&unpaged))?;

        Ok(Listing {
            products,
            pagination: Some(Pagination::new(page, per_page, all.len())),
        })
    }

    async fn first_n(&self, filters: ProductFilters, limit: usize) -> FetchResult<Vec<Product>> {
        if limit == 0 {
            return Ok(Vec::new());
        }

        let per_page = u32::try_from(limit).unwrap_or(u32::MAX);
        let mut products = self.list_products(&filters.with_pagination(1, per_page)).await?;
        products.truncate(limit);
        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn featured(id: &str) -> Product {
        let mut p = Product::new(id, id, id);
        p.is_featured = Some(true);
        p
    }

    fn service(products: Vec<Product>) -> CatalogService {
        let dataset = Dataset::new(Vec::new(), products).unwrap();
        CatalogService::new(MockStore::new(dataset).with_delay(Duration::ZERO))
    }

    #[tokio::test]
    async fn test_featured_limit_keeps_dataset_order() {
        let svc = service(vec![featured("f1"), featured("f2"), featured("f3"), featured("f4")]);
        let result = svc.featured_products(2).await.unwrap();
        let ids: Vec<&str> = result.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["f1", "f2"]);
    }

    #[tokio::test]
    async fn test_featured_excludes_hidden() {
        let mut hidden = featured("f1");
        hidden.is_visible = false;
        let svc = service(vec![hidden, featured("f2")]);

        let result = svc.featured_products(DEFAULT_HOME_LIMIT).await.unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id.as_str(), "f2");
    }

    #[tokio::test]
    async fn test_zero_limit_is_empty() {
        let svc = service(vec![featured("f1")]);
        assert!(svc.featured_products(0).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_new_products() {
        let mut fresh = Product::new("n1", "n1", "n1");
        fresh.is_new = Some(true);
        let svc = service(vec![featured("f1"), fresh]);

        let result = svc.new_products(6).await.unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id.as_str(), "n1");
    }

    #[tokio::test]
    async fn test_related_without_category_is_empty() {
        let lonely = Product::new("p1", "p1", "p1");
        let svc = service(vec![lonely.clone(), Product::new("p2", "p2", "p2")]);
        assert!(svc.related_products(&lonely, 4).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_browse_without_window_has_no_pagination() {
        let svc = service(vec![featured("f1")]);
        let listing = svc.browse_products(&ProductFilters::new()).await.unwrap();
        assert!(listing.pagination.is_none());
        assert_eq!(listing.products.len(), 1);
    }

    #[tokio::test]
    async fn test_listing_serializes_camel_case() {
        let svc = service(vec![featured("f1"), featured("f2"), featured("f3")]);
        let filters = ProductFilters::new().with_pagination(1, 2);
        let listing = svc.browse_products(&filters).await.unwrap();

        let json = serde_json::to_value(&listing).unwrap();
        let pagination = &json["pagination"];
        assert_eq!(pagination["perPage"], 2);
        assert_eq!(pagination["totalPages"], 2);
        assert_eq!(pagination["hasNext"], true);
        assert!(pagination.get("per_page").is_none());
    }

    #[tokio::test]
    async fn test_from_config_remote_requires_url() {
        let config = StoreConfig {
            mode: StoreMode::Remote,
            ..StoreConfig::default()
        };
        assert!(CatalogService::from_config(&config).is_err());
    }

    #[tokio::test]
    async fn test_from_config_mock_uses_embedded_dataset() {
        let config = StoreConfig::mock().with_mock_delay(Duration::ZERO);
        let svc = CatalogService::from_config(&config).unwrap();
        assert_eq!(svc.store_name(), "mock");
        assert!(!svc.list_categories().await.unwrap().is_empty());
    }
}
