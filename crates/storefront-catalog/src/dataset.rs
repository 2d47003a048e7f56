//! The in-memory catalog and its read-only queries.

use std::collections::HashSet;

use crate::catalog::{Category, Product};
use crate::error::CatalogError;
use crate::search::{self, ProductFilters};

/// Immutable category and product records.
///
/// Built once at startup and never mutated; every query derives a fresh
/// view. Ids and slugs are unique within each collection.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    categories: Vec<Category>,
    products: Vec<Product>,
}

impl Dataset {
    /// Build a dataset, rejecting duplicate ids or slugs.
    pub fn new(categories: Vec<Category>, products: Vec<Product>) -> Result<Self, CatalogError> {
        if let Some(id) = first_duplicate(categories.iter().map(|c| c.id.as_str())) {
            return Err(CatalogError::DuplicateCategoryId(id.to_string()));
        }
        if let Some(slug) = first_duplicate(categories.iter().map(|c| c.slug.as_str())) {
            return Err(CatalogError::DuplicateCategorySlug(slug.to_string()));
        }
        if let Some(id) = first_duplicate(products.iter().map(|p| p.id.as_str())) {
            return Err(CatalogError::DuplicateProductId(id.to_string()));
        }
        if let Some(slug) = first_duplicate(products.iter().map(|p| p.slug.as_str())) {
            return Err(CatalogError::DuplicateProductSlug(slug.to_string()));
        }

        Ok(Self {
            categories,
            products,
        })
    }

    /// Parse both datasets from their JSON array sources.
    pub fn from_json(categories_json: &str, products_json: &str) -> Result<Self, CatalogError> {
        let categories: Vec<Category> =
            serde_json::from_str(categories_json).map_err(|e| CatalogError::Parse {
                dataset: "categories",
                message: e.to_string(),
            })?;
        let products: Vec<Product> =
            serde_json::from_str(products_json).map_err(|e| CatalogError::Parse {
                dataset: "products",
                message: e.to_string(),
            })?;

        Self::new(categories, products)
    }

    /// All categories, in dataset order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// All products, in dataset order, hidden ones included.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Exact, case-sensitive slug lookup.
    pub fn category_by_slug(&self, slug: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.slug == slug)
    }

    /// Exact, case-sensitive slug lookup.
    pub fn product_by_slug(&self, slug: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.slug == slug)
    }

    /// Filtered, sorted, optionally paged listing.
    pub fn list_products(&self, filters: &ProductFilters) -> Vec<Product> {
        search::select_products(&self.products, filters)
    }

    /// Number of products matching the filters, ignoring pagination.
    pub fn count_products(&self, filters: &ProductFilters) -> usize {
        search::count_products(&self.products, filters)
    }
}

fn first_duplicate<'a>(mut keys: impl Iterator<Item = &'a str>) -> Option<&'a str> {
    let mut seen = HashSet::new();
    keys.find(|k| !seen.insert(*k))
}
