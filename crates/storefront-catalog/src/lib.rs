//! Catalog domain types and query logic for the storefront.
//!
//! This crate holds everything about the catalog that does not need I/O:
//!
//! - **Catalog**: categories, products, images and spec sheets
//! - **Search**: product filters, sorting, pagination
//! - **Dataset**: the immutable in-memory catalog and its read-only queries
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_catalog::prelude::*;
//!
//! let dataset = Dataset::from_json(categories_json, products_json)?;
//!
//! // Second page of visible LED products in a category
//! let filters = ProductFilters::new()
//!     .with_visible(true)
//!     .with_category("cat-eclairage")
//!     .with_search("led")
//!     .with_pagination(2, 12);
//!
//! for product in dataset.list_products(&filters) {
//!     println!("{} -> {}", product.name, product.cover_url());
//! }
//! ```

pub mod error;
pub mod ids;

pub mod catalog;
pub mod dataset;
pub mod search;

pub use catalog::{
    Category, Product, ProductImage, SpecValue, Specs, DEFAULT_SORT_ORDER, PLACEHOLDER_IMAGE,
};
pub use dataset::Dataset;
pub use error::CatalogError;
pub use ids::*;
pub use search::{Pagination, ProductFilters};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CatalogError;
    pub use crate::ids::*;

    // Catalog
    pub use crate::catalog::{
        Category, Product, ProductImage, SpecValue, Specs, DEFAULT_SORT_ORDER, PLACEHOLDER_IMAGE,
    };

    // Dataset
    pub use crate::dataset::Dataset;

    // Search
    pub use crate::search::{Pagination, ProductFilters};
}
