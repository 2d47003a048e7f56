//! Catalog error types.

use thiserror::Error;

/// Errors raised while loading or validating a catalog dataset.
///
/// Lookups that find nothing are not errors; they return `None` or an
/// empty list.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Two categories share an id.
    #[error("Duplicate category id: {0}")]
    DuplicateCategoryId(String),

    /// Two categories share a slug.
    #[error("Duplicate category slug: {0}")]
    DuplicateCategorySlug(String),

    /// Two products share an id.
    #[error("Duplicate product id: {0}")]
    DuplicateProductId(String),

    /// Two products share a slug.
    #[error("Duplicate product slug: {0}")]
    DuplicateProductSlug(String),

    /// Dataset JSON could not be parsed.
    #[error("Failed to parse {dataset} dataset: {message}")]
    Parse { dataset: &'static str, message: String },
}
