//! Product and image types.

use crate::catalog::Specs;
use crate::ids::{CategoryId, ProductId};
use serde::{Deserialize, Serialize};

/// Effective sort position of a product that carries no `sortOrder`.
pub const DEFAULT_SORT_ORDER: i64 = 999;

/// Image shown when a product has no images at all.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// A product in the catalog.
///
/// Optional flags follow explicit default rules instead of call-site
/// fallbacks: see [`Product::is_featured`], [`Product::is_new`] and
/// [`Product::effective_sort_order`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// URL-friendly slug (unique).
    pub slug: String,
    /// Short description for listings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    /// Full description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Categories this product belongs to. The first one is the primary category.
    #[serde(default)]
    pub category_ids: Vec<CategoryId>,
    /// Free-text labels, compared case-sensitively.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Whether the product may appear in public listings.
    pub is_visible: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_new: Option<bool>,
    /// Manual sort position, ascending.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i64>,
    /// Images in display order.
    #[serde(default)]
    pub images: Vec<ProductImage>,
    /// Spec sheet, in source order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specs: Option<Specs>,
}

impl Product {
    /// Create a new visible product with no optional data.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        slug: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            slug: slug.into(),
            short_description: None,
            description: None,
            category_ids: Vec::new(),
            tags: None,
            is_visible: true,
            is_featured: None,
            is_new: None,
            sort_order: None,
            images: Vec::new(),
            specs: None,
        }
    }

    /// Featured flag; absent means false.
    pub fn is_featured(&self) -> bool {
        self.is_featured.unwrap_or(false)
    }

    /// New-arrival flag; absent means false.
    pub fn is_new(&self) -> bool {
        self.is_new.unwrap_or(false)
    }

    /// Sort key; absent means [`DEFAULT_SORT_ORDER`].
    pub fn effective_sort_order(&self) -> i64 {
        self.sort_order.unwrap_or(DEFAULT_SORT_ORDER)
    }

    /// The first category, used to find related products.
    pub fn primary_category(&self) -> Option<&CategoryId> {
        self.category_ids.first()
    }

    pub fn in_category(&self, category_id: &CategoryId) -> bool {
        self.category_ids.contains(category_id)
    }

    pub fn tags(&self) -> &[String] {
        self.tags.as_deref().unwrap_or(&[])
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags().iter().any(|t| t == tag)
    }

    /// Cover image: the first image flagged as cover, else the first image.
    pub fn cover_image(&self) -> Option<&ProductImage> {
        self.images
            .iter()
            .find(|img| img.is_cover())
            .or_else(|| self.images.first())
    }

    /// Cover image URL, falling back to [`PLACEHOLDER_IMAGE`].
    pub fn cover_url(&self) -> &str {
        self.cover_image()
            .map(|img| img.url.as_str())
            .unwrap_or(PLACEHOLDER_IMAGE)
    }

    /// Case-insensitive substring match over name and both descriptions.
    ///
    /// `needle_lower` must already be lowercased.
    pub fn matches_text(&self, needle_lower: &str) -> bool {
        let contains = |field: &str| field.to_lowercase().contains(needle_lower);

        contains(self.name.as_str())
            || self.short_description.as_deref().is_some_and(contains)
            || self.description.as_deref().is_some_and(contains)
    }

    /// Add a category to this product.
    pub fn add_category(&mut self, category_id: impl Into<CategoryId>) {
        let category_id = category_id.into();
        if !self.category_ids.contains(&category_id) {
            self.category_ids.push(category_id);
        }
    }

    /// Add a tag to this product.
    pub fn add_tag(&mut self, tag: impl Into<String>) {
        let tag = tag.into();
        let tags = self.tags.get_or_insert_with(Vec::new);
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }
}

/// A product image.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProductImage {
    /// Image URL.
    pub url: String,
    /// Alt text for accessibility.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_cover: Option<bool>,
}

impl ProductImage {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            alt: None,
            is_cover: None,
        }
    }

    pub fn cover(url: impl Into<String>) -> Self {
        Self {
            is_cover: Some(true),
            ..Self::new(url)
        }
    }

    pub fn is_cover(&self) -> bool {
        self.is_cover.unwrap_or(false)
    }

    /// Alt text, falling back to the given label (usually the product name).
    pub fn alt_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.alt.as_deref().unwrap_or(fallback)
    }
}
