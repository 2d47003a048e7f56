//! Product listing filters.

use crate::catalog::Product;
use crate::ids::CategoryId;
use serde::{Deserialize, Serialize};

/// Filters for a product listing.
///
/// Every field is optional and independent. Present predicates are ANDed;
/// absent ones are no-ops, so no combination is ever rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFilters {
    /// Case-insensitive substring over name, short description and description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Keep products that belong to this category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryId>,
    /// Keep products sharing at least one of these tags. Empty means no filter.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Keep products whose visibility equals this value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    /// Only featured products when true.
    #[serde(default)]
    pub featured: bool,
    /// Only new arrivals when true.
    #[serde(default, rename = "new")]
    pub new_only: bool,
    /// Page number, 1-indexed. Applied only together with `per_page`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

impl ProductFilters {
    /// Create an empty filter set (matches every product).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        self.search = Some(query.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<CategoryId>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = Some(visible);
        self
    }

    pub fn featured_only(mut self) -> Self {
        self.featured = true;
        self
    }

    pub fn new_only(mut self) -> Self {
        self.new_only = true;
        self
    }

    /// Set pagination (1-indexed page).
    pub fn with_pagination(mut self, page: u32, per_page: u32) -> Self {
        self.page = Some(page);
        self.per_page = Some(per_page);
        self
    }

    /// Same filters without pagination.
    pub fn without_pagination(&self) -> Self {
        Self {
            page: None,
            per_page: None,
            ..self.clone()
        }
    }

    /// Pagination window, when both fields are present and non-zero.
    pub fn page_window(&self) -> Option<(u32, u32)> {
        match (self.page, self.per_page) {
            (Some(page), Some(per_page)) if page > 0 && per_page > 0 => Some((page, per_page)),
            _ => None,
        }
    }

    /// Check whether a product passes every present predicate.
    pub fn matches(&self, product: &Product) -> bool {
        self.matcher().matches(product)
    }

    /// Precompute the lowercase search needle once for a whole listing.
    pub(crate) fn matcher(&self) -> FilterMatcher<'_> {
        FilterMatcher {
            filters: self,
            needle: self
                .search
                .as_deref()
                .filter(|q| !q.is_empty())
                .map(str::to_lowercase),
        }
    }

    /// Encode as query parameters for the remote catalog API.
    ///
    /// Tags repeat as `tags[]`; booleans encode as `1`/`0`.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();

        if let Some(search) = self.search.as_deref().filter(|q| !q.is_empty()) {
            pairs.push(("search", search.to_string()));
        }
        if let Some(category) = &self.category {
            pairs.push(("category", category.as_str().to_string()));
        }
        for tag in &self.tags {
            pairs.push(("tags[]", tag.clone()));
        }
        if let Some(visible) = self.visible {
            pairs.push(("visible", if visible { "1" } else { "0" }.to_string()));
        }
        if self.featured {
            pairs.push(("featured", "1".to_string()));
        }
        if self.new_only {
            pairs.push(("new", "1".to_string()));
        }
        if let Some(page) = self.page.filter(|p| *p > 0) {
            pairs.push(("page", page.to_string()));
        }
        if let Some(per_page) = self.per_page.filter(|n| *n > 0) {
            pairs.push(("per_page", per_page.to_string()));
        }

        pairs
    }
}

/// A filter set with its search needle lowercased once.
pub(crate) struct FilterMatcher<'a> {
    filters: &'a ProductFilters,
    needle: Option<String>,
}

impl FilterMatcher<'_> {
    pub(crate) fn matches(&self, product: &Product) -> bool {
        let f = self.filters;

        if let Some(visible) = f.visible {
            if product.is_visible != visible {
                return false;
            }
        }
        if f.featured && !product.is_featured() {
            return false;
        }
        if f.new_only && !product.is_new() {
            return false;
        }
        if let Some(category) = &f.category {
            if !product.in_category(category) {
                return false;
            }
        }
        if !f.tags.is_empty() && !product.tags().iter().any(|t| f.tags.contains(t)) {
            return false;
        }
        if let Some(needle) = &self.needle {
            if !product.matches_text(needle) {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str) -> Product {
        Product::new(id, format!("Produit {}", id), id)
    }

    #[test]
    fn test_empty_filters_match_everything() {
        let mut hidden = product("p-1");
        hidden.is_visible = false;
        assert!(ProductFilters::new().matches(&hidden));
    }

    #[test]
    fn test_visible_filter_both_ways() {
        let mut hidden = product("p-1");
        hidden.is_visible = false;

        assert!(!ProductFilters::new().with_visible(true).matches(&hidden));
        assert!(ProductFilters::new().with_visible(false).matches(&hidden));
    }

    #[test]
    fn test_tag_filter_uses_or_semantics() {
        let mut p = product("p-1");
        p.tags = Some(vec!["led".into(), "chrome".into()]);

        let filters = ProductFilters::new().with_tags(["chrome", "spoiler"]);
        assert!(filters.matches(&p));

        let filters = ProductFilters::new().with_tags(["spoiler"]);
        assert!(!filters.matches(&p));
    }

    #[test]
    fn test_tag_filter_is_case_sensitive() {
        let mut p = product("p-1");
        p.tags = Some(vec!["led".into()]);
        assert!(!ProductFilters::new().with_tags(["LED"]).matches(&p));
    }

    #[test]
    fn test_tag_filter_excludes_untagged() {
        let p = product("p-1");
        assert!(!ProductFilters::new().with_tags(["led"]).matches(&p));
    }

    #[test]
    fn test_featured_false_is_noop() {
        let p = product("p-1");
        let filters = ProductFilters {
            featured: false,
            ..Default::default()
        };
        assert!(filters.matches(&p));
        assert!(!ProductFilters::new().featured_only().matches(&p));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let p = Product::new("p-1", "Bande LED RGB", "bande-led-rgb");
        assert!(ProductFilters::new().with_search("led").matches(&p));
        assert!(ProductFilters::new().with_search("LED").matches(&p));
        assert!(ProductFilters::new().with_search("bAnDe").matches(&p));
    }

    #[test]
    fn test_empty_search_matches_all() {
        let p = product("p-1");
        assert!(ProductFilters::new().with_search("").matches(&p));
    }

    #[test]
    fn test_predicates_are_anded() {
        let mut p = product("p-1");
        p.add_category("cat-1");
        p.is_featured = Some(true);

        let filters = ProductFilters::new()
            .with_category("cat-1")
            .featured_only()
            .with_visible(true);
        assert!(filters.matches(&p));

        let filters = filters.with_category("cat-2");
        assert!(!filters.matches(&p));
    }

    #[test]
    fn test_page_window_requires_both() {
        assert_eq!(ProductFilters::new().page_window(), None);
        assert_eq!(
            ProductFilters {
                page: Some(2),
                ..Default::default()
            }
            .page_window(),
            None
        );
        assert_eq!(ProductFilters::new().with_pagination(0, 3).page_window(), None);
        assert_eq!(ProductFilters::new().with_pagination(2, 3).page_window(), Some((2, 3)));
    }

    #[test]
    fn test_query_pairs() {
        let filters = ProductFilters::new()
            .with_search("led")
            .with_category("cat-1")
            .with_tags(["a", "b"])
            .with_visible(false)
            .featured_only()
            .with_pagination(2, 12);

        assert_eq!(
            filters.to_query_pairs(),
            vec![
                ("search", "led".to_string()),
                ("category", "cat-1".to_string()),
                ("tags[]", "a".to_string()),
                ("tags[]", "b".to_string()),
                ("visible", "0".to_string()),
                ("featured", "1".to_string()),
                ("page", "2".to_string()),
                ("per_page", "12".to_string()),
            ]
        );
    }

    #[test]
    fn test_query_pairs_empty() {
        assert!(ProductFilters::new().to_query_pairs().is_empty());
        assert!(ProductFilters::new().with_search("").to_query_pairs().is_empty());
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{"visible": true, "perPage": 3, "page": 2, "tags": ["led"]}"#;
        let filters: ProductFilters = serde_json::from_str(json).unwrap();
        assert_eq!(filters.page_window(), Some((2, 3)));
        assert_eq!(filters.visible, Some(true));
        assert_eq!(filters.tags, vec!["led".to_string()]);
    }
}
