//! CLI command implementations.

pub mod categories;
pub mod category;
pub mod home;
pub mod product;
pub mod products;
pub mod search;

use std::future::Future;

use clap::Args;
use storefront_catalog::ProductFilters;
use storefront_data::FetchResult;

use crate::context::Context;

/// Arguments for the home command.
#[derive(Args)]
pub struct HomeArgs {
    /// Products per strip (default from config).
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for the category command.
#[derive(Args)]
pub struct CategoryArgs {
    /// Category slug.
    pub slug: String,
}

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    /// Keep products in this category id.
    #[arg(long)]
    pub category: Option<String>,

    /// Keep products carrying any of these tags.
    #[arg(long = "tag")]
    pub tag: Vec<String>,

    /// Case-insensitive text search.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Only featured products.
    #[arg(long)]
    pub featured: bool,

    /// Only new arrivals.
    #[arg(long)]
    pub new: bool,

    /// Include hidden products.
    #[arg(long)]
    pub all: bool,

    /// Page number (1-indexed).
    #[arg(long, requires = "per_page")]
    pub page: Option<u32>,

    /// Products per page.
    #[arg(long)]
    pub per_page: Option<u32>,
}

impl ProductsArgs {
    /// Build the listing filters. `--per-page` alone means the first page.
    pub fn to_filters(&self) -> ProductFilters {
        let mut filters = ProductFilters::new().with_tags(self.tag.iter().cloned());

        if let Some(search) = &self.search {
            filters = filters.with_search(search.clone());
        }
        if let Some(category) = &self.category {
            filters = filters.with_category(category.as_str());
        }
        if !self.all {
            filters = filters.with_visible(true);
        }
        if self.featured {
            filters = filters.featured_only();
        }
        if self.new {
            filters = filters.new_only();
        }
        if let Some(per_page) = self.per_page {
            filters = filters.with_pagination(self.page.unwrap_or(1), per_page);
        }

        filters
    }
}

/// Arguments for the product command.
#[derive(Args)]
pub struct ProductArgs {
    /// Product slug.
    pub slug: String,

    /// Related products to show (default from config).
    #[arg(long)]
    pub related: Option<usize>,
}

/// Arguments for the search command.
#[derive(Args)]
pub struct SearchArgs {
    /// Search text. Matches name and descriptions, case-insensitively.
    pub query: String,
}

/// Await a catalog query behind a spinner.
pub(crate) async fn load<T, F>(ctx: &Context, msg: &str, query: F) -> FetchResult<T>
where
    F: Future<Output = FetchResult<T>>,
{
    let spinner = ctx.output.spinner(msg);
    let result = query.await;
    spinner.finish_and_clear();
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> ProductsArgs {
        ProductsArgs {
            category: None,
            tag: Vec::new(),
            search: None,
            featured: false,
            new: false,
            all: false,
            page: None,
            per_page: None,
        }
    }

    #[test]
    fn test_default_listing_is_visible_only() {
        let filters = args().to_filters();
        assert_eq!(filters.visible, Some(true));
        assert!(filters.page_window().is_none());
    }

    #[test]
    fn test_all_drops_visibility_filter() {
        let filters = ProductsArgs { all: true, ..args() }.to_filters();
        assert_eq!(filters.visible, None);
    }

    #[test]
    fn test_per_page_alone_is_first_page() {
        let filters = ProductsArgs {
            per_page: Some(12),
            ..args()
        }
        .to_filters();
        assert_eq!(filters.page_window(), Some((1, 12)));
    }

    #[test]
    fn test_flags_map_to_filters() {
        let filters = ProductsArgs {
            category: Some("cat-eclairage".to_string()),
            tag: vec!["led".to_string()],
            search: Some("bande".to_string()),
            featured: true,
            new: true,
            page: Some(2),
            per_page: Some(3),
            ..args()
        }
        .to_filters();

        assert_eq!(filters.category.as_ref().map(|c| c.as_str()), Some("cat-eclairage"));
        assert_eq!(filters.tags, vec!["led"]);
        assert_eq!(filters.search.as_deref(), Some("bande"));
        assert!(filters.featured);
        assert!(filters.new_only);
        assert_eq!(filters.page_window(), Some((2, 3)));
    }
}
