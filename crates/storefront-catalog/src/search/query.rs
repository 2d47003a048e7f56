//! Filter, sort and paginate a product listing.

use crate::catalog::Product;
use crate::search::ProductFilters;

/// Run a listing query over a product slice.
///
/// Filters, then stable-sorts by effective sort order, then applies the
/// page window if one is set. Only the returned page is cloned.
pub fn select_products(products: &[Product], filters: &ProductFilters) -> Vec<Product> {
    let mut matched = matching_products(products, filters);
    sort_by_position(&mut matched);

    let page = match filters.page_window() {
        Some((page, per_page)) => paginate(matched, page, per_page),
        None => matched,
    };

    page.into_iter().cloned().collect()
}

/// Count matches for a filter set, ignoring its page window.
pub fn count_products(products: &[Product], filters: &ProductFilters) -> usize {
    let matcher = filters.matcher();
    products.iter().filter(|p| matcher.matches(p)).count()
}

/// Products passing every predicate, in dataset order.
pub fn matching_products<'a>(products: &'a [Product], filters: &ProductFilters) -> Vec<&'a Product> {
    let matcher = filters.matcher();
    products.iter().filter(|p| matcher.matches(p)).collect()
}

/// Ascending effective sort order. Ties keep their relative order.
pub fn sort_by_position(products: &mut [&Product]) {
    products.sort_by_key(|p| p.effective_sort_order());
}

/// Slice one page (1-indexed) out of a sorted listing.
///
/// A page past the end, page 0, or a page size of 0 yields nothing.
pub fn paginate<T>(items: Vec<T>, page: u32, per_page: u32) -> Vec<T> {
    if page == 0 || per_page == 0 {
        return Vec::new();
    }

    let per_page = per_page as usize;
    let start = (page as usize - 1).saturating_mul(per_page);
    items.into_iter().skip(start).take(per_page).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, sort_order: Option<i64>, visible: bool) -> Product {
        let mut p = Product::new(id, id.to_uppercase(), id);
        p.sort_order = sort_order;
        p.is_visible = visible;
        p
    }

    fn ids(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_default_sort_order_and_visibility() {
        let products = vec![
            product("p2", None, true),
            product("p3", Some(2), false),
            product("p1", Some(1), true),
        ];

        let result = select_products(&products, &ProductFilters::new().with_visible(true));
        assert_eq!(ids(&result), vec!["p1", "p2"]);
    }

    #[test]
    fn test_sort_is_stable() {
        let products = vec![
            product("a", None, true),
            product("b", Some(5), true),
            product("c", None, true),
            product("d", Some(5), true),
            product("e", Some(999), true),
        ];

        let result = select_products(&products, &ProductFilters::new());
        assert_eq!(ids(&result), vec!["b", "d", "a", "c", "e"]);
    }

    #[test]
    fn test_negative_sort_order_first() {
        let products = vec![product("a", Some(1), true), product("b", Some(-3), true)];
        let result = select_products(&products, &ProductFilters::new());
        assert_eq!(ids(&result), vec!["b", "a"]);
    }

    #[test]
    fn test_pagination_second_page_partial() {
        let products: Vec<Product> = (1..=5)
            .map(|i| {
                let mut p = product(&format!("p{}", i), Some(i), true);
                p.add_category("cat-1");
                p
            })
            .collect();

        let filters = ProductFilters::new()
            .with_category("cat-1")
            .with_pagination(2, 3);
        let result = select_products(&products, &filters);
        assert_eq!(ids(&result), vec!["p4", "p5"]);
    }

    #[test]
    fn test_pagination_out_of_range_is_empty() {
        let products = vec![product("a", None, true)];
        let filters = ProductFilters::new().with_pagination(3, 10);
        assert!(select_products(&products, &filters).is_empty());
    }

    #[test]
    fn test_pagination_matches_slicing() {
        let products: Vec<Product> = (0..17)
            .map(|i| product(&format!("p{:02}", i), Some(17 - i), i % 3 != 0))
            .collect();
        let base = ProductFilters::new().with_visible(true);
        let full = select_products(&products, &base);

        for per_page in 1..=6u32 {
            for page in 1..=8u32 {
                let paged = select_products(&products, &base.clone().with_pagination(page, per_page));
                let start = ((page - 1) * per_page) as usize;
                let expected: Vec<Product> = full
                    .iter()
                    .skip(start)
                    .take(per_page as usize)
                    .cloned()
                    .collect();
                assert_eq!(paged, expected, "page {} per_page {}", page, per_page);
            }
        }
    }

    #[test]
    fn test_paginate_zero_values() {
        assert!(paginate(vec![1, 2, 3], 0, 2).is_empty());
        assert!(paginate(vec![1, 2, 3], 1, 0).is_empty());
        assert_eq!(paginate(vec![1, 2, 3], 1, 2), vec![1, 2]);
    }

    #[test]
    fn test_count_ignores_page_window() {
        let products = vec![product("a", None, true), product("b", None, true)];
        let filters = ProductFilters::new().with_pagination(1, 1);
        assert_eq!(count_products(&products, &filters), 2);
    }
}
