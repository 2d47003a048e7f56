//! Search module.
//!
//! Contains product filters, the listing pipeline, and pagination.

mod filter;
mod query;
mod results;

pub use filter::ProductFilters;
pub use query::{count_products, matching_products, paginate, select_products, sort_by_position};
pub use results::Pagination;
