//! Product catalog module.
//!
//! Contains types for categories, products, images, and spec sheets.

mod category;
mod product;
mod specs;

pub use category::Category;
pub use product::{Product, ProductImage, DEFAULT_SORT_ORDER, PLACEHOLDER_IMAGE};
pub use specs::{SpecValue, Specs};
