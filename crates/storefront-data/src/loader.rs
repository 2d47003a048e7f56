//! Dataset loading.

use std::path::Path;

use storefront_catalog::Dataset;

use crate::error::DataError;

const EMBEDDED_CATEGORIES: &str = include_str!("../data/categories.json");
const EMBEDDED_PRODUCTS: &str = include_str!("../data/products.json");

/// The sample catalog compiled into the crate.
pub fn embedded_dataset() -> Result<Dataset, DataError> {
    let dataset = Dataset::from_json(EMBEDDED_CATEGORIES, EMBEDDED_PRODUCTS)?;
    tracing::info!(
        categories = dataset.categories().len(),
        products = dataset.products().len(),
        "loaded embedded catalog"
    );
    Ok(dataset)
}

/// Load both datasets from JSON files.
pub fn load_dataset(categories_path: &Path, products_path: &Path) -> Result<Dataset, DataError> {
    let categories = read(categories_path)?;
    let products = read(products_path)?;
    let dataset = Dataset::from_json(&categories, &products)?;

    tracing::info!(
        categories = dataset.categories().len(),
        products = dataset.products().len(),
        path = %products_path.display(),
        "loaded catalog from disk"
    );
    Ok(dataset)
}

fn read(path: &Path) -> Result<String, DataError> {
    std::fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_dataset_is_valid() {
        let dataset = embedded_dataset().unwrap();
        assert!(!dataset.categories().is_empty());
        assert!(!dataset.products().is_empty());
    }

    #[test]
    fn test_embedded_products_reference_known_categories() {
        let dataset = embedded_dataset().unwrap();
        for product in dataset.products() {
            for category_id in &product.category_ids {
                assert!(
                    dataset.categories().iter().any(|c| &c.id == category_id),
                    "{} references unknown category {}",
                    product.slug,
                    category_id
                );
            }
        }
    }

    #[test]
    fn test_missing_file() {
        let err = load_dataset(Path::new("/nonexistent/categories.json"), Path::new("/nonexistent/products.json"))
            .unwrap_err();
        assert!(matches!(err, DataError::Io { .. }));
    }
}
