use super::types::{Catalog, FieldValue, Product};
use crate::error::{RecommendError, Result};
use std::io::Read;
use std::path::Path;

pub const COLUMN_BRAND: &str = "product-brand";
pub const COLUMN_DISCOUNTED_PRICE: &str = "product-discountedPrice";
pub const COLUMN_SIZE_INVENTORY_PRESENT: &str = "product-sizeInventoryPresent";
pub const COLUMN_CATEGORY: &str = "product-category";
pub const COLUMN_RATINGS: &str = "product-ratingsContainer";
pub const COLUMN_LINK: &str = "product-base href";

/// Positions of the required columns inside a CSV record.
struct ColumnLayout {
    brand: usize,
    discounted_price: usize,
    size_inventory_present: usize,
    category: usize,
    ratings: usize,
    link: usize,
}

impl ColumnLayout {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|header| header.trim() == name)
                .ok_or_else(|| RecommendError::Load(format!("missing required column '{}'", name)))
        };

        Ok(Self {
            brand: find(COLUMN_BRAND)?,
            discounted_price: find(COLUMN_DISCOUNTED_PRICE)?,
            size_inventory_present: find(COLUMN_SIZE_INVENTORY_PRESENT)?,
            category: find(COLUMN_CATEGORY)?,
            ratings: find(COLUMN_RATINGS)?,
            link: find(COLUMN_LINK)?,
        })
    }
}

/// Loads the catalog from a CSV file on disk.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let file = std::fs::File::open(path).map_err(|e| {
        RecommendError::Load(format!("cannot open catalog {}: {}", path.display(), e))
    })?;

    let catalog = load_catalog_from_reader(file)?;
    tracing::info!(
        "Loaded {} products from catalog {}",
        catalog.len(),
        path.display()
    );
    Ok(catalog)
}

/// Loads the catalog from any CSV source. Row order is preserved.
pub fn load_catalog_from_reader<R: Read>(source: R) -> Result<Catalog> {
    let mut reader = csv::Reader::from_reader(source);
    let layout = ColumnLayout::from_headers(reader.headers()?)?;

    let mut products = Vec::new();
    for record in reader.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let cell = |idx: usize| record.get(idx).unwrap_or("");

        let link = cell(layout.link).trim();
        if link.is_empty() {
            return Err(RecommendError::Load(format!(
                "line {}: empty '{}'",
                line, COLUMN_LINK
            )));
        }

        products.push(Product {
            brand: FieldValue::classify(cell(layout.brand)),
            discounted_price: FieldValue::classify(cell(layout.discounted_price)),
            size_inventory_present: FieldValue::classify(cell(layout.size_inventory_present)),
            category: FieldValue::classify(cell(layout.category)),
            ratings: FieldValue::classify(cell(layout.ratings)),
            link: link.to_string(),
        });
    }

    if products.is_empty() {
        tracing::warn!("Catalog contains no products");
    }

    Ok(Catalog::from_products(products))
}
