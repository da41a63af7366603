//! Catalog Data Types
//!
//! Typed representation of catalog rows and the corpus documents derived from them.

use crate::search::normalizer::normalize;

/// A single catalog cell after type inference.
///
/// Catalog files carry mixed native types in the attribute columns (prices are
/// numbers, size presence is a boolean, ratings may be a nested structure).
/// Every variant has an explicit textual rendering used to build the corpus.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Empty cell.
    Missing,
    Boolean(bool),
    Number(f64),
    /// A JSON object or array. `raw` is the cell exactly as written.
    Structured {
        raw: String,
        value: serde_json::Value,
    },
    Text(String),
}

impl FieldValue {
    /// Infers the type of a raw CSV cell.
    pub fn classify(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return FieldValue::Missing;
        }

        if trimmed.eq_ignore_ascii_case("true") {
            return FieldValue::Boolean(true);
        }
        if trimmed.eq_ignore_ascii_case("false") {
            return FieldValue::Boolean(false);
        }

        // f64 parsing accepts "nan" and "inf", which are words in this catalog
        if let Ok(number) = trimmed.parse::<f64>() {
            if number.is_finite() {
                return FieldValue::Number(number);
            }
        }

        if trimmed.starts_with('{') || trimmed.starts_with('[') {
            if let Ok(value) = serde_json::from_str::<serde_json::Value>(trimmed) {
                if value.is_object() || value.is_array() {
                    return FieldValue::Structured {
                        raw: raw.to_string(),
                        value,
                    };
                }
            }
        }

        FieldValue::Text(raw.to_string())
    }

    /// Stable textual form of the cell, fed to the normalizer.
    pub fn to_display_string(&self) -> String {
        match self {
            FieldValue::Missing => String::new(),
            FieldValue::Boolean(true) => "True".to_string(),
            FieldValue::Boolean(false) => "False".to_string(),
            FieldValue::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    format!("{}", n)
                }
            }
            FieldValue::Structured { raw, .. } => raw.clone(),
            FieldValue::Text(text) => text.clone(),
        }
    }
}

/// One product of the catalog.
#[derive(Debug, Clone)]
pub struct Product {
    pub brand: FieldValue,
    pub discounted_price: FieldValue,
    pub size_inventory_present: FieldValue,
    pub category: FieldValue,
    pub ratings: FieldValue,
    /// Display link returned to clients. Not part of the similarity corpus.
    pub link: String,
}

impl Product {
    /// Builds the corpus document for this product.
    ///
    /// Each attribute is normalized on its own and the results are joined with
    /// single spaces in the order brand, price, size, category, ratings.
    pub fn document(&self) -> String {
        [
            &self.brand,
            &self.discounted_price,
            &self.size_inventory_present,
            &self.category,
            &self.ratings,
        ]
        .iter()
        .map(|field| normalize(&field.to_display_string()))
        .collect::<Vec<String>>()
        .join(" ")
    }
}

/// The loaded catalog: products and their corpus documents, index aligned.
///
/// Built once at startup and never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    documents: Vec<String>,
}

impl Catalog {
    pub fn from_products(products: Vec<Product>) -> Self {
        let documents = products.iter().map(Product::document).collect();
        Self {
            products,
            documents,
        }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn documents(&self) -> &[String] {
        &self.documents
    }

    /// Display link of the product at `row`.
    pub fn link(&self, row: usize) -> Option<&str> {
        self.products.get(row).map(|p| p.link.as_str())
    }
}
