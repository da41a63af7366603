//! Catalog Module
//!
//! Loads the static product catalog once at startup and derives one normalized
//! text document per product.
//!
//! ## Workflow
//! 1. **Read**: Parses the catalog CSV and locates the required columns by header name.
//! 2. **Classify**: Coerces every attribute cell into a typed `FieldValue`.
//! 3. **Normalize**: Renders each attribute as text and runs it through the normalizer.
//! 4. **Assemble**: Joins the five normalized attributes (brand, price, size, category,
//!    ratings) into the corpus document consumed by the vector space builder.
//!
//! Row order is the identity of a product: the position of a row in the `Catalog`
//! is the join key between similarity scores and product links.

pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;
