//! Clothing Similarity Service Library
//!
//! Content-based recommendation over a static product catalog: free-text
//! queries are matched against catalog entries by TF-IDF cosine similarity.
//! The binary (`main.rs`) wires these modules into an HTTP service.
//!
//! ## Modules
//! - **`catalog`**: Loads the catalog CSV and derives one normalized text document
//!   per product.
//! - **`search`**: Text normalization, the TF-IDF vector space, ranking and the
//!   `POST /similar-items` handler.
//! - **`config`**: Command-line and environment configuration.
//! - **`error`**: The error kinds shared across the crate.

pub mod catalog;
pub mod config;
pub mod error;
pub mod search;

use axum::routing::post;
use axum::{Extension, Router};
use search::engine::Recommender;
use search::handlers::{handle_similar_items, ENDPOINT_SIMILAR_ITEMS};
use std::sync::Arc;

/// Builds the HTTP router around the shared read-only recommender.
pub fn router(recommender: Arc<Recommender>) -> Router {
    Router::new()
        .route(ENDPOINT_SIMILAR_ITEMS, post(handle_similar_items))
        .layer(Extension(recommender))
}
