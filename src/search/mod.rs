//! Search Service Module
//!
//! Content-based retrieval over the product catalog.
//!
//! ## Overview
//! Catalog documents are fitted into a TF-IDF vector space once at startup. Each
//! query is normalized with the same function as the corpus, projected into the
//! fixed vocabulary, and compared to every product by cosine similarity.
//!
//! ## Submodules
//! - **`normalizer`**: Text cleanup shared by corpus and queries.
//! - **`vectorizer`**: Vocabulary, IDF weights and sparse document vectors.
//! - **`engine`**: Ranking and the shared `Recommender` state.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`types`**: Data Transfer Objects (DTOs) for API communication.

pub mod engine;
pub mod handlers;
pub mod normalizer;
pub mod types;
pub mod vectorizer;
