//! Error Types
//!
//! A single error enum shared by the catalog loader, the vector space builder,
//! the ranker and the HTTP boundary. Startup kinds (`Load`, `Build`) abort the
//! process; request kinds (`Validation`, `Internal`) are converted to an HTTP
//! status in `search::handlers`.

use thiserror::Error;

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RecommendError>;

#[derive(Error, Debug)]
pub enum RecommendError {
    /// The catalog file could not be read or is missing required columns.
    #[error("Catalog load failed: {0}")]
    Load(String),

    /// The vector space cannot be fit from the corpus.
    #[error("Vector space build failed: {0}")]
    Build(String),

    /// The request is malformed or carries an invalid parameter.
    #[error("Invalid request: {0}")]
    Validation(String),

    /// Any other failure while serving a request.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RecommendError {
    pub fn is_validation(&self) -> bool {
        matches!(self, RecommendError::Validation(_))
    }
}

impl From<csv::Error> for RecommendError {
    fn from(err: csv::Error) -> Self {
        RecommendError::Load(err.to_string())
    }
}
