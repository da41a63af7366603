use serde::{Deserialize, Serialize};

/// One ranked catalog row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedItem {
    pub row: usize,
    pub score: f64,
}

/// Body of `POST /similar-items`.
///
/// Both fields are optional at the serde level so that a missing `input_text`
/// is reported as a validation error instead of an extractor rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct SimilarItemsRequest {
    pub input_text: Option<String>,
    pub top_n: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarItem {
    pub product_link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
