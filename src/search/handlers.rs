use super::engine::Recommender;
use super::types::{ErrorResponse, SimilarItem, SimilarItemsRequest};
use crate::error::{RecommendError, Result};
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::{Extension, Json};
use std::sync::Arc;

pub const ENDPOINT_SIMILAR_ITEMS: &str = "/similar-items";

/// Message returned for every failure that is not the caller's fault.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred.";

/// Message returned when the body cannot be read as a request.
pub const INVALID_BODY_MESSAGE: &str = "Invalid request body.";

pub async fn handle_similar_items(
    Extension(recommender): Extension<Arc<Recommender>>,
    payload: std::result::Result<Json<SimilarItemsRequest>, JsonRejection>,
) -> std::result::Result<Json<Vec<SimilarItem>>, (StatusCode, Json<ErrorResponse>)> {
    let outcome = payload
        .map_err(|rejection| {
            tracing::warn!("API Rejected body: {}", rejection.body_text());
            RecommendError::Validation(INVALID_BODY_MESSAGE.to_string())
        })
        .and_then(|Json(req)| find_similar_items(&recommender, req));

    match outcome {
        Ok(items) => Ok(Json(items)),
        Err(err) => Err(error_response(err)),
    }
}

/// Validates the request, ranks the catalog and logs the exchange.
pub fn find_similar_items(
    recommender: &Recommender,
    req: SimilarItemsRequest,
) -> Result<Vec<SimilarItem>> {
    let input_text = req
        .input_text
        .ok_or_else(|| RecommendError::Validation("input_text is required".to_string()))?;
    let top_n = resolve_top_n(req.top_n, recommender.default_top_n())?;

    let items = recommender.recommend(&input_text, top_n)?;

    tracing::info!("API Request: input_text={}, top_n={}", input_text, top_n);
    tracing::info!("API Response: {:?}", items);

    Ok(items)
}

/// Applies the default and rejects non-positive values.
pub fn resolve_top_n(requested: Option<i64>, default: usize) -> Result<usize> {
    match requested {
        None => Ok(default),
        Some(n) if n > 0 => usize::try_from(n)
            .map_err(|_| RecommendError::Validation(format!("top_n {} is too large", n))),
        Some(n) => Err(RecommendError::Validation(format!(
            "top_n must be a positive integer, got {}",
            n
        ))),
    }
}

/// Maps an error to its HTTP status. Only validation messages reach the caller.
pub fn error_response(err: RecommendError) -> (StatusCode, Json<ErrorResponse>) {
    match err {
        RecommendError::Validation(message) => {
            tracing::warn!("API Rejected: {}", message);
            (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: message }))
        }
        other => {
            tracing::error!("API Error: {}", other);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: GENERIC_ERROR_MESSAGE.to_string(),
                }),
            )
        }
    }
}
