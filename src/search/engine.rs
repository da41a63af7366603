use super::normalizer::normalize;
use super::types::{RankedItem, SimilarItem};
use super::vectorizer::VectorSpace;
use crate::catalog::types::Catalog;
use crate::error::{RecommendError, Result};
use std::cmp::Ordering;

/// Ranks every row of `space` against `query`.
///
/// Returns `min(top_n, rows)` items ordered by descending score, ties broken
/// by ascending row index. A query without known terms scores 0 everywhere and
/// therefore yields the first rows in catalog order.
pub fn rank(query: &str, space: &VectorSpace, top_n: usize) -> Result<Vec<RankedItem>> {
    if top_n == 0 {
        return Err(RecommendError::Validation(
            "top_n must be a positive integer".to_string(),
        ));
    }

    let query_vector = space.project(&normalize(query));
    let mut ranked: Vec<RankedItem> = space
        .similarities(&query_vector)
        .into_iter()
        .enumerate()
        .map(|(row, score)| RankedItem { row, score })
        .collect();

    ranked.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then(a.row.cmp(&b.row))
    });
    ranked.truncate(top_n);

    Ok(ranked)
}

/// Process-wide read-only state: the catalog and the space fitted over it.
///
/// Built once at startup and shared behind an `Arc` by every request handler.
#[derive(Debug)]
pub struct Recommender {
    catalog: Catalog,
    space: VectorSpace,
    default_top_n: usize,
}

impl Recommender {
    /// Fits the vector space over the catalog documents.
    pub fn new(catalog: Catalog, default_top_n: usize) -> Result<Self> {
        if default_top_n == 0 {
            return Err(RecommendError::Build(
                "default top_n must be a positive integer".to_string(),
            ));
        }

        let space = VectorSpace::fit(catalog.documents())?;
        tracing::info!(
            "Vector space ready: {} products, {} terms",
            space.len(),
            space.vocabulary_len()
        );

        Ok(Self {
            catalog,
            space,
            default_top_n,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn space(&self) -> &VectorSpace {
        &self.space
    }

    pub fn default_top_n(&self) -> usize {
        self.default_top_n
    }

    /// Ranks the catalog against `query` and maps each row to its product link.
    pub fn recommend(&self, query: &str, top_n: usize) -> Result<Vec<SimilarItem>> {
        rank(query, &self.space, top_n)?
            .into_iter()
            .map(|item| {
                self.catalog
                    .link(item.row)
                    .map(|link| SimilarItem {
                        product_link: link.to_string(),
                    })
                    .ok_or_else(|| {
                        RecommendError::Internal(format!(
                            "ranked row {} is outside the catalog",
                            item.row
                        ))
                    })
            })
            .collect()
    }
}
