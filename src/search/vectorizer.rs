//! TF-IDF Vector Space
//!
//! Fits a fixed vocabulary and inverse document frequency weights over the
//! catalog corpus and turns every document into an L2-normalized sparse vector.
//!
//! Weighting follows the usual smoothed scheme:
//! `idf(t) = ln((1 + n) / (1 + df(t))) + 1`, raw term counts as TF.
//! Vocabulary indices are assigned in lexicographic term order so that two fits
//! over the same corpus produce identical spaces.

use super::normalizer::terms;
use crate::error::{RecommendError, Result};
use std::collections::{BTreeMap, HashMap};

/// A sparse vector over the vocabulary, stored as `(term index, weight)` pairs
/// sorted by term index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    entries: Vec<(usize, f64)>,
}

impl SparseVector {
    fn from_counts(counts: BTreeMap<usize, f64>) -> Self {
        let mut entries: Vec<(usize, f64)> = counts.into_iter().collect();
        let norm = entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for (_, weight) in entries.iter_mut() {
                *weight /= norm;
            }
        }
        Self { entries }
    }

    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    /// Number of non-zero components.
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    pub fn is_zero(&self) -> bool {
        self.entries.iter().all(|(_, w)| *w == 0.0)
    }

    pub fn norm(&self) -> f64 {
        self.entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt()
    }

    /// Dot product of two sparse vectors (merge over sorted indices).
    pub fn dot(&self, other: &SparseVector) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < self.entries.len() && j < other.entries.len() {
            let (a_idx, a_w) = self.entries[i];
            let (b_idx, b_w) = other.entries[j];
            if a_idx == b_idx {
                sum += a_w * b_w;
                i += 1;
                j += 1;
            } else if a_idx < b_idx {
                i += 1;
            } else {
                j += 1;
            }
        }
        sum
    }
}

/// The fitted vector space. Immutable once `fit` returns.
#[derive(Debug, Clone)]
pub struct VectorSpace {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
    rows: Vec<SparseVector>,
}

impl VectorSpace {
    /// Fits the space over a corpus of normalized documents.
    ///
    /// # Errors
    /// `RecommendError::Build` when the corpus is empty or none of its
    /// documents contains a single term.
    pub fn fit<S: AsRef<str>>(documents: &[S]) -> Result<Self> {
        if documents.is_empty() {
            return Err(RecommendError::Build("corpus is empty".to_string()));
        }

        let mut doc_freq: BTreeMap<&str, usize> = BTreeMap::new();
        for doc in documents {
            let mut seen: Vec<&str> = terms(doc.as_ref()).collect();
            seen.sort_unstable();
            seen.dedup();
            for term in seen {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        if doc_freq.is_empty() {
            return Err(RecommendError::Build(format!(
                "none of the {} documents contains a term",
                documents.len()
            )));
        }

        let n = documents.len() as f64;
        let mut vocabulary = HashMap::with_capacity(doc_freq.len());
        let mut idf = Vec::with_capacity(doc_freq.len());
        for (idx, (term, df)) in doc_freq.into_iter().enumerate() {
            vocabulary.insert(term.to_string(), idx);
            idf.push(((1.0 + n) / (1.0 + df as f64)).ln() + 1.0);
        }

        let mut space = Self {
            vocabulary,
            idf,
            rows: Vec::with_capacity(documents.len()),
        };
        space.rows = documents
            .iter()
            .map(|doc| space.project(doc.as_ref()))
            .collect();

        tracing::debug!(
            "Fitted vector space: {} rows, {} terms",
            space.rows.len(),
            space.vocabulary.len()
        );

        Ok(space)
    }

    /// Projects normalized text into the space. Terms outside the vocabulary
    /// are dropped; text without known terms yields the zero vector.
    pub fn project(&self, normalized: &str) -> SparseVector {
        let mut counts: BTreeMap<usize, f64> = BTreeMap::new();
        for term in terms(normalized) {
            if let Some(&idx) = self.vocabulary.get(term) {
                *counts.entry(idx).or_insert(0.0) += 1.0;
            }
        }

        for (idx, weight) in counts.iter_mut() {
            *weight *= self.idf[*idx];
        }

        SparseVector::from_counts(counts)
    }

    /// Cosine similarity of `query` against every row, in row order.
    ///
    /// Rows and projections are unit length (or zero), so the cosine is the dot
    /// product; it is clamped to `[0, 1]` to absorb rounding.
    pub fn similarities(&self, query: &SparseVector) -> Vec<f64> {
        self.rows
            .iter()
            .map(|row| row.dot(query).clamp(0.0, 1.0))
            .collect()
    }

    /// Number of rows (catalog products).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn contains_term(&self, term: &str) -> bool {
        self.vocabulary.contains_key(term)
    }

    /// IDF weight of `term`, if it is part of the vocabulary.
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.vocabulary.get(term).map(|&idx| self.idf[idx])
    }

    pub fn row(&self, row: usize) -> Option<&SparseVector> {
        self.rows.get(row)
    }
}
