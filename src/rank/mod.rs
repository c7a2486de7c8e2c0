//! Rank estimators
//!
//! This module provides the sampling (Monte Carlo) and iterative
//! (fixed-point) PageRank estimators and their shared output type.

pub mod iterative;
pub mod sampling;
pub mod transition;

use serde::Serialize;

use crate::corpus::csr::Corpus;
use crate::types::PageId;

/// Result of a rank estimation
///
/// Holds one score per corpus page, summing to 1.0. The two estimators
/// produce independently owned tables; their values may differ.
#[derive(Debug, Clone, Serialize)]
pub struct RankTable {
    /// Scores for each page (indexed by page ID)
    pub scores: Vec<f64>,
    /// Rounds performed: sweeps for iteration, counted samples for sampling
    pub rounds: usize,
    /// Final convergence delta (0.0 for sampling)
    pub delta: f64,
    /// Whether the estimator converged (always true for sampling)
    pub converged: bool,
}

impl RankTable {
    /// Create a new rank table
    pub fn new(scores: Vec<f64>, rounds: usize, delta: f64, converged: bool) -> Self {
        Self {
            scores,
            rounds,
            delta,
            converged,
        }
    }

    /// Get the score for a specific page
    pub fn score(&self, page: PageId) -> f64 {
        self.scores.get(page as usize).copied().unwrap_or(0.0)
    }

    /// Sum of all scores
    pub fn sum(&self) -> f64 {
        self.scores.iter().sum()
    }

    /// Get top N pages by score
    pub fn top_n(&self, n: usize) -> Vec<(PageId, f64)> {
        let mut indexed: Vec<_> = self
            .scores
            .iter()
            .enumerate()
            .map(|(i, &s)| (i as PageId, s))
            .collect();
        indexed.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap());
        indexed.truncate(n);
        indexed
    }

    /// Materialize (name, score) pairs sorted lexicographically by name
    ///
    /// Sorting is a presentation concern; the table itself is
    /// order-irrelevant.
    pub fn by_name(&self, corpus: &Corpus) -> Vec<(String, f64)> {
        let mut pairs: Vec<(String, f64)> = corpus
            .pages()
            .map(|p| (corpus.name(p).to_string(), self.score(p)))
            .collect();
        pairs.sort_by(|a, b| a.0.cmp(&b.0));
        pairs
    }
}
