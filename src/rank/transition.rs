//! Damped random-surfer transition model
//!
//! Given the current page, produces a probability distribution over the
//! next page: with probability `damping`, follow one of the page's
//! out-links chosen uniformly; with probability `1 - damping`, teleport
//! to a uniformly random page. A dangling page teleports
//! unconditionally, so the damping factor plays no role for it.

use rand::Rng;

use crate::corpus::csr::Corpus;
use crate::error::{RankError, Result};
use crate::types::{validate_damping, PageId, DEFAULT_DAMPING};

/// The transition model shared by both estimators
///
/// Pure and stateless apart from the damping factor; safe to call
/// concurrently from multiple ranking threads.
#[derive(Debug, Clone, Copy)]
pub struct TransitionModel {
    damping: f64,
}

impl Default for TransitionModel {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
        }
    }
}

impl TransitionModel {
    /// Create a transition model, rejecting damping outside (0, 1)
    pub fn new(damping: f64) -> Result<Self> {
        validate_damping(damping)?;
        Ok(Self { damping })
    }

    /// The damping factor
    pub fn damping(&self) -> f64 {
        self.damping
    }

    /// Probability distribution over the next page from `page`
    ///
    /// A dangling page yields the uniform distribution `1/N`. Otherwise
    /// every page receives the teleportation term `(1 - d)/N`, and each
    /// out-link target an additional `d/L`. The result covers every
    /// corpus page and sums to 1.0.
    ///
    /// `page` must be a valid ID for `corpus`; IDs only come from the
    /// corpus itself. Name-based callers go through
    /// [`distribution_for`](Self::distribution_for).
    pub fn distribution(&self, corpus: &Corpus, page: PageId) -> Distribution {
        let n = corpus.len();
        let links = corpus.out_links(page);

        let probs = if links.is_empty() {
            vec![1.0 / n as f64; n]
        } else {
            let base = (1.0 - self.damping) / n as f64;
            let follow = self.damping / links.len() as f64;
            let mut probs = vec![base; n];
            for &target in links {
                probs[target as usize] += follow;
            }
            probs
        };

        Distribution::new(probs)
    }

    /// Name-resolving variant of [`distribution`](Self::distribution)
    ///
    /// Fails with [`RankError::UnknownPage`] for names outside the
    /// corpus universe.
    pub fn distribution_for(&self, corpus: &Corpus, page: &str) -> Result<Distribution> {
        let id = corpus
            .page_id(page)
            .ok_or_else(|| RankError::UnknownPage(page.to_string()))?;
        Ok(self.distribution(corpus, id))
    }
}

/// A discrete probability distribution over every page in the corpus
///
/// Produced fresh per transition step and discarded after the draw.
/// Alongside the raw probabilities it stores the cumulative prefix
/// sums, so a weighted draw is a single binary search instead of a
/// linear scan over page/weight lists.
#[derive(Debug, Clone)]
pub struct Distribution {
    probs: Vec<f64>,
    cumulative: Vec<f64>,
}

impl Distribution {
    fn new(probs: Vec<f64>) -> Self {
        let mut cumulative = Vec::with_capacity(probs.len());
        let mut total = 0.0;
        for &p in &probs {
            total += p;
            cumulative.push(total);
        }
        Self { probs, cumulative }
    }

    /// Number of pages covered
    pub fn len(&self) -> usize {
        self.probs.len()
    }

    /// True when the distribution covers no pages
    pub fn is_empty(&self) -> bool {
        self.probs.is_empty()
    }

    /// Probability assigned to a page
    pub fn get(&self, page: PageId) -> f64 {
        self.probs.get(page as usize).copied().unwrap_or(0.0)
    }

    /// The raw probabilities, indexed by page ID
    pub fn probs(&self) -> &[f64] {
        &self.probs
    }

    /// Total probability mass (1.0 up to float rounding)
    pub fn sum(&self) -> f64 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    /// Weighted draw: O(log N) binary search over the prefix table
    pub fn sample<R: Rng>(&self, rng: &mut R) -> PageId {
        let needle = rng.gen::<f64>() * self.sum();
        let idx = self.cumulative.partition_point(|&c| c <= needle);
        // Rounding at the upper edge clamps to the last page.
        idx.min(self.probs.len() - 1) as PageId
    }
}
