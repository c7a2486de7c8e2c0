//! Deterministic PageRank via fixed-point iteration
//!
//! Solves the PageRank equation by repeated relaxation until the
//! largest per-page change falls under the convergence threshold. The
//! update operator is a contraction for damping < 1, so the sweep loop
//! terminates on any corpus with at least one page.

use tracing::debug;

use super::RankTable;
use crate::corpus::csr::Corpus;
use crate::error::Result;
use crate::types::{validate_damping, DEFAULT_DAMPING, DEFAULT_MAX_SWEEPS, DEFAULT_THRESHOLD};

/// Fixed-point iteration estimator
#[derive(Debug, Clone)]
pub struct IterativePageRank {
    /// Damping factor (typically 0.85)
    pub damping: f64,
    /// Convergence threshold on the largest per-page change
    pub threshold: f64,
    /// Backstop on the number of sweeps
    pub max_sweeps: usize,
}

impl Default for IterativePageRank {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            threshold: DEFAULT_THRESHOLD,
            max_sweeps: DEFAULT_MAX_SWEEPS,
        }
    }
}

impl IterativePageRank {
    /// Create a new IterativePageRank with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the convergence threshold
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the sweep backstop
    pub fn with_max_sweeps(mut self, max_sweeps: usize) -> Self {
        self.max_sweeps = max_sweeps;
        self
    }

    /// Run the fixed-point iteration
    ///
    /// Ranks start uniform at `1/N`. Each sweep computes
    /// `new[p] = (1 - d)/N + d * Σ contribution(i, p)`, where a page
    /// with out-links contributes `rank/out_degree` to each target and
    /// a dangling page contributes `rank/N` to every page. The new
    /// table is computed entirely from the previous sweep's table and
    /// swapped in whole after the sweep.
    ///
    /// Convergence compares the absolute per-page change, so a sweep of
    /// many small decreases cannot mask one above-threshold increase.
    pub fn run(&self, corpus: &Corpus) -> Result<RankTable> {
        validate_damping(self.damping)?;

        let n = corpus.len();
        let d = self.damping;
        let teleport = (1.0 - d) / n as f64;
        let dangling = corpus.dangling_pages();

        let mut ranks = vec![1.0 / n as f64; n];
        let mut new_ranks = vec![0.0; n];
        let mut sweeps = 0;
        let mut delta = f64::MAX;

        while sweeps < self.max_sweeps && delta > self.threshold {
            sweeps += 1;

            // Dangling pages spread their rank over every page.
            let dangling_mass: f64 = dangling.iter().map(|&p| ranks[p as usize]).sum();
            new_ranks.fill(teleport + d * dangling_mass / n as f64);

            // Push each page's damped rank share along its out-links.
            for page in corpus.pages() {
                let links = corpus.out_links(page);
                if !links.is_empty() {
                    let share = d * ranks[page as usize] / links.len() as f64;
                    for &target in links {
                        new_ranks[target as usize] += share;
                    }
                }
            }

            // Largest absolute per-page change between sweeps.
            delta = ranks
                .iter()
                .zip(new_ranks.iter())
                .map(|(old, new)| (old - new).abs())
                .fold(0.0_f64, f64::max);

            std::mem::swap(&mut ranks, &mut new_ranks);
            debug!(sweeps, delta, "rank sweep");
        }

        // Guard against drift from repeated float summation.
        let sum: f64 = ranks.iter().sum();
        if sum > 0.0 {
            for rank in &mut ranks {
                *rank /= sum;
            }
        }

        Ok(RankTable::new(ranks, sweeps, delta, delta <= self.threshold))
    }
}
