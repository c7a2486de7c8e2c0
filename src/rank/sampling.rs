//! Monte Carlo PageRank estimation
//!
//! Runs a long random walk over the transition model and estimates each
//! page's rank as its visitation frequency. Inherently stochastic: the
//! caller injects the random source, so tests can seed it for
//! reproducible runs. An optional rayon path splits the walk budget
//! across independent walks and merges the visit tallies.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use tracing::debug;

use super::transition::TransitionModel;
use super::RankTable;
use crate::corpus::csr::Corpus;
use crate::error::{RankError, Result};
use crate::types::{PageId, DEFAULT_DAMPING, DEFAULT_SAMPLES};

/// Number of independent walks used by the parallel path
const PARALLEL_WALKS: usize = 8;

/// Random-surfer sampling estimator
#[derive(Debug, Clone)]
pub struct SamplingPageRank {
    /// Damping factor (typically 0.85)
    pub damping: f64,
    /// Total number of samples, including the uncounted start page
    pub samples: usize,
}

impl Default for SamplingPageRank {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            samples: DEFAULT_SAMPLES,
        }
    }
}

impl SamplingPageRank {
    /// Create a new SamplingPageRank with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the sample count
    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    /// Run the random-surfer walk
    ///
    /// The start page is drawn uniformly and is NOT counted; only pages
    /// reached via a transition step are tallied, so `samples - 1` draws
    /// produce `samples - 1` counted visits. Each page's rank is its
    /// visit count over the counted total, and pages never visited
    /// appear at 0.0.
    ///
    /// Boundary: with `samples == 1` there is no transition step to
    /// count. The walk then tallies the uniformly drawn start page once,
    /// keeping every page present and the table summing to 1.0.
    pub fn run<R: Rng>(&self, corpus: &Corpus, rng: &mut R) -> Result<RankTable> {
        let transition = TransitionModel::new(self.damping)?;
        if self.samples == 0 {
            return Err(RankError::InvalidSampleCount(self.samples));
        }

        let n = corpus.len();
        let mut visits = vec![0u64; n];
        let mut current = rng.gen_range(0..n) as PageId;

        let steps = self.samples - 1;
        if steps == 0 {
            visits[current as usize] = 1;
        }
        for _ in 0..steps {
            let dist = transition.distribution(corpus, current);
            current = dist.sample(&mut *rng);
            visits[current as usize] += 1;
        }

        Ok(Self::tally_to_table(&visits))
    }

    /// Run the walk budget as independent parallel walks
    ///
    /// The `samples - 1` transition steps are split across
    /// [`PARALLEL_WALKS`] walks on the rayon pool. Each walk draws its
    /// own uncounted uniform start and owns an RNG seeded from `seed`
    /// and the walk index, so the result is deterministic given `seed`.
    /// Visit tallies merge by summation and the final division uses the
    /// total counted across all walks, preserving normalization.
    pub fn run_parallel(&self, corpus: &Corpus, seed: u64) -> Result<RankTable> {
        let transition = TransitionModel::new(self.damping)?;
        if self.samples == 0 {
            return Err(RankError::InvalidSampleCount(self.samples));
        }

        let steps = self.samples - 1;
        if steps == 0 {
            // Degenerate single-sample budget: same contract as the
            // serial path.
            let mut rng = StdRng::seed_from_u64(seed);
            return self.run(corpus, &mut rng);
        }

        let n = corpus.len();
        let walks = PARALLEL_WALKS.min(steps);
        let base = steps / walks;
        let extra = steps % walks;

        let tallies: Vec<Vec<u64>> = (0..walks)
            .into_par_iter()
            .map(|walk| {
                let mut rng = StdRng::seed_from_u64(seed.wrapping_add(walk as u64));
                let mut visits = vec![0u64; n];
                let mut current = rng.gen_range(0..n) as PageId;
                let share = base + usize::from(walk < extra);
                for _ in 0..share {
                    let dist = transition.distribution(corpus, current);
                    current = dist.sample(&mut rng);
                    visits[current as usize] += 1;
                }
                visits
            })
            .collect();

        let mut visits = vec![0u64; n];
        for tally in tallies {
            for (page, count) in tally.into_iter().enumerate() {
                visits[page] += count;
            }
        }

        debug!(walks, steps, "parallel sampling walks merged");
        Ok(Self::tally_to_table(&visits))
    }

    fn tally_to_table(visits: &[u64]) -> RankTable {
        let counted: u64 = visits.iter().sum();
        debug!(counted, "sampling walk finished");
        let scores = visits
            .iter()
            .map(|&v| v as f64 / counted as f64)
            .collect();
        RankTable::new(scores, counted as usize, 0.0, true)
    }
}
