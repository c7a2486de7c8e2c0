//! Shared configuration types and reference constants.

use serde::{Deserialize, Serialize};

use crate::error::{RankError, Result};
use crate::rank::iterative::IterativePageRank;
use crate::rank::sampling::SamplingPageRank;

/// Dense page index into a [`Corpus`](crate::corpus::csr::Corpus).
pub type PageId = u32;

/// Default damping factor: probability of following an out-link rather
/// than teleporting to a uniformly random page.
pub const DEFAULT_DAMPING: f64 = 0.85;

/// Default number of random-surfer samples.
pub const DEFAULT_SAMPLES: usize = 10_000;

/// Default convergence threshold: largest allowed per-page rank change
/// between sweeps before the iterative estimator stops.
pub const DEFAULT_THRESHOLD: f64 = 1e-3;

/// Backstop on iterative sweeps. Unreachable for damping < 1 on any
/// well-formed corpus; the update operator is a contraction.
pub const DEFAULT_MAX_SWEEPS: usize = 10_000;

/// Reject damping factors outside the open interval (0, 1).
pub(crate) fn validate_damping(damping: f64) -> Result<()> {
    if damping > 0.0 && damping < 1.0 {
        Ok(())
    } else {
        Err(RankError::InvalidDampingFactor(damping))
    }
}

/// Ranking configuration shared by the CLI and embedding callers.
///
/// Defaults match the reference constants (damping 0.85, 10000 samples,
/// convergence at 0.001).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RankConfig {
    /// Damping factor for both estimators.
    pub damping: f64,
    /// Sample count for the random-surfer estimator.
    pub samples: usize,
    /// Convergence threshold for the iterative estimator.
    pub threshold: f64,
    /// Sweep backstop for the iterative estimator.
    pub max_sweeps: usize,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            samples: DEFAULT_SAMPLES,
            threshold: DEFAULT_THRESHOLD,
            max_sweeps: DEFAULT_MAX_SWEEPS,
        }
    }
}

impl RankConfig {
    /// Fail fast on parameters that would be rejected at run time.
    pub fn validate(&self) -> Result<()> {
        validate_damping(self.damping)?;
        if self.samples == 0 {
            return Err(RankError::InvalidSampleCount(self.samples));
        }
        Ok(())
    }

    /// Build the sampling estimator this configuration describes.
    pub fn sampling_estimator(&self) -> SamplingPageRank {
        SamplingPageRank::new()
            .with_damping(self.damping)
            .with_samples(self.samples)
    }

    /// Build the iterative estimator this configuration describes.
    pub fn iterative_estimator(&self) -> IterativePageRank {
        IterativePageRank::new()
            .with_damping(self.damping)
            .with_threshold(self.threshold)
            .with_max_sweeps(self.max_sweeps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_reference_constants() {
        let cfg = RankConfig::default();
        assert_eq!(cfg.damping, 0.85);
        assert_eq!(cfg.samples, 10_000);
        assert_eq!(cfg.threshold, 1e-3);
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(RankConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_damping() {
        for damping in [0.0, 1.0, -0.3, 1.7] {
            let cfg = RankConfig {
                damping,
                ..Default::default()
            };
            assert!(matches!(
                cfg.validate(),
                Err(RankError::InvalidDampingFactor(_))
            ));
        }
    }

    #[test]
    fn test_validate_rejects_zero_samples() {
        let cfg = RankConfig {
            samples: 0,
            ..Default::default()
        };
        assert!(matches!(cfg.validate(), Err(RankError::InvalidSampleCount(0))));
    }

    #[test]
    fn test_estimators_inherit_config() {
        let cfg = RankConfig {
            damping: 0.5,
            samples: 42,
            threshold: 1e-6,
            max_sweeps: 77,
        };
        let sampling = cfg.sampling_estimator();
        assert_eq!(sampling.damping, 0.5);
        assert_eq!(sampling.samples, 42);

        let iterative = cfg.iterative_estimator();
        assert_eq!(iterative.damping, 0.5);
        assert_eq!(iterative.threshold, 1e-6);
        assert_eq!(iterative.max_sweeps, 77);
    }

    #[test]
    fn test_serde_roundtrip() {
        let json = r#"{ "damping": 0.6, "samples": 500 }"#;
        let cfg: RankConfig = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.damping, 0.6);
        assert_eq!(cfg.samples, 500);
        // Omitted fields fall back to the defaults.
        assert_eq!(cfg.threshold, DEFAULT_THRESHOLD);

        let back = serde_json::to_value(&cfg).unwrap();
        assert_eq!(back["damping"], 0.6);
        assert_eq!(back["max_sweeps"], 10_000);
    }
}
