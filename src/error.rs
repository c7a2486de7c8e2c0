//! Error types for corpus construction and ranking.
//!
//! All failures are deterministic given bad input; there are no
//! transient or retryable conditions anywhere in the crate.

use thiserror::Error;

/// Errors produced by the corpus model, the transition model, and the
/// two rank estimators.
#[derive(Debug, Error)]
pub enum RankError {
    /// The page universe is empty. Both estimators require at least one
    /// page; an empty corpus is never silently treated as a single-page
    /// corpus.
    #[error("corpus contains no pages")]
    EmptyCorpus,

    /// The transition model was asked about a page outside the corpus
    /// universe. This is a programming error, not a recoverable state.
    #[error("page \"{0}\" is not in the corpus")]
    UnknownPage(String),

    /// Damping factor outside the open interval (0, 1).
    #[error("damping factor {0} is outside (0, 1)")]
    InvalidDampingFactor(f64),

    /// The sampling estimator needs at least one sample.
    #[error("sample count must be at least 1, got {0}")]
    InvalidSampleCount(usize),

    /// I/O failure while crawling a corpus directory.
    #[error("failed to read corpus directory: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RankError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(RankError::EmptyCorpus.to_string(), "corpus contains no pages");
        assert_eq!(
            RankError::UnknownPage("ghost.html".into()).to_string(),
            "page \"ghost.html\" is not in the corpus"
        );
        assert_eq!(
            RankError::InvalidDampingFactor(1.5).to_string(),
            "damping factor 1.5 is outside (0, 1)"
        );
        assert_eq!(
            RankError::InvalidSampleCount(0).to_string(),
            "sample count must be at least 1, got 0"
        );
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory");
        let err: RankError = io.into();
        assert!(matches!(err, RankError::Io(_)));
    }
}
