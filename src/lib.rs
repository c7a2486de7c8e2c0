//! `rapid-pagerank`: PageRank estimation for small static hyperlink corpora.
//!
//! Two complementary estimators over an immutable link graph:
//! - [`SamplingPageRank`]: Monte Carlo random-surfer simulation; rank is
//!   visitation frequency over a long weighted random walk.
//! - [`IterativePageRank`]: deterministic fixed-point iteration; rank is
//!   the solution of the PageRank equation, relaxed to convergence.
//!
//! Both draw their step semantics from the shared [`TransitionModel`]:
//! with probability `damping` the surfer follows an out-link, otherwise
//! it teleports to a uniformly random page, and a dangling page
//! teleports unconditionally.
//!
//! Public invariants (must not drift):
//! - **Completeness**: every corpus page appears in every rank table,
//!   including pages with no in-links or out-links.
//! - **Normalization**: rank tables and transition distributions sum
//!   to 1.0 up to float tolerance.
//! - **Determinism**: iteration is deterministic given corpus and
//!   damping; sampling is deterministic given a seeded random source.
//!
//! ```no_run
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use rapid_pagerank::{extract_corpus, Corpus, IterativePageRank, SamplingPageRank};
//!
//! # fn main() -> rapid_pagerank::Result<()> {
//! let raw = extract_corpus("corpus0".as_ref())?;
//! let corpus = Corpus::from_raw_links(&raw)?;
//!
//! let mut rng = StdRng::seed_from_u64(0);
//! let sampled = SamplingPageRank::new().run(&corpus, &mut rng)?;
//! let iterated = IterativePageRank::new().run(&corpus)?;
//!
//! for (page, rank) in iterated.by_name(&corpus) {
//!     println!("  {page}: {rank:.4}");
//! }
//! # let _ = sampled;
//! # Ok(())
//! # }
//! ```

pub mod corpus;
pub mod error;
pub mod extract;
pub mod rank;
pub mod types;

pub use corpus::builder::CorpusBuilder;
pub use corpus::csr::Corpus;
pub use error::{RankError, Result};
pub use extract::html::extract_corpus;
pub use rank::iterative::IterativePageRank;
pub use rank::sampling::SamplingPageRank;
pub use rank::transition::{Distribution, TransitionModel};
pub use rank::RankTable;
pub use types::{PageId, RankConfig};
