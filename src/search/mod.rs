//! Partitioned parallel best-match search.
//!
//! The search splits the subject's starting offsets among independent worker
//! threads, has each worker reduce its share to one local best, and merges
//! all local bests into a single global best through a mutex-guarded record:
//!
//! - [`scoring::score`]: pure per-offset match counting
//! - [`OffsetPartition`]: disjoint interleaved offset assignment
//! - [`worker`]: the per-thread scan-and-submit loop
//! - [`SharedBest`]: the cross-worker record and its exclusion lock
//! - [`SearchEngine`]: configuration validation, spawn, join, and reporting
//!
//! ## Determinism
//!
//! The merge rule is a total order (highest count, then lowest position), so
//! the final result is identical for every worker count and every scheduling
//! of submissions. Intermediate shared values observed without the lock
//! carry no guarantees; only the post-join value is meaningful.
//!
//! ## Example
//!
//! ```rust
//! use subseq_solver::core::DnaSequence;
//! use subseq_solver::search::SearchEngine;
//!
//! let subject = DnaSequence::from_validated(b"AAAA");
//! let pattern = DnaSequence::from_validated(b"AA");
//!
//! let best = SearchEngine::new(&subject, &pattern, 2).unwrap().run().unwrap();
//! // Offsets 0, 1, 2 all score 2; the lowest position wins the tie
//! assert_eq!((best.position, best.count), (0, 2));
//! ```

pub mod engine;
pub mod partition;
pub mod scoring;
pub mod shared;
pub mod worker;

pub use engine::{SearchEngine, SearchError};
pub use partition::OffsetPartition;
pub use shared::SharedBest;
