//! # subseq-solver
//!
//! A library for finding the best match of a short DNA subsequence within a
//! larger sequence, in parallel.
//!
//! Given a **subject** sequence and a shorter **pattern**, every starting
//! offset of the subject is scored by counting the symbols that match the
//! pattern there (comparison truncates at the subject boundary). The search
//! space is partitioned across worker threads in interleaved strides so load
//! stays balanced and no offset is scored twice; each worker reduces its
//! share to one local best and merges it into a mutex-guarded global record.
//!
//! The merge rule is a total order: **highest match count wins, ties go to
//! the lowest position**. The final result is therefore deterministic for
//! any worker count and any scheduling of the workers.
//!
//! ## Example
//!
//! ```rust
//! use subseq_solver::core::DnaSequence;
//! use subseq_solver::search::SearchEngine;
//!
//! let subject = DnaSequence::from_raw(b"GATTACA", 1024).unwrap();
//! let pattern = DnaSequence::from_raw(b"ACA", 1024).unwrap();
//!
//! let engine = SearchEngine::new(&subject, &pattern, 2).unwrap();
//! let best = engine.run().unwrap();
//!
//! assert_eq!(best.position, 4);
//! assert_eq!(best.count, 3);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Sequence and result types
//! - [`search`]: Partitioning, scoring, workers, and the search coordinator
//! - [`parsing`]: Reading and filtering sequence files
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod parsing;
pub mod search;

// Re-export commonly used types for convenience
pub use crate::core::sequence::DnaSequence;
pub use crate::core::types::{SearchResult, NO_MATCH};
pub use crate::search::engine::{SearchEngine, SearchError};
