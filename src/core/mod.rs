//! Core data types for subsequence search.
//!
//! - [`DnaSequence`]: an immutable, validated sequence over `{A, C, G, T}`
//! - [`SearchResult`]: a best-match record (position + match count) with the
//!   `(-1, -1)` sentinel for "nothing found yet"

pub mod sequence;
pub mod types;

pub use sequence::{DnaSequence, SequenceError, MAX_PATTERN_SIZE, MAX_SEQUENCE_SIZE};
pub use types::{SearchResult, NO_MATCH};
