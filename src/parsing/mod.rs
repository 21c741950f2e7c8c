//! Input parsing: turning sequence files into validated [`DnaSequence`]s.
//!
//! [`DnaSequence`]: crate::core::DnaSequence

pub mod dna;

pub use dna::{read_sequence_file, ReadError};
