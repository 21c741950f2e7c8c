//! Command-line interface for subseq-solver.
//!
//! ## Usage
//!
//! ```text
//! # Search sequence.txt for the best match of subsequence.txt with 4 workers
//! subseq-solver sequence.txt subsequence.txt 4
//!
//! # JSON output for scripting
//! subseq-solver sequence.txt subsequence.txt 4 --format json
//! ```

use std::path::PathBuf;

use clap::Parser;

pub mod search;

#[derive(Parser)]
#[command(name = "subseq-solver")]
#[command(version)]
#[command(about = "Find the best match of a DNA subsequence within a larger sequence")]
#[command(
    long_about = "subseq-solver searches a DNA sequence for the best-matching placement of a shorter subsequence.\n\nThe search space is split across parallel workers; each worker scores an interleaved share of the starting offsets and the results merge deterministically: highest match count wins, ties go to the lowest position."
)]
pub struct Cli {
    /// File containing the sequence to search (max 1 MiB of bases)
    pub sequence: PathBuf,

    /// File containing the subsequence to search for (max 10 KiB of bases)
    pub subsequence: PathBuf,

    /// Number of parallel workers (must not exceed the sequence length)
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub workers: u32,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
