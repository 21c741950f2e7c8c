use anyhow::Context;
use serde::Serialize;

use crate::cli::{Cli, OutputFormat};
use crate::core::sequence::{MAX_PATTERN_SIZE, MAX_SEQUENCE_SIZE};
use crate::core::types::SearchResult;
use crate::parsing::read_sequence_file;
use crate::search::SearchEngine;

/// Final report printed on success
#[derive(Debug, Serialize)]
pub struct SearchReport {
    pub workers: usize,
    pub position: i64,
    pub count: i64,
}

impl SearchReport {
    #[must_use]
    pub fn new(workers: usize, result: SearchResult) -> Self {
        Self {
            workers,
            position: result.position,
            count: result.count,
        }
    }
}

/// Execute the search command.
///
/// # Errors
///
/// Returns an error if either input file cannot be read or validated, if
/// the worker count does not fit the sequence, or if any worker fails. No
/// report is printed in the failure case.
pub fn run(args: &Cli) -> anyhow::Result<()> {
    let subject = read_sequence_file(&args.sequence, MAX_SEQUENCE_SIZE)
        .context("reading sequence file")?;
    let pattern = read_sequence_file(&args.subsequence, MAX_PATTERN_SIZE)
        .context("reading subsequence file")?;

    if args.verbose {
        eprintln!(
            "Searching {} bases for a {}-base subsequence",
            subject.len(),
            pattern.len()
        );
    }

    let workers = args.workers as usize;
    let engine = SearchEngine::new(&subject, &pattern, workers)?;
    let result = engine.run().context("search failed")?;

    let report = SearchReport::new(workers, result);
    match args.format {
        OutputFormat::Text => print_text(&report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}

fn print_text(report: &SearchReport) {
    println!("Number of Workers:   {}", report.workers);
    println!("Best Match Position: {}", report.position);
    println!("Best Match Count:    {}", report.count);
}
