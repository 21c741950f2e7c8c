use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod core;
mod parsing;
mod search;

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if args.verbose {
        EnvFilter::new("subseq_solver=debug,info")
    } else {
        EnvFilter::new("subseq_solver=warn")
    };

    // Logs go to stderr; stdout carries only the report
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    cli::search::run(&args)
}
