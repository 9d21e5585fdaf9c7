use clap::Parser;
use tracing_subscriber::EnvFilter;

use ref_tally::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("ref_tally=debug,info")
    } else {
        EnvFilter::new("ref_tally=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    cli::tally::run(&cli)
}
