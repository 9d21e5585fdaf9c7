use anyhow::Context;
use tracing::info;

use crate::cli::{output, Cli};
use crate::parsing;
use crate::tally;

/// Execute a tally run
///
/// # Errors
///
/// Returns an error if the alignment cannot be read or parsed, or if its
/// records cannot be compared.
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let records = parsing::parse_alignment_file(&cli.alignment)
        .with_context(|| format!("Failed to read alignment '{}'", cli.alignment.display()))?;

    let options = cli.tally_options();
    info!(
        records = records.len(),
        comparison = %options.comparison,
        bounds = %options.bounds,
        "starting tally"
    );

    let report = tally::run(&records, &cli.refsequence, options)
        .with_context(|| format!("Failed to tally '{}'", cli.alignment.display()))?;

    let rendered = output::render(&report, &cli.alignment, cli.format)?;
    print!("{rendered}");

    Ok(())
}
