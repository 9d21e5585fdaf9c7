//! Presentation of tally results.

use std::fmt::Write;
use std::path::Path;

use crate::cli::OutputFormat;
use crate::core::types::SUBSTITUTION_ORDER;
use crate::tally::TallyReport;

/// Render a report in the requested format, newline-terminated.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render(
    report: &TallyReport,
    alignment: &Path,
    format: OutputFormat,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => render_json(report, alignment),
        OutputFormat::Tsv => Ok(render_tsv(report)),
    }
}

fn render_text(report: &TallyReport) -> String {
    let mut out = String::new();
    for (pair, count) in report.counts.iter() {
        let _ = writeln!(
            out,
            "The collinearity block for {} as a base pattern and {} as a mismatch is {count}",
            pair.pattern(),
            pair.mismatch()
        );
    }
    out
}

fn render_json(report: &TallyReport, alignment: &Path) -> anyhow::Result<String> {
    let output = serde_json::json!({
        "alignment": alignment.display().to_string(),
        "reference": report.reference,
        "comparison": report.comparison,
        "bounds": report.bounds,
        "reference_records": report.reference_records,
        "other_records": report.other_records,
        "comparison_length": report.comparison_length,
        "counts": report.counts,
        "total": report.counts.total(),
    });

    let mut out = serde_json::to_string_pretty(&output)?;
    out.push('\n');
    Ok(out)
}

fn render_tsv(report: &TallyReport) -> String {
    let header: Vec<String> = SUBSTITUTION_ORDER.iter().map(|p| p.label()).collect();
    let values: Vec<String> = report.counts.iter().map(|(_, c)| c.to_string()).collect();
    format!("{}\n{}\n", header.join("\t"), values.join("\t"))
}
