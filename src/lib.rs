// src/lib.rs

pub mod extract;
pub mod output;

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use output::OutputPaths;

/// Convert one IO500 text report into its three CSV files.
///
/// Reads the report fully into memory, runs the three extractors (results
/// over the whole document, score and total over the final line only) and
/// writes each table next to the input. Returns the derived output paths.
pub fn convert(input: &Path) -> Result<OutputPaths> {
    let report = fs::read_to_string(input)
        .with_context(|| format!("failed to read `{}`", input.display()))?;

    // The last line carries the score and total.
    let last_line = report.lines().last().unwrap_or("");

    let results = extract::parse_results(&report);
    let score = extract::parse_score(last_line);
    let total = extract::parse_total(last_line);

    let paths = output::derive_paths(input);
    output::write_table(&paths.results, &results)?;
    output::write_table(&paths.score, &score)?;
    output::write_table(&paths.total, &total)?;

    Ok(paths)
}
