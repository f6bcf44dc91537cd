// src/output/write.rs

use anyhow::{Context, Result};
use csv::Writer;
use std::path::Path;

use crate::extract::Table;

/// Serialize one table to `path`, truncating any existing file.
/// An empty table still creates the file, it just stays empty.
pub fn write_table(path: &Path, table: &Table) -> Result<()> {
    let mut writer =
        Writer::from_path(path).with_context(|| format!("could not create `{}`", path.display()))?;
    for row in table {
        writer
            .write_record(row)
            .with_context(|| format!("failed to write `{}`", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("failed to flush `{}`", path.display()))?;
    Ok(())
}
