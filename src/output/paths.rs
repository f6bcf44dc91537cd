// src/output/paths.rs

use std::path::{Path, PathBuf};

/// Destinations for the three CSVs, all alongside the input report.
#[derive(Debug)]
pub struct OutputPaths {
    pub results: PathBuf,
    pub score: PathBuf,
    pub total: PathBuf,
}

/// Derive the CSV paths from the report path: directory kept, trailing
/// `.txt` stripped from the base name.
///
/// Only the results file is namespaced by the report's base name. The
/// score and total names are fixed, so two runs against the same
/// directory overwrite each other's score and total files. Inherited
/// behavior, last writer wins.
pub fn derive_paths(input: &Path) -> OutputPaths {
    let dir = input.parent().unwrap_or_else(|| Path::new(""));
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let base = name.strip_suffix(".txt").unwrap_or(&name);

    OutputPaths {
        results: dir.join(format!("daos_io500_{base}.csv")),
        score: dir.join("daos_io500_score.csv"),
        total: dir.join("daos_io500_total.csv"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_from_txt_report_path() {
        let paths = derive_paths(Path::new("/data/run1.txt"));
        assert_eq!(paths.results, Path::new("/data/daos_io500_run1.csv"));
        assert_eq!(paths.score, Path::new("/data/daos_io500_score.csv"));
        assert_eq!(paths.total, Path::new("/data/daos_io500_total.csv"));
    }

    #[test]
    fn keeps_base_name_without_txt_suffix() {
        let paths = derive_paths(Path::new("/data/summary.log"));
        assert_eq!(paths.results, Path::new("/data/daos_io500_summary.log.csv"));
    }

    #[test]
    fn bare_filename_lands_in_current_directory() {
        let paths = derive_paths(Path::new("run1.txt"));
        assert_eq!(paths.results, Path::new("daos_io500_run1.csv"));
        assert_eq!(paths.score, Path::new("daos_io500_score.csv"));
    }
}
