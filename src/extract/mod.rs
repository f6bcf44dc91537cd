// src/extract/mod.rs

pub mod results;
pub mod score;
pub mod total;

pub use results::parse_results;
pub use score::parse_score;
pub use total::parse_total;

/// One extracted table: header row (when present) followed by data rows.
pub type Table = Vec<Vec<String>>;

pub(crate) fn row(fields: &[&str]) -> Vec<String> {
    fields.iter().map(|f| f.to_string()).collect()
}
