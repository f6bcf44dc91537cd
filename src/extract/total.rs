// src/extract/total.rs

use regex::Regex;

use super::{row, Table};

/// Parse the aggregate `TOTAL` score off a report's summary line.
/// A miss yields an empty table, same policy as `parse_score`.
pub fn parse_total(last_line: &str) -> Table {
    let re = Regex::new(r"TOTAL\s+([\d.]+)").unwrap();

    match re.captures(last_line) {
        Some(caps) => {
            let (_, [value]) = caps.extract();
            vec![row(&["Total"]), row(&[value])]
        }
        None => Vec::new(),
    }
}
