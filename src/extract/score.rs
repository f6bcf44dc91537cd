// src/extract/score.rs

use regex::Regex;

use super::{row, Table};

/// Parse the aggregate bandwidth/IOPS score off a report's summary line.
///
/// Unlike `parse_results`, a miss here yields a completely empty table,
/// header included, so the score CSV downstream comes out as an empty
/// file. That asymmetry is contract.
pub fn parse_score(last_line: &str) -> Table {
    let re =
        Regex::new(r"Bandwidth\s+([\d.]+)\s+(GiB/s)\s+:\s+IOPS\s+([\d.]+)\s+(kiops)").unwrap();

    match re.captures(last_line) {
        Some(caps) => {
            let (_, [bandwidth, bandwidth_unit, iops, iops_unit]) = caps.extract();
            vec![
                row(&["Score", "Value", "Unit"]),
                row(&["Bandwidth", bandwidth, bandwidth_unit]),
                row(&["IOPS", iops, iops_unit]),
            ]
        }
        None => Vec::new(),
    }
}
