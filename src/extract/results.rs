// src/extract/results.rs

use regex::Regex;

use super::{row, Table};

/// Pull every `[RESULT]` record out of the full report text.
///
/// Each record reports one test's throughput and elapsed time, e.g.
/// `[RESULT]       ior-easy-write        12.345678 GiB/s : time 387.121 seconds`.
/// Rows come out in document order. A report with no result lines still
/// yields the header row.
pub fn parse_results(report: &str) -> Table {
    let re = Regex::new(
        r"\[RESULT\].*?(\w+(?:-\w+)+)\s+([\d.]+)\s+(GiB/s|kIOPS)\s+:\s+time\s+([\d.]+)",
    )
    .unwrap();

    let mut table = vec![row(&["Test", "Value", "Unit", "Time (seconds)"])];
    for caps in re.captures_iter(report) {
        let (_, [test, value, unit, time]) = caps.extract();
        table.push(row(&[test, value, unit, time]));
    }
    table
}
