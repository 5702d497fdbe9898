//! Statistics extraction from raw demo output
//!
//! The demo CLI prints every statement's result as a text table; the final
//! statistics query emits a JSON array wrapped in one extra layer of quoting,
//! with internal quotes doubled. The extractor scans lines from the end,
//! recovers the embedded JSON, parses it, and picks out the per-column
//! records the matcher needs.

use crate::error::HistoprobeError;
use crate::histogram::Statistics;

/// Recover the quoted JSON array from demo output.
///
/// Scans lines last-to-first and takes the first line whose trimmed form
/// starts with `"[` and ends with `]"`; the statistics query runs last, so
/// its payload is the last such line. Strips the surrounding quotes and
/// undoes the doubled-quote escaping.
pub fn find_quoted_json(output: &str) -> Option<String> {
    for line in output.lines().rev() {
        let line = line.trim();
        if line.starts_with("\"[") && line.ends_with("]\"") {
            let inner = &line[1..line.len() - 1];
            return Some(inner.replace("\"\"", "\""));
        }
    }
    None
}

/// Parse recovered JSON text into statistics records.
pub fn parse_statistics(json: &str) -> Result<Vec<Statistics>, HistoprobeError> {
    serde_json::from_str(json).map_err(|err| HistoprobeError::StatisticsParse(err.to_string()))
}

/// Pull all statistics records out of raw demo output.
pub fn statistics_from_output(output: &str) -> Result<Vec<Statistics>, HistoprobeError> {
    let json = find_quoted_json(output).ok_or(HistoprobeError::StatisticsNotFound)?;
    parse_statistics(&json)
}

/// The first record covering exactly the one named column.
///
/// Multi-column records never qualify. If several single-column records name
/// the same column, the first wins.
pub fn single_column_histogram<'a>(
    stats: &'a [Statistics],
    column: &str,
) -> Result<&'a Statistics, HistoprobeError> {
    stats
        .iter()
        .find(|record| record.columns.len() == 1 && record.columns[0] == column)
        .ok_or_else(|| HistoprobeError::HistogramMissing(column.to_string()))
}

#[cfg(test)]
#[path = "extract_tests.rs"]
mod extract_tests;
