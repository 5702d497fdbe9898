//! Match counting and the run summary
//!
//! Walks every probe value in the configured spans through both histograms
//! and accumulates the counts the summary lines report. Counting is pure;
//! the caller decides where the summary goes.

use std::fmt;

use crate::config::{Config, Span};
use crate::histogram::{self, Statistics};

/// Outcome of probing both histograms across the configured spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchReport {
    pub int_column: String,
    pub string_column: String,
    pub int_matches: u64,
    pub string_matches: u64,
    pub total: u64,
    pub spans: Vec<Span>,
}

/// Probe every value in the configured spans against both histograms.
///
/// Integer probes use the value directly; string probes use its decimal
/// text.
pub fn count_matches(
    config: &Config,
    int_stats: &Statistics,
    string_stats: &Statistics,
) -> MatchReport {
    let mut int_matches = 0;
    let mut string_matches = 0;
    let mut total = 0;

    for span in &config.spans {
        total += span.width();
        for value in span.values() {
            if histogram::in_non_empty_bucket(&int_stats.histo_buckets, value) {
                int_matches += 1;
            }
            let text = value.to_string();
            if histogram::in_non_empty_bucket(&string_stats.histo_buckets, text.as_str()) {
                string_matches += 1;
            }
        }
    }

    MatchReport {
        int_column: config.int_column.clone(),
        string_column: config.string_column.clone(),
        int_matches,
        string_matches,
        total,
        spans: config.spans.clone(),
    }
}

impl fmt::Display for MatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ranges = self
            .spans
            .iter()
            .map(Span::to_string)
            .collect::<Vec<_>>()
            .join(", ");

        writeln!(
            f,
            "Column '{}' histogram matches {}/{} values in the ranges {}.",
            self.int_column, self.int_matches, self.total, ranges
        )?;
        write!(
            f,
            "Column '{}' histogram matches {}/{} values in the ranges {}.",
            self.string_column, self.string_matches, self.total, ranges
        )
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod report_tests;
