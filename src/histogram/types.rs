//! Statistics records as emitted by the demo cluster

use serde::Deserialize;

/// One histogram bucket: counts at and strictly below an upper boundary.
///
/// `num_eq` counts rows exactly equal to `upper_bound`; `num_range` counts
/// rows strictly between the previous bucket's upper bound and this one.
/// The engine omits fields it has no data for, so every field falls back to
/// its zero value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HistogramBucket {
    #[serde(default)]
    pub distinct_range: f64,
    #[serde(default)]
    pub num_eq: i64,
    #[serde(default)]
    pub num_range: i64,
    #[serde(default)]
    pub upper_bound: String,
}

/// Per-column statistics record.
///
/// Buckets arrive ordered by ascending upper bound; the matcher relies on
/// that ordering and never re-sorts. Records for multi-column statistics or
/// columns without histograms simply carry an empty bucket list. Unknown
/// sibling fields (row counts, timestamps, statistic names) are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Statistics {
    #[serde(default)]
    pub columns: Vec<String>,
    #[serde(default)]
    pub histo_buckets: Vec<HistogramBucket>,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
