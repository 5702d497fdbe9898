// Run configuration: probe spans, column names, demo binary, timeout

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

/// How long the demo cluster gets before the run is abandoned.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Inclusive integer probe range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub lo: i64,
    pub hi: i64,
}

impl Span {
    pub fn new(lo: i64, hi: i64) -> Self {
        Span { lo, hi }
    }

    /// Number of probe values in the span.
    ///
    /// Saturates at `u64::MAX` for the full `i64` domain, whose width does
    /// not fit in a `u64`.
    pub fn width(&self) -> u64 {
        self.hi.abs_diff(self.lo).saturating_add(1)
    }

    /// Every probe value in the span, in order.
    pub fn values(&self) -> std::ops::RangeInclusive<i64> {
        self.lo..=self.hi
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}-{}]", self.lo, self.hi)
    }
}

/// Error for span specs that are not `LO:HI` with `LO <= HI`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid span {spec:?}: expected LO:HI with LO <= HI")]
pub struct ParseSpanError {
    spec: String,
}

impl FromStr for Span {
    type Err = ParseSpanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseSpanError {
            spec: s.to_string(),
        };

        let (lo, hi) = s.split_once(':').ok_or_else(err)?;
        let lo: i64 = lo.trim().parse().map_err(|_| err())?;
        let hi: i64 = hi.trim().parse().map_err(|_| err())?;
        if lo > hi {
            return Err(err());
        }

        Ok(Span { lo, hi })
    }
}

/// Everything one verification run needs, resolved up front.
///
/// Passed down the pipeline explicitly; nothing reads process-wide state.
#[derive(Debug, Clone)]
pub struct Config {
    /// Demo database binary to launch.
    pub demo_binary: String,
    /// SQL script fed to the demo cluster.
    pub script: PathBuf,
    /// Column whose histogram has integer upper bounds.
    pub int_column: String,
    /// Column whose histogram has string upper bounds.
    pub string_column: String,
    /// Probe ranges, every integer value inclusive.
    pub spans: Vec<Span>,
    /// Wall-clock bound on the demo invocation.
    pub timeout: Duration,
    /// Replay a captured output file instead of launching the demo.
    pub from_output: Option<PathBuf>,
}

impl Config {
    /// The probe ranges checked when none are given on the command line.
    pub fn default_spans() -> Vec<Span> {
        vec![Span::new(1, 10_000), Span::new(100_000, 110_000)]
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
