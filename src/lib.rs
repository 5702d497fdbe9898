//! Checks that a demo SQL cluster's histogram statistics cover probe values.
//!
//! The pipeline is strictly sequential: read the SQL script, run the demo
//! binary (or replay a captured output file), scrape the quoted JSON
//! statistics payload from its output, then count the probe values that land
//! in a non-empty histogram bucket for one integer column and one string
//! column.

pub mod cli;
pub mod config;
pub mod demo;
pub mod error;
pub mod extract;
pub mod histogram;
pub mod report;
pub mod verify;

// Re-export public types
pub use config::{Config, Span};
pub use error::HistoprobeError;
pub use histogram::{BucketBound, HistogramBucket, Statistics, in_non_empty_bucket};
pub use report::MatchReport;
