//! Histogram statistics model and the bucket membership test
//!
//! `types` mirrors the statistics records the demo cluster emits; `matcher`
//! holds the membership test that decides whether a probe value landed in a
//! non-empty bucket.

mod matcher;
mod types;

// Re-export public types
pub use matcher::{BucketBound, in_non_empty_bucket};
pub use types::{HistogramBucket, Statistics};
