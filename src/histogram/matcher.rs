//! Bucket membership test
//!
//! Decides whether a probe value lands in a histogram bucket that actually
//! recorded something. One generic routine covers both boundary domains; the
//! domain supplies decoding and ordering through `BucketBound`.

use crate::histogram::HistogramBucket;

/// A bucket boundary domain: decodes the textual upper bound and orders
/// probe values against it.
pub trait BucketBound<'a>: Ord + Sized {
    /// Decode a raw textual upper bound into this domain.
    ///
    /// # Panics
    /// A bound that does not decode means the histogram itself is malformed;
    /// decoding aborts the run rather than degrading into a non-match.
    fn decode(raw: &'a str) -> Self;
}

impl<'a> BucketBound<'a> for i64 {
    fn decode(raw: &'a str) -> Self {
        raw.parse().unwrap_or_else(|err| {
            panic!("could not parse upper bound {:?} as an integer: {}", raw, err)
        })
    }
}

/// String bounds are taken verbatim and ordered lexicographically. Decimal
/// text of differing digit counts does not sort numerically ("10" < "9"),
/// so a histogram over stringified numbers is ordered by its text form, not
/// by the numbers it spells.
impl<'a> BucketBound<'a> for &'a str {
    fn decode(raw: &'a str) -> Self {
        raw
    }
}

/// Report whether `probe` falls in a non-empty bucket.
///
/// `buckets` must be ordered by ascending upper bound. A probe equal to any
/// bucket's upper bound matches unconditionally; `num_eq` is not consulted.
/// A probe strictly inside the open interval between the previous bound and
/// the current one belongs to the current bucket, and matches exactly when
/// that bucket's `num_range` is nonzero — the scan stops there either way,
/// since no later bucket can own the probe. Probes past the last upper bound
/// match nothing.
pub fn in_non_empty_bucket<'a, B>(buckets: &'a [HistogramBucket], probe: B) -> bool
where
    B: BucketBound<'a>,
{
    let mut prev_bound: Option<B> = None;

    for bucket in buckets {
        let bound = B::decode(&bucket.upper_bound);

        // First, check for an exact upper bound match.
        if probe == bound {
            return true;
        }

        // Next, check for a range match: the open window below the current
        // bound, with no lower edge at the first bucket.
        let in_window = match &prev_bound {
            None => probe < bound,
            Some(prev) => *prev < probe && probe < bound,
        };
        if in_window {
            return bucket.num_range > 0;
        }

        prev_bound = Some(bound);
    }

    false
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod matcher_tests;
