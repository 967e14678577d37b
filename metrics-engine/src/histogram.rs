//! Bucketed histograms.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::BuildError;

#[derive(Debug)]
struct State {
    count: u64,
    sum: f64,
    buckets: Vec<u64>,
}

#[derive(Debug)]
struct Inner {
    name: String,
    bounds: Vec<f64>,
    state: Mutex<State>,
}

/// A bucketed histogram.
///
/// This histogram tracks the number of samples that fall into pre-defined buckets, rather than
/// exposing any sort of quantiles. Buckets are cumulative: a sample is counted in every bucket
/// whose upper bound is greater than or equal to the sample, so one observation may increment
/// several buckets.
///
/// ## Samples above the highest bound
///
/// There is no overflow ("+Inf") bucket. A sample larger than the highest bound is added to
/// [`sum`](Histogram::sum) and [`count`](Histogram::count) but to no bucket, so the last bucket
/// count can be lower than `count`. Callers that need the overflow can derive it as
/// `count - last_bucket`, or pass `f64::INFINITY` as a bound.
///
/// ## Concurrency
///
/// Sum, count and bucket counts are updated together under a single lock per observation. Each
/// read accessor takes the lock on its own, so reading `sum` and then `count` may observe two
/// different instants. [`bucket_counts`](Histogram::bucket_counts) reads bounds and counts
/// consistently.
#[derive(Clone, Debug)]
pub struct Histogram {
    inner: Arc<Inner>,
}

impl Histogram {
    /// Creates a new `Histogram`.
    ///
    /// `bounds` are sorted ascending; they do not need to be given in order.
    ///
    /// # Errors
    ///
    /// If `bounds` is empty, or if any bound is `NaN`, an error is returned.
    pub fn new<N: Into<String>>(name: N, bounds: &[f64]) -> Result<Histogram, BuildError> {
        if bounds.is_empty() {
            return Err(BuildError::EmptyBuckets);
        }

        if let Some(bound) = bounds.iter().find(|b| b.is_nan()) {
            return Err(BuildError::InvalidBucketBound { bound: *bound });
        }

        let mut bounds = Vec::from(bounds);
        bounds.sort_by(f64::total_cmp);

        let buckets = vec![0u64; bounds.len()];

        Ok(Histogram {
            inner: Arc::new(Inner {
                name: name.into(),
                bounds,
                state: Mutex::new(State { count: 0, sum: 0.0, buckets }),
            }),
        })
    }

    /// Gets the name of this histogram.
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Records a single sample.
    pub fn observe(&self, sample: f64) {
        let mut state = self.inner.state.lock();
        state.sum += sample;
        state.count += 1;

        // Add the sample to every bucket where the value is less than or equal to the bound.
        for (bucket, bound) in state.buckets.iter_mut().zip(self.inner.bounds.iter()) {
            if sample <= *bound {
                *bucket += 1;
            }
        }
    }

    /// Gets the per-bucket sample counts, in the same order as [`buckets`](Histogram::buckets).
    pub fn value(&self) -> Vec<u64> {
        self.inner.state.lock().buckets.clone()
    }

    /// Gets the sum of all samples.
    pub fn sum(&self) -> f64 {
        self.inner.state.lock().sum
    }

    /// Gets the sample count, including samples above the highest bound.
    pub fn count(&self) -> u64 {
        self.inner.state.lock().count
    }

    /// Gets the bucket upper bounds, in ascending order.
    pub fn buckets(&self) -> Vec<f64> {
        self.inner.bounds.clone()
    }

    /// Gets the buckets.
    ///
    /// Buckets are tuples, where the first element is the bucket limit itself, and the second
    /// element is the count of samples in that bucket.
    pub fn bucket_counts(&self) -> Vec<(f64, u64)> {
        let state = self.inner.state.lock();
        self.inner.bounds.iter().copied().zip(state.buckets.iter().copied()).collect()
    }

    pub(crate) fn ptr_eq(&self, other: &Histogram) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}
