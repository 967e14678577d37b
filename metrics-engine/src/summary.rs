//! Exact-quantile summaries.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::{BuildError, Quantile};

/// A quantile a summary reports on, along with the tolerance it was configured with.
#[derive(Debug, Clone, PartialEq)]
pub struct QuantileTarget {
    quantile: Quantile,
    tolerance: f64,
}

impl QuantileTarget {
    /// Gets the quantile.
    pub fn quantile(&self) -> &Quantile {
        &self.quantile
    }

    /// Gets the configured tolerance.
    ///
    /// Summaries compute exact quantiles, so the tolerance is informational only.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }
}

#[derive(Debug, Default)]
struct State {
    samples: Vec<f64>,
    sum: f64,
    count: u64,
}

#[derive(Debug)]
struct Inner {
    name: String,
    targets: Vec<QuantileTarget>,
    state: Mutex<State>,
}

/// A summary over raw samples.
///
/// Every observed sample is retained, and quantiles are computed exactly with the nearest-rank
/// method: for `N` samples sorted ascending, quantile `q` is the sample at index `floor(q * N)`,
/// clamped to the last sample. No interpolation is performed.
///
/// Memory usage grows with every observation until [`reset`](Summary::reset) is called, so
/// long-lived summaries should be reset periodically, e.g. after each report.
///
/// Observations, [`sum`](Summary::sum), [`count`](Summary::count) and
/// [`quantiles`](Summary::quantiles) all share one lock. Computing quantiles sorts a copy of the
/// samples while holding it, which blocks concurrent observers for the duration of the sort.
#[derive(Clone, Debug)]
pub struct Summary {
    inner: Arc<Inner>,
}

impl Summary {
    /// Creates a new `Summary`.
    ///
    /// `targets` are `(quantile, tolerance)` pairs. Quantiles are reported in ascending order; if
    /// a quantile is given more than once, the first tolerance given for it is kept.
    ///
    /// # Errors
    ///
    /// If any quantile is not greater than 0.0 and at most 1.0, an error is returned.
    pub fn new<N, I>(name: N, targets: I) -> Result<Summary, BuildError>
    where
        N: Into<String>,
        I: IntoIterator<Item = (f64, f64)>,
    {
        let mut parsed: Vec<QuantileTarget> = Vec::new();
        for (quantile, tolerance) in targets {
            // Written so that NaN is rejected too.
            if !(quantile > 0.0 && quantile <= 1.0) {
                return Err(BuildError::InvalidQuantile { quantile });
            }

            if parsed.iter().all(|t| t.quantile.value() != quantile) {
                parsed.push(QuantileTarget { quantile: Quantile::new(quantile), tolerance });
            }
        }
        parsed.sort_by(|a, b| a.quantile.value().total_cmp(&b.quantile.value()));

        Ok(Summary {
            inner: Arc::new(Inner {
                name: name.into(),
                targets: parsed,
                state: Mutex::new(State { samples: Vec::with_capacity(100), ..State::default() }),
            }),
        })
    }

    /// Gets the name of this summary.
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Gets the configured quantile targets, in ascending order.
    pub fn targets(&self) -> &[QuantileTarget] {
        &self.inner.targets
    }

    /// Records a single sample.
    pub fn observe(&self, sample: f64) {
        let mut state = self.inner.state.lock();
        state.samples.push(sample);
        state.sum += sample;
        state.count += 1;
    }

    /// Gets a copy of all retained samples, in the order they were observed.
    pub fn value(&self) -> Vec<f64> {
        self.inner.state.lock().samples.clone()
    }

    /// Gets the sum of all samples.
    pub fn sum(&self) -> f64 {
        self.inner.state.lock().sum
    }

    /// Gets the number of samples.
    pub fn count(&self) -> u64 {
        self.inner.state.lock().count
    }

    /// Computes the value at each configured quantile.
    ///
    /// Returns an empty vector if no samples have been observed.
    pub fn quantiles(&self) -> Vec<(Quantile, f64)> {
        let state = self.inner.state.lock();
        if state.samples.is_empty() {
            return Vec::new();
        }

        let sorted = sorted_samples(&state.samples);
        self.inner
            .targets
            .iter()
            .map(|target| (target.quantile.clone(), nearest_rank(&sorted, target.quantile.value())))
            .collect()
    }

    /// Computes the value at an arbitrary quantile.
    ///
    /// If no samples have been observed, or if the quantile is less than 0.0 or greater than 1.0,
    /// then the result will be `None`.
    pub fn quantile(&self, q: f64) -> Option<f64> {
        if !(0.0..=1.0).contains(&q) {
            return None;
        }

        let state = self.inner.state.lock();
        if state.samples.is_empty() {
            return None;
        }

        Some(nearest_rank(&sorted_samples(&state.samples), q))
    }

    /// Clears all samples, the sum and the count.
    pub fn reset(&self) {
        let mut state = self.inner.state.lock();
        state.samples.clear();
        state.sum = 0.0;
        state.count = 0;
    }

    pub(crate) fn ptr_eq(&self, other: &Summary) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

fn sorted_samples(samples: &[f64]) -> Vec<f64> {
    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

// `sorted` must be non-empty.
fn nearest_rank(sorted: &[f64], q: f64) -> f64 {
    let index = ((q * sorted.len() as f64) as usize).min(sorted.len() - 1);
    sorted[index]
}
