use std::sync::{atomic::Ordering, Arc};

use crate::atomics::AtomicI64;

#[derive(Debug)]
struct Inner {
    name: String,
    value: AtomicI64,
}

/// A signed, point-in-time value.
///
/// Every operation is a single atomic instruction. Concurrent calls to [`set`](Gauge::set) are
/// last-write-wins; no ordering is implied between callers beyond that.
#[derive(Clone, Debug)]
pub struct Gauge {
    inner: Arc<Inner>,
}

impl Gauge {
    /// Creates a new `Gauge` starting at zero.
    pub fn new<N: Into<String>>(name: N) -> Self {
        Self { inner: Arc::new(Inner { name: name.into(), value: AtomicI64::new(0) }) }
    }

    /// Gets the name of this gauge.
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Sets the gauge to the given value.
    pub fn set(&self, value: i64) {
        self.inner.value.store(value, Ordering::Release);
    }

    /// Increments the gauge by the given amount.
    pub fn add(&self, delta: i64) {
        let _ = self.inner.value.fetch_add(delta, Ordering::AcqRel);
    }

    /// Decrements the gauge by the given amount.
    pub fn sub(&self, delta: i64) {
        let _ = self.inner.value.fetch_sub(delta, Ordering::AcqRel);
    }

    /// Gets the current value of the gauge.
    pub fn value(&self) -> i64 {
        self.inner.value.load(Ordering::Acquire)
    }

    pub(crate) fn ptr_eq(&self, other: &Gauge) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::Gauge;

    #[test]
    fn test_gauge() {
        let gauge = Gauge::new("test_gauge");
        assert_eq!(gauge.value(), 0);

        gauge.set(10);
        assert_eq!(gauge.value(), 10);

        gauge.add(5);
        assert_eq!(gauge.value(), 15);

        gauge.sub(3);
        assert_eq!(gauge.value(), 12);

        gauge.sub(20);
        assert_eq!(gauge.value(), -8);

        gauge.set(10);
        assert_eq!(gauge.value(), 10);
    }

    #[test]
    fn test_concurrent_add_sub_loses_nothing() {
        let gauge = Gauge::new("in_flight");
        gauge.set(100);

        thread::scope(|s| {
            for i in 0..8 {
                let gauge = &gauge;
                s.spawn(move || {
                    for _ in 0..1_000 {
                        if i % 2 == 0 {
                            gauge.add(3);
                        } else {
                            gauge.sub(2);
                        }
                    }
                });
            }
        });

        // Four adders and four subtractors, 1,000 calls each.
        assert_eq!(gauge.value(), 100 + 4 * 3_000 - 4 * 2_000);
    }

    #[test]
    fn test_concurrent_sets_keep_a_written_value() {
        let gauge = Gauge::new("last_write");
        thread::scope(|s| {
            for i in 1..=4 {
                let gauge = &gauge;
                s.spawn(move || gauge.set(i));
            }
        });

        assert!((1..=4).contains(&gauge.value()));
    }
}
