use std::sync::{atomic::Ordering, Arc};

use crate::atomics::AtomicU64;

#[derive(Debug)]
struct Inner {
    name: String,
    value: AtomicU64,
}

/// A monotonically increasing counter.
///
/// Updates are single atomic operations and never block, so a `Counter` can be shared freely
/// between threads. Cloning a `Counter` yields another handle to the same underlying value.
#[derive(Clone, Debug)]
pub struct Counter {
    inner: Arc<Inner>,
}

impl Counter {
    /// Creates a new `Counter` starting at zero.
    pub fn new<N: Into<String>>(name: N) -> Self {
        Self { inner: Arc::new(Inner { name: name.into(), value: AtomicU64::new(0) }) }
    }

    /// Gets the name of this counter.
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Increments the counter by one.
    pub fn increment(&self) {
        self.add(1);
    }

    /// Increments the counter by the given amount.
    pub fn add(&self, delta: u64) {
        let _ = self.inner.value.fetch_add(delta, Ordering::Release);
    }

    /// Gets the current value of the counter.
    pub fn value(&self) -> u64 {
        self.inner.value.load(Ordering::Acquire)
    }

    /// Resets the counter back to zero.
    pub fn reset(&self) {
        self.inner.value.store(0, Ordering::Release);
    }

    pub(crate) fn ptr_eq(&self, other: &Counter) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}
