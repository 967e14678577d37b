//! Metric registry and snapshots.

use std::collections::{hash_map, HashMap};

use parking_lot::RwLock;
use tracing::debug;

use crate::Metric;

/// A registry of metrics, keyed by name.
///
/// `Registry` maintains a central listing of metrics. A name maps to exactly one metric for the
/// lifetime of the registry: the first registration under a name wins, and later registrations
/// under the same name are ignored.
///
/// The registry only tracks membership. Metric values live in the metrics themselves and are
/// updated without going through the registry at all.
#[derive(Debug, Default)]
pub struct Registry {
    metrics: RwLock<HashMap<String, Metric>>,
}

impl Registry {
    /// Creates a new, empty `Registry`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a metric under its name.
    ///
    /// If a metric is already registered under the same name, the registry is left untouched and
    /// `false` is returned. This is not an error: registering the same metric more than once is
    /// harmless.
    pub fn register<M: Into<Metric>>(&self, metric: M) -> bool {
        let metric = metric.into();
        let mut metrics = self.metrics.write();
        match metrics.entry(metric.name().to_string()) {
            hash_map::Entry::Occupied(entry) => {
                debug!(
                    name = entry.key().as_str(),
                    kind = %metric.kind(),
                    "Metric already registered; ignoring registration."
                );
                false
            }
            hash_map::Entry::Vacant(entry) => {
                entry.insert(metric);
                true
            }
        }
    }

    /// Gets the metric registered under `name`, if any.
    pub fn get(&self, name: &str) -> Option<Metric> {
        self.metrics.read().get(name).cloned()
    }

    /// Whether or not a metric is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.metrics.read().contains_key(name)
    }

    /// Number of registered metrics.
    pub fn len(&self) -> usize {
        self.metrics.read().len()
    }

    /// Whether or not the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.metrics.read().is_empty()
    }

    /// Takes a snapshot of the registered metrics.
    ///
    /// The snapshot is an independent copy of the name-to-metric mapping, so registrations that
    /// happen afterwards do not show up in it. The metrics inside the snapshot are still the live
    /// metrics, though: reading them reflects updates made after the snapshot was taken.
    pub fn metrics(&self) -> Snapshot {
        Snapshot::new(self.metrics.read().clone())
    }
}

/// A point-in-time copy of a registry's membership.
#[derive(Clone, Debug, Default)]
pub struct Snapshot {
    metrics: HashMap<String, Metric>,
}

impl Snapshot {
    pub(crate) fn new(metrics: HashMap<String, Metric>) -> Self {
        Self { metrics }
    }

    /// Number of metrics in this snapshot.
    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    /// Whether or not the snapshot is empty.
    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }

    /// Gets the metric named `name`, if it was part of the snapshot.
    pub fn get(&self, name: &str) -> Option<&Metric> {
        self.metrics.get(name)
    }

    /// Iterates over the metrics in this snapshot, in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Metric)> {
        self.metrics.iter().map(|(name, metric)| (name.as_str(), metric))
    }

    /// Gets the names of all metrics in this snapshot, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.metrics.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Converts this snapshot into the underlying name-to-metric mapping.
    pub fn into_inner(self) -> HashMap<String, Metric> {
        self.metrics
    }
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, thread};

    use super::Registry;
    use crate::{test_util::capture_logs, Counter, Gauge, Histogram, Metric, MetricValue, Summary};

    #[test]
    fn test_registry() {
        let registry = Registry::new();
        assert!(registry.is_empty());

        assert!(registry.register(Counter::new("collector_counter")));
        assert!(registry.register(Gauge::new("collector_gauge")));

        assert!(registry.get("collector_counter").is_some());
        assert!(registry.get("not_exist").is_none());
        assert!(registry.contains("collector_gauge"));
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.metrics().len(), 2);
    }

    #[test]
    fn test_first_registration_wins() {
        let registry = Registry::new();
        let first = Counter::new("dupe");
        let second = Counter::new("dupe");
        let gauge = Gauge::new("dupe");

        assert!(registry.register(&first));
        let (results, lines) = capture_logs(|| {
            [registry.register(&second), registry.register(&gauge), registry.register(&first)]
        });
        assert_eq!(results, [false, false, false]);

        assert_eq!(lines.len(), 3, "unexpected output: {lines:?}");
        for (line, kind) in lines.iter().zip(["counter", "gauge", "counter"]) {
            assert!(line.contains("DEBUG"), "unexpected level: {line}");
            assert!(line.contains("Metric already registered; ignoring registration."));
            assert!(line.contains("name=\"dupe\""), "missing name: {line}");
            assert!(line.contains(&format!("kind={kind}")), "missing kind {kind}: {line}");
        }

        let registered = registry.get("dupe").unwrap();
        assert!(registered.ptr_eq(&Metric::from(&first)));
        assert!(!registered.ptr_eq(&Metric::from(&second)));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_snapshot_freezes_membership_not_values() {
        let registry = Registry::new();
        let counter = Counter::new("hits");
        registry.register(&counter);

        let snapshot = registry.metrics();
        registry.register(Histogram::new("late", &[1.0]).unwrap());
        counter.add(7);

        assert_eq!(snapshot.len(), 1);
        assert!(snapshot.get("late").is_none());
        assert_eq!(snapshot.get("hits").unwrap().value(), MetricValue::Counter(7));
        assert_eq!(registry.metrics().names(), vec!["hits", "late"]);
    }

    #[test]
    fn test_snapshot_size_ignores_registration_order() {
        let names = ["a", "b", "c", "d"];

        let forward = Registry::new();
        let backward = Registry::new();
        for name in names {
            forward.register(Counter::new(name));
        }
        for name in names.iter().rev() {
            backward.register(Summary::new(*name, [(0.5, 0.05)]).unwrap());
            backward.register(Gauge::new(*name));
        }

        assert_eq!(forward.metrics().len(), names.len());
        assert_eq!(backward.metrics().len(), names.len());
    }

    #[test]
    fn test_concurrent_register_and_snapshot() {
        let registry = Arc::new(Registry::new());

        let writers: Vec<_> = (0..4)
            .map(|t| {
                let registry = Arc::clone(&registry);
                thread::spawn(move || {
                    for i in 0..100 {
                        // Half of the names collide across threads.
                        registry.register(Counter::new(format!("metric_{}", (t % 2) * 100 + i)));
                    }
                })
            })
            .collect();

        for _ in 0..50 {
            let snapshot = registry.metrics();
            assert!(snapshot.iter().all(|(name, metric)| name == metric.name()));
        }

        for writer in writers {
            writer.join().unwrap();
        }

        assert_eq!(registry.metrics().len(), 200);
    }
}
