//! Process-wide default registry.
//!
//! Nothing in the core depends on this module: metrics are updated through their own handles, and
//! registries and reporters can always be wired up explicitly. These helpers exist for programs
//! that want a single shared registry without passing it around.

use std::{sync::Arc, time::Duration};

use once_cell::sync::Lazy;

use crate::{BuildError, Metric, Registry, Reporter, ReporterBuilder, ReporterHandle};

static DEFAULT_REGISTRY: Lazy<Arc<Registry>> = Lazy::new(|| Arc::new(Registry::new()));

/// Gets the process-wide default registry.
pub fn registry() -> Arc<Registry> {
    Arc::clone(&DEFAULT_REGISTRY)
}

/// Registers a metric in the default registry.
///
/// See [`Registry::register`].
pub fn register<M: Into<Metric>>(metric: M) -> bool {
    DEFAULT_REGISTRY.register(metric)
}

/// Starts reporting snapshots of the default registry every `interval`.
///
/// # Errors
///
/// See [`ReporterBuilder::start`].
pub fn start_reporter<R: Reporter>(
    interval: Duration,
    reporter: R,
) -> Result<ReporterHandle, BuildError> {
    ReporterBuilder::new(reporter).with_interval(interval).start(registry())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::{register, registry};
    use crate::Counter;

    #[test]
    fn test_default_registry_is_shared() {
        let counter = Counter::new("global_test_counter");
        assert!(register(&counter));
        assert!(!register(Counter::new("global_test_counter")));

        assert!(Arc::ptr_eq(&registry(), &registry()));
        assert!(registry().get("global_test_counter").is_some());
    }
}
