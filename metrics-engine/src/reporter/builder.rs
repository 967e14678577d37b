use std::{sync::Arc, thread, time::Duration};

use crossbeam_channel::bounded;

use super::{runner::Runner, Reporter, ReporterHandle};
use crate::{BuildError, Registry};

const DEFAULT_INTERVAL: Duration = Duration::from_secs(10);
const DEFAULT_THREAD_NAME: &str = "metrics-reporter";

/// Builder for a periodic reporter.
///
/// ```rust
/// # use std::{sync::Arc, time::Duration};
/// # use metrics_engine::{Counter, Registry, ReporterBuilder, Snapshot};
/// let registry = Arc::new(Registry::new());
/// registry.register(Counter::new("requests"));
///
/// let mut handle = ReporterBuilder::new(|snapshot: &Snapshot| {
///     for name in snapshot.names() {
///         println!("{name}");
///     }
/// })
/// .with_interval(Duration::from_millis(100))
/// .start(registry)
/// .expect("failed to start reporter");
///
/// handle.stop();
/// ```
pub struct ReporterBuilder<R> {
    reporter: R,
    interval: Duration,
    thread_name: String,
}

impl<R: Reporter> ReporterBuilder<R> {
    /// Creates a new `ReporterBuilder` that forwards snapshots to `reporter`.
    pub fn new(reporter: R) -> Self {
        ReporterBuilder {
            reporter,
            interval: DEFAULT_INTERVAL,
            thread_name: DEFAULT_THREAD_NAME.to_string(),
        }
    }

    /// Set the interval between reports.
    ///
    /// The first report happens one interval after the reporter is started.
    ///
    /// Defaults to 10 seconds.
    #[must_use]
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Set the name of the background thread.
    ///
    /// Defaults to `metrics-reporter`.
    #[must_use]
    pub fn with_thread_name<N: Into<String>>(mut self, name: N) -> Self {
        self.thread_name = name.into();
        self
    }

    /// Starts reporting snapshots of `registry` on a background thread.
    ///
    /// # Errors
    ///
    /// If the configured interval is zero, or if the background thread cannot be spawned, an error
    /// is returned.
    pub fn start(self, registry: Arc<Registry>) -> Result<ReporterHandle, BuildError> {
        if self.interval.is_zero() {
            return Err(BuildError::InvalidInterval);
        }

        let (stop_tx, stop_rx) = bounded(1);
        let runner = Runner { registry, reporter: self.reporter, interval: self.interval, stop_rx };

        let thread = thread::Builder::new()
            .name(self.thread_name)
            .spawn(move || runner.run())
            .map_err(|e| BuildError::Backend { reason: e.to_string() })?;

        Ok(ReporterHandle::new(stop_tx, thread))
    }
}
