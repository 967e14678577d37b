//! Reports metrics via the `tracing` crate.
//!
//! [`LogReporter`] implements [`Reporter`], so it can be handed to a
//! [`ReporterBuilder`](metrics_engine::ReporterBuilder) to log every metric of a registry on an
//! interval. Each metric becomes one event with `name`, `kind` and `value` fields, at a
//! configurable level.
//!
//! ```no_run
//! # use std::{sync::Arc, time::Duration};
//! use metrics_engine::{Counter, Registry, ReporterBuilder};
//! use metrics_engine_exporter_log::LogReporter;
//!
//! let registry = Arc::new(Registry::new());
//! registry.register(Counter::new("requests"));
//!
//! let handle = ReporterBuilder::new(LogReporter::new())
//!     .with_interval(Duration::from_secs(30))
//!     .start(registry)
//!     .expect("failed to start reporter");
//! ```
#![deny(missing_docs)]

use std::fmt::Write as _;

use metrics_engine::{Metric, MetricKind, MetricKindMask, Reporter, Snapshot};
use tracing::Level;

/// Reports snapshots by logging each metric.
#[derive(Debug, Clone)]
pub struct LogReporter {
    level: Level,
    kinds: MetricKindMask,
}

impl LogReporter {
    /// Creates a new [`LogReporter`] that logs all metric kinds at `INFO`.
    pub fn new() -> Self {
        LogReporter { level: Level::INFO, kinds: MetricKindMask::ALL }
    }

    /// Set the level metrics are logged at.
    ///
    /// Defaults to `INFO`.
    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Set which kinds of metrics are logged.
    ///
    /// Defaults to [`MetricKindMask::ALL`].
    #[must_use]
    pub fn with_kinds(mut self, kinds: MetricKindMask) -> Self {
        self.kinds = kinds;
        self
    }
}

impl Default for LogReporter {
    fn default() -> Self {
        LogReporter::new()
    }
}

impl Reporter for LogReporter {
    fn report(&mut self, snapshot: &Snapshot) {
        for name in snapshot.names() {
            let Some(metric) = snapshot.get(name) else {
                continue;
            };

            let kind = metric.kind();
            if !self.kinds.matches(kind) {
                continue;
            }

            log_metric(self.level, name, kind, &render_value(metric));
        }
    }
}

fn log_metric(level: Level, name: &str, kind: MetricKind, value: &str) {
    if level == Level::ERROR {
        tracing::error!(name = name, kind = %kind, value = %value, "metric");
    } else if level == Level::WARN {
        tracing::warn!(name = name, kind = %kind, value = %value, "metric");
    } else if level == Level::INFO {
        tracing::info!(name = name, kind = %kind, value = %value, "metric");
    } else if level == Level::DEBUG {
        tracing::debug!(name = name, kind = %kind, value = %value, "metric");
    } else {
        tracing::trace!(name = name, kind = %kind, value = %value, "metric");
    }
}

/// Renders the current value of a metric for logging.
///
/// Counters and gauges render as their plain value. Histograms render their count, sum and
/// `bound:count` pairs; summaries render their count, sum and configured quantiles.
pub fn render_value(metric: &Metric) -> String {
    match metric {
        Metric::Counter(counter) => counter.value().to_string(),
        Metric::Gauge(gauge) => gauge.value().to_string(),
        Metric::Histogram(histogram) => {
            let mut out = format!("count={} sum={} buckets=[", histogram.count(), histogram.sum());
            for (idx, (bound, count)) in histogram.bucket_counts().into_iter().enumerate() {
                if idx > 0 {
                    out.push_str(", ");
                }
                let _ = write!(out, "{bound}:{count}");
            }
            out.push(']');
            out
        }
        Metric::Summary(summary) => {
            let mut out = format!("count={} sum={}", summary.count(), summary.sum());
            for (quantile, value) in summary.quantiles() {
                let _ = write!(out, " {}={value}", quantile.label());
            }
            out
        }
    }
}
