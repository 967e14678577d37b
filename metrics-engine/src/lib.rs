//! In-process metrics with periodic snapshot reporting.
//!
//! `metrics-engine` provides four kinds of metrics, a registry to look them up by name, and a
//! background reporter that hands registry snapshots to a sink on a fixed interval.
//!
//! # Metrics
//!
//! - [`Counter`]: a monotonically increasing `u64`, reset only explicitly.
//! - [`Gauge`]: a signed `i64` that can be set, increased or decreased.
//! - [`Histogram`]: cumulative counts over fixed bucket bounds, plus sum and count.
//! - [`Summary`]: retains raw samples and computes exact nearest-rank quantiles.
//!
//! Counters and gauges are updated with single atomic operations and never block. Histograms and
//! summaries update several fields per observation, so each takes a short lock.
//!
//! Every metric is a cheap-to-clone handle: clones, and the copy held by a registry, all refer to
//! the same underlying values.
//!
//! # Usage
//!
//! ```rust
//! # use std::{sync::Arc, time::Duration};
//! use metrics_engine::{Counter, Histogram, Registry, ReporterBuilder, Snapshot};
//!
//! let registry = Arc::new(Registry::new());
//!
//! let requests = Counter::new("http_requests");
//! let latency = Histogram::new("http_latency_seconds", &[0.01, 0.1, 1.0])
//!     .expect("bounds are valid");
//! registry.register(&requests);
//! registry.register(&latency);
//!
//! requests.increment();
//! latency.observe(0.042);
//!
//! let mut reporter = ReporterBuilder::new(|snapshot: &Snapshot| {
//!     for (name, metric) in snapshot.iter() {
//!         println!("{name} ({}) = {:?}", metric.kind(), metric.value());
//!     }
//! })
//! .with_interval(Duration::from_secs(1))
//! .start(Arc::clone(&registry))
//! .expect("failed to start reporter");
//!
//! reporter.stop();
//! ```
//!
//! A process-wide registry is available in [`global`] for programs that do not want to pass a
//! registry around.
#![deny(missing_docs)]

pub mod atomics;

mod counter;
pub use self::counter::Counter;

mod error;
pub use self::error::BuildError;

mod gauge;
pub use self::gauge::Gauge;

pub mod global;

mod histogram;
pub use self::histogram::Histogram;

mod kind;
pub use self::kind::{MetricKind, MetricKindMask};

mod metric;
pub use self::metric::{Metric, MetricValue};

mod quantile;
pub use self::quantile::Quantile;

mod registry;
pub use self::registry::{Registry, Snapshot};

mod reporter;
pub use self::reporter::{Reporter, ReporterBuilder, ReporterHandle};

mod summary;
pub use self::summary::{QuantileTarget, Summary};

#[cfg(test)]
mod test_util;
