use crate::{Counter, Gauge, Histogram, MetricKind, Summary};

/// A registered metric.
///
/// Each variant holds a shared handle, so cloning a `Metric` (or taking it out of a snapshot)
/// still refers to the live values being updated by producers.
#[derive(Clone, Debug)]
pub enum Metric {
    /// Counter.
    Counter(Counter),
    /// Gauge.
    Gauge(Gauge),
    /// Histogram.
    Histogram(Histogram),
    /// Summary.
    Summary(Summary),
}

/// A point-in-time value read from a [`Metric`].
#[derive(Clone, Debug, PartialEq)]
pub enum MetricValue {
    /// Counter total.
    Counter(u64),
    /// Gauge value.
    Gauge(i64),
    /// Per-bucket histogram counts.
    Histogram(Vec<u64>),
    /// Raw summary samples, in observation order.
    Summary(Vec<f64>),
}

impl Metric {
    /// Gets the name of the metric.
    pub fn name(&self) -> &str {
        match self {
            Metric::Counter(c) => c.name(),
            Metric::Gauge(g) => g.name(),
            Metric::Histogram(h) => h.name(),
            Metric::Summary(s) => s.name(),
        }
    }

    /// Gets the kind of the metric.
    pub fn kind(&self) -> MetricKind {
        match self {
            Metric::Counter(_) => MetricKind::Counter,
            Metric::Gauge(_) => MetricKind::Gauge,
            Metric::Histogram(_) => MetricKind::Histogram,
            Metric::Summary(_) => MetricKind::Summary,
        }
    }

    /// Reads the current value of the metric.
    pub fn value(&self) -> MetricValue {
        match self {
            Metric::Counter(c) => MetricValue::Counter(c.value()),
            Metric::Gauge(g) => MetricValue::Gauge(g.value()),
            Metric::Histogram(h) => MetricValue::Histogram(h.value()),
            Metric::Summary(s) => MetricValue::Summary(s.value()),
        }
    }

    /// Whether or not both metrics are handles to the same underlying instance.
    pub fn ptr_eq(&self, other: &Metric) -> bool {
        match (self, other) {
            (Metric::Counter(a), Metric::Counter(b)) => a.ptr_eq(b),
            (Metric::Gauge(a), Metric::Gauge(b)) => a.ptr_eq(b),
            (Metric::Histogram(a), Metric::Histogram(b)) => a.ptr_eq(b),
            (Metric::Summary(a), Metric::Summary(b)) => a.ptr_eq(b),
            _ => false,
        }
    }

    /// Gets the counter, if this metric is one.
    pub fn as_counter(&self) -> Option<&Counter> {
        match self {
            Metric::Counter(c) => Some(c),
            _ => None,
        }
    }

    /// Gets the gauge, if this metric is one.
    pub fn as_gauge(&self) -> Option<&Gauge> {
        match self {
            Metric::Gauge(g) => Some(g),
            _ => None,
        }
    }

    /// Gets the histogram, if this metric is one.
    pub fn as_histogram(&self) -> Option<&Histogram> {
        match self {
            Metric::Histogram(h) => Some(h),
            _ => None,
        }
    }

    /// Gets the summary, if this metric is one.
    pub fn as_summary(&self) -> Option<&Summary> {
        match self {
            Metric::Summary(s) => Some(s),
            _ => None,
        }
    }
}

macro_rules! impl_from_variant {
    ($variant:ident) => {
        impl From<$variant> for Metric {
            fn from(metric: $variant) -> Self {
                Metric::$variant(metric)
            }
        }

        impl From<&$variant> for Metric {
            fn from(metric: &$variant) -> Self {
                Metric::$variant(metric.clone())
            }
        }
    };
}

impl_from_variant!(Counter);
impl_from_variant!(Gauge);
impl_from_variant!(Histogram);
impl_from_variant!(Summary);
