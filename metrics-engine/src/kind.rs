use std::{fmt, ops::BitOr};

/// Metric kind.
///
/// Defines the kind, or type, of a metric:
/// - counters
/// - gauges
/// - histograms
/// - summaries
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum MetricKind {
    /// Counter type.
    Counter,
    /// Gauge type.
    Gauge,
    /// Histogram type.
    Histogram,
    /// Summary type.
    Summary,
}

impl MetricKind {
    /// Gets the lowercase name of this kind, e.g. `"counter"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricKind::Counter => "counter",
            MetricKind::Gauge => "gauge",
            MetricKind::Histogram => "histogram",
            MetricKind::Summary => "summary",
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metric kind mask.
///
/// Useful for matching against a kind, or kinds, of metrics, such as when a reporter only wants
/// to forward part of a snapshot.
///
/// Masks combine with bitwise OR, and inclusion of a specific kind is checked via
/// [`matches`](MetricKindMask::matches):
///
/// ```rust
/// # use metrics_engine::{MetricKind, MetricKindMask};
/// // Only match counters and summaries:
/// let mask = MetricKindMask::COUNTER | MetricKindMask::SUMMARY;
///
/// assert!(mask.matches(MetricKind::Counter));
/// assert!(mask.matches(MetricKind::Summary));
/// assert!(!mask.matches(MetricKind::Gauge));
/// assert!(!mask.matches(MetricKind::Histogram));
///
/// assert!(!MetricKindMask::NONE.matches(MetricKind::Counter));
/// assert!(MetricKindMask::ALL.matches(MetricKind::Histogram));
/// ```
#[derive(Debug, Eq, PartialEq, Hash, Clone, Copy, Ord, PartialOrd)]
pub struct MetricKindMask(u8);

impl MetricKindMask {
    /// No metric kinds.
    pub const NONE: MetricKindMask = MetricKindMask(0);

    /// The counter kind.
    pub const COUNTER: MetricKindMask = MetricKindMask(1);

    /// The gauge kind.
    pub const GAUGE: MetricKindMask = MetricKindMask(2);

    /// The histogram kind.
    pub const HISTOGRAM: MetricKindMask = MetricKindMask(4);

    /// The summary kind.
    pub const SUMMARY: MetricKindMask = MetricKindMask(8);

    /// All metric kinds.
    pub const ALL: MetricKindMask = MetricKindMask(15);

    /// Whether or not this mask contains the specified kind.
    pub fn matches(&self, kind: MetricKind) -> bool {
        self.0 & MetricKindMask::from(kind).0 != 0
    }
}

impl From<MetricKind> for MetricKindMask {
    fn from(kind: MetricKind) -> Self {
        match kind {
            MetricKind::Counter => MetricKindMask::COUNTER,
            MetricKind::Gauge => MetricKindMask::GAUGE,
            MetricKind::Histogram => MetricKindMask::HISTOGRAM,
            MetricKind::Summary => MetricKindMask::SUMMARY,
        }
    }
}

impl Default for MetricKindMask {
    fn default() -> Self {
        MetricKindMask::ALL
    }
}

impl BitOr for MetricKindMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::{MetricKind, MetricKindMask};

    const KINDS: [MetricKind; 4] =
        [MetricKind::Counter, MetricKind::Gauge, MetricKind::Histogram, MetricKind::Summary];

    #[test]
    fn test_matching() {
        for kind in KINDS {
            let mask = MetricKindMask::from(kind);
            for other in KINDS {
                assert_eq!(mask.matches(other), kind == other);
            }

            assert!(MetricKindMask::ALL.matches(kind));
            assert!(!MetricKindMask::NONE.matches(kind));
        }

        let hmask = MetricKindMask::GAUGE | MetricKindMask::HISTOGRAM;
        assert!(!hmask.matches(MetricKind::Counter));
        assert!(hmask.matches(MetricKind::Gauge));
        assert!(hmask.matches(MetricKind::Histogram));
        assert!(!hmask.matches(MetricKind::Summary));
    }

    #[test]
    fn test_kind_names() {
        let names: Vec<_> = KINDS.iter().map(|k| k.to_string()).collect();
        assert_eq!(names, ["counter", "gauge", "histogram", "summary"]);
    }
}
