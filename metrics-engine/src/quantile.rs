use std::fmt;

/// A summary quantile paired with its percentile-style label.
///
/// Quantiles are kept as fractions for precision, while the label follows the way dashboards
/// usually show them: `0.5` is `p50`, `0.99` is `p99` and `0.999` is `p999`. The two ends of the
/// range are labelled `min` (`0.0`) and `max` (`1.0`).
#[derive(Debug, Clone, PartialEq)]
pub struct Quantile {
    value: f64,
    label: String,
}

impl Quantile {
    /// Creates a new [`Quantile`], clamping `quantile` into `[0.0, 1.0]`.
    pub fn new(quantile: f64) -> Quantile {
        let value = quantile.clamp(0.0, 1.0);
        let label = if value == 0.0 {
            "min".to_string()
        } else if value == 1.0 {
            "max".to_string()
        } else {
            // Percentiles are rounded to four decimal places.
            let percentile = (value * 1e6).round() / 1e4;
            format!("p{percentile}").replace('.', "")
        };

        Quantile { value, label }
    }

    /// Gets the label, e.g. `p99`.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Gets the raw quantile, e.g. `0.99`.
    pub fn value(&self) -> f64 {
        self.value
    }
}

impl fmt::Display for Quantile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::Quantile;

    #[test]
    fn test_labels() {
        let cases = [
            (0.0, 0.0, "min"),
            (0.5, 0.5, "p50"),
            (0.9, 0.9, "p90"),
            (0.99, 0.99, "p99"),
            (0.999, 0.999, "p999"),
            (0.07, 0.07, "p7"),
            (0.9999, 0.9999, "p9999"),
            (0.123456789, 0.123456789, "p123457"),
            (1.0, 1.0, "max"),
            (-0.3, 0.0, "min"),
            (1.2, 1.0, "max"),
        ];

        for (input, value, label) in cases {
            let quantile = Quantile::new(input);
            assert_eq!(quantile.value(), value, "value for {input}");
            assert_eq!(quantile.label(), label, "label for {input}");
            assert_eq!(quantile.to_string(), label);
        }
    }
}
