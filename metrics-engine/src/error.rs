use thiserror::Error;

/// Errors that could occur while building a metric or starting a reporter.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BuildError {
    /// A histogram was given no bucket bounds.
    #[error("histogram requires at least one bucket bound")]
    EmptyBuckets,

    /// A histogram bucket bound was not a number.
    #[error("invalid histogram bucket bound: {bound}")]
    InvalidBucketBound {
        /// The offending bound.
        bound: f64,
    },

    /// A summary quantile fell outside of `(0.0, 1.0]`.
    #[error("invalid summary quantile {quantile}: must be greater than 0.0 and at most 1.0")]
    InvalidQuantile {
        /// The offending quantile.
        quantile: f64,
    },

    /// The reporting interval was zero.
    #[error("reporting interval must be greater than zero")]
    InvalidInterval,

    /// Failed to spawn the background reporter thread.
    #[error("failed to spawn background thread for reporter: {reason}")]
    Backend {
        /// Details about the spawn failure.
        reason: String,
    },
}
