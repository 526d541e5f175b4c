//! Error types for the kairos-decompose crate.

/// Error type for all fallible operations in the kairos-decompose crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DecomposeError {
    /// Returned when the series is shorter than two full periods.
    #[error("insufficient history: got {n} days, need at least {min}")]
    InsufficientHistory {
        /// Length of the series.
        n: usize,
        /// Minimum length, `2 * period`.
        min: usize,
    },

    /// Returned when the seasonal period is smaller than 2.
    #[error("invalid period {period}: must be at least 2")]
    InvalidPeriod {
        /// The rejected period.
        period: usize,
    },

    /// Returned when the series contains NaN or infinite values.
    #[error("series contains non-finite values")]
    NonFiniteData,
}
