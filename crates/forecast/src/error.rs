//! Error types for the kairos-forecast crate.

/// Error type for all fallible operations in the kairos-forecast crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ForecastError {
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

    /// Returned when a zero-step forecast is requested.
    #[error("forecast horizon must be at least 1")]
    InvalidHorizon,

    /// Returned when the series contains NaN or infinite values.
    #[error("series contains non-finite values")]
    NonFiniteData,

    /// Returned when parameter optimisation does not converge.
    #[error("forecast optimisation did not converge: {reason}")]
    ForecastConvergence {
        /// What stopped the optimiser.
        reason: String,
    },

    /// Wraps an error originating from the kairos-calendar crate.
    #[error("calendar error: {reason}")]
    Calendar {
        /// Description of the underlying calendar failure.
        reason: String,
    },
}

impl From<kairos_calendar::CalendarError> for ForecastError {
    fn from(e: kairos_calendar::CalendarError) -> Self {
        ForecastError::Calendar {
            reason: e.to_string(),
        }
    }
}
