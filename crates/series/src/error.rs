//! Error types for the kairos-series crate.

use chrono::NaiveDate;

/// Error type for all fallible operations in the kairos-series crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SeriesError {
    /// Returned when there are no records (or no points) to build from.
    #[error("dataset is empty")]
    EmptyDataset,

    /// Returned when the first day of the span has no value to forward-fill from.
    #[error("insufficient data: no value on or before {first} to forward-fill from")]
    InsufficientData {
        /// First day of the requested span.
        first: NaiveDate,
    },

    /// Returned when a record's amount is NaN or infinite.
    #[error("non-finite amount on {date}")]
    NonFiniteAmount {
        /// Date of the offending record.
        date: NaiveDate,
    },

    /// Wraps an error originating from the kairos-calendar crate.
    #[error("calendar error: {reason}")]
    Calendar {
        /// Description of the underlying calendar failure.
        reason: String,
    },
}

impl From<kairos_calendar::CalendarError> for SeriesError {
    fn from(e: kairos_calendar::CalendarError) -> Self {
        SeriesError::Calendar {
            reason: e.to_string(),
        }
    }
}
