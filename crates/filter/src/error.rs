//! Error types for the kairos-filter crate.

use chrono::NaiveDate;

/// Error type for all fallible operations in the kairos-filter crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FilterError {
    /// Returned when the date range starts after it ends.
    #[error("invalid date range: start {start} is after end {end}")]
    InvalidDateRange {
        /// Requested first day.
        start: NaiveDate,
        /// Requested last day.
        end: NaiveDate,
    },

    /// Returned when a month filter value is outside 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number.
        month: u32,
    },
}
