//! Error types for the kairos-calendar crate.

use chrono::NaiveDate;

/// Error type for all fallible operations in the kairos-calendar crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a range's start date falls after its end date.
    #[error("invalid date range: start {start} is after end {end}")]
    InvalidRange {
        /// First day of the requested range.
        start: NaiveDate,
        /// Last day of the requested range.
        end: NaiveDate,
    },

    /// Returned when day arithmetic leaves the representable calendar.
    #[error("date out of range: {date} + {days} days")]
    OutOfRange {
        /// Date the arithmetic started from.
        date: NaiveDate,
        /// Number of days that were added.
        days: i64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn error_invalid_range() {
        let err = CalendarError::InvalidRange {
            start: ymd(2024, 3, 2),
            end: ymd(2024, 3, 1),
        };
        assert_eq!(
            err.to_string(),
            "invalid date range: start 2024-03-02 is after end 2024-03-01"
        );
    }

    #[test]
    fn error_out_of_range() {
        let err = CalendarError::OutOfRange {
            date: ymd(2024, 1, 1),
            days: 5,
        };
        assert_eq!(err.to_string(), "date out of range: 2024-01-01 + 5 days");
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_clone_and_eq() {
        let err = CalendarError::OutOfRange {
            date: ymd(2000, 1, 1),
            days: -1,
        };
        assert_eq!(err.clone(), err);
    }
}
