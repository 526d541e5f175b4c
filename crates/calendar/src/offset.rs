//! Day offsets and checked day arithmetic.

use chrono::{Days, NaiveDate};

use crate::error::CalendarError;

/// Returns the signed number of days from `start` to `date`.
///
/// Positive when `date` is after `start`.
pub fn day_offset(start: NaiveDate, date: NaiveDate) -> i64 {
    (date - start).num_days()
}

/// Adds `days` (possibly negative) to `date`.
///
/// # Errors
///
/// Returns [`CalendarError::OutOfRange`] if the result is not representable.
pub fn add_days(date: NaiveDate, days: i64) -> Result<NaiveDate, CalendarError> {
    let shifted = if days >= 0 {
        date.checked_add_days(Days::new(days.unsigned_abs()))
    } else {
        date.checked_sub_days(Days::new(days.unsigned_abs()))
    };
    shifted.ok_or(CalendarError::OutOfRange { date, days })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn offset_forward_and_backward() {
        assert_eq!(day_offset(ymd(2024, 1, 1), ymd(2024, 1, 6)), 5);
        assert_eq!(day_offset(ymd(2024, 1, 6), ymd(2024, 1, 1)), -5);
        assert_eq!(day_offset(ymd(2024, 1, 1), ymd(2024, 1, 1)), 0);
    }

    #[test]
    fn offset_spans_leap_day() {
        assert_eq!(day_offset(ymd(2024, 2, 28), ymd(2024, 3, 1)), 2);
        assert_eq!(day_offset(ymd(2023, 2, 28), ymd(2023, 3, 1)), 1);
    }

    #[test]
    fn add_days_positive() {
        assert_eq!(add_days(ymd(2023, 12, 30), 3).unwrap(), ymd(2024, 1, 2));
    }

    #[test]
    fn add_days_negative() {
        assert_eq!(add_days(ymd(2024, 3, 1), -1).unwrap(), ymd(2024, 2, 29));
    }

    #[test]
    fn add_days_overflow() {
        let err = add_days(NaiveDate::MAX, 1).unwrap_err();
        assert_eq!(
            err,
            CalendarError::OutOfRange {
                date: NaiveDate::MAX,
                days: 1
            }
        );
    }
}
