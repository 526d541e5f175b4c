//! Contiguous day sequence generation.

use chrono::NaiveDate;

use crate::error::CalendarError;
use crate::offset::add_days;

/// Generates a contiguous sequence of calendar days.
///
/// Starting from `start`, produces exactly `n_days` consecutive dates.
/// Month, year and leap-day boundaries follow the Gregorian calendar.
/// The sequence stops early only at [`NaiveDate::MAX`].
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use kairos_calendar::daily_sequence;
///
/// let start = NaiveDate::from_ymd_opt(2023, 12, 30).unwrap();
/// let dates = daily_sequence(start, 4);
/// assert_eq!(dates.len(), 4);
/// assert_eq!(dates[3], NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
/// ```
pub fn daily_sequence(start: NaiveDate, n_days: usize) -> Vec<NaiveDate> {
    start.iter_days().take(n_days).collect()
}

/// Generates the `n_days` dates immediately following `last`.
///
/// The first element is `last + 1 day`; there are no gaps or repeats.
///
/// # Errors
///
/// Returns [`CalendarError::OutOfRange`] if `last + n_days` is not a
/// representable date.
pub fn days_after(last: NaiveDate, n_days: usize) -> Result<Vec<NaiveDate>, CalendarError> {
    if n_days == 0 {
        return Ok(Vec::new());
    }
    let days = i64::try_from(n_days).map_err(|_| CalendarError::OutOfRange {
        date: last,
        days: i64::MAX,
    })?;
    add_days(last, days)?;
    let first = add_days(last, 1)?;
    Ok(daily_sequence(first, n_days))
}
