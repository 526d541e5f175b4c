//! Inclusive date range.

use chrono::NaiveDate;

use crate::error::CalendarError;
use crate::offset::day_offset;

/// An inclusive range of calendar days, `start..=end`.
///
/// Construction guarantees `start <= end`, so a range always holds at
/// least one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Creates a new inclusive range.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidRange`] if `start > end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, CalendarError> {
        if start > end {
            return Err(CalendarError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates the one-day range `day..=day`.
    pub fn single(day: NaiveDate) -> Self {
        Self {
            start: day,
            end: day,
        }
    }

    /// Returns the first day of the range.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Returns the last day of the range.
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Returns the number of days in the range, counting both ends.
    pub fn len_days(&self) -> usize {
        // start <= end is a construction invariant
        day_offset(self.start, self.end) as usize + 1
    }

    /// Returns `true` if `date` lies within the range (inclusive).
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Returns the index of `date` within the range, or `None` if outside.
    pub fn index_of(&self, date: NaiveDate) -> Option<usize> {
        self.contains(date)
            .then(|| day_offset(self.start, date) as usize)
    }

    /// Iterates over every day in the range in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start.iter_days().take(self.len_days())
    }
}
