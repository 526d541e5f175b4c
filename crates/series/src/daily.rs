//! Gap-free daily series.

use chrono::NaiveDate;
use kairos_calendar::{DateRange, add_days, daily_sequence};

use crate::error::SeriesError;

/// A numeric series with exactly one value per calendar day.
///
/// The date of index `i` is `start + i` days. A series always holds at
/// least one value.
#[derive(Debug, Clone, PartialEq)]
pub struct DailySeries {
    range: DateRange,
    values: Vec<f64>,
}

impl DailySeries {
    /// Creates a series starting on `start` with one value per day.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::EmptyDataset`] if `values` is empty and
    /// [`SeriesError::Calendar`] if the last day is not representable.
    pub fn new(start: NaiveDate, values: Vec<f64>) -> Result<Self, SeriesError> {
        if values.is_empty() {
            return Err(SeriesError::EmptyDataset);
        }
        let end = add_days(start, values.len() as i64 - 1)?;
        Ok(Self {
            range: DateRange::new(start, end)?,
            values,
        })
    }

    /// Returns the first day.
    pub fn start(&self) -> NaiveDate {
        self.range.start()
    }

    /// Returns the last day.
    pub fn end(&self) -> NaiveDate {
        self.range.end()
    }

    /// Returns the covered calendar span.
    pub fn range(&self) -> DateRange {
        self.range
    }

    /// Returns the number of days.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false`; kept for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the daily values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns every date of the series.
    pub fn dates(&self) -> Vec<NaiveDate> {
        daily_sequence(self.start(), self.len())
    }

    /// Returns the date at index `i`, or `None` past the end.
    pub fn date_at(&self, i: usize) -> Option<NaiveDate> {
        (i < self.len()).then(|| self.start() + chrono::Days::new(i as u64))
    }

    /// Returns the value on `date`, or `None` outside the series.
    pub fn value_on(&self, date: NaiveDate) -> Option<f64> {
        self.range.index_of(date).map(|i| self.values[i])
    }

    /// Iterates over `(date, value)` pairs in date order.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, f64)> + '_ {
        self.range.iter().zip(self.values.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn new_rejects_empty() {
        assert_eq!(
            DailySeries::new(ymd(2024, 1, 1), vec![]),
            Err(SeriesError::EmptyDataset)
        );
    }

    #[test]
    fn accessors() {
        let s = DailySeries::new(ymd(2024, 2, 28), vec![1.0, 2.0, 3.0]).unwrap();
        assert_eq!(s.len(), 3);
        assert!(!s.is_empty());
        assert_eq!(s.start(), ymd(2024, 2, 28));
        assert_eq!(s.end(), ymd(2024, 3, 1));
        assert_eq!(s.date_at(1), Some(ymd(2024, 2, 29)));
        assert_eq!(s.date_at(3), None);
        assert_eq!(s.value_on(ymd(2024, 3, 1)), Some(3.0));
        assert_eq!(s.value_on(ymd(2024, 3, 2)), None);
        assert_eq!(s.dates().len(), 3);
    }

    #[test]
    fn iter_pairs() {
        let s = DailySeries::new(ymd(2024, 1, 1), vec![5.0, 6.0]).unwrap();
        let pairs: Vec<_> = s.iter().collect();
        assert_eq!(pairs, vec![(ymd(2024, 1, 1), 5.0), (ymd(2024, 1, 2), 6.0)]);
    }

    #[test]
    fn end_overflow_is_calendar_error() {
        let result = DailySeries::new(NaiveDate::MAX, vec![1.0, 2.0]);
        assert!(matches!(result, Err(SeriesError::Calendar { .. })));
    }
}
