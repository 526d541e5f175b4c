//! Series Builder: sparse daily sums to a gap-free daily series.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use kairos_calendar::DateRange;
use kairos_io::PurchaseRecord;
use tracing::debug;

use crate::aggregate::aggregate_daily;
use crate::daily::DailySeries;
use crate::error::SeriesError;

/// Builds a [`DailySeries`] from purchase records.
///
/// # Example
///
/// ```ignore
/// let series = SeriesBuilder::new().build(&records)?;
/// let spanned = SeriesBuilder::new().with_span(range).build(&records)?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct SeriesBuilder {
    span: Option<DateRange>,
}

impl SeriesBuilder {
    /// Creates a builder spanning the first to the last observed day.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an explicit calendar span instead of the observed one.
    pub fn with_span(mut self, span: DateRange) -> Self {
        self.span = Some(span);
        self
    }

    /// Returns the explicit span, if any.
    pub fn span(&self) -> Option<DateRange> {
        self.span
    }

    /// Sums amounts per day and reindexes onto the calendar span.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`SeriesError::EmptyDataset`] | no records |
    /// | [`SeriesError::NonFiniteAmount`] | a NaN or infinite amount |
    /// | [`SeriesError::InsufficientData`] | the span starts before the first observation |
    pub fn build<'a, I>(&self, records: I) -> Result<DailySeries, SeriesError>
    where
        I: IntoIterator<Item = &'a PurchaseRecord>,
    {
        let points = aggregate_daily(records)?;
        reindex_daily(&points, self.span)
    }
}

/// Builds a daily series over the observed span of `records`.
///
/// Shorthand for `SeriesBuilder::new().build(records)`.
pub fn build_daily_series<'a, I>(records: I) -> Result<DailySeries, SeriesError>
where
    I: IntoIterator<Item = &'a PurchaseRecord>,
{
    SeriesBuilder::new().build(records)
}

/// Reindexes sparse daily points onto a complete calendar, forward-filling gaps.
///
/// With `span = None` the calendar runs from the first to the last point.
/// Points outside an explicit span are ignored.
///
/// # Errors
///
/// Returns [`SeriesError::EmptyDataset`] when `points` is empty and
/// [`SeriesError::InsufficientData`] when the span's first day has no
/// point to seed the forward-fill.
pub fn reindex_daily(
    points: &BTreeMap<NaiveDate, f64>,
    span: Option<DateRange>,
) -> Result<DailySeries, SeriesError> {
    let (Some((&first, _)), Some((&last, _))) = (points.first_key_value(), points.last_key_value())
    else {
        return Err(SeriesError::EmptyDataset);
    };
    let span = match span {
        Some(span) => span,
        None => DateRange::new(first, last)?,
    };

    let mut values = Vec::with_capacity(span.len_days());
    let mut carried: Option<f64> = None;
    let mut n_filled = 0usize;

    for day in span.iter() {
        let value = match points.get(&day) {
            Some(&v) => v,
            None => {
                n_filled += 1;
                carried.ok_or(SeriesError::InsufficientData {
                    first: span.start(),
                })?
            }
        };
        carried = Some(value);
        values.push(value);
    }

    debug!(
        start = %span.start(),
        end = %span.end(),
        n_days = values.len(),
        n_observed = values.len() - n_filled,
        n_filled,
        "daily series built"
    );

    DailySeries::new(span.start(), values)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn empty_records() {
        let recs: Vec<PurchaseRecord> = Vec::new();
        assert_eq!(build_daily_series(&recs), Err(SeriesError::EmptyDataset));
    }

    #[test]
    fn single_date_is_degenerate_series() {
        let recs = vec![
            PurchaseRecord::new(ymd(2024, 1, 1), 3.0),
            PurchaseRecord::new(ymd(2024, 1, 1), 4.0),
        ];
        let s = build_daily_series(&recs).unwrap();
        assert_eq!(s.len(), 1);
        assert_eq!(s.values(), &[7.0]);
    }

    #[test]
    fn five_day_gap_is_forward_filled() {
        let recs = vec![
            PurchaseRecord::new(ymd(2024, 1, 1), 10.0),
            PurchaseRecord::new(ymd(2024, 1, 6), 20.0),
        ];
        let s = build_daily_series(&recs).unwrap();
        assert_eq!(s.len(), 6);
        assert_eq!(s.values(), &[10.0, 10.0, 10.0, 10.0, 10.0, 20.0]);
        assert_eq!(s.end(), ymd(2024, 1, 6));
    }

    #[test]
    fn span_before_first_observation_fails() {
        let mut points = BTreeMap::new();
        points.insert(ymd(2024, 1, 3), 1.0);
        let span = DateRange::new(ymd(2024, 1, 1), ymd(2024, 1, 5)).unwrap();
        assert_eq!(
            reindex_daily(&points, Some(span)),
            Err(SeriesError::InsufficientData {
                first: ymd(2024, 1, 1)
            })
        );
    }

    #[test]
    fn span_extends_past_last_observation() {
        let recs = vec![PurchaseRecord::new(ymd(2024, 1, 1), 2.0)];
        let span = DateRange::new(ymd(2024, 1, 1), ymd(2024, 1, 4)).unwrap();
        let s = SeriesBuilder::new().with_span(span).build(&recs).unwrap();
        assert_eq!(s.values(), &[2.0, 2.0, 2.0, 2.0]);
    }

    #[test]
    fn span_ignores_outside_points() {
        let recs = vec![
            PurchaseRecord::new(ymd(2023, 12, 31), 99.0),
            PurchaseRecord::new(ymd(2024, 1, 1), 1.0),
            PurchaseRecord::new(ymd(2024, 1, 3), 3.0),
            PurchaseRecord::new(ymd(2024, 1, 9), 99.0),
        ];
        let span = DateRange::new(ymd(2024, 1, 1), ymd(2024, 1, 3)).unwrap();
        let s = SeriesBuilder::new().with_span(span).build(&recs).unwrap();
        assert_eq!(s.values(), &[1.0, 1.0, 3.0]);
    }

    #[test]
    fn zero_amount_day_is_not_a_gap() {
        let recs = vec![
            PurchaseRecord::new(ymd(2024, 1, 1), 5.0),
            PurchaseRecord::new(ymd(2024, 1, 2), 0.0),
            PurchaseRecord::new(ymd(2024, 1, 3), 1.0),
        ];
        let s = build_daily_series(&recs).unwrap();
        assert_eq!(s.values(), &[5.0, 0.0, 1.0]);
    }
}
