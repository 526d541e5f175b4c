//! Decomposition result.

use chrono::NaiveDate;

/// Output of an additive decomposition.
///
/// All component sequences are aligned with the input series: index `i`
/// is day `start + i`. Where the trend is defined,
/// `observed == trend + seasonal + residual`.
#[derive(Debug, Clone, PartialEq)]
pub struct Decomposition {
    start: NaiveDate,
    period: usize,
    observed: Vec<f64>,
    trend: Vec<Option<f64>>,
    seasonal: Vec<f64>,
    residual: Vec<Option<f64>>,
    pattern: Vec<f64>,
}

impl Decomposition {
    pub(crate) fn new(
        start: NaiveDate,
        period: usize,
        observed: Vec<f64>,
        trend: Vec<Option<f64>>,
        seasonal: Vec<f64>,
        residual: Vec<Option<f64>>,
        pattern: Vec<f64>,
    ) -> Self {
        Self {
            start,
            period,
            observed,
            trend,
            seasonal,
            residual,
            pattern,
        }
    }

    /// Returns the seasonal period used.
    pub fn period(&self) -> usize {
        self.period
    }

    /// Returns the first day.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Returns the number of days.
    pub fn len(&self) -> usize {
        self.observed.len()
    }

    /// Always `false` for a result built by [`crate::decompose`].
    pub fn is_empty(&self) -> bool {
        self.observed.is_empty()
    }

    /// Returns the date of every position.
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.start.iter_days().take(self.len()).collect()
    }

    pub fn observed(&self) -> &[f64] {
        &self.observed
    }

    /// Centred moving average; `None` at the first and last `period / 2` days.
    pub fn trend(&self) -> &[Option<f64>] {
        &self.trend
    }

    pub fn seasonal(&self) -> &[f64] {
        &self.seasonal
    }

    /// `observed - trend - seasonal`; `None` where the trend is undefined.
    pub fn residual(&self) -> &[Option<f64>] {
        &self.residual
    }

    /// The `period` seasonal values, position 0 aligned with [`start`](Self::start).
    ///
    /// Sums to zero.
    pub fn seasonal_pattern(&self) -> &[f64] {
        &self.pattern
    }
}
