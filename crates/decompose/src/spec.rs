//! Decomposition specification and entry point.

use kairos_series::DailySeries;
use kairos_stats::{all_finite, finite_mean, mean};
use tracing::debug;

use crate::error::DecomposeError;
use crate::moving_average::centered_moving_average;
use crate::result::Decomposition;

/// Seasonal period used for purchase series, in days.
pub const DEFAULT_PERIOD: usize = 30;

/// Classical additive decomposition with a fixed seasonal period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecomposeSpec {
    period: usize,
}

impl Default for DecomposeSpec {
    fn default() -> Self {
        Self::new(DEFAULT_PERIOD)
    }
}

impl DecomposeSpec {
    /// Creates a spec with the given seasonal period in days.
    pub fn new(period: usize) -> Self {
        Self { period }
    }

    /// Returns the seasonal period.
    pub fn period(&self) -> usize {
        self.period
    }

    /// Minimum series length accepted, two full periods.
    pub fn min_len(&self) -> usize {
        2 * self.period
    }

    /// Decomposes `series` into trend, seasonal and residual components.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`DecomposeError::InvalidPeriod`] | `period < 2` |
    /// | [`DecomposeError::InsufficientHistory`] | `series.len() < 2 * period` |
    /// | [`DecomposeError::NonFiniteData`] | any value is NaN or infinite |
    pub fn decompose(&self, series: &DailySeries) -> Result<Decomposition, DecomposeError> {
        let period = self.period;
        if period < 2 {
            return Err(DecomposeError::InvalidPeriod { period });
        }
        let observed = series.values();
        let n = observed.len();
        if n < self.min_len() {
            return Err(DecomposeError::InsufficientHistory {
                n,
                min: self.min_len(),
            });
        }
        if !all_finite(observed) {
            return Err(DecomposeError::NonFiniteData);
        }

        let trend = centered_moving_average(observed, period);
        let detrended: Vec<f64> = observed
            .iter()
            .zip(&trend)
            .map(|(y, t)| t.map_or(f64::NAN, |t| y - t))
            .collect();

        // Average per position within the cycle, then centre on zero.
        let mut pattern: Vec<f64> = (0..period)
            .map(|j| {
                let cycle: Vec<f64> = detrended.iter().skip(j).step_by(period).copied().collect();
                finite_mean(&cycle).unwrap_or(0.0)
            })
            .collect();
        let offset = mean(&pattern);
        for s in &mut pattern {
            *s -= offset;
        }

        let seasonal: Vec<f64> = (0..n).map(|i| pattern[i % period]).collect();
        let residual: Vec<Option<f64>> = observed
            .iter()
            .zip(&trend)
            .zip(&seasonal)
            .map(|((y, t), s)| t.map(|t| y - t - s))
            .collect();

        debug!(
            n,
            period,
            n_trend = n - 2 * (period / 2),
            "additive decomposition complete"
        );

        Ok(Decomposition::new(
            series.start(),
            period,
            observed.to_vec(),
            trend,
            seasonal,
            residual,
            pattern,
        ))
    }
}

/// Decomposes `series` with the given seasonal period.
///
/// Shorthand for `DecomposeSpec::new(period).decompose(series)`.
pub fn decompose(series: &DailySeries, period: usize) -> Result<Decomposition, DecomposeError> {
    DecomposeSpec::new(period).decompose(series)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use chrono::NaiveDate;

    fn series(values: Vec<f64>) -> DailySeries {
        DailySeries::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), values).unwrap()
    }

    #[test]
    fn default_period_is_thirty() {
        assert_eq!(DecomposeSpec::default().period(), 30);
        assert_eq!(DecomposeSpec::default().min_len(), 60);
    }

    #[test]
    fn rejects_small_period() {
        let s = series(vec![1.0; 10]);
        assert_eq!(
            decompose(&s, 1).unwrap_err(),
            DecomposeError::InvalidPeriod { period: 1 }
        );
    }

    #[test]
    fn rejects_short_series() {
        let s = series(vec![1.0; 40]);
        assert_eq!(
            decompose(&s, 30).unwrap_err(),
            DecomposeError::InsufficientHistory { n: 40, min: 60 }
        );
    }

    #[test]
    fn accepts_exactly_two_periods() {
        let s = series((0..60).map(|i| i as f64).collect());
        let d = decompose(&s, 30).unwrap();
        assert_eq!(d.len(), 60);
    }

    #[test]
    fn rejects_non_finite() {
        let mut values = vec![1.0; 60];
        values[10] = f64::INFINITY;
        assert_eq!(
            decompose(&series(values), 30).unwrap_err(),
            DecomposeError::NonFiniteData
        );
    }

    #[test]
    fn pure_seasonal_signal_is_recovered() {
        let pattern = [3.0, -1.0, -2.0, 0.0];
        let values: Vec<f64> = (0..40).map(|i| 10.0 + pattern[i % 4]).collect();
        let d = decompose(&series(values), 4).unwrap();
        for (got, want) in d.seasonal_pattern().iter().zip(pattern) {
            assert_abs_diff_eq!(*got, want, epsilon = 1e-12);
        }
        for r in d.residual().iter().flatten() {
            assert_abs_diff_eq!(*r, 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn odd_period_edges() {
        let s = series((0..21).map(|i| (i % 7) as f64).collect());
        let d = decompose(&s, 7).unwrap();
        assert!(d.trend()[..3].iter().all(Option::is_none));
        assert!(d.trend()[3..18].iter().all(Option::is_some));
        assert!(d.trend()[18..].iter().all(Option::is_none));
    }
}
