//! Holt-Winters model specification.

use kairos_series::DailySeries;
use kairos_stats::all_finite;

use crate::error::ForecastError;
use crate::fit::HoltWintersFit;
use crate::result::Forecast;

/// Seasonal period used for purchase series, in days.
pub const DEFAULT_PERIOD: usize = 30;
/// Forecast horizon used for purchase series, in days.
pub const DEFAULT_HORIZON: usize = 365;
/// Default Nelder-Mead iteration cap.
pub const DEFAULT_MAX_ITERS: u64 = 5000;
/// Default Nelder-Mead cost standard-deviation tolerance.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Additive Holt-Winters model with a fixed seasonal period.
///
/// # Example
///
/// ```ignore
/// let fit = HoltWintersSpec::new(30)
///     .with_max_iters(2000)
///     .fit(series.values())?;
/// let next_year = fit.forecast(365)?;
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoltWintersSpec {
    period: usize,
    max_iters: u64,
    tolerance: f64,
}

impl Default for HoltWintersSpec {
    fn default() -> Self {
        Self::new(DEFAULT_PERIOD)
    }
}

impl HoltWintersSpec {
    /// Creates a spec with the given seasonal period and default optimiser settings.
    pub fn new(period: usize) -> Self {
        Self {
            period,
            max_iters: DEFAULT_MAX_ITERS,
            tolerance: DEFAULT_TOLERANCE,
        }
    }

    /// Set the Nelder-Mead iteration cap.
    pub fn with_max_iters(mut self, max_iters: u64) -> Self {
        self.max_iters = max_iters;
        self
    }

    /// Set the convergence tolerance on the simplex cost spread.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn period(&self) -> usize {
        self.period
    }

    pub fn max_iters(&self) -> u64 {
        self.max_iters
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Minimum series length accepted, two full periods.
    pub fn min_len(&self) -> usize {
        2 * self.period
    }

    /// Fits the smoothing weights to `data`.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`ForecastError::InvalidPeriod`] | `period < 2` |
    /// | [`ForecastError::InsufficientHistory`] | `data.len() < 2 * period` |
    /// | [`ForecastError::NonFiniteData`] | any element is NaN or infinite |
    /// | [`ForecastError::ForecastConvergence`] | iteration cap reached or non-finite objective |
    pub fn fit(&self, data: &[f64]) -> Result<HoltWintersFit, ForecastError> {
        if self.period < 2 {
            return Err(ForecastError::InvalidPeriod {
                period: self.period,
            });
        }
        if data.len() < self.min_len() {
            return Err(ForecastError::InsufficientHistory {
                n: data.len(),
                min: self.min_len(),
            });
        }
        if !all_finite(data) {
            return Err(ForecastError::NonFiniteData);
        }
        crate::optimizer::fit_holt_winters(self, data)
    }

    /// Fits to `series` and forecasts `horizon` days past its last date.
    pub fn forecast(
        &self,
        series: &DailySeries,
        horizon: usize,
    ) -> Result<(HoltWintersFit, Forecast), ForecastError> {
        if horizon == 0 {
            return Err(ForecastError::InvalidHorizon);
        }
        let fit = self.fit(series.values())?;
        let forecast = fit.forecast_after(series.end(), horizon)?;
        Ok((fit, forecast))
    }
}

/// Forecasts `horizon` days past the end of `series`.
///
/// Shorthand for `HoltWintersSpec::new(seasonal_period).forecast(series, horizon)`
/// keeping only the [`Forecast`].
///
/// # Errors
///
/// [`ForecastError::InvalidHorizon`] for `horizon == 0`, otherwise as
/// [`HoltWintersSpec::fit`].
pub fn forecast(
    series: &DailySeries,
    horizon: usize,
    seasonal_period: usize,
) -> Result<Forecast, ForecastError> {
    HoltWintersSpec::new(seasonal_period)
        .forecast(series, horizon)
        .map(|(_, f)| f)
}
