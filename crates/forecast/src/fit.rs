//! Fitted Holt-Winters model.

use chrono::NaiveDate;
use kairos_calendar::days_after;

use crate::error::ForecastError;
use crate::result::Forecast;
use crate::smoothing::{self, Pass, Weights};
use crate::spec::HoltWintersSpec;

/// A fitted additive Holt-Winters model produced by [`HoltWintersSpec::fit()`].
///
/// Holds the estimated smoothing weights, the in-sample one-step-ahead
/// predictions and the state at the last observation, from which
/// [`forecast`](Self::forecast) extrapolates.
#[derive(Clone, Debug)]
pub struct HoltWintersFit {
    spec: HoltWintersSpec,
    alpha: f64,
    beta: f64,
    gamma: f64,
    sse: f64,
    fitted: Vec<f64>,
    residuals: Vec<f64>,
    level: f64,
    trend: f64,
    seasonal: Vec<f64>,
}

impl HoltWintersFit {
    pub(crate) fn new(spec: HoltWintersSpec, w: Weights, data: &[f64], pass: Pass) -> Self {
        let residuals = data
            .iter()
            .zip(&pass.fitted)
            .map(|(y, f)| y - f)
            .collect();
        let seasonal = smoothing::latest_season(&pass.state, data.len());
        Self {
            spec,
            alpha: w.alpha,
            beta: w.beta,
            gamma: w.gamma,
            sse: pass.sse,
            fitted: pass.fitted,
            residuals,
            level: pass.state.level,
            trend: pass.state.trend,
            seasonal,
        }
    }

    /// Returns the [`HoltWintersSpec`] that produced this fit.
    pub fn spec(&self) -> HoltWintersSpec {
        self.spec
    }

    /// Returns the seasonal period.
    pub fn period(&self) -> usize {
        self.spec.period()
    }

    /// Level smoothing weight.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Trend smoothing weight.
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Seasonal smoothing weight.
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Sum of squared one-step-ahead errors at the fitted weights.
    pub fn sse(&self) -> f64 {
        self.sse
    }

    /// In-sample one-step-ahead predictions.
    pub fn fitted(&self) -> &[f64] {
        &self.fitted
    }

    /// Observations minus [`fitted`](Self::fitted).
    pub fn residuals(&self) -> &[f64] {
        &self.residuals
    }

    /// Level at the last observation.
    pub fn level(&self) -> f64 {
        self.level
    }

    /// Trend (per day) at the last observation.
    pub fn trend(&self) -> f64 {
        self.trend
    }

    /// The last `period` seasonal values, oldest first.
    pub fn seasonal(&self) -> &[f64] {
        &self.seasonal
    }

    /// Forecasts `horizon` steps past the last observation.
    ///
    /// # Errors
    ///
    /// Returns [`ForecastError::InvalidHorizon`] if `horizon == 0`.
    pub fn forecast(&self, horizon: usize) -> Result<Vec<f64>, ForecastError> {
        if horizon == 0 {
            return Err(ForecastError::InvalidHorizon);
        }
        let period = self.seasonal.len();
        Ok((1..=horizon)
            .map(|h| self.level + h as f64 * self.trend + self.seasonal[(h - 1) % period])
            .collect())
    }

    /// Forecasts `horizon` days, dated from the day after `last`.
    ///
    /// # Errors
    ///
    /// [`ForecastError::InvalidHorizon`] if `horizon == 0` and
    /// [`ForecastError::Calendar`] if the dates leave the supported range.
    pub fn forecast_after(
        &self,
        last: NaiveDate,
        horizon: usize,
    ) -> Result<Forecast, ForecastError> {
        let values = self.forecast(horizon)?;
        let dates = days_after(last, horizon)?;
        Ok(Forecast::new(dates, values))
    }
}
