//! # kairos-forecast
//!
//! Additive Holt-Winters exponential smoothing for daily series.
//!
//! ## Workflow
//!
//! ```mermaid
//! graph LR
//!     A["HoltWintersSpec::new(period)"] -->|".fit(&data)?"| B["HoltWintersFit"]
//!     B --> C[".alpha() / .beta() / .gamma()"]
//!     B --> D[".fitted() / .residuals() / .sse()"]
//!     B -->|".forecast(horizon)?"| E["Vec of f64"]
//!     B -->|".forecast_after(last_date, horizon)?"| F["Forecast"]
//!     G["forecast(&series, horizon, period)?"] --> F
//! ```
//!
//! The smoothing weights are chosen by Nelder-Mead over logit-transformed
//! parameters, minimising the one-step-ahead squared error. A run that hits
//! the iteration cap fails with [`ForecastError::ForecastConvergence`].
//!
//! ## Model
//!
//! | Symbol | Accessor | Meaning |
//! |--------|----------|---------|
//! | alpha | [`HoltWintersFit::alpha()`] | level smoothing weight |
//! | beta | [`HoltWintersFit::beta()`] | trend smoothing weight |
//! | gamma | [`HoltWintersFit::gamma()`] | seasonal smoothing weight |
//!
//! ```text
//! yhat(t)  = l(t-1) + b(t-1) + s(t-P)
//! l(t)     = alpha (y(t) - s(t-P)) + (1 - alpha) (l(t-1) + b(t-1))
//! b(t)     = beta (l(t) - l(t-1)) + (1 - beta) b(t-1)
//! s(t)     = gamma (y(t) - l(t-1) - b(t-1)) + (1 - gamma) s(t-P)
//! yhat(n+h) = l(n) + h b(n) + s(n + h - P(k+1)),  k = (h-1) div P
//! ```

mod error;
mod fit;
mod result;
mod spec;

pub(crate) mod optimizer;
pub(crate) mod smoothing;

pub use error::ForecastError;
pub use fit::HoltWintersFit;
pub use result::Forecast;
pub use spec::{
    DEFAULT_HORIZON, DEFAULT_MAX_ITERS, DEFAULT_PERIOD, DEFAULT_TOLERANCE, HoltWintersSpec,
    forecast,
};
