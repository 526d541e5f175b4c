//! Forecast command: Holt-Winters projection of daily purchase totals.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use kairos_series::build_daily_series;

use crate::cli::ForecastArgs;
use crate::context::RunContext;
use crate::convert;
use crate::output::{ForecastJson, write_json};

/// Run the forecast pipeline.
pub fn run(args: ForecastArgs) -> Result<()> {
    let _cmd = info_span!("forecast").entered();

    let mut ctx = RunContext::from_args(&args.common)?;
    let (spec, horizon) =
        convert::build_forecast_spec(&ctx.config.forecast, args.period, args.horizon)?;

    let records = ctx.filtered_records()?;
    let series = build_daily_series(records.iter().copied())
        .context("failed to build daily series")?;
    info!(
        start = %series.start(),
        end = %series.end(),
        n_days = series.len(),
        "daily series built"
    );

    info!(period = spec.period(), horizon, "fitting holt-winters");
    let (fit, forecast) = spec
        .forecast(&series, horizon)
        .context("holt-winters forecast failed")?;
    info!(
        alpha = fit.alpha(),
        beta = fit.beta(),
        gamma = fit.gamma(),
        sse = fit.sse(),
        "holt-winters fitted"
    );

    write_json(&ForecastJson::new(&fit, &forecast), args.common.output.as_deref())
}
