//! Decompose command: trend, seasonal and residual of the daily purchase series.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use kairos_series::build_daily_series;

use crate::cli::DecomposeArgs;
use crate::context::RunContext;
use crate::convert;
use crate::output::{DecompositionJson, write_json};

/// Run the decomposition pipeline.
pub fn run(args: DecomposeArgs) -> Result<()> {
    let _cmd = info_span!("decompose").entered();

    // 1. Config, overrides and specs
    let mut ctx = RunContext::from_args(&args.common)?;
    let spec = convert::build_decompose_spec(&ctx.config.decompose, args.period)?;

    // 2. Load + filter
    let records = ctx.filtered_records()?;

    // 3. Daily series
    let series = build_daily_series(records.iter().copied())
        .context("failed to build daily series")?;
    info!(
        start = %series.start(),
        end = %series.end(),
        n_days = series.len(),
        "daily series built"
    );

    // 4. Decompose
    let result = spec
        .decompose(&series)
        .with_context(|| format!("decomposition with period {} failed", spec.period()))?;
    info!(period = spec.period(), "decomposition complete");

    write_json(&DecompositionJson::from(&result), args.common.output.as_deref())
}
