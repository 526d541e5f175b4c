//! Summary command: metric cards and calendar aggregates.

use anyhow::Result;
use tracing::{info, info_span};

use kairos_filter::PurchaseSummary;
use kairos_series::{totals_by_month, totals_by_year, totals_by_year_month};

use crate::cli::SummaryArgs;
use crate::context::RunContext;
use crate::output::{SummaryJson, write_json};

/// Run the summary pipeline.
pub fn run(args: SummaryArgs) -> Result<()> {
    let _cmd = info_span!("summary").entered();

    let mut ctx = RunContext::from_args(&args.common)?;
    let records = ctx.filtered_records()?;

    let summary = PurchaseSummary::from_records(records.iter().copied());
    info!(
        n_orders = summary.n_orders,
        total_amount = summary.total_amount,
        "summary computed"
    );
    let json = SummaryJson::new(
        summary,
        &totals_by_year(records.iter().copied()),
        &totals_by_month(records.iter().copied()),
        &totals_by_year_month(records.iter().copied()),
    );

    write_json(&json, args.common.output.as_deref())
}
