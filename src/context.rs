//! Shared setup for every subcommand: config, reader, filters, records.

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use kairos_filter::{FilterConfig, apply_filters};
use kairos_io::{PurchaseRecord, ReaderConfig};
use tracing::info;

use crate::cache::DatasetCache;
use crate::cli::CommonArgs;
use crate::config::KairosConfig;
use crate::convert;

/// Resolved configuration for one run.
pub struct RunContext {
    pub config: KairosConfig,
    pub input: PathBuf,
    pub reader: ReaderConfig,
    pub filter: FilterConfig,
    pub cache: DatasetCache,
}

impl RunContext {
    /// Loads the TOML config and applies CLI overrides.
    pub fn from_args(args: &CommonArgs) -> Result<Self> {
        let config = KairosConfig::load(args.config.as_deref())?;
        let input = args
            .input
            .clone()
            .or_else(|| config.io.input.clone())
            .ok_or_else(|| anyhow!("no input path: set [io].input in config or use --input"))?;
        let reader = convert::build_reader_config(&config.io)?;
        let filter = convert::build_filter_config(&config.filter, &args.filter)?;
        Ok(Self {
            config,
            input,
            reader,
            filter,
            cache: DatasetCache::new(),
        })
    }

    /// Loads the purchase table and applies the filters.
    pub fn filtered_records(&mut self) -> Result<Vec<&PurchaseRecord>> {
        info!(path = %self.input.display(), "reading purchase data");
        let records = self.cache.load(&self.input, &self.reader)?;
        let kept = apply_filters(records, &self.filter).context("failed to apply filters")?;
        info!(
            n_records = records.len(),
            n_kept = kept.len(),
            "purchase data filtered"
        );
        Ok(kept)
    }
}
