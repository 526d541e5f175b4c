use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Kairos purchase seasonality engine.
#[derive(Parser)]
#[command(
    name = "kairos",
    version,
    about = "Daily purchase series decomposition and Holt-Winters forecasting"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Decompose the daily purchase series into trend, seasonal and residual.
    Decompose(DecomposeArgs),
    /// Forecast daily purchase totals with additive Holt-Winters.
    Forecast(ForecastArgs),
    /// Metric cards and calendar aggregates of the filtered purchases.
    Summary(SummaryArgs),
}

/// Input, config and filter arguments shared by every subcommand.
#[derive(clap::Args, Debug, Default)]
pub struct CommonArgs {
    /// Path to TOML configuration file (defaults to ./kairos.toml when present).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Purchase CSV file; overrides [io].input.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Write JSON here instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub filter: FilterArgs,
}

/// Record filters. Any flag given replaces the matching [filter] entry.
#[derive(clap::Args, Debug, Default)]
pub struct FilterArgs {
    /// Keep only these departments (repeatable).
    #[arg(long = "department")]
    pub departments: Vec<String>,

    /// Keep only these suppliers (repeatable).
    #[arg(long = "supplier")]
    pub suppliers: Vec<String>,

    /// Keep only these buyers (repeatable).
    #[arg(long = "buyer")]
    pub buyers: Vec<String>,

    /// Keep only these ship-to cities (repeatable).
    #[arg(long = "city")]
    pub cities: Vec<String>,

    /// Keep only these calendar years (repeatable).
    #[arg(long = "year")]
    pub years: Vec<i32>,

    /// Keep only these months, 1-12 (repeatable).
    #[arg(long = "month")]
    pub months: Vec<u32>,

    /// First day to keep (YYYY-MM-DD, inclusive).
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// Last day to keep (YYYY-MM-DD, inclusive).
    #[arg(long)]
    pub to: Option<NaiveDate>,
}

/// Arguments for the `decompose` subcommand.
#[derive(clap::Args)]
pub struct DecomposeArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Override the seasonal period from config.
    #[arg(short, long)]
    pub period: Option<usize>,
}

/// Arguments for the `forecast` subcommand.
#[derive(clap::Args)]
pub struct ForecastArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Override the seasonal period from config.
    #[arg(short, long)]
    pub period: Option<usize>,

    /// Override the forecast horizon in days.
    #[arg(long)]
    pub horizon: Option<usize>,
}

/// Arguments for the `summary` subcommand.
#[derive(clap::Args)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}
