//! JSON shapes written by the subcommands.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Serialize;

use kairos_decompose::Decomposition;
use kairos_filter::PurchaseSummary;
use kairos_forecast::{Forecast, HoltWintersFit};

/// Four aligned component sequences; `null` where undefined.
#[derive(Debug, Serialize)]
pub struct DecompositionJson {
    pub period: usize,
    pub dates: Vec<NaiveDate>,
    pub observed: Vec<f64>,
    pub trend: Vec<Option<f64>>,
    pub seasonal: Vec<f64>,
    pub residual: Vec<Option<f64>>,
}

impl From<&Decomposition> for DecompositionJson {
    fn from(d: &Decomposition) -> Self {
        Self {
            period: d.period(),
            dates: d.dates(),
            observed: d.observed().to_vec(),
            trend: d.trend().to_vec(),
            seasonal: d.seasonal().to_vec(),
            residual: d.residual().to_vec(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PointJson {
    pub date: NaiveDate,
    pub value: f64,
}

#[derive(Debug, Serialize)]
pub struct ForecastJson {
    pub period: usize,
    pub horizon: usize,
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
    pub sse: f64,
    pub points: Vec<PointJson>,
}

impl ForecastJson {
    pub fn new(fit: &HoltWintersFit, forecast: &Forecast) -> Self {
        Self {
            period: fit.period(),
            horizon: forecast.len(),
            alpha: fit.alpha(),
            beta: fit.beta(),
            gamma: fit.gamma(),
            sse: fit.sse(),
            points: forecast
                .points()
                .map(|(date, value)| PointJson { date, value })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct YearTotal {
    pub year: i32,
    pub total: f64,
}

#[derive(Debug, Serialize)]
pub struct MonthTotal {
    pub month: u32,
    pub total: f64,
}

#[derive(Debug, Serialize)]
pub struct YearMonthTotal {
    pub year: i32,
    pub month: u32,
    pub total: f64,
}

/// Metric cards plus calendar aggregates.
#[derive(Debug, Serialize)]
pub struct SummaryJson {
    #[serde(flatten)]
    pub summary: PurchaseSummary,
    pub by_year: Vec<YearTotal>,
    pub by_month: Vec<MonthTotal>,
    pub by_year_month: Vec<YearMonthTotal>,
}

impl SummaryJson {
    pub fn new(
        summary: PurchaseSummary,
        by_year: &BTreeMap<i32, f64>,
        by_month: &BTreeMap<u32, f64>,
        by_year_month: &BTreeMap<(i32, u32), f64>,
    ) -> Self {
        Self {
            summary,
            by_year: by_year
                .iter()
                .map(|(&year, &total)| YearTotal { year, total })
                .collect(),
            by_month: by_month
                .iter()
                .map(|(&month, &total)| MonthTotal { month, total })
                .collect(),
            by_year_month: by_year_month
                .iter()
                .map(|(&(year, month), &total)| YearMonthTotal { year, month, total })
                .collect(),
        }
    }
}

/// Writes `value` as pretty JSON to `path`, or stdout when `None`.
pub fn write_json<T: Serialize>(value: &T, path: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialise JSON")?;
    match path {
        Some(p) => std::fs::write(p, json)
            .with_context(|| format!("failed to write output: {}", p.display())),
        None => {
            let mut out = std::io::stdout().lock();
            writeln!(out, "{json}").context("failed to write to stdout")
        }
    }
}
