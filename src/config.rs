use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use serde::Deserialize;

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "kairos.toml";

/// Top-level Kairos configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct KairosConfig {
    /// CSV input settings.
    #[serde(default)]
    pub io: IoToml,

    /// Default record filters.
    #[serde(default)]
    pub filter: FilterToml,

    /// Decomposition settings.
    #[serde(default)]
    pub decompose: DecomposeToml,

    /// Forecast settings.
    #[serde(default)]
    pub forecast: ForecastToml,
}

impl KairosConfig {
    /// Loads the config at `path`, or `./kairos.toml` when present, or defaults.
    ///
    /// An explicitly given path must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => {
                if !p.exists() {
                    bail!("config file not found: {}", p.display());
                }
                p
            }
            None => {
                let p = Path::new(DEFAULT_CONFIG_PATH);
                if !p.exists() {
                    return Ok(Self::default());
                }
                p
            }
        };
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str)
            .with_context(|| format!("failed to parse TOML config: {}", path.display()))
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IoToml {
    pub input: Option<PathBuf>,
    #[serde(default = "default_date_column")]
    pub date_column: String,
    #[serde(default = "default_amount_column")]
    pub amount_column: String,
    #[serde(default = "default_department_column")]
    pub department_column: String,
    #[serde(default = "default_supplier_column")]
    pub supplier_column: String,
    #[serde(default = "default_buyer_column")]
    pub buyer_column: String,
    #[serde(default = "default_buyer_first_name_column")]
    pub buyer_first_name_column: String,
    #[serde(default = "default_buyer_last_name_column")]
    pub buyer_last_name_column: String,
    #[serde(default = "default_city_column")]
    pub city_column: String,
    #[serde(default = "default_date_formats")]
    pub date_formats: Vec<String>,
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
    #[serde(default)]
    pub skip_invalid_rows: bool,
}

impl Default for IoToml {
    fn default() -> Self {
        Self {
            input: None,
            date_column: default_date_column(),
            amount_column: default_amount_column(),
            department_column: default_department_column(),
            supplier_column: default_supplier_column(),
            buyer_column: default_buyer_column(),
            buyer_first_name_column: default_buyer_first_name_column(),
            buyer_last_name_column: default_buyer_last_name_column(),
            city_column: default_city_column(),
            date_formats: default_date_formats(),
            delimiter: default_delimiter(),
            skip_invalid_rows: false,
        }
    }
}

fn default_date_column() -> String {
    "Creation Date".to_string()
}
fn default_amount_column() -> String {
    "Extended Price".to_string()
}
fn default_department_column() -> String {
    "Department".to_string()
}
fn default_supplier_column() -> String {
    "Supplier Name".to_string()
}
fn default_buyer_column() -> String {
    "Buyer".to_string()
}
fn default_buyer_first_name_column() -> String {
    "Buyer: First Name".to_string()
}
fn default_buyer_last_name_column() -> String {
    "Buyer: Last Name".to_string()
}
fn default_city_column() -> String {
    "ShipTo City".to_string()
}
fn default_date_formats() -> Vec<String> {
    kairos_io::DEFAULT_DATE_FORMATS
        .iter()
        .map(|f| f.to_string())
        .collect()
}
fn default_delimiter() -> char {
    ','
}

/// Default filters; empty lists mean no filter.
///
/// Dates are quoted ISO strings, e.g. `from = "2023-01-01"`.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct FilterToml {
    #[serde(default)]
    pub departments: Vec<String>,
    #[serde(default)]
    pub suppliers: Vec<String>,
    #[serde(default)]
    pub buyers: Vec<String>,
    #[serde(default)]
    pub cities: Vec<String>,
    #[serde(default)]
    pub years: Vec<i32>,
    #[serde(default)]
    pub months: Vec<u32>,
    #[serde(default)]
    pub from: Option<NaiveDate>,
    #[serde(default)]
    pub to: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DecomposeToml {
    #[serde(default = "default_period")]
    pub period: usize,
}

impl Default for DecomposeToml {
    fn default() -> Self {
        Self {
            period: default_period(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ForecastToml {
    #[serde(default = "default_period")]
    pub period: usize,
    #[serde(default = "default_horizon")]
    pub horizon: usize,
    #[serde(default = "default_max_iters")]
    pub max_iters: u64,
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
}

impl Default for ForecastToml {
    fn default() -> Self {
        Self {
            period: default_period(),
            horizon: default_horizon(),
            max_iters: default_max_iters(),
            tolerance: default_tolerance(),
        }
    }
}

fn default_period() -> usize {
    30
}
fn default_horizon() -> usize {
    365
}
fn default_max_iters() -> u64 {
    5000
}
fn default_tolerance() -> f64 {
    1e-10
}
