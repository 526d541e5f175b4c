//! Pure conversion functions: TOML config structs and CLI flags -> crate API config types.

use anyhow::{Result, bail};

use kairos_decompose::DecomposeSpec;
use kairos_filter::FilterConfig;
use kairos_forecast::HoltWintersSpec;
use kairos_io::ReaderConfig;

use crate::cli::FilterArgs;
use crate::config::*;

/// Builds a [`ReaderConfig`] from the TOML I/O configuration.
pub fn build_reader_config(io: &IoToml) -> Result<ReaderConfig> {
    if !io.delimiter.is_ascii() {
        bail!("delimiter must be a single ASCII character, got {:?}", io.delimiter);
    }
    let cfg = ReaderConfig::default()
        .with_date_column(&io.date_column)
        .with_amount_column(&io.amount_column)
        .with_department_column(&io.department_column)
        .with_supplier_column(&io.supplier_column)
        .with_buyer_column(&io.buyer_column)
        .with_buyer_name_columns(&io.buyer_first_name_column, &io.buyer_last_name_column)
        .with_city_column(&io.city_column)
        .with_date_formats(&io.date_formats)
        .with_delimiter(io.delimiter as u8)
        .with_skip_invalid_rows(io.skip_invalid_rows);
    cfg.validate()?;
    Ok(cfg)
}

/// Picks the CLI list when given, otherwise the config list.
fn pick<'a, T>(cli: &'a [T], toml: &'a [T]) -> &'a [T] {
    if cli.is_empty() { toml } else { cli }
}

/// Builds a [`FilterConfig`] from the TOML defaults overlaid with CLI flags.
///
/// Each non-empty CLI list replaces the configured one; `--from` and `--to`
/// replace their bounds individually. A half-open range is closed with the
/// earliest or latest representable date.
pub fn build_filter_config(toml: &FilterToml, cli: &FilterArgs) -> Result<FilterConfig> {
    let mut cfg = FilterConfig::new()
        .with_departments(pick(&cli.departments, &toml.departments).iter().cloned())
        .with_suppliers(pick(&cli.suppliers, &toml.suppliers).iter().cloned())
        .with_buyers(pick(&cli.buyers, &toml.buyers).iter().cloned())
        .with_cities(pick(&cli.cities, &toml.cities).iter().cloned())
        .with_years(pick(&cli.years, &toml.years).iter().copied())
        .with_months(pick(&cli.months, &toml.months).iter().copied());

    let from = cli.from.or(toml.from);
    let to = cli.to.or(toml.to);
    if from.is_some() || to.is_some() {
        cfg = cfg.with_date_range(
            from.unwrap_or(chrono::NaiveDate::MIN),
            to.unwrap_or(chrono::NaiveDate::MAX),
        );
    }
    cfg.validate()?;
    Ok(cfg)
}

/// Builds a [`DecomposeSpec`]; `period` overrides the configured one.
pub fn build_decompose_spec(toml: &DecomposeToml, period: Option<usize>) -> Result<DecomposeSpec> {
    let period = period.unwrap_or(toml.period);
    if period < 2 {
        bail!("decompose period must be at least 2, got {period}");
    }
    Ok(DecomposeSpec::new(period))
}

/// Builds a [`HoltWintersSpec`] and horizon; CLI values override the configured ones.
pub fn build_forecast_spec(
    toml: &ForecastToml,
    period: Option<usize>,
    horizon: Option<usize>,
) -> Result<(HoltWintersSpec, usize)> {
    let period = period.unwrap_or(toml.period);
    let horizon = horizon.unwrap_or(toml.horizon);
    if period < 2 {
        bail!("forecast period must be at least 2, got {period}");
    }
    if horizon == 0 {
        bail!("forecast horizon must be at least 1");
    }
    if toml.max_iters == 0 {
        bail!("forecast max_iters must be at least 1");
    }
    if !(toml.tolerance.is_finite() && toml.tolerance > 0.0) {
        bail!("forecast tolerance must be positive, got {}", toml.tolerance);
    }
    let spec = HoltWintersSpec::new(period)
        .with_max_iters(toml.max_iters)
        .with_tolerance(toml.tolerance);
    Ok((spec, horizon))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn reader_config_from_defaults() {
        let cfg = build_reader_config(&IoToml::default()).unwrap();
        assert_eq!(cfg.date_column(), "Creation Date");
        assert_eq!(cfg.amount_column(), "Extended Price");
        assert!(!cfg.skip_invalid_rows());
    }

    #[test]
    fn reader_config_rejects_non_ascii_delimiter() {
        let io = IoToml {
            delimiter: '§',
            ..IoToml::default()
        };
        assert!(build_reader_config(&io).is_err());
    }

    #[test]
    fn reader_config_rejects_blank_date_column() {
        let io = IoToml {
            date_column: " ".into(),
            ..IoToml::default()
        };
        assert!(build_reader_config(&io).is_err());
    }

    #[test]
    fn cli_lists_override_toml() {
        let toml = FilterToml {
            departments: vec!["IT".into()],
            cities: vec!["Austin".into()],
            ..FilterToml::default()
        };
        let cli = FilterArgs {
            departments: vec!["HR".into()],
            ..FilterArgs::default()
        };
        let cfg = build_filter_config(&toml, &cli).unwrap();
        let depts: Vec<_> = cfg.departments().unwrap().iter().cloned().collect();
        assert_eq!(depts, vec!["HR"]);
        assert!(cfg.cities().unwrap().contains("Austin"));
    }

    #[test]
    fn half_open_date_range() {
        let cli = FilterArgs {
            from: Some(ymd(2023, 6, 1)),
            ..FilterArgs::default()
        };
        let cfg = build_filter_config(&FilterToml::default(), &cli).unwrap();
        assert_eq!(
            cfg.date_range(),
            Some((ymd(2023, 6, 1), NaiveDate::MAX))
        );
    }

    #[test]
    fn reversed_range_is_error() {
        let cli = FilterArgs {
            from: Some(ymd(2024, 1, 2)),
            to: Some(ymd(2024, 1, 1)),
            ..FilterArgs::default()
        };
        assert!(build_filter_config(&FilterToml::default(), &cli).is_err());
    }

    #[test]
    fn no_filters_is_empty() {
        let cfg = build_filter_config(&FilterToml::default(), &FilterArgs::default()).unwrap();
        assert!(cfg.is_empty());
    }

    #[test]
    fn forecast_overrides() {
        let (spec, horizon) =
            build_forecast_spec(&ForecastToml::default(), Some(7), Some(14)).unwrap();
        assert_eq!(spec.period(), 7);
        assert_eq!(spec.max_iters(), 5000);
        assert_eq!(horizon, 14);
    }

    #[test]
    fn forecast_rejects_zero_horizon() {
        assert!(build_forecast_spec(&ForecastToml::default(), None, Some(0)).is_err());
    }

    #[test]
    fn decompose_rejects_period_one() {
        assert!(build_decompose_spec(&DecomposeToml::default(), Some(1)).is_err());
        assert_eq!(
            build_decompose_spec(&DecomposeToml::default(), None)
                .unwrap()
                .period(),
            30
        );
    }
}
