//! The shared record filter.

use std::collections::BTreeSet;

use chrono::Datelike;
use kairos_io::PurchaseRecord;
use tracing::debug;

use crate::config::FilterConfig;
use crate::error::FilterError;

/// Applies every active filter in `config` to `records`.
///
/// Returns references to the kept records in their original order.
///
/// # Errors
///
/// Returns [`FilterError`] if `config` fails [`FilterConfig::validate`].
pub fn apply_filters<'a>(
    records: &'a [PurchaseRecord],
    config: &FilterConfig,
) -> Result<Vec<&'a PurchaseRecord>, FilterError> {
    config.validate()?;

    let kept: Vec<&PurchaseRecord> = records.iter().filter(|r| keep(r, config)).collect();
    debug!(
        n_in = records.len(),
        n_out = kept.len(),
        "filters applied"
    );
    Ok(kept)
}

fn keep(record: &PurchaseRecord, config: &FilterConfig) -> bool {
    let date = record.date();
    member(config.departments(), record.department())
        && member(config.suppliers(), record.supplier())
        && member(config.buyers(), record.buyer())
        && member(config.cities(), record.city())
        && config
            .date_range()
            .is_none_or(|(start, end)| start <= date && date <= end)
        && config.years().is_none_or(|ys| ys.contains(&date.year()))
        && config.months().is_none_or(|ms| ms.contains(&date.month()))
}

/// An inactive filter keeps everything; an active one needs a matching value.
fn member(filter: Option<&BTreeSet<String>>, value: Option<&str>) -> bool {
    match filter {
        None => true,
        Some(set) => value.is_some_and(|v| set.contains(v)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn records() -> Vec<PurchaseRecord> {
        vec![
            PurchaseRecord::new(ymd(2023, 12, 31), 5.0).with_department("IT"),
            PurchaseRecord::new(ymd(2024, 1, 1), 10.0)
                .with_department("IT")
                .with_supplier("Acme"),
            PurchaseRecord::new(ymd(2024, 1, 15), 20.0).with_department("HR"),
            PurchaseRecord::new(ymd(2024, 2, 1), 30.0),
        ]
    }

    #[test]
    fn empty_config_keeps_all() {
        let recs = records();
        let kept = apply_filters(&recs, &FilterConfig::new()).unwrap();
        assert_eq!(kept.len(), 4);
    }

    #[test]
    fn department_filter_drops_missing_attribute() {
        let recs = records();
        let kept = apply_filters(&recs, &FilterConfig::new().with_departments(["IT"])).unwrap();
        assert_eq!(kept.len(), 2);
        assert!(kept.iter().all(|r| r.department() == Some("IT")));
    }

    #[test]
    fn filters_combine_with_and() {
        let recs = records();
        let cfg = FilterConfig::new()
            .with_departments(["IT"])
            .with_suppliers(["Acme"]);
        let kept = apply_filters(&recs, &cfg).unwrap();
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].amount(), 10.0);
    }

    #[test]
    fn date_range_is_inclusive() {
        let recs = records();
        let cfg = FilterConfig::new().with_date_range(ymd(2024, 1, 1), ymd(2024, 2, 1));
        let kept = apply_filters(&recs, &cfg).unwrap();
        let amounts: Vec<f64> = kept.iter().map(|r| r.amount()).collect();
        assert_eq!(amounts, vec![10.0, 20.0, 30.0]);
    }

    #[test]
    fn year_and_month_filters() {
        let recs = records();
        let cfg = FilterConfig::new().with_years([2024]).with_months([1]);
        let kept = apply_filters(&recs, &cfg).unwrap();
        assert_eq!(kept.len(), 2);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let recs = records();
        let cfg = FilterConfig::new().with_date_range(ymd(2024, 3, 1), ymd(2024, 1, 1));
        assert!(apply_filters(&recs, &cfg).is_err());
    }
}
