//! Calendar aggregates of purchase amounts.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use kairos_io::PurchaseRecord;

use crate::error::SeriesError;

/// Sums amounts per calendar day.
///
/// # Errors
///
/// Returns [`SeriesError::NonFiniteAmount`] for the first NaN or infinite
/// amount encountered.
pub fn aggregate_daily<'a, I>(records: I) -> Result<BTreeMap<NaiveDate, f64>, SeriesError>
where
    I: IntoIterator<Item = &'a PurchaseRecord>,
{
    let mut sums = BTreeMap::new();
    for r in records {
        if !r.amount().is_finite() {
            return Err(SeriesError::NonFiniteAmount { date: r.date() });
        }
        *sums.entry(r.date()).or_insert(0.0) += r.amount();
    }
    Ok(sums)
}

/// Sums amounts per month of year (1..=12), pooling all years.
pub fn totals_by_month<'a, I>(records: I) -> BTreeMap<u32, f64>
where
    I: IntoIterator<Item = &'a PurchaseRecord>,
{
    group_sum(records, |d| d.month())
}

/// Sums amounts per calendar year.
pub fn totals_by_year<'a, I>(records: I) -> BTreeMap<i32, f64>
where
    I: IntoIterator<Item = &'a PurchaseRecord>,
{
    group_sum(records, |d| d.year())
}

/// Sums amounts per `(year, month)`.
pub fn totals_by_year_month<'a, I>(records: I) -> BTreeMap<(i32, u32), f64>
where
    I: IntoIterator<Item = &'a PurchaseRecord>,
{
    group_sum(records, |d| (d.year(), d.month()))
}

fn group_sum<'a, I, K, F>(records: I, key: F) -> BTreeMap<K, f64>
where
    I: IntoIterator<Item = &'a PurchaseRecord>,
    K: Ord,
    F: Fn(NaiveDate) -> K,
{
    let mut sums = BTreeMap::new();
    for r in records {
        *sums.entry(key(r.date())).or_insert(0.0) += r.amount();
    }
    sums
}
