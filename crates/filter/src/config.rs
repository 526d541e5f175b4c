//! Filter configuration.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::error::FilterError;

/// The recognised record filters.
///
/// Every filter is optional. A set filter keeps records whose attribute is
/// a member of the set; an empty set is treated like an absent filter, the
/// way an empty multiselect shows everything. Records missing the attribute
/// are dropped whenever that attribute's filter is active. The date range
/// is inclusive on both ends.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use kairos_filter::FilterConfig;
///
/// let cfg = FilterConfig::new()
///     .with_suppliers(["Acme"])
///     .with_date_range(
///         NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///         NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
///     );
/// assert!(cfg.validate().is_ok());
/// assert!(!cfg.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterConfig {
    departments: Option<BTreeSet<String>>,
    suppliers: Option<BTreeSet<String>>,
    buyers: Option<BTreeSet<String>>,
    cities: Option<BTreeSet<String>>,
    date_range: Option<(NaiveDate, NaiveDate)>,
    years: Option<BTreeSet<i32>>,
    months: Option<BTreeSet<u32>>,
}

fn non_empty<T: Ord>(set: BTreeSet<T>) -> Option<BTreeSet<T>> {
    (!set.is_empty()).then_some(set)
}

fn string_set<I, S>(values: I) -> Option<BTreeSet<String>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    non_empty(values.into_iter().map(Into::into).collect())
}

impl FilterConfig {
    /// Creates a configuration with no active filters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep only these departments.
    pub fn with_departments<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.departments = string_set(values);
        self
    }

    /// Keep only these suppliers.
    pub fn with_suppliers<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.suppliers = string_set(values);
        self
    }

    /// Keep only these buyers.
    pub fn with_buyers<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.buyers = string_set(values);
        self
    }

    /// Keep only these ship-to cities.
    pub fn with_cities<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cities = string_set(values);
        self
    }

    /// Keep only records dated within `start..=end`.
    pub fn with_date_range(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.date_range = Some((start, end));
        self
    }

    /// Keep only records from these calendar years.
    pub fn with_years<I: IntoIterator<Item = i32>>(mut self, values: I) -> Self {
        self.years = non_empty(values.into_iter().collect());
        self
    }

    /// Keep only records from these months (1..=12).
    pub fn with_months<I: IntoIterator<Item = u32>>(mut self, values: I) -> Self {
        self.months = non_empty(values.into_iter().collect());
        self
    }

    /// Returns the department filter.
    pub fn departments(&self) -> Option<&BTreeSet<String>> {
        self.departments.as_ref()
    }

    /// Returns the supplier filter.
    pub fn suppliers(&self) -> Option<&BTreeSet<String>> {
        self.suppliers.as_ref()
    }

    /// Returns the buyer filter.
    pub fn buyers(&self) -> Option<&BTreeSet<String>> {
        self.buyers.as_ref()
    }

    /// Returns the city filter.
    pub fn cities(&self) -> Option<&BTreeSet<String>> {
        self.cities.as_ref()
    }

    /// Returns the inclusive date range filter.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        self.date_range
    }

    /// Returns the year filter.
    pub fn years(&self) -> Option<&BTreeSet<i32>> {
        self.years.as_ref()
    }

    /// Returns the month filter.
    pub fn months(&self) -> Option<&BTreeSet<u32>> {
        self.months.as_ref()
    }

    /// Returns `true` when no filter is active.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Validates this configuration.
    ///
    /// Returns an error if the date range is reversed or a month is outside
    /// 1..=12.
    pub fn validate(&self) -> Result<(), FilterError> {
        if let Some((start, end)) = self.date_range
            && start > end
        {
            return Err(FilterError::InvalidDateRange { start, end });
        }
        if let Some(months) = &self.months
            && let Some(&month) = months.iter().find(|m| !(1..=12).contains(*m))
        {
            return Err(FilterError::InvalidMonth { month });
        }
        Ok(())
    }
}
