//! CSV reader configuration and orchestration.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, warn};

use crate::error::IoError;
use crate::parse::{DEFAULT_DATE_FORMATS, parse_amount, parse_date};
use crate::record::PurchaseRecord;
use crate::validate::{ValidationCollector, find_column, require_column};

// ---------------------------------------------------------------------------
// ReaderConfig
// ---------------------------------------------------------------------------

/// Configuration for reading purchase records from a CSV export.
///
/// Use the builder methods (`with_*`) to customise column names, accepted
/// date formats and the invalid-row policy. The [`Default`] implementation
/// matches the column names of the procurement export the dashboards were
/// built against.
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Column holding the purchase creation date (required).
    date_column: String,
    /// Column holding the extended price (required).
    amount_column: String,
    /// Column holding the department.
    department_column: String,
    /// Column holding the supplier name.
    supplier_column: String,
    /// Column holding the full buyer name.
    buyer_column: String,
    /// Fallback buyer first-name column, joined with the last name.
    buyer_first_name_column: String,
    /// Fallback buyer last-name column.
    buyer_last_name_column: String,
    /// Column holding the ship-to city.
    city_column: String,
    /// Date formats tried in order.
    date_formats: Vec<String>,
    /// Field delimiter byte.
    delimiter: u8,
    /// Drop rows with unparseable date or amount instead of failing.
    skip_invalid_rows: bool,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            date_column: "Creation Date".into(),
            amount_column: "Extended Price".into(),
            department_column: "Department".into(),
            supplier_column: "Supplier Name".into(),
            buyer_column: "Buyer".into(),
            buyer_first_name_column: "Buyer: First Name".into(),
            buyer_last_name_column: "Buyer: Last Name".into(),
            city_column: "ShipTo City".into(),
            date_formats: DEFAULT_DATE_FORMATS.iter().map(|f| f.to_string()).collect(),
            delimiter: b',',
            skip_invalid_rows: false,
        }
    }
}

impl ReaderConfig {
    /// Set the creation-date column name.
    pub fn with_date_column(mut self, name: impl Into<String>) -> Self {
        self.date_column = name.into();
        self
    }

    /// Set the extended-price column name.
    pub fn with_amount_column(mut self, name: impl Into<String>) -> Self {
        self.amount_column = name.into();
        self
    }

    /// Set the department column name.
    pub fn with_department_column(mut self, name: impl Into<String>) -> Self {
        self.department_column = name.into();
        self
    }

    /// Set the supplier column name.
    pub fn with_supplier_column(mut self, name: impl Into<String>) -> Self {
        self.supplier_column = name.into();
        self
    }

    /// Set the buyer column name.
    pub fn with_buyer_column(mut self, name: impl Into<String>) -> Self {
        self.buyer_column = name.into();
        self
    }

    /// Set the first/last-name columns joined when the buyer column is absent.
    pub fn with_buyer_name_columns(
        mut self,
        first: impl Into<String>,
        last: impl Into<String>,
    ) -> Self {
        self.buyer_first_name_column = first.into();
        self.buyer_last_name_column = last.into();
        self
    }

    /// Set the city column name.
    pub fn with_city_column(mut self, name: impl Into<String>) -> Self {
        self.city_column = name.into();
        self
    }

    /// Replace the list of accepted date formats (`chrono` strftime syntax).
    pub fn with_date_formats<I, S>(mut self, formats: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.date_formats = formats.into_iter().map(Into::into).collect();
        self
    }

    /// Set the field delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Drop rows whose date or amount cannot be parsed instead of failing.
    pub fn with_skip_invalid_rows(mut self, skip: bool) -> Self {
        self.skip_invalid_rows = skip;
        self
    }

    /// Returns the creation-date column name.
    pub fn date_column(&self) -> &str {
        &self.date_column
    }

    /// Returns the extended-price column name.
    pub fn amount_column(&self) -> &str {
        &self.amount_column
    }

    /// Returns the accepted date formats.
    pub fn date_formats(&self) -> &[String] {
        &self.date_formats
    }

    /// Returns whether invalid rows are dropped.
    pub fn skip_invalid_rows(&self) -> bool {
        self.skip_invalid_rows
    }

    /// Validate that the configuration is internally consistent.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Validation`] listing every problem: blank
    /// required column names or an empty date-format list.
    pub fn validate(&self) -> Result<(), IoError> {
        let mut c = ValidationCollector::new();
        if self.date_column.trim().is_empty() {
            c.push("date column name is blank");
        }
        if self.amount_column.trim().is_empty() {
            c.push("amount column name is blank");
        }
        if self.date_formats.is_empty() {
            c.push("at least one date format is required");
        }
        c.finish()
    }

    /// A stable textual key of every setting that affects parsing.
    ///
    /// Two configs with the same key parse identical bytes identically.
    pub fn cache_key(&self) -> String {
        format!(
            "{}|{}|{}|{}|{}|{}|{}|{}|{}|{}|{}",
            self.date_column,
            self.amount_column,
            self.department_column,
            self.supplier_column,
            self.buyer_column,
            self.buyer_first_name_column,
            self.buyer_last_name_column,
            self.city_column,
            self.date_formats.join(";"),
            self.delimiter,
            self.skip_invalid_rows,
        )
    }
}

// ---------------------------------------------------------------------------
// read_csv
// ---------------------------------------------------------------------------

/// Read purchase records from a CSV file on disk.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] when `path` does not exist, and
/// otherwise any error of [`read_csv_from`].
pub fn read_csv(path: &Path, config: &ReaderConfig) -> Result<Vec<PurchaseRecord>, IoError> {
    config.validate()?;
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let file = File::open(path).map_err(|e| IoError::Read {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    debug!(path = %path.display(), "reading purchase csv");
    read_csv_from(file, config)
}

/// Read purchase records from any CSV byte source.
///
/// The header row must contain the configured date and amount columns.
/// Department, supplier, buyer and city columns are optional. When the
/// buyer column is absent but first/last name columns exist, the buyer is
/// their space-joined concatenation.
///
/// # Errors
///
/// Returns [`IoError::MissingColumn`] for absent required columns,
/// [`IoError::Csv`] for malformed CSV, and [`IoError::Validation`] listing
/// every row with an unparseable date or amount (unless
/// `skip_invalid_rows` is set).
pub fn read_csv_from<R: Read>(
    reader: R,
    config: &ReaderConfig,
) -> Result<Vec<PurchaseRecord>, IoError> {
    config.validate()?;

    let mut rdr = ReaderBuilder::new()
        .delimiter(config.delimiter)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let columns = Columns::resolve(&headers, config)?;

    let mut records = Vec::new();
    let mut invalid = ValidationCollector::new();

    for (i, row) in rdr.records().enumerate() {
        let row = row?;
        // header occupies line 1
        let line = row.position().map_or(i as u64 + 2, |p| p.line());

        let raw_date = cell(&row, columns.date).unwrap_or("");
        let raw_amount = cell(&row, columns.amount).unwrap_or("");

        let date = parse_date(raw_date, &config.date_formats);
        let amount = parse_amount(raw_amount);

        if date.is_none() {
            invalid.push(format!(
                "line {line}: unparseable date {raw_date:?} in column '{}'",
                config.date_column
            ));
        }
        if amount.is_none() {
            invalid.push(format!(
                "line {line}: unparseable amount {raw_amount:?} in column '{}'",
                config.amount_column
            ));
        }
        let (Some(date), Some(amount)) = (date, amount) else {
            continue;
        };

        let mut record = PurchaseRecord::new(date, amount);
        if let Some(v) = columns.department.and_then(|c| cell(&row, c)) {
            record = record.with_department(v);
        }
        if let Some(v) = columns.supplier.and_then(|c| cell(&row, c)) {
            record = record.with_supplier(v);
        }
        if let Some(v) = columns.buyer_name(&row) {
            record = record.with_buyer(v);
        }
        if let Some(v) = columns.city.and_then(|c| cell(&row, c)) {
            record = record.with_city(v);
        }
        records.push(record);
    }

    if !invalid.is_empty() {
        if config.skip_invalid_rows {
            warn!(
                n_invalid = invalid.len(),
                first = %invalid.messages()[0],
                "dropping rows with unparseable date or amount"
            );
        } else {
            invalid.finish()?;
        }
    }

    debug!(n_records = records.len(), "purchase records loaded");
    Ok(records)
}

/// Resolved column indices for one header row.
struct Columns {
    date: usize,
    amount: usize,
    department: Option<usize>,
    supplier: Option<usize>,
    buyer: Option<usize>,
    buyer_first: Option<usize>,
    buyer_last: Option<usize>,
    city: Option<usize>,
}

impl Columns {
    fn resolve(headers: &StringRecord, config: &ReaderConfig) -> Result<Self, IoError> {
        Ok(Self {
            date: require_column(headers, &config.date_column)?,
            amount: require_column(headers, &config.amount_column)?,
            department: find_column(headers, &config.department_column),
            supplier: find_column(headers, &config.supplier_column),
            buyer: find_column(headers, &config.buyer_column),
            buyer_first: find_column(headers, &config.buyer_first_name_column),
            buyer_last: find_column(headers, &config.buyer_last_name_column),
            city: find_column(headers, &config.city_column),
        })
    }

    fn buyer_name(&self, row: &StringRecord) -> Option<String> {
        if let Some(name) = self.buyer.and_then(|c| cell(row, c)) {
            return Some(name.to_string());
        }
        let first = self.buyer_first.and_then(|c| cell(row, c));
        let last = self.buyer_last.and_then(|c| cell(row, c));
        match (first, last) {
            (Some(f), Some(l)) => Some(format!("{f} {l}")),
            (Some(only), None) | (None, Some(only)) => Some(only.to_string()),
            (None, None) => None,
        }
    }
}

/// Non-blank cell at `idx`.
fn cell(row: &StringRecord, idx: usize) -> Option<&str> {
    row.get(idx).map(str::trim).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn default_config_is_valid() {
        assert!(ReaderConfig::default().validate().is_ok());
    }

    #[test]
    fn blank_columns_and_formats_accumulate() {
        let cfg = ReaderConfig::default()
            .with_date_column(" ")
            .with_amount_column("")
            .with_date_formats(Vec::<String>::new());
        match cfg.validate().unwrap_err() {
            IoError::Validation { count, .. } => assert_eq!(count, 3),
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn reads_minimal_columns() {
        let csv = "Creation Date,Extended Price\n2024-01-01,10.5\n2024-01-03,4\n";
        let recs = read_csv_from(csv.as_bytes(), &ReaderConfig::default()).unwrap();
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].date(), ymd(2024, 1, 1));
        assert_eq!(recs[0].amount(), 10.5);
        assert!(recs[0].department().is_none());
        assert_eq!(recs[1].date(), ymd(2024, 1, 3));
    }

    #[test]
    fn reads_categorical_columns() {
        let csv = "Creation Date,Extended Price,Department,Supplier Name,Buyer: First Name,Buyer: Last Name,ShipTo City\n\
                   2024-01-01,10,IT,Acme,Ada,Lovelace,Porto\n";
        let recs = read_csv_from(csv.as_bytes(), &ReaderConfig::default()).unwrap();
        let r = &recs[0];
        assert_eq!(r.department(), Some("IT"));
        assert_eq!(r.supplier(), Some("Acme"));
        assert_eq!(r.buyer(), Some("Ada Lovelace"));
        assert_eq!(r.city(), Some("Porto"));
    }

    #[test]
    fn buyer_column_wins_over_name_parts() {
        let csv = "Creation Date,Extended Price,Buyer,Buyer: First Name,Buyer: Last Name\n\
                   2024-01-01,10,Grace Hopper,Ada,Lovelace\n";
        let recs = read_csv_from(csv.as_bytes(), &ReaderConfig::default()).unwrap();
        assert_eq!(recs[0].buyer(), Some("Grace Hopper"));
    }

    #[test]
    fn missing_required_column() {
        let csv = "Date,Extended Price\n2024-01-01,1\n";
        let err = read_csv_from(csv.as_bytes(), &ReaderConfig::default()).unwrap_err();
        assert!(matches!(err, IoError::MissingColumn { ref name } if name == "Creation Date"));
    }

    #[test]
    fn invalid_rows_fail_loudly_with_every_line() {
        let csv = "Creation Date,Extended Price\n2024-01-01,1\nyesterday,2\n2024-01-03,abc\n";
        let err = read_csv_from(csv.as_bytes(), &ReaderConfig::default()).unwrap_err();
        match err {
            IoError::Validation { count, details } => {
                assert_eq!(count, 2);
                assert!(details.contains("line 3: unparseable date \"yesterday\""));
                assert!(details.contains("line 4: unparseable amount \"abc\""));
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn invalid_rows_skipped_when_configured() {
        let csv = "Creation Date,Extended Price\n2024-01-01,1\n,2\n2024-01-03,3\n";
        let cfg = ReaderConfig::default().with_skip_invalid_rows(true);
        let recs = read_csv_from(csv.as_bytes(), &cfg).unwrap();
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[1].amount(), 3.0);
    }

    #[test]
    fn semicolon_delimiter() {
        let csv = "Creation Date;Extended Price\n2024-01-01;7\n";
        let cfg = ReaderConfig::default().with_delimiter(b';');
        let recs = read_csv_from(csv.as_bytes(), &cfg).unwrap();
        assert_eq!(recs[0].amount(), 7.0);
    }

    #[test]
    fn header_only_yields_no_records() {
        let csv = "Creation Date,Extended Price\n";
        let recs = read_csv_from(csv.as_bytes(), &ReaderConfig::default()).unwrap();
        assert!(recs.is_empty());
    }

    #[test]
    fn cache_key_tracks_parsing_settings() {
        let a = ReaderConfig::default();
        let b = ReaderConfig::default().with_skip_invalid_rows(true);
        assert_eq!(a.cache_key(), ReaderConfig::default().cache_key());
        assert_ne!(a.cache_key(), b.cache_key());
    }
}
