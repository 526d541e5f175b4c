//! # kairos-io
//!
//! Read purchase records from CSV exports into typed [`PurchaseRecord`]s.
//! Bridges the flat, stringly-typed export into the date/amount pairs the
//! series builder consumes, plus the categorical attributes the filters use.
//!
//! Rows whose date or amount cannot be parsed fail the whole load with a
//! single [`IoError::Validation`] listing every offending line, unless
//! [`ReaderConfig::with_skip_invalid_rows`] opts into dropping them.

mod error;
mod parse;
mod reader;
mod record;
mod validate;

pub use error::IoError;
pub use parse::{DEFAULT_DATE_FORMATS, parse_amount, parse_date};
pub use reader::{ReaderConfig, read_csv, read_csv_from};
pub use record::PurchaseRecord;
