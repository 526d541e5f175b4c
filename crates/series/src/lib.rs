//! # kairos-series
//!
//! Turns a flat table of purchase records into a gap-free daily series.
//!
//! ## Pipeline
//!
//! ```mermaid
//! graph LR
//!     A["&[PurchaseRecord]"] -->|"aggregate_daily()"| B["BTreeMap date -> sum"]
//!     B -->|"reindex_daily(points, span)"| C["DailySeries"]
//!     A -->|"SeriesBuilder::new().build()"| C
//!     A -->|"totals_by_month / year / year_month"| D["calendar aggregates"]
//! ```
//!
//! Days without transactions carry the previous day's value forward. The
//! default calendar span is the first to the last observed day; an explicit
//! span that starts before the first observation cannot be seeded and is
//! rejected with [`SeriesError::InsufficientData`].

mod aggregate;
mod builder;
mod daily;
mod error;

pub use aggregate::{aggregate_daily, totals_by_month, totals_by_year, totals_by_year_month};
pub use builder::{SeriesBuilder, build_daily_series, reindex_daily};
pub use daily::DailySeries;
pub use error::SeriesError;
