//! # kairos-filter
//!
//! One filtering entry point for purchase records, driven by an explicit
//! [`FilterConfig`], plus the [`PurchaseSummary`] metric cards computed over
//! a filtered table.
//!
//! ```ignore
//! use kairos_filter::{FilterConfig, apply_filters};
//!
//! let cfg = FilterConfig::new()
//!     .with_departments(["IT", "Facilities"])
//!     .with_date_range(start, end);
//! let kept = apply_filters(&records, &cfg)?;
//! ```

mod apply;
mod config;
mod error;
mod summary;

pub use apply::apply_filters;
pub use config::FilterConfig;
pub use error::FilterError;
pub use summary::PurchaseSummary;
