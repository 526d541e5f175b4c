//! # kairos-decompose
//!
//! Classical additive decomposition of a [`DailySeries`] into trend,
//! seasonal and residual components.
//!
//! ```mermaid
//! graph LR
//!     A["DailySeries"] -->|"centred moving average"| B["trend"]
//!     A -->|"observed - trend"| C["detrended"]
//!     C -->|"mean per position, centred"| D["seasonal"]
//!     A -->|"observed - trend - seasonal"| E["residual"]
//! ```
//!
//! ```ignore
//! let result = DecomposeSpec::new(30).decompose(&series)?;
//! // or
//! let result = decompose(&series, 30)?;
//! ```
//!
//! The trend is undefined for the first and last `period / 2` days, and so
//! is the residual. Those positions are `None`.
//!
//! [`DailySeries`]: kairos_series::DailySeries

mod error;
mod moving_average;
mod result;
mod spec;

pub use error::DecomposeError;
pub use moving_average::centered_moving_average;
pub use result::Decomposition;
pub use spec::{DEFAULT_PERIOD, DecomposeSpec, decompose};
