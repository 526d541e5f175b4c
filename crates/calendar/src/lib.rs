//! # kairos-calendar
//!
//! Pure date arithmetic for day-indexed series on the Gregorian calendar.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["DateRange::new(start, end)?"] -->|".len_days()"| B["usize"]
//!     A -->|".iter()"| C["NaiveDate, ..."]
//!     D["start date"] -->|"daily_sequence(start, n)"| E["Vec of NaiveDate"]
//!     F["last date"] -->|"days_after(last, h)"| E
//!     D -->|"day_offset(start, date)"| G["i64"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use chrono::NaiveDate;
//! use kairos_calendar::{DateRange, daily_sequence, days_after};
//!
//! let start = NaiveDate::from_ymd_opt(2024, 2, 27).unwrap();
//! let dates = daily_sequence(start, 4); // Feb 27, 28, 29, Mar 1
//!
//! let range = DateRange::new(start, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())?;
//! assert_eq!(range.len_days(), 4);
//!
//! let horizon = days_after(range.end(), 365)?;
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `range` | Inclusive date range |
//! | `sequence` | Contiguous day sequence generation |
//! | `offset` | Day offsets and checked day arithmetic |
//! | `error` | Error types |

mod error;
mod offset;
mod range;
mod sequence;

pub use error::CalendarError;
pub use offset::{add_days, day_offset};
pub use range::DateRange;
pub use sequence::{daily_sequence, days_after};
