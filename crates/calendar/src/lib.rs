//! # seisaudio-calendar
//!
//! Pure calendar arithmetic for timestamps on a linear seconds axis.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["text"] -->|"CalendarTime::parse()"| B["CalendarTime"]
//!     B -->|"Display"| A
//!     B -->|"to_seconds(ref_year)"| C["linear seconds"]
//!     B -->|"Interval::new()"| D["Interval"]
//!     D -->|"segment()"| E["Vec of month-aligned Interval"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use seisaudio_calendar::{CalendarTime, Interval, MAX_MONTH_SECONDS, segment, to_seconds};
//!
//! let t = CalendarTime::parse("2014-01-02T00:00:00").unwrap();
//! assert_eq!(to_seconds(2014, &t), 86_400.0);
//!
//! let span = Interval::parse("2014-01-15T00:00:00", "2014-04-10T12:00:00").unwrap();
//! let chunks = segment(&span, 2014, MAX_MONTH_SECONDS).unwrap();
//! assert_eq!(chunks.len(), 4);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `time` | Timestamp value type, parsing and formatting |
//! | `days` | Leap years, day counts and linear seconds |
//! | `interval` | Ordered timestamp pairs |
//! | `segment` | Month-aligned interval splitting |
//! | `error` | Error types |

mod days;
mod error;
mod interval;
mod segment;
mod time;

pub use days::{
    SECONDS_PER_DAY, day_of_year, days_before_month, days_in_month, days_in_year, fold_month,
    is_leap_year, to_seconds, year_seconds,
};
pub use error::CalendarError;
pub use interval::Interval;
pub use segment::{MAX_MONTH_SECONDS, segment};
pub use time::{CalendarTime, MAX_YEAR};
