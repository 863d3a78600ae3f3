//! # seisaudio-availability
//!
//! Turns a seismic availability report into audio requests and label tracks.
//!
//! ## Pipeline
//!
//! ```mermaid
//! graph LR
//!     A["availability JSON"] -->|"parse_availability()"| B["ChannelAvailability"]
//!     C["station text"] -->|"parse_station_text()"| D["StationInfo"]
//!     B --> E["select_stations()"]
//!     D --> E
//!     E -->|"Candidate"| F["plan_station()"]
//!     F --> G["StationPlan: audio URLs + labels"]
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `request` | Query configuration and service URLs |
//! | `response` | Availability JSON decoding |
//! | `catalog` | FDSN station text and geographic bounds |
//! | `filter` | Coverage, bounds and user selection |
//! | `plan` | Month-chunked audio requests and labels |
//! | `error` | Error types |

mod catalog;
mod error;
mod filter;
mod plan;
mod request;
mod response;

pub use catalog::{GeoBounds, StationInfo, parse_station_text};
pub use error::AvailabilityError;
pub use filter::{Candidate, FilterConfig, Selection, coverage, select_stations};
pub use plan::{AudioRates, PlanConfig, PlannedRequest, StationPlan, label_line, plan_station};
pub use request::{QueryConfig, audio_url, availability_url, catalog_url};
pub use response::{ChannelAvailability, parse_availability};
