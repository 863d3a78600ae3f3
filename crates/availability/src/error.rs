//! Error types for seisaudio-availability.

use seisaudio_calendar::CalendarError;

/// Error type for all fallible operations in the seisaudio-availability crate.
///
/// Covers malformed service responses, catalog text that does not follow
/// the FDSN station layout, calendar failures on individual stations, and
/// invalid configuration values.
#[derive(Debug, thiserror::Error)]
pub enum AvailabilityError {
    /// Returned when the availability response is not the expected JSON.
    #[error("invalid availability response: {reason}")]
    Json {
        /// Description of the underlying deserialization failure.
        reason: String,
    },

    /// Returned when the response holds no repository entry.
    #[error("availability response contains no repository")]
    EmptyRepository,

    /// Returned when a station's timespan cannot be parsed or segmented.
    #[error("station {station}: {source}")]
    Calendar {
        /// `NET-STA` id of the offending station.
        station: String,
        /// The calendar failure.
        #[source]
        source: CalendarError,
    },

    /// Returned when a catalog line does not have the expected fields.
    #[error("catalog line {line}: {reason}")]
    Catalog {
        /// 1-based line number in the catalog text.
        line: usize,
        /// What was wrong with the line.
        reason: String,
    },

    /// Returned when a configuration value is out of range.
    #[error("invalid configuration: {details}")]
    Validation {
        /// Human-readable summary of the failure.
        details: String,
    },
}
