//! Query configuration and request URLs for the IRIS web services.

use seisaudio_calendar::{CalendarTime, Interval};

use crate::error::AvailabilityError;

const AVAILABILITY_ENDPOINT: &str = "https://service.iris.edu/irisws/availability/1/query";
const CATALOG_ENDPOINT: &str = "https://service.iris.edu/fdsnws/station/1/query";
const TIMESERIES_ENDPOINT: &str = "https://service.iris.edu/irisws/timeseries/1/query";

// ---------------------------------------------------------------------------
// QueryConfig
// ---------------------------------------------------------------------------

/// Which network, channel and calendar year to query.
///
/// The query year doubles as the reference year for all linear-time
/// conversions of the returned spans.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryConfig {
    network: String,
    location: String,
    channel: String,
    year: i32,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            network: "G".into(),
            location: "00".into(),
            channel: "BHZ".into(),
            year: 2014,
        }
    }
}

impl QueryConfig {
    /// Set the network code.
    pub fn with_network(mut self, network: impl Into<String>) -> Self {
        self.network = network.into();
        self
    }

    /// Set the location code.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Set the channel code.
    pub fn with_channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = channel.into();
        self
    }

    /// Set the calendar year to query.
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    /// Returns the network code.
    pub fn network(&self) -> &str {
        &self.network
    }

    /// Returns the location code.
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Returns the channel code.
    pub fn channel(&self) -> &str {
        &self.channel
    }

    /// Returns the query year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// January 1 of the query year.
    pub fn start_time(&self) -> CalendarTime {
        CalendarTime::first_of_month(self.year, 1)
    }

    /// January 1 of the following year.
    pub fn end_time(&self) -> CalendarTime {
        CalendarTime::first_of_month(self.year + 1, 1)
    }

    /// Validate that the codes can be placed in a query string.
    ///
    /// # Errors
    ///
    /// Returns [`AvailabilityError::Validation`] if the network or channel
    /// is empty, or any code contains characters other than ASCII
    /// alphanumerics and the `*`/`?` wildcards.
    pub fn validate(&self) -> Result<(), AvailabilityError> {
        for (name, value) in [("network", &self.network), ("channel", &self.channel)] {
            if value.is_empty() {
                return Err(AvailabilityError::Validation {
                    details: format!("{name} code must not be empty"),
                });
            }
        }
        for (name, value) in [
            ("network", &self.network),
            ("location", &self.location),
            ("channel", &self.channel),
        ] {
            if !is_valid_code(value, true) {
                return Err(AvailabilityError::Validation {
                    details: format!("{name} code {value:?} contains invalid characters"),
                });
            }
        }
        Ok(())
    }
}

/// Returns `true` if `code` holds only ASCII alphanumerics, plus the `*`/`?`
/// wildcards when `wildcards` is set.
pub(crate) fn is_valid_code(code: &str, wildcards: bool) -> bool {
    code.chars()
        .all(|c| c.is_ascii_alphanumeric() || (wildcards && (c == '*' || c == '?')))
}

// ---------------------------------------------------------------------------
// URLs
// ---------------------------------------------------------------------------

/// Availability query for every station of the network over the query year.
pub fn availability_url(query: &QueryConfig) -> String {
    format!(
        "{AVAILABILITY_ENDPOINT}?\
         format=json&\
         net={}&\
         sta=*&\
         loc={}&\
         cha={}&\
         starttime={}&\
         endtime={}&\
         mergequality=false&\
         mergesamplerate=false&\
         mergeoverlap=false&\
         showlastupdate=false&\
         excludetoolarge=true&\
         includerestricted=false&\
         nodata=404",
        query.network,
        query.location,
        query.channel,
        query.start_time(),
        query.end_time(),
    )
}

/// Station catalog query (FDSN text format) used for coordinates.
pub fn catalog_url(query: &QueryConfig) -> String {
    format!(
        "{CATALOG_ENDPOINT}?\
         net={}&\
         sta=*&\
         loc={}&\
         cha={}&\
         starttime={}&\
         endtime={}&\
         level=station&\
         format=text&\
         nodata=404",
        query.network,
        query.location,
        query.channel,
        query.start_time(),
        query.end_time(),
    )
}

/// Audio rendering of one station over one interval.
pub fn audio_url(
    query: &QueryConfig,
    network: &str,
    station: &str,
    interval: &Interval,
    audio_rate: f64,
) -> String {
    format!(
        "{TIMESERIES_ENDPOINT}?\
         net={network}&\
         sta={station}&\
         cha={}&\
         start={}&\
         end={}&\
         format=audio&\
         audiosamplerate={audio_rate}&\
         loc={}&",
        query.channel,
        interval.start(),
        interval.end(),
        query.location,
    )
}
