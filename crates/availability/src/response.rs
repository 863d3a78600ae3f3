//! Availability service JSON response.

use serde::Deserialize;
use tracing::debug;

use seisaudio_calendar::Interval;

use crate::error::AvailabilityError;
use crate::request::is_valid_code;

#[derive(Debug, Deserialize)]
struct RawResponse {
    repository: Vec<RawRepository>,
}

#[derive(Debug, Deserialize)]
struct RawRepository {
    #[serde(default)]
    repository_name: Option<String>,
    #[serde(default)]
    channels: Vec<RawChannel>,
}

#[derive(Debug, Deserialize)]
struct RawChannel {
    net: String,
    sta: String,
    #[serde(default)]
    loc: String,
    #[serde(default)]
    cha: String,
    sample_rate: f64,
    #[serde(default)]
    timespans: Vec<(String, String)>,
}

/// Coverage of one channel as reported by the availability service.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelAvailability {
    network: String,
    station: String,
    location: String,
    channel: String,
    sample_rate: f64,
    spans: Vec<Interval>,
}

impl ChannelAvailability {
    /// Creates a channel record from already-parsed spans.
    pub fn new(
        network: impl Into<String>,
        station: impl Into<String>,
        sample_rate: f64,
        spans: Vec<Interval>,
    ) -> Self {
        Self {
            network: network.into(),
            station: station.into(),
            location: String::new(),
            channel: String::new(),
            sample_rate,
            spans,
        }
    }

    /// `NET-STA` identifier.
    pub fn id(&self) -> String {
        format!("{}-{}", self.network, self.station)
    }

    /// Returns the network code.
    pub fn network(&self) -> &str {
        &self.network
    }

    /// Returns the station code.
    pub fn station(&self) -> &str {
        &self.station
    }

    /// Returns the location code (may be empty).
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Returns the channel code (may be empty).
    pub fn channel(&self) -> &str {
        &self.channel
    }

    /// Sampling rate of the channel in Hz.
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Continuous coverage intervals, in service order.
    pub fn spans(&self) -> &[Interval] {
        &self.spans
    }
}

/// Parse an availability response (`format=json`).
///
/// Only the first repository entry is read. Every timespan is parsed into an
/// [`Interval`]; a single bad span fails the whole response.
///
/// # Errors
///
/// Returns [`AvailabilityError::Json`] for malformed JSON,
/// [`AvailabilityError::EmptyRepository`] when no repository is listed,
/// [`AvailabilityError::Validation`] for empty or non-alphanumeric network
/// and station codes, and [`AvailabilityError::Calendar`] for malformed or
/// reversed timespans.
pub fn parse_availability(json: &str) -> Result<Vec<ChannelAvailability>, AvailabilityError> {
    let raw: RawResponse = serde_json::from_str(json).map_err(|e| AvailabilityError::Json {
        reason: e.to_string(),
    })?;

    let repository = raw
        .repository
        .into_iter()
        .next()
        .ok_or(AvailabilityError::EmptyRepository)?;
    debug!(
        repository = repository.repository_name.as_deref().unwrap_or("<unnamed>"),
        n_channels = repository.channels.len(),
        "availability response decoded"
    );

    repository
        .channels
        .into_iter()
        .map(|ch| {
            let id = format!("{}-{}", ch.net, ch.sta);
            // Codes end up in file names and URLs.
            for code in [&ch.net, &ch.sta] {
                if code.is_empty() || !is_valid_code(code, false) {
                    return Err(AvailabilityError::Validation {
                        details: format!("channel {id:?} has invalid code {code:?}"),
                    });
                }
            }
            let spans = ch
                .timespans
                .iter()
                .map(|(start, end)| Interval::parse(start, end))
                .collect::<Result<Vec<_>, _>>()
                .map_err(|source| AvailabilityError::Calendar {
                    station: id,
                    source,
                })?;
            Ok(ChannelAvailability {
                network: ch.net,
                station: ch.sta,
                location: ch.loc,
                channel: ch.cha,
                sample_rate: ch.sample_rate,
                spans,
            })
        })
        .collect()
}
