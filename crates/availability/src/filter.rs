//! Coverage, geographic and user selection of stations.

use std::collections::HashMap;

use tracing::{debug, warn};

use seisaudio_calendar::year_seconds;

use crate::catalog::{GeoBounds, StationInfo};
use crate::error::AvailabilityError;
use crate::response::ChannelAvailability;

// ---------------------------------------------------------------------------
// FilterConfig
// ---------------------------------------------------------------------------

/// Station selection criteria.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterConfig {
    /// Channels must report strictly fewer spans than this.
    max_timespans: usize,
    /// Channels must cover strictly more than this fraction of the year.
    min_coverage: f64,
    /// Optional geographic box; requires a station catalog.
    bounds: Option<GeoBounds>,
    /// Station codes or `NET-STA` ids to keep; empty keeps every candidate.
    stations: Vec<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            max_timespans: 8,
            min_coverage: 0.5,
            bounds: None,
            stations: Vec::new(),
        }
    }
}

impl FilterConfig {
    /// Set the exclusive upper limit on span count.
    pub fn with_max_timespans(mut self, n: usize) -> Self {
        self.max_timespans = n;
        self
    }

    /// Set the exclusive lower limit on yearly coverage.
    pub fn with_min_coverage(mut self, fraction: f64) -> Self {
        self.min_coverage = fraction;
        self
    }

    /// Set or clear the geographic box.
    pub fn with_bounds(mut self, bounds: Option<GeoBounds>) -> Self {
        self.bounds = bounds;
        self
    }

    /// Set the stations chosen by the user.
    pub fn with_stations<I, S>(mut self, stations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stations = stations.into_iter().map(Into::into).collect();
        self
    }

    /// Returns the span-count limit.
    pub fn max_timespans(&self) -> usize {
        self.max_timespans
    }

    /// Returns the coverage threshold.
    pub fn min_coverage(&self) -> f64 {
        self.min_coverage
    }

    /// Returns the geographic box, if any.
    pub fn bounds(&self) -> Option<&GeoBounds> {
        self.bounds.as_ref()
    }

    /// Returns the user-chosen stations.
    pub fn stations(&self) -> &[String] {
        &self.stations
    }

    /// Validate the thresholds and bounds.
    ///
    /// # Errors
    ///
    /// Returns [`AvailabilityError::Validation`] if `min_coverage` is outside
    /// 0..=1, `max_timespans` is zero, or the bounds are invalid.
    pub fn validate(&self) -> Result<(), AvailabilityError> {
        if !(0.0..=1.0).contains(&self.min_coverage) {
            return Err(AvailabilityError::Validation {
                details: format!("min_coverage must be 0..=1, got {}", self.min_coverage),
            });
        }
        if self.max_timespans == 0 {
            return Err(AvailabilityError::Validation {
                details: "max_timespans must be at least 1".into(),
            });
        }
        if let Some(bounds) = &self.bounds {
            bounds.validate()?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

/// A channel that passed every filter, with its yearly coverage.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate<'a> {
    channel: &'a ChannelAvailability,
    coverage: f64,
}

impl<'a> Candidate<'a> {
    /// Returns the underlying channel.
    pub fn channel(&self) -> &'a ChannelAvailability {
        self.channel
    }

    /// Fraction of the query year covered by the channel's spans.
    pub fn coverage(&self) -> f64 {
        self.coverage
    }
}

/// Result of [`select_stations`].
#[derive(Debug, Clone, PartialEq)]
pub struct Selection<'a> {
    selected: Vec<Candidate<'a>>,
    unmatched: Vec<String>,
}

impl<'a> Selection<'a> {
    /// Candidates kept, in response order.
    pub fn selected(&self) -> &[Candidate<'a>] {
        &self.selected
    }

    /// User-requested stations that matched no candidate.
    pub fn unmatched(&self) -> &[String] {
        &self.unmatched
    }

    /// Number of selected candidates.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Returns `true` if nothing was selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

/// Fraction of `year` covered by the channel's spans.
///
/// Span lengths are measured with `year` as reference year and summed
/// without merging overlaps.
pub fn coverage(channel: &ChannelAvailability, year: i32) -> f64 {
    let covered: f64 = channel
        .spans()
        .iter()
        .map(|span| span.duration_seconds(year))
        .sum();
    covered / year_seconds(year)
}

fn matches_request(channel: &ChannelAvailability, request: &str) -> bool {
    request == channel.station() || request == channel.id()
}

/// Apply the span-count, coverage, geographic and user filters.
///
/// # Errors
///
/// Returns [`AvailabilityError::Validation`] if the config is invalid or
/// bounds are set without a catalog.
pub fn select_stations<'a>(
    channels: &'a [ChannelAvailability],
    catalog: Option<&[StationInfo]>,
    config: &FilterConfig,
    year: i32,
) -> Result<Selection<'a>, AvailabilityError> {
    config.validate()?;

    let locations: Option<HashMap<String, &StationInfo>> = match (config.bounds, catalog) {
        (Some(_), None) => {
            return Err(AvailabilityError::Validation {
                details: "geographic bounds require a station catalog".into(),
            });
        }
        (Some(_), Some(stations)) => Some(
            stations
                .iter()
                .map(|s| (format!("{}-{}", s.network(), s.station()), s))
                .collect(),
        ),
        (None, _) => None,
    };

    let mut selected = Vec::new();
    for channel in channels {
        let id = channel.id();
        let n_spans = channel.spans().len();
        if n_spans >= config.max_timespans {
            debug!(station = %id, n_spans, "rejected: too many timespans");
            continue;
        }

        let cov = coverage(channel, year);
        if cov <= config.min_coverage {
            debug!(station = %id, coverage = cov, "rejected: low coverage");
            continue;
        }

        if let (Some(bounds), Some(locations)) = (&config.bounds, &locations) {
            match locations.get(id.as_str()) {
                Some(info) if bounds.contains(info.latitude(), info.longitude()) => {}
                Some(info) => {
                    debug!(
                        station = %id,
                        lat = info.latitude(),
                        lon = info.longitude(),
                        "rejected: outside bounds"
                    );
                    continue;
                }
                None => {
                    debug!(station = %id, "rejected: not in catalog");
                    continue;
                }
            }
        }

        if !config.stations.is_empty()
            && !config.stations.iter().any(|r| matches_request(channel, r))
        {
            debug!(station = %id, "rejected: not requested");
            continue;
        }

        debug!(
            station = %id,
            sample_rate = channel.sample_rate(),
            n_spans,
            coverage = cov,
            "selected"
        );
        selected.push(Candidate {
            channel,
            coverage: cov,
        });
    }

    let unmatched: Vec<String> = config
        .stations
        .iter()
        .filter(|r| !selected.iter().any(|c| matches_request(c.channel, r)))
        .cloned()
        .collect();
    for request in &unmatched {
        warn!(station = %request, "requested station did not pass the filters");
    }

    Ok(Selection {
        selected,
        unmatched,
    })
}
