//! Audio request planning and label-track generation.
//!
//! Every coverage span of a selected station is cut into month-aligned
//! chunks (the timeseries service caps request duration), and each chunk
//! becomes one audio URL plus one label line. Labels use the Audacity
//! label-track layout `start<TAB>end<TAB>"text"`, with times expressed on
//! the sped-up audio axis (linear seconds divided by the playback ratio).

use tracing::{debug, instrument};

use seisaudio_calendar::{Interval, MAX_MONTH_SECONDS, segment};

use crate::error::AvailabilityError;
use crate::filter::Candidate;
use crate::request::{QueryConfig, audio_url};

// ---------------------------------------------------------------------------
// AudioRates / PlanConfig
// ---------------------------------------------------------------------------

/// Reference audio and seismic frame rates.
///
/// A channel sampled at `reference_frame_rate` is rendered at
/// `reference_audio_rate`; other channels scale proportionally so that all
/// stations play back at the same speed-up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AudioRates {
    reference_audio_rate: f64,
    reference_frame_rate: f64,
}

impl Default for AudioRates {
    fn default() -> Self {
        Self {
            reference_audio_rate: 48_000.0,
            reference_frame_rate: 20.0,
        }
    }
}

impl AudioRates {
    /// Creates rates from the reference audio rate and seismic frame rate.
    pub fn new(reference_audio_rate: f64, reference_frame_rate: f64) -> Self {
        Self {
            reference_audio_rate,
            reference_frame_rate,
        }
    }

    /// Playback speed-up: audio samples per seismic sample.
    pub fn ratio(&self) -> f64 {
        self.reference_audio_rate / self.reference_frame_rate
    }

    /// Audio sample rate for a channel sampled at `sample_rate` Hz.
    pub fn audio_rate(&self, sample_rate: f64) -> f64 {
        self.reference_audio_rate * sample_rate / self.reference_frame_rate
    }
}

/// Rates and request ceiling used when planning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanConfig {
    rates: AudioRates,
    max_chunk_seconds: f64,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            rates: AudioRates::default(),
            max_chunk_seconds: MAX_MONTH_SECONDS,
        }
    }
}

impl PlanConfig {
    /// Set the audio rates.
    pub fn with_rates(mut self, rates: AudioRates) -> Self {
        self.rates = rates;
        self
    }

    /// Set the per-request duration ceiling in seconds.
    pub fn with_max_chunk_seconds(mut self, seconds: f64) -> Self {
        self.max_chunk_seconds = seconds;
        self
    }

    /// Returns the audio rates.
    pub fn rates(&self) -> AudioRates {
        self.rates
    }

    /// Returns the request ceiling in seconds.
    pub fn max_chunk_seconds(&self) -> f64 {
        self.max_chunk_seconds
    }

    /// Validate that every rate is positive and the ceiling covers a month.
    ///
    /// # Errors
    ///
    /// Returns [`AvailabilityError::Validation`] listing the offending values.
    pub fn validate(&self) -> Result<(), AvailabilityError> {
        let checks = [
            ("reference_audio_rate", self.rates.reference_audio_rate),
            ("reference_frame_rate", self.rates.reference_frame_rate),
        ];
        let mut problems: Vec<String> = checks
            .iter()
            .filter(|(_, v)| !(v.is_finite() && *v > 0.0))
            .map(|(name, v)| format!("{name} must be positive, got {v}"))
            .collect();
        if !(self.max_chunk_seconds.is_finite() && self.max_chunk_seconds >= MAX_MONTH_SECONDS) {
            problems.push(format!(
                "max_chunk_seconds must be at least {MAX_MONTH_SECONDS}, got {}",
                self.max_chunk_seconds
            ));
        }
        if problems.is_empty() {
            Ok(())
        } else {
            Err(AvailabilityError::Validation {
                details: problems.join("; "),
            })
        }
    }
}

// ---------------------------------------------------------------------------
// StationPlan
// ---------------------------------------------------------------------------

/// One audio request for one chunk.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedRequest {
    interval: Interval,
    url: String,
}

impl PlannedRequest {
    /// Returns the chunk.
    pub fn interval(&self) -> &Interval {
        &self.interval
    }

    /// Returns the timeseries URL.
    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Requests and labels for one selected station.
#[derive(Debug, Clone, PartialEq)]
pub struct StationPlan {
    id: String,
    network: String,
    station: String,
    sample_rate: f64,
    coverage: f64,
    audio_rate: f64,
    requests: Vec<PlannedRequest>,
    labels: String,
}

impl StationPlan {
    /// `NET-STA` identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the network code.
    pub fn network(&self) -> &str {
        &self.network
    }

    /// Returns the station code.
    pub fn station(&self) -> &str {
        &self.station
    }

    /// Channel sampling rate in Hz.
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Fraction of the query year covered.
    pub fn coverage(&self) -> f64 {
        self.coverage
    }

    /// Audio sample rate requested from the service.
    pub fn audio_rate(&self) -> f64 {
        self.audio_rate
    }

    /// Requests in chronological order.
    pub fn requests(&self) -> &[PlannedRequest] {
        &self.requests
    }

    /// Label track, one line per request.
    pub fn labels(&self) -> &str {
        &self.labels
    }
}

/// Label line for one chunk: audio-axis start and end, then the start time.
pub fn label_line(interval: &Interval, ref_year: i32, ratio: f64) -> String {
    format!(
        "{}\t{}\t\"{}\"\n",
        interval.start_seconds(ref_year) / ratio,
        interval.end_seconds(ref_year) / ratio,
        interval.start()
    )
}

/// Build the requests and label track for one selected station.
///
/// # Errors
///
/// Returns [`AvailabilityError::Validation`] for an invalid config and
/// [`AvailabilityError::Calendar`] if a span cannot be segmented.
#[instrument(skip_all, fields(station = %candidate.channel().id()))]
pub fn plan_station(
    candidate: &Candidate<'_>,
    query: &QueryConfig,
    config: &PlanConfig,
) -> Result<StationPlan, AvailabilityError> {
    config.validate()?;

    let channel = candidate.channel();
    let id = channel.id();
    let ref_year = query.year();
    let ratio = config.rates.ratio();
    let audio_rate = config.rates.audio_rate(channel.sample_rate());

    let mut requests = Vec::new();
    let mut labels = String::new();
    for span in channel.spans() {
        let chunks = segment(span, ref_year, config.max_chunk_seconds).map_err(|source| {
            AvailabilityError::Calendar {
                station: id.clone(),
                source,
            }
        })?;
        debug!(
            start = %span.start(),
            end = %span.end(),
            n_chunks = chunks.len(),
            "span segmented"
        );
        for chunk in chunks {
            labels.push_str(&label_line(&chunk, ref_year, ratio));
            requests.push(PlannedRequest {
                url: audio_url(query, channel.network(), channel.station(), &chunk, audio_rate),
                interval: chunk,
            });
        }
    }

    Ok(StationPlan {
        id,
        network: channel.network().to_string(),
        station: channel.station().to_string(),
        sample_rate: channel.sample_rate(),
        coverage: candidate.coverage(),
        audio_rate,
        requests,
        labels,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn default_rates() {
        let rates = AudioRates::default();
        assert_relative_eq!(rates.ratio(), 2400.0);
        assert_relative_eq!(rates.audio_rate(20.0), 48_000.0);
        assert_relative_eq!(rates.audio_rate(40.0), 96_000.0);
    }

    #[test]
    fn label_line_layout() {
        let iv = Interval::parse("2014-01-02T00:00:00", "2014-01-03T00:00:00").unwrap();
        assert_eq!(
            label_line(&iv, 2014, 2400.0),
            "36\t72\t\"2014-01-02T00:00:00\"\n"
        );
    }

    #[test]
    fn label_line_fractional() {
        let iv = Interval::parse("2014-01-01T00:00:00", "2014-01-01T00:00:03").unwrap();
        assert_eq!(label_line(&iv, 2014, 2.0), "0\t1.5\t\"2014-01-01T00:00:00\"\n");
    }

    #[test]
    fn validate_rejects_zero_rates() {
        let cfg = PlanConfig::default().with_rates(AudioRates::new(0.0, 20.0));
        assert!(cfg.validate().is_err());
        let cfg = PlanConfig::default().with_max_chunk_seconds(-5.0);
        assert!(cfg.validate().is_err());
        assert!(PlanConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_ceiling_below_one_month() {
        let cfg = PlanConfig::default().with_max_chunk_seconds(7.0 * 86_400.0);
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("max_chunk_seconds must be at least"));
        let cfg = PlanConfig::default().with_max_chunk_seconds(62.0 * 86_400.0);
        assert!(cfg.validate().is_ok());
    }
}
