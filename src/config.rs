use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_PATH: &str = "seisaudio.toml";

/// Top-level seisaudio configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct SeisaudioConfig {
    /// Service query settings.
    #[serde(default)]
    pub query: QueryToml,

    /// Audio rate and request ceiling settings.
    #[serde(default)]
    pub audio: AudioToml,

    /// Station filter settings.
    #[serde(default)]
    pub filter: FilterToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QueryToml {
    #[serde(default = "default_network")]
    pub network: String,
    #[serde(default = "default_location")]
    pub location: String,
    #[serde(default = "default_channel")]
    pub channel: String,
    #[serde(default = "default_year")]
    pub year: i32,
}

impl Default for QueryToml {
    fn default() -> Self {
        Self {
            network: default_network(),
            location: default_location(),
            channel: default_channel(),
            year: default_year(),
        }
    }
}

fn default_network() -> String {
    "G".to_string()
}
fn default_location() -> String {
    "00".to_string()
}
fn default_channel() -> String {
    "BHZ".to_string()
}
fn default_year() -> i32 {
    2014
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AudioToml {
    #[serde(default = "default_reference_audio_rate")]
    pub reference_audio_rate: f64,
    #[serde(default = "default_reference_frame_rate")]
    pub reference_frame_rate: f64,
    #[serde(default = "default_max_chunk_days")]
    pub max_chunk_days: f64,
}

impl Default for AudioToml {
    fn default() -> Self {
        Self {
            reference_audio_rate: default_reference_audio_rate(),
            reference_frame_rate: default_reference_frame_rate(),
            max_chunk_days: default_max_chunk_days(),
        }
    }
}

fn default_reference_audio_rate() -> f64 {
    48_000.0
}
fn default_reference_frame_rate() -> f64 {
    20.0
}
fn default_max_chunk_days() -> f64 {
    31.0
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilterToml {
    #[serde(default = "default_max_timespans")]
    pub max_timespans: usize,
    #[serde(default = "default_min_coverage")]
    pub min_coverage: f64,
    #[serde(default)]
    pub stations: Vec<String>,
    #[serde(default)]
    pub bounds: Option<BoundsToml>,
}

impl Default for FilterToml {
    fn default() -> Self {
        Self {
            max_timespans: default_max_timespans(),
            min_coverage: default_min_coverage(),
            stations: Vec::new(),
            bounds: None,
        }
    }
}

fn default_max_timespans() -> usize {
    8
}
fn default_min_coverage() -> f64 {
    0.5
}

/// Geographic box; omitted edges span the whole globe.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BoundsToml {
    #[serde(default = "default_min_lat")]
    pub min_lat: f64,
    #[serde(default = "default_max_lat")]
    pub max_lat: f64,
    #[serde(default = "default_min_lon")]
    pub min_lon: f64,
    #[serde(default = "default_max_lon")]
    pub max_lon: f64,
}

fn default_min_lat() -> f64 {
    -90.0
}
fn default_max_lat() -> f64 {
    90.0
}
fn default_min_lon() -> f64 {
    -180.0
}
fn default_max_lon() -> f64 {
    180.0
}

/// Load the project config.
///
/// An explicit path must exist. Without one, `seisaudio.toml` in the working
/// directory is used if present, otherwise built-in defaults apply.
pub fn load(path: Option<&Path>) -> Result<SeisaudioConfig> {
    let path: PathBuf = match path {
        Some(p) => p.to_path_buf(),
        None => {
            let fallback = PathBuf::from(DEFAULT_CONFIG_PATH);
            if !fallback.exists() {
                debug!("no config file, using defaults");
                return Ok(SeisaudioConfig::default());
            }
            fallback
        }
    };
    let toml_str = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    let config: SeisaudioConfig = toml::from_str(&toml_str)
        .with_context(|| format!("failed to parse TOML config: {}", path.display()))?;
    debug!(path = %path.display(), "config loaded");
    Ok(config)
}
