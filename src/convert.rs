//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Result, bail};

use seisaudio_availability::{AudioRates, FilterConfig, GeoBounds, PlanConfig, QueryConfig};
use seisaudio_calendar::{MAX_MONTH_SECONDS, SECONDS_PER_DAY};

use crate::cli::QueryArgs;
use crate::config::*;

/// Smallest request ceiling in days: chunks are whole calendar months.
pub const MIN_CHUNK_DAYS: f64 = MAX_MONTH_SECONDS / SECONDS_PER_DAY;

/// Builds a [`QueryConfig`], applying CLI overrides on top of the TOML values.
pub fn build_query_config(query: &QueryToml, args: &QueryArgs) -> Result<QueryConfig> {
    let cfg = QueryConfig::default()
        .with_network(args.network.as_deref().unwrap_or(&query.network))
        .with_location(&query.location)
        .with_channel(&query.channel)
        .with_year(args.year.unwrap_or(query.year));
    cfg.validate()?;
    Ok(cfg)
}

/// Converts the TOML bounds section into [`GeoBounds`].
pub fn build_bounds(bounds: &BoundsToml) -> GeoBounds {
    GeoBounds::new(bounds.min_lat, bounds.max_lat, bounds.min_lon, bounds.max_lon)
}

/// Builds a [`FilterConfig`]; non-empty `cli_stations` replace the configured list.
pub fn build_filter_config(filter: &FilterToml, cli_stations: &[String]) -> Result<FilterConfig> {
    let stations: &[String] = if cli_stations.is_empty() {
        &filter.stations
    } else {
        cli_stations
    };
    let cfg = FilterConfig::default()
        .with_max_timespans(filter.max_timespans)
        .with_min_coverage(filter.min_coverage)
        .with_bounds(filter.bounds.as_ref().map(build_bounds))
        .with_stations(stations.iter().cloned());
    cfg.validate()?;
    Ok(cfg)
}

/// Builds a [`PlanConfig`] from the audio section.
pub fn build_plan_config(audio: &AudioToml) -> Result<PlanConfig> {
    if !(audio.max_chunk_days.is_finite() && audio.max_chunk_days >= MIN_CHUNK_DAYS) {
        bail!(
            "max_chunk_days must be at least {MIN_CHUNK_DAYS}, got {}",
            audio.max_chunk_days
        );
    }
    let cfg = PlanConfig::default()
        .with_rates(AudioRates::new(
            audio.reference_audio_rate,
            audio.reference_frame_rate,
        ))
        .with_max_chunk_seconds(audio.max_chunk_days * SECONDS_PER_DAY);
    cfg.validate()?;
    Ok(cfg)
}
