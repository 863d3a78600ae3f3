//! Station catalog in FDSN `format=text` layout and geographic bounds.
//!
//! ```text
//! #Network | Station | Latitude | Longitude | Elevation | SiteName | StartTime | EndTime
//! G|ATD|11.53|42.85|610.0|Arta Tunnel, Djibouti|1985-08-01T00:00:00|
//! ```

use crate::error::AvailabilityError;

const FIELD_COUNT: usize = 8;

/// Location metadata for one station.
#[derive(Debug, Clone, PartialEq)]
pub struct StationInfo {
    network: String,
    station: String,
    latitude: f64,
    longitude: f64,
    elevation: f64,
    site_name: String,
}

impl StationInfo {
    /// Returns the network code.
    pub fn network(&self) -> &str {
        &self.network
    }

    /// Returns the station code.
    pub fn station(&self) -> &str {
        &self.station
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Elevation in metres.
    pub fn elevation(&self) -> f64 {
        self.elevation
    }

    /// Free-text site description.
    pub fn site_name(&self) -> &str {
        &self.site_name
    }
}

/// Parse FDSN station text.
///
/// Blank lines and lines starting with `#` are skipped.
///
/// # Errors
///
/// Returns [`AvailabilityError::Catalog`] for a line without eight
/// `|`-separated fields or with non-numeric coordinates.
pub fn parse_station_text(text: &str) -> Result<Vec<StationInfo>, AvailabilityError> {
    let mut stations = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }
        let fields: Vec<&str> = line.split('|').map(str::trim).collect();
        if fields.len() != FIELD_COUNT {
            return Err(AvailabilityError::Catalog {
                line: line_no,
                reason: format!("expected {FIELD_COUNT} fields, got {}", fields.len()),
            });
        }
        let number = |i: usize, name: &str| -> Result<f64, AvailabilityError> {
            fields[i].parse().map_err(|_| AvailabilityError::Catalog {
                line: line_no,
                reason: format!("{name} is not a number: {:?}", fields[i]),
            })
        };
        stations.push(StationInfo {
            network: fields[0].to_string(),
            station: fields[1].to_string(),
            latitude: number(2, "latitude")?,
            longitude: number(3, "longitude")?,
            elevation: number(4, "elevation")?,
            site_name: fields[5].to_string(),
        });
    }
    Ok(stations)
}

// ---------------------------------------------------------------------------
// GeoBounds
// ---------------------------------------------------------------------------

/// Inclusive latitude/longitude box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    min_lat: f64,
    max_lat: f64,
    min_lon: f64,
    max_lon: f64,
}

impl Default for GeoBounds {
    fn default() -> Self {
        Self {
            min_lat: -90.0,
            max_lat: 90.0,
            min_lon: -180.0,
            max_lon: 180.0,
        }
    }
}

impl GeoBounds {
    /// Creates a box from its edges.
    pub fn new(min_lat: f64, max_lat: f64, min_lon: f64, max_lon: f64) -> Self {
        Self {
            min_lat,
            max_lat,
            min_lon,
            max_lon,
        }
    }

    /// Returns `true` if the point lies inside the box (edges included).
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        (self.min_lat..=self.max_lat).contains(&latitude)
            && (self.min_lon..=self.max_lon).contains(&longitude)
    }

    /// Validate that the edges are ordered and on the globe.
    ///
    /// # Errors
    ///
    /// Returns [`AvailabilityError::Validation`] for reversed edges or
    /// values outside ±90° latitude / ±180° longitude.
    pub fn validate(&self) -> Result<(), AvailabilityError> {
        let mut problems = Vec::new();
        if !(-90.0..=90.0).contains(&self.min_lat) || !(-90.0..=90.0).contains(&self.max_lat) {
            problems.push("latitude must be within -90..=90".to_string());
        }
        if !(-180.0..=180.0).contains(&self.min_lon) || !(-180.0..=180.0).contains(&self.max_lon) {
            problems.push("longitude must be within -180..=180".to_string());
        }
        if self.min_lat > self.max_lat {
            problems.push(format!(
                "min_lat {} exceeds max_lat {}",
                self.min_lat, self.max_lat
            ));
        }
        if self.min_lon > self.max_lon {
            problems.push(format!(
                "min_lon {} exceeds max_lon {}",
                self.min_lon, self.max_lon
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
