//! Geographical point values.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CorvinaError, Result};

/// A geographical point with latitude and longitude.
///
/// The canonical wire form is `"lat,lon"`, e.g. `"52.52,13.405"`. Parsing a
/// string that does not match that grammar is an error, never a default
/// point: a malformed geo value in stored data indicates corruption.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees (-90 to 90)
    pub lat: f64,
    /// Longitude in degrees (-180 to 180)
    pub lon: f64,
}

impl GeoPoint {
    /// Create a new geographical point.
    pub fn new(lat: f64, lon: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(CorvinaError::invalid_argument(format!(
                "Invalid latitude: {lat} (must be between -90 and 90)"
            )));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(CorvinaError::invalid_argument(format!(
                "Invalid longitude: {lon} (must be between -180 and 180)"
            )));
        }

        Ok(GeoPoint { lat, lon })
    }

    /// Parse a point from its canonical `"lat,lon"` wire form.
    pub fn parse(s: &str) -> Result<Self> {
        let (lat, lon) = s
            .split_once(',')
            .ok_or_else(|| invalid_point(s))?;
        let lat: f64 = lat.trim().parse().map_err(|_| invalid_point(s))?;
        let lon: f64 = lon.trim().parse().map_err(|_| invalid_point(s))?;
        GeoPoint::new(lat, lon)
    }
}

fn invalid_point(s: &str) -> CorvinaError {
    CorvinaError::invalid_argument(format!("Invalid geo point '{s}' (expected \"lat,lon\")"))
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lon)
    }
}

impl FromStr for GeoPoint {
    type Err = CorvinaError;

    fn from_str(s: &str) -> Result<Self> {
        GeoPoint::parse(s)
    }
}
