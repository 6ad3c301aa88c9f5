//! Geographic location of a birth or observation.

use serde::{Deserialize, Serialize};

use crate::error::VedicError;

/// Observer location on Earth.
///
/// Latitude is geodetic degrees, north positive. Longitude is degrees,
/// east positive. Both are validated on construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGeoLocation")]
pub struct GeoLocation {
    latitude_deg: f64,
    longitude_deg: f64,
}

#[derive(Deserialize)]
struct RawGeoLocation {
    latitude_deg: f64,
    longitude_deg: f64,
}

impl TryFrom<RawGeoLocation> for GeoLocation {
    type Error = VedicError;

    fn try_from(raw: RawGeoLocation) -> Result<Self, Self::Error> {
        Self::new(raw.latitude_deg, raw.longitude_deg)
    }
}

impl GeoLocation {
    /// Build a location, rejecting non-finite or out-of-range coordinates.
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Result<Self, VedicError> {
        if !latitude_deg.is_finite() || !(-90.0..=90.0).contains(&latitude_deg) {
            return Err(VedicError::InvalidLocation("latitude must be in [-90, 90]"));
        }
        if !longitude_deg.is_finite() || !(-180.0..=180.0).contains(&longitude_deg) {
            return Err(VedicError::InvalidLocation(
                "longitude must be in [-180, 180]",
            ));
        }
        Ok(Self {
            latitude_deg,
            longitude_deg,
        })
    }

    pub fn latitude_deg(&self) -> f64 {
        self.latitude_deg
    }

    pub fn longitude_deg(&self) -> f64 {
        self.longitude_deg
    }

    /// Latitude in radians.
    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    /// Longitude in radians.
    pub fn longitude_rad(&self) -> f64 {
        self.longitude_deg.to_radians()
    }
}
