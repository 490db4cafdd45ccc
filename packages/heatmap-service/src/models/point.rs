use geo::{coord, Coord};
use serde::{Deserialize, Serialize};

/// A single geotagged observation. Coordinates are stored as received, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Both coordinates are finite numbers
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }

    /// `geo` coordinate with x = longitude, y = latitude
    pub fn coord(&self) -> Coord<f64> {
        coord! { x: self.lon, y: self.lat }
    }
}

impl From<Coord<f64>> for GeoPoint {
    fn from(c: Coord<f64>) -> Self {
        Self { lat: c.y, lon: c.x }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PointValidationError {
    #[error("Coordinates must be finite numbers (lat: {lat}, lon: {lon}).")]
    NonFiniteCoordinate { lat: f64, lon: f64 },
}
