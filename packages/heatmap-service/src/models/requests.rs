use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::point::{GeoPoint, PointValidationError};

/// Typed view of a `POST /add_point` body. Unknown fields are ignored here;
/// the raw body is what gets echoed back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddPointRequest {
    pub lat: f64,
    pub lon: f64,
}

impl AddPointRequest {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Parse from an already-decoded JSON body without consuming it
    pub fn from_body(body: &Value) -> Result<Self, serde_json::Error> {
        // Derived struct impls would also accept a `[lat, lon]` array
        if !body.is_object() {
            return Err(serde::de::Error::custom("expected a JSON object with `lat` and `lon`"));
        }
        Self::deserialize(body)
    }

    /// Convert into a storable point, rejecting non-finite coordinates
    pub fn to_point(&self) -> Result<GeoPoint, PointValidationError> {
        let point = GeoPoint::new(self.lat, self.lon);
        if !point.is_finite() {
            return Err(PointValidationError::NonFiniteCoordinate {
                lat: self.lat,
                lon: self.lon,
            });
        }
        Ok(point)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddPointResponse {
    pub status: String,
    // The request body exactly as received
    pub new_point: Value,
}

impl AddPointResponse {
    pub fn success(new_point: Value) -> Self {
        Self {
            status: "success".to_string(),
            new_point,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: String,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            error: message.into(),
        }
    }
}
