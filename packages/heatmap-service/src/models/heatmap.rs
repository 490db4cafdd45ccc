use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// Density band of a cell, derived from its count relative to the busiest cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeatColor {
    Red,
    Orange,
    Yellow,
    Green,
}

impl HeatColor {
    /// Classify a normalized count in (0, 1]. Every threshold is an exclusive lower bound.
    pub fn classify(normalized: f64) -> Self {
        if normalized > 0.75 {
            HeatColor::Red
        } else if normalized > 0.5 {
            HeatColor::Orange
        } else if normalized > 0.25 {
            HeatColor::Yellow
        } else {
            HeatColor::Green
        }
    }

    /// Marker radius the map frontend draws for this band
    pub fn radius(&self) -> u32 {
        match self {
            HeatColor::Red => 20,
            HeatColor::Orange => 15,
            HeatColor::Yellow => 10,
            HeatColor::Green => 5,
        }
    }
}

/// One aggregated grid cell as served to the map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapCell {
    /// Centroid of the points in the cell
    pub location: LatLng,
    pub count: usize,
    pub color: HeatColor,
    pub radius: u32,
}

impl HeatmapCell {
    pub fn new(location: LatLng, count: usize, color: HeatColor) -> Self {
        Self {
            location,
            count,
            color,
            radius: color.radius(),
        }
    }
}
