use std::cmp::Ordering;
use std::collections::BTreeMap;

use geo::{coord, Coord};

use crate::models::{GeoPoint, HeatColor, HeatmapCell, LatLng};

/// Default cell edge length in degrees
pub const DEFAULT_GRID_SIZE: f64 = 0.01;

/// Configuration for grid aggregation
#[derive(Debug, Clone)]
pub struct GridAggregatorConfig {
    pub grid_size: f64, // Cell edge length in degrees (0.01)
}

impl Default for GridAggregatorConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AggregationError {
    #[error("Grid size must be a positive finite number of degrees, got {0}.")]
    InvalidGridSize(f64),

    #[error("Stored point has non-finite coordinates (lat: {lat}, lon: {lon}).")]
    NonFiniteCoordinate { lat: f64, lon: f64 },

    #[error("Point (lat: {lat}, lon: {lon}) is too far out to index with grid size {grid_size}.")]
    CoordinateOutOfRange { lat: f64, lon: f64, grid_size: f64 },
}

/// Index of the grid cell a point falls into: `floor(coord / grid_size)` per axis.
///
/// Indices are whole-valued `f64`s rather than a fixed-width integer so that
/// distant cells never collapse onto a saturated bound. Ordered by latitude
/// index first, then longitude index.
#[derive(Debug, Clone, Copy)]
pub struct CellKey {
    pub lat_index: f64,
    pub lon_index: f64,
}

impl CellKey {
    pub fn for_point(point: &GeoPoint, grid_size: f64) -> Result<Self, AggregationError> {
        match (
            floor_index(point.lat, grid_size),
            floor_index(point.lon, grid_size),
        ) {
            (Some(lat_index), Some(lon_index)) => Ok(Self {
                lat_index,
                lon_index,
            }),
            _ => Err(AggregationError::CoordinateOutOfRange {
                lat: point.lat,
                lon: point.lon,
                grid_size,
            }),
        }
    }
}

/// `None` when the quotient overflows to infinity
fn floor_index(coordinate: f64, grid_size: f64) -> Option<f64> {
    let index = (coordinate / grid_size).floor();
    // + 0.0 folds -0.0 into 0.0 so both land in one cell
    index.is_finite().then_some(index + 0.0)
}

impl Ord for CellKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.lat_index
            .total_cmp(&other.lat_index)
            .then_with(|| self.lon_index.total_cmp(&other.lon_index))
    }
}

impl PartialOrd for CellKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for CellKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for CellKey {}

/// Running totals for one cell during a single aggregation pass
#[derive(Debug, Clone, Copy)]
struct CellAggregate {
    sum: Coord<f64>,
    count: usize,
}

impl CellAggregate {
    fn empty() -> Self {
        Self {
            sum: coord! { x: 0.0, y: 0.0 },
            count: 0,
        }
    }

    fn push(&mut self, point: &GeoPoint) {
        self.sum = self.sum + point.coord();
        self.count += 1;
    }

    fn centroid(&self) -> LatLng {
        let mean = GeoPoint::from(self.sum / self.count as f64);
        LatLng {
            lat: mean.lat,
            lng: mean.lon,
        }
    }
}

/// Buckets points into a fixed lat/lon grid and classifies each cell by density
pub struct GridAggregator {
    config: GridAggregatorConfig,
}

impl GridAggregator {
    /// Create a new aggregator with the default grid size
    pub fn new() -> Self {
        Self {
            config: GridAggregatorConfig::default(),
        }
    }

    /// Create a new aggregator with custom config
    pub fn with_config(config: GridAggregatorConfig) -> Self {
        Self { config }
    }

    pub fn grid_size(&self) -> f64 {
        self.config.grid_size
    }

    /// Aggregate `points` into heatmap cells, sorted by cell key.
    ///
    /// Fails as a whole if the grid size is unusable, or any point has a
    /// non-finite coordinate or one too large to index; no partial result
    /// is produced.
    pub fn aggregate(&self, points: &[GeoPoint]) -> Result<Vec<HeatmapCell>, AggregationError> {
        let grid_size = self.config.grid_size;
        if !grid_size.is_finite() || grid_size <= 0.0 {
            return Err(AggregationError::InvalidGridSize(grid_size));
        }

        let mut cells: BTreeMap<CellKey, CellAggregate> = BTreeMap::new();
        for point in points {
            if !point.is_finite() {
                return Err(AggregationError::NonFiniteCoordinate {
                    lat: point.lat,
                    lon: point.lon,
                });
            }
            cells
                .entry(CellKey::for_point(point, grid_size)?)
                .or_insert_with(CellAggregate::empty)
                .push(point);
        }

        let max_count = cells.values().map(|cell| cell.count).max().unwrap_or(1);

        Ok(cells
            .values()
            .map(|cell| {
                let normalized = cell.count as f64 / max_count as f64;
                HeatmapCell::new(cell.centroid(), cell.count, HeatColor::classify(normalized))
            })
            .collect())
    }
}

impl Default for GridAggregator {
    fn default() -> Self {
        Self::new()
    }
}
