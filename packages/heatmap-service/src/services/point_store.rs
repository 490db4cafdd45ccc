use tokio::sync::RwLock;

use crate::models::GeoPoint;

/// Sample points loaded at startup so the map is never blank
pub const SEED_POINTS: [GeoPoint; 5] = [
    GeoPoint { lat: 37.7749, lon: -122.4194 }, // San Francisco
    GeoPoint { lat: 34.0522, lon: -118.2437 }, // Los Angeles
    GeoPoint { lat: 40.7128, lon: -74.0060 },  // New York
    GeoPoint { lat: 51.5074, lon: -0.1278 },   // London
    GeoPoint { lat: 35.6895, lon: 139.6917 },  // Tokyo
];

/// Append-only, in-memory store of every point received during the process lifetime
pub struct PointStore {
    points: RwLock<Vec<GeoPoint>>,
}

impl PointStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::with_points(Vec::new())
    }

    /// Create a store pre-populated with the sample points
    pub fn seeded() -> Self {
        Self::with_points(SEED_POINTS.to_vec())
    }

    pub fn with_points(points: Vec<GeoPoint>) -> Self {
        Self {
            points: RwLock::new(points),
        }
    }

    /// Append a point and return it along with the new store size
    pub async fn append(&self, point: GeoPoint) -> (GeoPoint, usize) {
        let mut points = self.points.write().await;
        points.push(point);
        (point, points.len())
    }

    /// Copy of all points in insertion order
    pub async fn snapshot(&self) -> Vec<GeoPoint> {
        self.points.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.points.read().await.len()
    }
}

impl Default for PointStore {
    fn default() -> Self {
        Self::new()
    }
}
