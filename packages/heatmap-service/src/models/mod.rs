pub mod heatmap;
pub mod point;
pub mod requests;

// Re-export commonly used types
pub use heatmap::{HeatColor, HeatmapCell, LatLng};
pub use point::{GeoPoint, PointValidationError};
pub use requests::{AddPointRequest, AddPointResponse, ErrorResponse};
