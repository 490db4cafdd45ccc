pub mod add_point;
pub mod heatmap;

use axum::{response::IntoResponse, Json};

pub use add_point::add_point;
pub use heatmap::get_heatmap;

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "heatmap-service",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
