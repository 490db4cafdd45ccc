use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;
use tracing::{debug, error};

use crate::{
    config::Config,
    libraries::grid_aggregator::GridAggregator,
    models::{ErrorResponse, HeatmapCell},
    services::point_store::PointStore,
};

/// Aggregate every stored point into grid cells for the map
pub async fn get_heatmap(
    State((config, store)): State<(Config, Arc<PointStore>)>,
) -> Result<Json<Vec<HeatmapCell>>, (StatusCode, Json<ErrorResponse>)> {
    let points = store.snapshot().await;
    let aggregator = GridAggregator::with_config(config.aggregator_config());

    match aggregator.aggregate(&points) {
        Ok(cells) => {
            debug!(
                "Aggregated {} points into {} cells (grid size {})",
                points.len(),
                cells.len(),
                aggregator.grid_size()
            );
            Ok(Json(cells))
        }
        Err(e) => {
            error!("Heatmap aggregation failed: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(e.to_string())),
            ))
        }
    }
}
