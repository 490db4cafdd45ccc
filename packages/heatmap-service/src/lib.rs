use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod config;
pub mod handlers;
pub mod libraries;
pub mod models;
pub mod services;

use config::Config;
use handlers::{add_point, get_heatmap, health};
use services::point_store::PointStore;

/// Build the HTTP router around a shared point store
pub fn app(config: Config, store: Arc<PointStore>) -> Router {
    Router::new()
        .route("/", get(get_heatmap))
        .route("/heatmap", get(get_heatmap))
        .route("/add_point", post(add_point))
        .route("/health", get(health))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state((config, store))
}
