use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::{
    config::Config,
    models::{AddPointRequest, AddPointResponse, ErrorResponse},
    services::point_store::PointStore,
};

/// Record a new geotagged point
///
/// The body must be an object with numeric `lat` and `lon`. The body is
/// echoed back verbatim in `new_point`; only the coordinates are stored.
pub async fn add_point(
    State((_config, store)): State<(Config, Arc<PointStore>)>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response {
    let Json(body) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            warn!("Rejected add_point body: {}", rejection.body_text());
            return (
                rejection.status(),
                Json(ErrorResponse::new(rejection.body_text())),
            )
                .into_response();
        }
    };

    let request = match AddPointRequest::from_body(&body) {
        Ok(request) => request,
        Err(e) => {
            warn!("Rejected add_point fields: {}", e);
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorResponse::new(format!("Invalid point: {}", e))),
            )
                .into_response();
        }
    };

    // Unreachable from JSON input; guards values that bypass the decoder
    let point = match request.to_point() {
        Ok(point) => point,
        Err(e) => {
            warn!("Rejected add_point coordinates: {}", e);
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorResponse::new(e.to_string())),
            )
                .into_response();
        }
    };

    let (stored, total) = store.append(point).await;
    debug!(
        "Added point ({}, {}); store now holds {} points",
        stored.lat, stored.lon, total
    );

    (StatusCode::OK, Json(AddPointResponse::success(body))).into_response()
}
