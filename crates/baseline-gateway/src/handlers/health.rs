use crate::model::HealthResponse;
use axum::Json;
use jiff::Timestamp;

pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: Timestamp::now(),
        version: env!("CARGO_PKG_VERSION"),
    })
}
