use axum::Json;

use crate::handlers::response::HealthResponse;

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}
