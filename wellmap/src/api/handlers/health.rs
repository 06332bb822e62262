use crate::api::models::health::HealthResponse;
use axum::Json;

/// Liveness probe. Answers without touching the database, so it stays green while the store is
/// down.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    summary = "Health check",
    responses(
        (status = 200, description = "Service is running", body = HealthResponse),
    )
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::running())
}
