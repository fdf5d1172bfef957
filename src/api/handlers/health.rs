//! Handler for health check endpoint.

use axum::Json;

use crate::api::dto::health::HealthResponse;

/// Reports that the process is serving requests.
///
/// # Endpoint
///
/// `GET /health`
///
/// Always 200 with `{"status":"healthy"}`; the store is not consulted.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}
