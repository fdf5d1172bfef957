//! Handler for link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the stored record for a short code.
///
/// # Endpoint
///
/// `GET /api/stats/{code}`
///
/// Expiry is not checked: an expired link still reports its data.
///
/// # Response
///
/// ```json
/// {
///   "short_code": "aB3dE7x",
///   "original_url": "https://example.com",
///   "created_at": "2025-01-01T10:00:00.000Z",
///   "expires_at": "2025-01-02T10:00:00.000Z",
///   "clicks": 12
/// }
/// ```
///
/// # Errors
///
/// - 404 Not Found if the short code doesn't exist
/// - 500 Internal Server Error if the lookup fails
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let record = state.url_service.stats(&code).await?;
    Ok(Json(record.into()))
}
