//! Handler for link shortening endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection, http::StatusCode};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short URL for a long URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com" }
/// ```
///
/// # Response
///
/// **201 Created**
///
/// ```json
/// {
///   "short_url": "http://localhost:8080/aB3dE7x",
///   "original_url": "https://example.com",
///   "expires_at": "2025-01-02T10:00:00.000Z"
/// }
/// ```
///
/// # Errors
///
/// - 400 Bad Request if the body is not valid JSON, lacks `url`, or the URL
///   is not `http://` / `https://`
/// - 500 Internal Server Error if code generation or the insert fails
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let record = state.url_service.shorten(&payload.url).await?;

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            short_url: state.url_service.short_url(&record.short_code),
            original_url: record.original_url,
            expires_at: record.expires_at,
        }),
    ))
}
