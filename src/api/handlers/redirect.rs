//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Look up the record by code
/// 2. Refuse expired records with 410 Gone
/// 3. Build the `Location` header (a URL that is not a valid header value is
///    a 500 and is not counted)
/// 4. Count the click (best-effort)
/// 5. Return 302 Found
///
/// # Errors
///
/// - 404 Not Found if the short code doesn't exist
/// - 410 Gone if the link has expired
/// - 500 Internal Server Error if the lookup fails
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let original_url = state.url_service.resolve(&code).await?;

    let location = HeaderValue::from_bytes(original_url.as_bytes()).map_err(|_| {
        AppError::internal(
            "Stored URL is not a valid redirect target",
            json!({ "short_code": code }),
        )
    })?;

    state.url_service.record_click(&code).await;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
