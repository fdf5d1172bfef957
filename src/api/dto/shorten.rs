//! DTOs for link shortening endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::url_validator::validate_http_url;

/// Request to shorten a single URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten (must start with `http://` or `https://`).
    #[validate(custom(function = "validate_http_url"))]
    pub url: String,
}

/// Response returned after a short URL is created.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_url: String,
    pub original_url: String,
    pub expires_at: DateTime<Utc>,
}
