//! Application error type and HTTP error response mapping.
//!
//! Every failure leaves the service as a JSON envelope:
//!
//! ```json
//! { "error": { "code": "not_found", "message": "Short URL not found", "details": {} } }
//! ```

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::repositories::StorageError;
use crate::utils::code_generator::GenerationError;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Error payload nested under the `error` key.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed request body or rejected URL (400).
    #[error("{message}")]
    Validation { message: String, details: Value },

    /// No record exists for the short code (404).
    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// The record exists but is past its expiry (410).
    #[error("{message}")]
    Expired { message: String, details: Value },

    /// The secure random source failed (500).
    #[error("{message}")]
    Generation { message: String, details: Value },

    /// Store connectivity failure or timeout (500).
    #[error("{message}")]
    Storage { message: String, details: Value },

    /// Any other server-side failure (500).
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn expired(message: impl Into<String>, details: Value) -> Self {
        Self::Expired {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// HTTP status this error is reported with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Expired { .. } => StatusCode::GONE,
            Self::Generation { .. } | Self::Storage { .. } | Self::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Converts the error into its serializable payload.
    pub fn to_error_info(&self) -> ErrorInfo {
        let (code, message, details) = match self {
            Self::Validation { message, details } => ("validation_error", message, details),
            Self::NotFound { message, details } => ("not_found", message, details),
            Self::Expired { message, details } => ("expired", message, details),
            Self::Generation { message, details } => ("generation_error", message, details),
            Self::Storage { message, details } => ("storage_error", message, details),
            Self::Internal { message, details } => ("internal_error", message, details),
        };

        ErrorInfo {
            code,
            message: message.clone(),
            details: details.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let info = self.to_error_info();

        if status.is_server_error() {
            tracing::error!(code = info.code, details = %info.details, "{}", info.message);
        }

        (status, Json(ErrorBody { error: info })).into_response()
    }
}

impl From<StorageError> for AppError {
    fn from(e: StorageError) -> Self {
        Self::Storage {
            message: "Storage error".to_string(),
            details: json!({ "kind": e.kind(), "reason": e.to_string() }),
        }
    }
}

impl From<GenerationError> for AppError {
    fn from(e: GenerationError) -> Self {
        Self::Generation {
            message: "Failed to generate short code".to_string(),
            details: json!({ "reason": e.to_string() }),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(
            "Invalid request body",
            json!({ "reason": rejection.body_text() }),
        )
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let details = serde_json::to_value(&errors).unwrap_or_else(|_| json!({}));
        Self::bad_request("Invalid URL format", details)
    }
}
