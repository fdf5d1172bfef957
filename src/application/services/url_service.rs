//! URL shortening, resolution and statistics service.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use chrono::{SubsecRound, TimeDelta, Utc};
use serde_json::json;
use tracing::{info, warn};

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::repositories::{StorageError, UrlRepository};
use crate::error::AppError;
use crate::utils::code_generator::generate_code;
use crate::utils::url_validator::is_valid_url;

/// Default upper bound on a single store call.
pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(5);

/// Service for creating short URLs and resolving them back.
///
/// Holds the injected record store. Every store call is bounded by
/// `store_timeout`; a call that overruns fails with [`StorageError::Timeout`].
pub struct UrlService {
    repository: Arc<dyn UrlRepository>,
    base_url: String,
    expiry_window: TimeDelta,
    store_timeout: Duration,
}

impl UrlService {
    /// Creates a new service.
    ///
    /// # Arguments
    ///
    /// - `repository` - Record store shared by all requests
    /// - `base_url` - Public prefix of short URLs; a trailing `/` is ignored
    /// - `expiry_window` - Lifetime of a new record
    pub fn new(
        repository: Arc<dyn UrlRepository>,
        base_url: impl Into<String>,
        expiry_window: TimeDelta,
    ) -> Self {
        Self {
            repository,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            expiry_window,
            store_timeout: DEFAULT_STORE_TIMEOUT,
        }
    }

    /// Overrides the per-call store timeout.
    pub fn with_store_timeout(mut self, store_timeout: Duration) -> Self {
        self.store_timeout = store_timeout;
        self
    }

    /// Creates a record for `original_url` under a fresh random code.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] if the URL is not `http://` or `https://`
    /// - [`AppError::Generation`] if the random source fails
    /// - [`AppError::Internal`] if the expiry window overflows the clock
    /// - [`AppError::Storage`] if the insert fails or times out
    pub async fn shorten(&self, original_url: &str) -> Result<UrlRecord, AppError> {
        if !is_valid_url(original_url) {
            return Err(AppError::bad_request(
                "Invalid URL format",
                json!({ "url": original_url }),
            ));
        }

        let short_code = generate_code()?;

        // BSON datetimes keep millisecond precision; match it so the response
        // agrees with what a later lookup returns.
        let created_at = Utc::now().trunc_subsecs(3);
        let expires_at = created_at
            .checked_add_signed(self.expiry_window)
            .ok_or_else(|| {
                AppError::internal(
                    "Expiry window is out of range",
                    json!({ "expiry_window_hours": self.expiry_window.num_hours() }),
                )
            })?;
        let new_record = NewUrlRecord {
            original_url: original_url.to_string(),
            short_code,
            created_at,
            expires_at,
        };

        let record = self
            .bounded("insert", self.repository.insert(new_record))
            .await?;

        info!(short_code = %record.short_code, "Short URL created");

        Ok(record)
    }

    /// Resolves a short code to the URL the visitor should be redirected to.
    ///
    /// Does not count a click; call [`UrlService::record_click`] once the
    /// redirect is known to succeed.
    ///
    /// # Errors
    ///
    /// - [`AppError::NotFound`] if no record has this code
    /// - [`AppError::Expired`] if the record is past `expires_at`
    /// - [`AppError::Storage`] if the lookup fails or times out
    pub async fn resolve(&self, short_code: &str) -> Result<String, AppError> {
        let record = self.find(short_code).await?;

        if record.is_expired() {
            return Err(AppError::expired(
                "Short URL has expired",
                json!({ "short_code": short_code, "expires_at": record.expires_at }),
            ));
        }

        Ok(record.original_url)
    }

    /// Counts one redirect for a short code.
    ///
    /// Failures are logged and ignored; they never affect the redirect.
    pub async fn record_click(&self, short_code: &str) {
        if let Err(e) = self
            .bounded(
                "increment_click_count",
                self.repository.increment_click_count(short_code),
            )
            .await
        {
            warn!(short_code, error = %e, "Failed to record click");
        }
    }

    /// Returns the raw record for a short code, expired or not.
    ///
    /// # Errors
    ///
    /// - [`AppError::NotFound`] if no record has this code
    /// - [`AppError::Storage`] if the lookup fails or times out
    pub async fn stats(&self, short_code: &str) -> Result<UrlRecord, AppError> {
        self.find(short_code).await
    }

    /// Builds the public short URL for a code.
    pub fn short_url(&self, short_code: &str) -> String {
        format!("{}/{}", self.base_url, short_code)
    }

    async fn find(&self, short_code: &str) -> Result<UrlRecord, AppError> {
        self.bounded(
            "find_by_short_code",
            self.repository.find_by_short_code(short_code),
        )
        .await?
        .ok_or_else(|| {
            AppError::not_found("Short URL not found", json!({ "short_code": short_code }))
        })
    }

    async fn bounded<T>(
        &self,
        operation: &'static str,
        call: impl Future<Output = Result<T, StorageError>>,
    ) -> Result<T, StorageError> {
        tokio::time::timeout(self.store_timeout, call)
            .await
            .unwrap_or(Err(StorageError::Timeout {
                operation,
                after: self.store_timeout,
            }))
    }
}
