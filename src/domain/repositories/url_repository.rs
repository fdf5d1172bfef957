//! Repository trait for URL record storage.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::{NewUrlRecord, UrlRecord};

/// Errors raised by a record store.
///
/// "Not found" is not an error; lookups return `Ok(None)` instead.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The call did not complete within the configured bound.
    #[error("{operation} timed out after {after:?}")]
    Timeout {
        operation: &'static str,
        after: Duration,
    },

    /// Connectivity or driver failure.
    #[error("storage backend error: {0}")]
    Backend(String),
}

impl StorageError {
    /// Short machine-readable label used in error responses and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Timeout { .. } => "timeout",
            Self::Backend(_) => "backend",
        }
    }
}

/// Storage contract for URL records.
///
/// Implementations must be safe to share across concurrent requests.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MongoUrlRepository`] - MongoDB collection
/// - [`crate::infrastructure::persistence::InMemoryUrlRepository`] - process-local store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Persists a new record and returns it with its store-assigned id.
    ///
    /// Short code uniqueness is not checked.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Backend`] if the store is unavailable.
    async fn insert(&self, new_record: NewUrlRecord) -> Result<UrlRecord, StorageError>;

    /// Finds the record with exactly this short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(UrlRecord))` if found
    /// - `Ok(None)` if not found
    async fn find_by_short_code(&self, short_code: &str)
    -> Result<Option<UrlRecord>, StorageError>;

    /// Atomically adds one to the click counter of the matching record.
    ///
    /// Incrementing an unknown code is not an error.
    async fn increment_click_count(&self, short_code: &str) -> Result<(), StorageError>;
}
