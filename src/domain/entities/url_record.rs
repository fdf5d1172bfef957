//! URL record entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A stored mapping from a short code to its original URL.
///
/// Only `clicks` changes after insertion. Expiry is evaluated at read time;
/// expired records are kept.
#[derive(Debug, Clone, PartialEq)]
pub struct UrlRecord {
    /// Store-assigned identifier, opaque to the rest of the service.
    pub id: String,
    pub original_url: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub clicks: u64,
}

impl UrlRecord {
    /// Builds the stored form of `new_record` once the store has assigned an id.
    pub fn from_new(id: String, new_record: NewUrlRecord) -> Self {
        Self {
            id,
            original_url: new_record.original_url,
            short_code: new_record.short_code,
            created_at: new_record.created_at,
            expires_at: new_record.expires_at,
            clicks: 0,
        }
    }

    /// Returns true if `now` is strictly past the expiry time.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

/// Input data for inserting a new record.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUrlRecord {
    pub original_url: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}
