//! DTOs for link statistics.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::UrlRecord;

/// Raw view of a stored record, reported whether or not it has expired.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub short_code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub clicks: u64,
}

impl From<UrlRecord> for StatsResponse {
    fn from(record: UrlRecord) -> Self {
        Self {
            short_code: record.short_code,
            original_url: record.original_url,
            created_at: record.created_at,
            expires_at: record.expires_at,
            clicks: record.clicks,
        }
    }
}
