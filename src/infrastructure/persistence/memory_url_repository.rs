//! In-memory implementation of the URL repository.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::repositories::{StorageError, UrlRepository};

/// Process-local record store.
///
/// Records are kept in insertion order. Lookups and increments act on the
/// first record with a matching code, mirroring `findOne` / `updateOne`.
/// Used by tests and for running the service without a database.
#[derive(Default)]
pub struct InMemoryUrlRepository {
    records: RwLock<Vec<UrlRecord>>,
    next_id: AtomicU64,
}

impl InMemoryUrlRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl UrlRepository for InMemoryUrlRepository {
    async fn insert(&self, new_record: NewUrlRecord) -> Result<UrlRecord, StorageError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        let record = UrlRecord::from_new(id.to_string(), new_record);

        self.records.write().await.push(record.clone());

        Ok(record)
    }

    async fn find_by_short_code(
        &self,
        short_code: &str,
    ) -> Result<Option<UrlRecord>, StorageError> {
        Ok(self
            .records
            .read()
            .await
            .iter()
            .find(|r| r.short_code == short_code)
            .cloned())
    }

    async fn increment_click_count(&self, short_code: &str) -> Result<(), StorageError> {
        if let Some(record) = self
            .records
            .write()
            .await
            .iter_mut()
            .find(|r| r.short_code == short_code)
        {
            record.clicks += 1;
        }

        Ok(())
    }
}
