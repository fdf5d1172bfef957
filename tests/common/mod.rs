#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::{TimeDelta, Utc};
use shorturl::domain::entities::{NewUrlRecord, UrlRecord};
use shorturl::domain::repositories::{StorageError, UrlRepository};
use shorturl::infrastructure::persistence::InMemoryUrlRepository;
use shorturl::prelude::UrlService;
use shorturl::routes::app_router;
use shorturl::state::AppState;
use std::sync::Arc;
use std::time::Duration;

pub const BASE_URL: &str = "http://localhost:8080";

pub fn create_test_state(repository: Arc<dyn UrlRepository>) -> AppState {
    create_test_state_with_timeout(repository, Duration::from_secs(5))
}

pub fn create_test_state_with_timeout(
    repository: Arc<dyn UrlRepository>,
    store_timeout: Duration,
) -> AppState {
    let url_service = UrlService::new(repository, BASE_URL, TimeDelta::hours(24))
        .with_store_timeout(store_timeout);

    AppState::new(Arc::new(url_service))
}

/// Full application router backed by the given store.
pub fn create_test_server(repository: Arc<dyn UrlRepository>) -> TestServer {
    TestServer::new(app_router(create_test_state(repository))).unwrap()
}

pub async fn create_test_record(
    repository: &InMemoryUrlRepository,
    code: &str,
    url: &str,
) -> UrlRecord {
    let now = Utc::now();
    insert(repository, code, url, now, now + TimeDelta::hours(24)).await
}

pub async fn create_expired_record(
    repository: &InMemoryUrlRepository,
    code: &str,
    url: &str,
) -> UrlRecord {
    let now = Utc::now();
    insert(
        repository,
        code,
        url,
        now - TimeDelta::hours(25),
        now - TimeDelta::hours(1),
    )
    .await
}

async fn insert(
    repository: &InMemoryUrlRepository,
    code: &str,
    url: &str,
    created_at: chrono::DateTime<Utc>,
    expires_at: chrono::DateTime<Utc>,
) -> UrlRecord {
    repository
        .insert(NewUrlRecord {
            original_url: url.to_string(),
            short_code: code.to_string(),
            created_at,
            expires_at,
        })
        .await
        .unwrap()
}

/// Store whose every call fails as if the database were unreachable.
pub struct UnavailableRepository;

#[async_trait]
impl UrlRepository for UnavailableRepository {
    async fn insert(&self, _new_record: NewUrlRecord) -> Result<UrlRecord, StorageError> {
        Err(StorageError::Backend("connection refused".to_string()))
    }

    async fn find_by_short_code(
        &self,
        _short_code: &str,
    ) -> Result<Option<UrlRecord>, StorageError> {
        Err(StorageError::Backend("connection refused".to_string()))
    }

    async fn increment_click_count(&self, _short_code: &str) -> Result<(), StorageError> {
        Err(StorageError::Backend("connection refused".to_string()))
    }
}

/// Store that never answers within a short timeout.
pub struct StalledRepository {
    pub delay: Duration,
}

#[async_trait]
impl UrlRepository for StalledRepository {
    async fn insert(&self, new_record: NewUrlRecord) -> Result<UrlRecord, StorageError> {
        tokio::time::sleep(self.delay).await;
        Ok(UrlRecord::from_new("late".to_string(), new_record))
    }

    async fn find_by_short_code(
        &self,
        _short_code: &str,
    ) -> Result<Option<UrlRecord>, StorageError> {
        tokio::time::sleep(self.delay).await;
        Ok(None)
    }

    async fn increment_click_count(&self, _short_code: &str) -> Result<(), StorageError> {
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}

/// In-memory store whose click increments always fail.
pub struct BrokenCounterRepository {
    pub inner: InMemoryUrlRepository,
}

#[async_trait]
impl UrlRepository for BrokenCounterRepository {
    async fn insert(&self, new_record: NewUrlRecord) -> Result<UrlRecord, StorageError> {
        self.inner.insert(new_record).await
    }

    async fn find_by_short_code(
        &self,
        short_code: &str,
    ) -> Result<Option<UrlRecord>, StorageError> {
        self.inner.find_by_short_code(short_code).await
    }

    async fn increment_click_count(&self, _short_code: &str) -> Result<(), StorageError> {
        Err(StorageError::Backend("write concern failed".to_string()))
    }
}
