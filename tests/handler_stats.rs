mod common;

use axum::{Router, http::StatusCode, routing::get};
use axum_test::TestServer;
use shorturl::api::handlers::stats_handler;
use shorturl::domain::repositories::UrlRepository;
use shorturl::infrastructure::persistence::InMemoryUrlRepository;
use std::sync::Arc;

fn stats_server(repository: Arc<dyn UrlRepository>) -> TestServer {
    let app = Router::new()
        .route("/api/stats/{code}", get(stats_handler))
        .with_state(common::create_test_state(repository));

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_stats_by_code_success() {
    let repository = Arc::new(InMemoryUrlRepository::new());
    let record = common::create_test_record(&repository, "stats01", "https://example.com").await;
    for _ in 0..3 {
        repository.increment_click_count("stats01").await.unwrap();
    }
    let server = stats_server(repository.clone());

    let response = server.get("/api/stats/stats01").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["short_code"], "stats01");
    assert_eq!(json["original_url"], "https://example.com");
    assert_eq!(json["clicks"], 3);

    let created_at: chrono::DateTime<chrono::Utc> =
        serde_json::from_value(json["created_at"].clone()).unwrap();
    let expires_at: chrono::DateTime<chrono::Utc> =
        serde_json::from_value(json["expires_at"].clone()).unwrap();
    assert_eq!(created_at, record.created_at);
    assert_eq!(expires_at, record.expires_at);
}

#[tokio::test]
async fn test_stats_does_not_count_as_click() {
    let repository = Arc::new(InMemoryUrlRepository::new());
    common::create_test_record(&repository, "quiet01", "https://example.com").await;
    let server = stats_server(repository.clone());

    server.get("/api/stats/quiet01").await;
    let json = server
        .get("/api/stats/quiet01")
        .await
        .json::<serde_json::Value>();

    assert_eq!(json["clicks"], 0);
}

#[tokio::test]
async fn test_stats_reports_expired_records() {
    let repository = Arc::new(InMemoryUrlRepository::new());
    common::create_expired_record(&repository, "oldlink", "https://example.com/old").await;
    let server = stats_server(repository);

    let response = server.get("/api/stats/oldlink").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["short_code"], "oldlink");
    assert_eq!(json["original_url"], "https://example.com/old");
    assert_eq!(json["clicks"], 0);
    assert!(json["created_at"].is_string());
    assert!(json["expires_at"].is_string());
}

#[tokio::test]
async fn test_stats_by_code_not_found() {
    let server = stats_server(Arc::new(InMemoryUrlRepository::new()));

    let response = server.get("/api/stats/notfound").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["details"]["short_code"], "notfound");
}

#[tokio::test]
async fn test_stats_storage_unavailable() {
    let server = stats_server(Arc::new(common::UnavailableRepository));

    let response = server.get("/api/stats/abc1234").await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
}
