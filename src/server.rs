//! HTTP server initialization and runtime setup.
//!
//! Handles the store connection, Axum server lifecycle and graceful shutdown.

use crate::application::services::UrlService;
use crate::config::Config;
use crate::infrastructure::persistence::MongoUrlRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use std::io;
use std::sync::Arc;
use tokio::sync::oneshot;
use tokio::task::JoinError;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - MongoDB client (connect + ping, fatal on failure)
/// - `short_code` lookup index
/// - Axum HTTP server
///
/// On SIGINT/SIGTERM the listener stops accepting connections, in-flight
/// requests get `config.shutdown_grace()` to finish, then the store
/// connection is closed.
///
/// # Errors
///
/// Returns an error if:
/// - Store connection fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let repository = Arc::new(
        MongoUrlRepository::connect(&config)
            .await
            .context("Failed to connect to MongoDB")?,
    );

    if let Err(e) = repository.ensure_indexes().await {
        tracing::warn!("Failed to create short_code index: {}", e);
    }

    let url_service = UrlService::new(
        repository.clone(),
        config.base_url.clone(),
        config.expiry_window(),
    )
    .with_store_timeout(config.store_timeout());

    let state = AppState::new(Arc::new(url_service));
    let app = app_router(state);

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    let (stop_tx, stop_rx) = oneshot::channel::<()>();
    let mut server = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                stop_rx.await.ok();
            })
            .await
    });

    let finished = tokio::select! {
        joined = &mut server => Some(joined),
        () = shutdown_signal() => None,
    };

    let outcome = match finished {
        Some(joined) => server_outcome(joined),
        None => {
            tracing::info!("Shutting down server...");
            stop_tx.send(()).ok();

            match tokio::time::timeout(config.shutdown_grace(), &mut server).await {
                Ok(joined) => server_outcome(joined),
                Err(_) => {
                    tracing::warn!(
                        "In-flight requests did not finish within {:?}, forcing shutdown",
                        config.shutdown_grace()
                    );
                    server.abort();
                    Ok(())
                }
            }
        }
    };

    repository.close().await;
    tracing::info!("Server exiting");

    outcome
}

fn server_outcome(joined: Result<io::Result<()>, JoinError>) -> Result<()> {
    joined
        .context("Server task failed")?
        .context("Server error")
}

/// Resolves when the process receives Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
