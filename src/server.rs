//! HTTP server initialization and runtime setup.
//!
//! Handles the database pool, migrations, router assembly and the Axum
//! server lifecycle for whichever [`Service`] the configuration names.

use crate::config::{Config, Service};
use crate::infrastructure::database::{self, SHORTENER_MIGRATOR, TODO_MIGRATOR};
use crate::routes::{shortener_router, todo_router};
use crate::state::{ShortenerState, TodoState};

use anyhow::{Context, Result};
use axum::extract::Request;
use axum::{Router, ServiceExt};
use std::sync::Arc;
use tokio::signal;
use tower_http::normalize_path::NormalizePath;

/// Runs the configured service until SIGINT or SIGTERM.
///
/// Initializes:
/// - SQLite connection pool
/// - Apply migrations
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = database::connect(&config.pool_settings()).await?;
    tracing::info!("Connected to database");

    let app = match config.service {
        Service::Shortener => {
            database::migrate(&pool, &SHORTENER_MIGRATOR).await?;
            let state = ShortenerState::new(
                Arc::new(pool.clone()),
                config.base_url.clone(),
                config.code_max_attempts,
            );
            shortener_router(state)
        }
        Service::Todo => {
            database::migrate(&pool, &TODO_MIGRATOR).await?;
            todo_router(TodoState::new(Arc::new(pool.clone())))
        }
    };
    tracing::info!("Migrations applied");

    serve(app, &config.listen_addr).await?;

    pool.close().await;
    tracing::info!("Shutdown complete");

    Ok(())
}

async fn serve(app: NormalizePath<Router>, listen_addr: &str) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(listen_addr)
        .await
        .with_context(|| format!("Failed to bind {listen_addr}"))?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolves on Ctrl+C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
