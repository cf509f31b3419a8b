//! HTTP server initialization and runtime setup.
//!
//! Handles backend selection, worker spawning, and the Axum server lifecycle.

use crate::application::services::{ShortenerConfig, ShortenerService};
use crate::config::Config;
use crate::domain::repositories::{LinkStore, VisitCounter};
use crate::domain::visit_worker::{VisitWorkerConfig, run_visit_worker};
use crate::infrastructure::counter::{MemoryVisitCounter, RedisVisitCounter};
use crate::infrastructure::persistence::MemoryLinkStore;
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::code_generator::RandomCodeGenerator;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Upper bound on waiting for queued visits after the listener stops.
const WORKER_DRAIN_TIMEOUT: Duration = Duration::from_secs(10);

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - In-memory link store
/// - Visit counter (Redis, or in-memory fallback)
/// - Background visit worker
/// - Axum HTTP server with graceful shutdown on Ctrl-C
///
/// On shutdown the worker drains queued visits before the store is closed.
///
/// # Errors
///
/// Returns an error if:
/// - The listen address does not parse
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store: Arc<dyn LinkStore> = Arc::new(MemoryLinkStore::new());
    let counter = build_counter(&config).await;

    let (visit_tx, visit_rx) = mpsc::channel(config.visit_queue_capacity);

    let worker = tokio::spawn(run_visit_worker(
        visit_rx,
        counter.clone(),
        VisitWorkerConfig {
            concurrency: config.visit_worker_concurrency,
            increment_timeout: Duration::from_millis(config.visit_increment_timeout_ms),
            ..VisitWorkerConfig::default()
        },
    ));
    tracing::info!(
        concurrency = config.visit_worker_concurrency,
        "Visit worker started"
    );

    let shortener = Arc::new(ShortenerService::new(
        store.clone(),
        counter.clone(),
        Arc::new(RandomCodeGenerator::new()),
        visit_tx.clone(),
        ShortenerConfig::from(&config),
    ));

    let state = AppState::new(
        shortener,
        store.clone(),
        counter,
        visit_tx,
        Duration::from_millis(config.health_timeout_ms),
    );

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Every sender lived in the router, so the worker sees the channel close.
    match tokio::time::timeout(WORKER_DRAIN_TIMEOUT, worker).await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => tracing::error!("Visit worker panicked: {}", e),
        Err(_) => tracing::warn!("Visit worker did not drain within {:?}", WORKER_DRAIN_TIMEOUT),
    }

    store.close().await?;
    tracing::info!("Shutdown complete");

    Ok(())
}

/// Connects the Redis counter when configured, otherwise counts in memory.
async fn build_counter(config: &Config) -> Arc<dyn VisitCounter> {
    let Some(redis_url) = &config.redis_url else {
        tracing::info!("Visit counter: in-memory");
        return Arc::new(MemoryVisitCounter::new());
    };

    match RedisVisitCounter::connect(redis_url).await {
        Ok(redis) => {
            tracing::info!("Visit counter: Redis");
            Arc::new(redis)
        }
        Err(e) => {
            tracing::warn!(
                "Failed to connect to Redis: {}. Counting visits in memory.",
                e
            );
            Arc::new(MemoryVisitCounter::new())
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
