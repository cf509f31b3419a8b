mod common;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum_test::TestServer;
use serde_json::Value;
use shortlink::domain::repositories::{CounterError, LinkStore, VisitCounter};
use shortlink::routes;
use shortlink::state::AppState;
use tokio::sync::mpsc;

struct DownCounter;

#[async_trait]
impl VisitCounter for DownCounter {
    async fn increment(&self, _short_code: &str) -> Result<(), CounterError> {
        Err(CounterError::Backend("connection refused".into()))
    }

    async fn get(&self, _short_code: &str) -> Result<u64, CounterError> {
        Err(CounterError::Backend("connection refused".into()))
    }

    async fn ping(&self) -> Result<(), CounterError> {
        Err(CounterError::Backend("connection refused".into()))
    }
}

struct HangingCounter;

#[async_trait]
impl VisitCounter for HangingCounter {
    async fn increment(&self, _short_code: &str) -> Result<(), CounterError> {
        std::future::pending().await
    }

    async fn get(&self, _short_code: &str) -> Result<u64, CounterError> {
        std::future::pending().await
    }

    async fn ping(&self) -> Result<(), CounterError> {
        std::future::pending().await
    }
}

fn state_with_counter(ctx: &common::TestContext, counter: Arc<dyn VisitCounter>) -> AppState {
    AppState::new(
        ctx.state.shortener.clone(),
        ctx.state.store.clone(),
        counter,
        ctx.state.visit_sender.clone(),
        Duration::from_millis(50),
    )
}

#[tokio::test]
async fn test_health_ok() {
    let ctx = common::TestContext::new();
    let server = ctx.server();

    let response = server.get("/healthz").await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(body["checks"]["store"]["status"], "ok");
    assert_eq!(body["checks"]["counter"]["status"], "ok");
    assert_eq!(body["checks"]["visit_queue"]["status"], "ok");
}

#[tokio::test]
async fn test_health_counter_down() {
    let ctx = common::TestContext::new();
    let state = state_with_counter(&ctx, Arc::new(DownCounter));
    let server = TestServer::new(routes::router(state)).unwrap();

    let response = server.get("/healthz").await;

    assert_eq!(response.status_code(), 503);
    let body: Value = response.json();
    assert_eq!(body["status"], "unavailable");
    assert_eq!(body["checks"]["counter"]["status"], "error");
    assert_eq!(body["checks"]["store"]["status"], "ok");
}

#[tokio::test]
async fn test_health_counter_timeout() {
    let ctx = common::TestContext::new();
    let state = state_with_counter(&ctx, Arc::new(HangingCounter));
    let server = TestServer::new(routes::router(state)).unwrap();

    let response = server.get("/healthz").await;

    assert_eq!(response.status_code(), 503);
    let body: Value = response.json();
    let message = body["checks"]["counter"]["message"].as_str().unwrap();
    assert!(message.contains("No response"));
}

#[tokio::test]
async fn test_health_store_closed() {
    let ctx = common::TestContext::new();
    ctx.store.close().await.unwrap();
    let server = ctx.server();

    let response = server.get("/healthz").await;

    assert_eq!(response.status_code(), 503);
    let body: Value = response.json();
    assert_eq!(body["checks"]["store"]["status"], "error");
}

#[tokio::test]
async fn test_health_visit_queue_closed() {
    let ctx = common::TestContext::new();
    let (tx, rx) = mpsc::channel(8);
    drop(rx);

    let state = AppState::new(
        ctx.state.shortener.clone(),
        ctx.state.store.clone(),
        ctx.state.counter.clone(),
        tx,
        Duration::from_millis(50),
    );
    let server = TestServer::new(routes::router(state)).unwrap();

    let response = server.get("/healthz").await;

    assert_eq!(response.status_code(), 503);
    let body: Value = response.json();
    assert_eq!(body["checks"]["visit_queue"]["status"], "error");
}
