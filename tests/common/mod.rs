#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;
use axum_test::TestServer;
use chrono::{DateTime, Utc};
use shortlink::application::services::{ShortenerConfig, ShortenerService};
use shortlink::domain::entities::{LinkEntry, NewLinkEntry};
use shortlink::domain::repositories::{LinkStore, VisitCounter};
use shortlink::domain::visit_worker::{VisitWorkerConfig, run_visit_worker};
use shortlink::infrastructure::counter::MemoryVisitCounter;
use shortlink::infrastructure::persistence::MemoryLinkStore;
use shortlink::routes;
use shortlink::state::AppState;
use shortlink::utils::code_generator::{CodeGenerator, GeneratorError, RandomCodeGenerator};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Hands out scripted codes first, then falls back to random ones.
#[derive(Default)]
pub struct ScriptedGenerator {
    codes: Mutex<VecDeque<String>>,
}

impl ScriptedGenerator {
    pub fn new(codes: &[&str]) -> Self {
        Self {
            codes: Mutex::new(codes.iter().map(|c| c.to_string()).collect()),
        }
    }
}

impl CodeGenerator for ScriptedGenerator {
    fn generate(&self, length: usize) -> Result<String, GeneratorError> {
        match self.codes.lock().unwrap().pop_front() {
            Some(code) => Ok(code),
            None => RandomCodeGenerator::new().generate(length),
        }
    }
}

/// A full in-memory service stack with a running visit worker.
pub struct TestContext {
    pub state: AppState,
    pub store: Arc<MemoryLinkStore>,
    pub counter: Arc<MemoryVisitCounter>,
    pub worker: JoinHandle<()>,
}

impl TestContext {
    pub fn new() -> Self {
        Self::build(ScriptedGenerator::default(), ShortenerConfig::default(), 1000)
    }

    pub fn with_codes(codes: &[&str]) -> Self {
        Self::build(
            ScriptedGenerator::new(codes),
            ShortenerConfig::default(),
            1000,
        )
    }

    pub fn with_config(codes: &[&str], config: ShortenerConfig) -> Self {
        Self::build(ScriptedGenerator::new(codes), config, 1000)
    }

    pub fn build(generator: ScriptedGenerator, config: ShortenerConfig, queue: usize) -> Self {
        let store = Arc::new(MemoryLinkStore::new());
        let counter = Arc::new(MemoryVisitCounter::new());
        let (tx, rx) = mpsc::channel(queue);

        let worker = tokio::spawn(run_visit_worker(
            rx,
            counter.clone(),
            VisitWorkerConfig::default(),
        ));

        let shortener = Arc::new(ShortenerService::new(
            store.clone(),
            counter.clone(),
            Arc::new(generator),
            tx.clone(),
            config,
        ));

        let state = AppState::new(
            shortener,
            store.clone(),
            counter.clone(),
            tx,
            Duration::from_millis(200),
        );

        Self {
            state,
            store,
            counter,
            worker,
        }
    }

    pub fn router(&self) -> Router {
        routes::router(self.state.clone())
    }

    pub fn server(&self) -> TestServer {
        TestServer::new(self.router()).unwrap()
    }

    /// Inserts an entry directly into the store, bypassing the shortener.
    pub async fn seed(&self, code: &str, url: &str) -> LinkEntry {
        self.seed_with_expiry(code, url, None).await
    }

    pub async fn seed_with_expiry(
        &self,
        code: &str,
        url: &str,
        expire_at: Option<DateTime<Utc>>,
    ) -> LinkEntry {
        self.store
            .save(NewLinkEntry {
                short_code: code.to_string(),
                long_url: url.to_string(),
                original_url: url.to_string(),
                user_id: None,
                expire_at,
            })
            .await
            .unwrap()
    }

    /// Polls the counter until it reaches `expected` or two seconds pass.
    /// Returns the last observed value.
    pub async fn wait_for_visits(&self, code: &str, expected: u64) -> u64 {
        let deadline = tokio::time::Instant::now() + Duration::from_secs(2);
        loop {
            let visits = self.counter.get(code).await.unwrap();
            if visits >= expected || tokio::time::Instant::now() >= deadline {
                return visits;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    }

    /// Reads the counter after giving the worker a moment to catch up.
    /// For asserting that nothing was counted.
    pub async fn settled_visits(&self, code: &str) -> u64 {
        tokio::time::sleep(Duration::from_millis(50)).await;
        self.counter.get(code).await.unwrap()
    }
}
