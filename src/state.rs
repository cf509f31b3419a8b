//! Shared application state for Axum handlers.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use crate::application::services::ShortenerService;
use crate::domain::repositories::{LinkStore, VisitCounter};
use crate::domain::visit_event::VisitEvent;

/// Application state shared across all HTTP handlers.
///
/// Cloned for each request; every field is a cheap handle.
#[derive(Clone)]
pub struct AppState {
    pub shortener: Arc<ShortenerService>,

    /// Backends kept for `/healthz` pings.
    pub store: Arc<dyn LinkStore>,
    pub counter: Arc<dyn VisitCounter>,
    pub visit_sender: mpsc::Sender<VisitEvent>,

    /// Per-backend ping deadline for the health check.
    pub health_timeout: Duration,
}

impl AppState {
    pub fn new(
        shortener: Arc<ShortenerService>,
        store: Arc<dyn LinkStore>,
        counter: Arc<dyn VisitCounter>,
        visit_sender: mpsc::Sender<VisitEvent>,
        health_timeout: Duration,
    ) -> Self {
        Self {
            shortener,
            store,
            counter,
            visit_sender,
            health_timeout,
        }
    }
}
