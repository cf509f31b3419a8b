//! Background worker that applies visit increments off the request path.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Semaphore, mpsc};
use tokio::task::JoinSet;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tracing::{debug, info, warn};

use crate::domain::repositories::{CounterError, VisitCounter};
use crate::domain::visit_event::VisitEvent;

/// Tuning knobs for [`run_visit_worker`].
#[derive(Debug, Clone, Copy)]
pub struct VisitWorkerConfig {
    /// Maximum number of increments in flight at once.
    pub concurrency: usize,
    /// Upper bound on one increment, retries included.
    pub increment_timeout: Duration,
    /// Retries after the first failed attempt.
    pub max_retries: usize,
}

impl Default for VisitWorkerConfig {
    fn default() -> Self {
        Self {
            concurrency: 4,
            increment_timeout: Duration::from_secs(2),
            max_retries: 3,
        }
    }
}

/// Drains visit events and applies them to the counter.
///
/// Runs until every sender is dropped, then waits for in-flight increments
/// before returning. Increments run on their own tasks and never observe the
/// cancellation of the request that produced them.
pub async fn run_visit_worker(
    mut rx: mpsc::Receiver<VisitEvent>,
    counter: Arc<dyn VisitCounter>,
    config: VisitWorkerConfig,
) {
    let permits = Arc::new(Semaphore::new(config.concurrency.max(1)));
    let mut in_flight = JoinSet::new();

    while let Some(event) = rx.recv().await {
        let Ok(permit) = permits.clone().acquire_owned().await else {
            break;
        };

        let counter = counter.clone();
        in_flight.spawn(async move {
            let _permit = permit;
            let _ = record_visit(counter.as_ref(), &event, &config).await;
        });

        // Reap finished tasks so the set does not grow with the queue.
        while in_flight.try_join_next().is_some() {}
    }

    while in_flight.join_next().await.is_some() {}
    info!("Visit worker stopped");
}

/// Applies a single visit with jittered exponential backoff, bounded by
/// `config.increment_timeout`.
///
/// # Errors
///
/// Returns the last backend error once retries are exhausted, or
/// [`CounterError::Timeout`] when the overall budget runs out.
pub async fn record_visit(
    counter: &dyn VisitCounter,
    event: &VisitEvent,
    config: &VisitWorkerConfig,
) -> Result<(), CounterError> {
    let strategy = ExponentialBackoff::from_millis(10)
        .max_delay(Duration::from_millis(250))
        .map(jitter)
        .take(config.max_retries);

    let short_code = event.short_code.as_str();
    let attempt = Retry::spawn(strategy, || counter.increment(short_code));

    match tokio::time::timeout(config.increment_timeout, attempt).await {
        Ok(Ok(())) => {
            metrics::counter!("shortlink_visits_recorded_total").increment(1);
            debug!(
                short_code,
                lag_ms = event.enqueued_at.elapsed().as_millis() as u64,
                "Visit recorded"
            );
            Ok(())
        }
        Ok(Err(e)) => {
            metrics::counter!("shortlink_visits_failed_total").increment(1);
            warn!(short_code, error = %e, "Failed to record visit");
            Err(e)
        }
        Err(_) => {
            metrics::counter!("shortlink_visits_failed_total").increment(1);
            warn!(
                short_code,
                timeout_ms = config.increment_timeout.as_millis() as u64,
                "Visit increment timed out"
            );
            Err(CounterError::Timeout(config.increment_timeout))
        }
    }
}
