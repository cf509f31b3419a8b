//! Short link creation, resolution, and visit statistics.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde_json::json;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::domain::entities::{LinkEntry, NewLinkEntry};
use crate::domain::repositories::{CounterError, LinkStore, StoreError, VisitCounter};
use crate::domain::visit_event::VisitEvent;
use crate::error::AppError;
use crate::utils::code_generator::CodeGenerator;
use crate::utils::reserved::is_reserved;
use crate::utils::url_validator::validate_long_url;

/// Tunables for [`ShortenerService`].
#[derive(Debug, Clone)]
pub struct ShortenerConfig {
    /// Length of generated short codes.
    pub code_length: usize,
    /// Generator draws allowed per creation before giving up.
    pub max_attempts: usize,
    /// Expiry applied when the caller supplies none. `None` keeps such links
    /// alive forever.
    pub default_ttl: Option<chrono::Duration>,
    /// Deadline for every store and counter call made on the request path.
    pub store_timeout: Duration,
}

impl Default for ShortenerConfig {
    fn default() -> Self {
        Self {
            code_length: 7,
            max_attempts: 5,
            default_ttl: Some(chrono::Duration::days(30)),
            store_timeout: Duration::from_secs(1),
        }
    }
}

impl From<&Config> for ShortenerConfig {
    fn from(config: &Config) -> Self {
        Self {
            code_length: config.code_length,
            max_attempts: config.max_generation_attempts,
            // 0 disables the default; an unrepresentable value does too.
            default_ttl: i64::try_from(config.default_expiry_hours)
                .ok()
                .filter(|hours| *hours > 0)
                .and_then(chrono::Duration::try_hours),
            store_timeout: Duration::from_millis(config.store_timeout_ms),
        }
    }
}

/// Input for [`ShortenerService::create`].
#[derive(Debug, Clone, Default)]
pub struct CreateLink {
    pub long_url: String,
    pub original_url: Option<String>,
    pub user_id: Option<String>,
    pub expire_at: Option<DateTime<Utc>>,
}

impl CreateLink {
    pub fn new(long_url: impl Into<String>) -> Self {
        Self {
            long_url: long_url.into(),
            ..Self::default()
        }
    }
}

/// The request-time core of the shortener.
///
/// Holds no per-request state: links live in the [`LinkStore`], counts in
/// the [`VisitCounter`]. Visits are handed to the background worker through
/// `visit_sender` and never awaited on the redirect path.
pub struct ShortenerService {
    store: Arc<dyn LinkStore>,
    counter: Arc<dyn VisitCounter>,
    generator: Arc<dyn CodeGenerator>,
    visit_sender: mpsc::Sender<VisitEvent>,
    config: ShortenerConfig,
}

impl ShortenerService {
    /// Creates a new shortener service.
    pub fn new(
        store: Arc<dyn LinkStore>,
        counter: Arc<dyn VisitCounter>,
        generator: Arc<dyn CodeGenerator>,
        visit_sender: mpsc::Sender<VisitEvent>,
        config: ShortenerConfig,
    ) -> Self {
        Self {
            store,
            counter,
            generator,
            visit_sender,
            config,
        }
    }

    /// Mints a new short link for `request.long_url`.
    ///
    /// # Code Generation
    ///
    /// Draws a fresh code and lets the store's atomic uniqueness check decide:
    /// there is no read-before-write. A conflict, or a code that collides
    /// with a reserved path segment, consumes one attempt. Any other store
    /// failure aborts immediately without retrying.
    ///
    /// # Expiry
    ///
    /// An explicit `expire_at` is stored as given, even when already in the
    /// past. Without one, the configured default TTL applies.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is empty or not an
    /// absolute `http`/`https` URL with a host.
    ///
    /// Returns [`AppError::GenerationExhausted`] if every attempt collided.
    ///
    /// Returns [`AppError::Internal`] on generator or store failure.
    pub async fn create(&self, request: CreateLink) -> Result<LinkEntry, AppError> {
        let CreateLink {
            long_url,
            original_url,
            user_id,
            expire_at,
        } = request;

        validate_long_url(&long_url).map_err(|e| {
            AppError::bad_request(
                format!("Invalid long_url: {}", e),
                json!({ "long_url": long_url }),
            )
        })?;

        let original_url = original_url
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| long_url.clone());

        let expire_at = match expire_at {
            Some(at) => Some(at),
            None => self.default_expiry()?,
        };

        for attempt in 1..=self.config.max_attempts {
            let short_code = self.generator.generate(self.config.code_length)?;

            if is_reserved(&short_code) {
                debug!(short_code = %short_code, attempt, "Generated code is reserved, retrying");
                continue;
            }

            let entry = NewLinkEntry {
                short_code,
                long_url: long_url.clone(),
                original_url: original_url.clone(),
                user_id: user_id.clone(),
                expire_at,
            };

            match self.with_store_deadline(self.store.save(entry)).await {
                Ok(saved) => {
                    metrics::counter!("shortlink_links_created_total").increment(1);
                    info!(
                        short_code = %saved.short_code,
                        long_url = %saved.long_url,
                        attempt,
                        "Short link created"
                    );
                    return Ok(saved);
                }
                Err(StoreError::Conflict(code)) => {
                    metrics::counter!("shortlink_generation_collisions_total").increment(1);
                    debug!(short_code = %code, attempt, "Short code collision");
                }
                Err(e) => return Err(e.into()),
            }
        }

        metrics::counter!("shortlink_generation_exhausted_total").increment(1);
        warn!(
            max_attempts = self.config.max_attempts,
            "Failed to generate a unique short code"
        );
        Err(AppError::exhausted(self.config.max_attempts))
    }

    /// Resolves a short code to its live link and schedules a visit.
    ///
    /// The visit is enqueued without waiting; a full or closed queue drops
    /// it. Counting never affects the returned entry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an empty code.
    ///
    /// Returns [`AppError::NotFound`] if the code is unknown or expired.
    ///
    /// Returns [`AppError::Internal`] on store failure.
    pub async fn resolve(&self, short_code: &str) -> Result<LinkEntry, AppError> {
        if short_code.trim().is_empty() {
            return Err(AppError::bad_request(
                "short_code must not be empty",
                json!({}),
            ));
        }

        let entry = self
            .with_store_deadline(self.store.find_by_short_code(short_code))
            .await
            .map_err(|e| match e {
                StoreError::NotFound => {
                    AppError::not_found("Short link not found", json!({ "short_code": short_code }))
                }
                other => other.into(),
            })?;

        if entry.is_expired() {
            debug!(short_code, expire_at = ?entry.expire_at, "Short link expired");
            return Err(AppError::not_found(
                "Short link not found",
                json!({ "short_code": short_code, "expired": true }),
            ));
        }

        metrics::counter!("shortlink_resolves_total").increment(1);
        self.schedule_visit(&entry.short_code);

        Ok(entry)
    }

    /// Returns the visit count for `short_code`. Unknown codes read as 0.
    ///
    /// Counts lag resolves: a visit becomes visible once the worker has
    /// applied it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the counter fails or times out.
    pub async fn stats(&self, short_code: &str) -> Result<u64, AppError> {
        let deadline = self.config.store_timeout;
        match tokio::time::timeout(deadline, self.counter.get(short_code)).await {
            Ok(result) => result.map_err(AppError::from),
            Err(_) => Err(CounterError::Timeout(deadline).into()),
        }
    }

    fn default_expiry(&self) -> Result<Option<DateTime<Utc>>, AppError> {
        let Some(ttl) = self.config.default_ttl else {
            return Ok(None);
        };

        Utc::now().checked_add_signed(ttl).map(Some).ok_or_else(|| {
            AppError::internal(
                "Default expiry is out of range",
                json!({ "ttl_seconds": ttl.num_seconds() }),
            )
        })
    }

    fn schedule_visit(&self, short_code: &str) {
        match self.visit_sender.try_send(VisitEvent::new(short_code)) {
            Ok(()) => {}
            Err(mpsc::error::TrySendError::Full(event)) => {
                metrics::counter!("shortlink_visits_dropped_total").increment(1);
                warn!(short_code = %event.short_code, "Visit queue full, dropping visit");
            }
            Err(mpsc::error::TrySendError::Closed(event)) => {
                metrics::counter!("shortlink_visits_dropped_total").increment(1);
                warn!(short_code = %event.short_code, "Visit queue closed, dropping visit");
            }
        }
    }

    async fn with_store_deadline<T>(
        &self,
        operation: impl Future<Output = Result<T, StoreError>>,
    ) -> Result<T, StoreError> {
        let deadline = self.config.store_timeout;
        tokio::time::timeout(deadline, operation)
            .await
            .unwrap_or(Err(StoreError::Timeout(deadline)))
    }
}
