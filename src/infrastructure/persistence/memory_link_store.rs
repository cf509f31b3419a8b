//! In-memory implementation of the link store.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::{LinkEntry, NewLinkEntry};
use crate::domain::repositories::{LinkStore, StoreError};

/// Reference [`LinkStore`] keeping entries in a `HashMap` behind a
/// reader/writer lock.
///
/// `save` takes the write lock and checks for the code before inserting, so
/// concurrent saves of one code produce exactly one winner. Reads share the
/// lock and return clones; callers never hold references into the map.
#[derive(Debug, Default)]
pub struct MemoryLinkStore {
    entries: RwLock<HashMap<String, LinkEntry>>,
    next_id: AtomicI64,
    closed: AtomicBool,
}

impl MemoryLinkStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries, expired ones included.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    fn ensure_open(&self) -> Result<(), StoreError> {
        if self.closed.load(Ordering::Acquire) {
            Err(StoreError::Closed)
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl LinkStore for MemoryLinkStore {
    async fn save(&self, entry: NewLinkEntry) -> Result<LinkEntry, StoreError> {
        self.ensure_open()?;

        let mut entries = self.entries.write().await;
        if entries.contains_key(&entry.short_code) {
            return Err(StoreError::Conflict(entry.short_code));
        }

        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        let stored = entry.into_entry(id, Utc::now());
        entries.insert(stored.short_code.clone(), stored.clone());

        debug!(short_code = %stored.short_code, id, "Link saved");
        Ok(stored)
    }

    async fn find_by_short_code(&self, short_code: &str) -> Result<LinkEntry, StoreError> {
        self.ensure_open()?;

        self.entries
            .read()
            .await
            .get(short_code)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.ensure_open()
    }

    async fn close(&self) -> Result<(), StoreError> {
        if !self.closed.swap(true, Ordering::AcqRel) {
            debug!("Memory link store closed");
        }
        Ok(())
    }
}
