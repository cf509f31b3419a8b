//! In-memory visit counter.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;

use crate::domain::repositories::{CounterError, VisitCounter};

/// Reference [`VisitCounter`] backed by a sharded map of atomics.
///
/// Entries are created on first increment. An increment on an existing key
/// only takes the shard's read lock.
#[derive(Debug, Default)]
pub struct MemoryVisitCounter {
    counts: DashMap<String, AtomicU64>,
}

impl MemoryVisitCounter {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VisitCounter for MemoryVisitCounter {
    async fn increment(&self, short_code: &str) -> Result<(), CounterError> {
        if let Some(count) = self.counts.get(short_code) {
            count.fetch_add(1, Ordering::Relaxed);
            return Ok(());
        }

        self.counts
            .entry(short_code.to_string())
            .or_default()
            .fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    async fn get(&self, short_code: &str) -> Result<u64, CounterError> {
        Ok(self
            .counts
            .get(short_code)
            .map(|count| count.load(Ordering::Relaxed))
            .unwrap_or(0))
    }

    async fn ping(&self) -> Result<(), CounterError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_missing_key_reads_zero() {
        let counter = MemoryVisitCounter::new();
        assert_eq!(counter.get("never").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_increment_creates_and_adds() {
        let counter = MemoryVisitCounter::new();
        counter.increment("abc1234").await.unwrap();
        counter.increment("abc1234").await.unwrap();
        counter.increment("other12").await.unwrap();

        assert_eq!(counter.get("abc1234").await.unwrap(), 2);
        assert_eq!(counter.get("other12").await.unwrap(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_increments_are_not_lost() {
        let counter = Arc::new(MemoryVisitCounter::new());
        let mut handles = Vec::new();

        for _ in 0..16 {
            let counter = counter.clone();
            handles.push(tokio::spawn(async move {
                for _ in 0..250 {
                    counter.increment("hot1234").await.unwrap();
                }
            }));
        }

        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(counter.get("hot1234").await.unwrap(), 4000);
    }
}
