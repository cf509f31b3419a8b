//! Redis-backed visit counter.

use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, info};

use crate::domain::repositories::{CounterError, VisitCounter};

impl From<redis::RedisError> for CounterError {
    fn from(e: redis::RedisError) -> Self {
        Self::Backend(e.to_string())
    }
}

/// [`VisitCounter`] storing one integer key per short code.
///
/// `INCR` is atomic on the server, so concurrent increments from any number
/// of service instances are never lost. Uses `ConnectionManager` for
/// connection reuse and transparent reconnects.
pub struct RedisVisitCounter {
    client: ConnectionManager,
    key_prefix: String,
}

impl RedisVisitCounter {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Errors
    ///
    /// Returns [`CounterError::Backend`] if the URL is invalid, the connection
    /// cannot be established, or the PING fails.
    pub async fn connect(redis_url: &str) -> Result<Self, CounterError> {
        let client = Client::open(redis_url)
            .map_err(|e| CounterError::Backend(format!("Failed to create Redis client: {}", e)))?;

        let manager = ConnectionManager::new(client)
            .await
            .map_err(|e| CounterError::Backend(format!("Failed to connect to Redis: {}", e)))?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| CounterError::Backend(format!("Redis PING failed: {}", e)))?;

        info!("Connected to Redis visit counter");

        Ok(Self {
            client: manager,
            key_prefix: "visits:".to_string(),
        })
    }

    /// Constructs the full Redis key with namespace prefix.
    fn build_key(&self, short_code: &str) -> String {
        format!("{}{}", self.key_prefix, short_code)
    }
}

#[async_trait]
impl VisitCounter for RedisVisitCounter {
    async fn increment(&self, short_code: &str) -> Result<(), CounterError> {
        let key = self.build_key(short_code);
        let mut conn = self.client.clone();

        let count: u64 = conn.incr(&key, 1u64).await?;
        debug!("Counter INCR: {} -> {}", short_code, count);
        Ok(())
    }

    async fn get(&self, short_code: &str) -> Result<u64, CounterError> {
        let key = self.build_key(short_code);
        let mut conn = self.client.clone();

        let count: Option<u64> = conn.get(&key).await?;
        Ok(count.unwrap_or(0))
    }

    async fn ping(&self) -> Result<(), CounterError> {
        let mut conn = self.client.clone();
        conn.ping::<()>().await?;
        Ok(())
    }
}
