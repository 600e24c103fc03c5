//! Redis cache client implementation
//!
//! Thin async wrapper over a multiplexed Redis connection, exposing the
//! operations the revocation store needs: get, set with expiry, atomic
//! increment, existence check, and delete.
//!
//! Operations are not retried here; transient errors propagate unchanged
//! to the caller, and connection recovery is left to the redis client and
//! the deployment's own policy.

use redis::{aio::MultiplexedConnection, AsyncCommands, Client};
use tracing::{debug, error, info};

use ag_shared::config::CacheConfig;

use crate::InfrastructureError;

/// Async Redis client over a multiplexed connection
///
/// Cloning is cheap; clones share the underlying connection.
#[derive(Clone)]
pub struct RedisClient {
    connection: MultiplexedConnection,
}

impl RedisClient {
    /// Create a new Redis client
    ///
    /// # Arguments
    /// * `config` - Cache configuration settings
    ///
    /// # Returns
    /// * `Result<Self, InfrastructureError>` - Redis client or error
    pub async fn new(config: CacheConfig) -> Result<Self, InfrastructureError> {
        info!("Connecting to Redis at {}", mask_url(&config.url));

        let client = Client::open(config.url.as_str()).map_err(|e| {
            error!("Failed to parse Redis URL: {}", e);
            InfrastructureError::Config(format!("Invalid Redis URL: {}", e))
        })?;

        let connection = client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| {
                error!("Failed to connect to Redis: {}", e);
                InfrastructureError::Cache(e)
            })?;

        info!("Redis connection established");

        Ok(Self { connection })
    }

    /// Get a value by key
    ///
    /// # Returns
    /// * `Ok(Some(value))` - Key exists
    /// * `Ok(None)` - Key absent or expired
    pub async fn get(&self, key: &str) -> Result<Option<String>, InfrastructureError> {
        let mut conn = self.connection.clone();
        let value: Option<String> = conn.get(key).await?;
        debug!("GET '{}' -> present: {}", key, value.is_some());
        Ok(value)
    }

    /// Set a value with an expiration time
    pub async fn set_with_expiry(
        &self,
        key: &str,
        value: &str,
        expiry_seconds: u64,
    ) -> Result<(), InfrastructureError> {
        let mut conn = self.connection.clone();
        conn.set_ex::<_, _, ()>(key, value, expiry_seconds).await?;
        debug!("SETEX '{}' ttl {}s", key, expiry_seconds);
        Ok(())
    }

    /// Atomically increment an integer counter
    ///
    /// A missing key counts as 0, per Redis INCR semantics.
    ///
    /// # Returns
    /// * `Ok(i64)` - New counter value
    pub async fn increment(&self, key: &str) -> Result<i64, InfrastructureError> {
        let mut conn = self.connection.clone();
        let count: i64 = conn.incr(key, 1).await?;
        debug!("INCR '{}' -> {}", key, count);
        Ok(count)
    }

    /// Check whether a key exists
    pub async fn exists(&self, key: &str) -> Result<bool, InfrastructureError> {
        let mut conn = self.connection.clone();
        let exists: bool = conn.exists(key).await?;
        debug!("EXISTS '{}' -> {}", key, exists);
        Ok(exists)
    }

    /// Delete a key
    ///
    /// # Returns
    /// * `Ok(true)` - Key was deleted
    /// * `Ok(false)` - Key was not present
    pub async fn delete(&self, key: &str) -> Result<bool, InfrastructureError> {
        let mut conn = self.connection.clone();
        let deleted: u32 = conn.del(key).await?;
        debug!("DEL '{}' -> deleted: {}", key, deleted > 0);
        Ok(deleted > 0)
    }

    /// Check connectivity with a PING
    pub async fn health_check(&self) -> Result<bool, InfrastructureError> {
        let mut conn = self.connection.clone();
        let response: String = redis::cmd("PING").query_async(&mut conn).await?;
        Ok(response == "PONG")
    }
}

/// Mask credentials in a Redis URL for logging
pub(crate) fn mask_url(url: &str) -> String {
    if let Some(at_pos) = url.find('@') {
        if let Some(proto_end) = url.find("://") {
            let proto = &url[..proto_end + 3];
            let host_part = &url[at_pos..];
            return format!("{}****{}", proto, host_part);
        }
    }
    url.to_string()
}
