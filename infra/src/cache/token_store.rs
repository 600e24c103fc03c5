//! Redis-backed implementation of the core `TokenStore` trait
//!
//! Bridges the domain's key-value contract onto `RedisClient`, converting
//! infrastructure errors into `DomainError::Store` so the core crate never
//! sees redis types.

use async_trait::async_trait;

use ag_core::errors::DomainError;
use ag_core::repositories::TokenStore;

use super::redis_client::RedisClient;

/// Token store backed by Redis
#[derive(Clone)]
pub struct RedisTokenStore {
    client: RedisClient,
}

impl RedisTokenStore {
    pub fn new(client: RedisClient) -> Self {
        Self { client }
    }
}

fn store_error(e: crate::InfrastructureError) -> DomainError {
    DomainError::Store {
        message: e.to_string(),
    }
}

#[async_trait]
impl TokenStore for RedisTokenStore {
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        self.client.get(key).await.map_err(store_error)
    }

    async fn set_with_expiry(
        &self,
        key: &str,
        value: &str,
        ttl_seconds: u64,
    ) -> Result<(), DomainError> {
        self.client
            .set_with_expiry(key, value, ttl_seconds)
            .await
            .map_err(store_error)
    }

    async fn increment(&self, key: &str) -> Result<i64, DomainError> {
        self.client.increment(key).await.map_err(store_error)
    }

    async fn exists(&self, key: &str) -> Result<bool, DomainError> {
        self.client.exists(key).await.map_err(store_error)
    }

    async fn delete(&self, key: &str) -> Result<bool, DomainError> {
        self.client.delete(key).await.map_err(store_error)
    }
}
