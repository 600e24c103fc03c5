//! Mock implementation of TokenStore for testing

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::errors::DomainError;

use super::r#trait::TokenStore;

/// A stored entry with an optional expiry
#[derive(Debug, Clone)]
struct Entry {
    value: String,
    expires_at: Option<DateTime<Utc>>,
}

impl Entry {
    fn is_expired(&self) -> bool {
        matches!(self.expires_at, Some(at) if Utc::now() >= at)
    }
}

/// In-memory token store for testing
///
/// Honors TTL semantics: expired entries behave exactly like deleted ones.
/// Clones share the underlying map.
#[derive(Clone)]
pub struct MockTokenStore {
    entries: Arc<RwLock<HashMap<String, Entry>>>,
}

impl MockTokenStore {
    /// Create a new empty mock store
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Force a key to expire immediately, simulating natural TTL expiry
    pub async fn expire_now(&self, key: &str) {
        let mut entries = self.entries.write().await;
        if let Some(entry) = entries.get_mut(key) {
            entry.expires_at = Some(Utc::now() - Duration::seconds(1));
        }
    }

    /// Number of live (non-expired) entries
    pub async fn len(&self) -> usize {
        let entries = self.entries.read().await;
        entries.values().filter(|e| !e.is_expired()).count()
    }
}

impl Default for MockTokenStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenStore for MockTokenStore {
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        let entries = self.entries.read().await;
        Ok(entries
            .get(key)
            .filter(|entry| !entry.is_expired())
            .map(|entry| entry.value.clone()))
    }

    async fn set_with_expiry(
        &self,
        key: &str,
        value: &str,
        ttl_seconds: u64,
    ) -> Result<(), DomainError> {
        let mut entries = self.entries.write().await;
        entries.insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                expires_at: Some(Utc::now() + Duration::seconds(ttl_seconds as i64)),
            },
        );
        Ok(())
    }

    async fn increment(&self, key: &str) -> Result<i64, DomainError> {
        let mut entries = self.entries.write().await;
        let current = entries
            .get(key)
            .filter(|entry| !entry.is_expired())
            .map(|entry| entry.value.parse::<i64>())
            .transpose()
            .map_err(|e| DomainError::Internal {
                message: format!("Counter is not an integer: {}", e),
            })?
            .unwrap_or(0);

        let next = current + 1;
        entries.insert(
            key.to_string(),
            Entry {
                value: next.to_string(),
                expires_at: None,
            },
        );
        Ok(next)
    }

    async fn exists(&self, key: &str) -> Result<bool, DomainError> {
        let entries = self.entries.read().await;
        Ok(entries
            .get(key)
            .map(|entry| !entry.is_expired())
            .unwrap_or(false))
    }

    async fn delete(&self, key: &str) -> Result<bool, DomainError> {
        let mut entries = self.entries.write().await;
        Ok(entries.remove(key).map(|e| !e.is_expired()).unwrap_or(false))
    }
}
