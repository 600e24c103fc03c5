//! Store trait defining the contract for the external revocation store.

use async_trait::async_trait;

use crate::errors::DomainError;

/// Key-value store contract backing token versioning and revocation
///
/// The token service exclusively owns the keyspace under its reserved
/// prefixes; no other component writes those keys. Every method is a single
/// atomic store operation, so no client-side locking or compare-and-swap is
/// needed. Implementations must not retry internally; transient errors
/// propagate unchanged to the caller.
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Get the value for a key
    ///
    /// # Returns
    /// * `Ok(Some(value))` - Key exists
    /// * `Ok(None)` - Key absent or expired
    /// * `Err(DomainError)` - Store error occurred
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError>;

    /// Set a value with a time-to-live
    ///
    /// The key expires automatically after `ttl_seconds`.
    async fn set_with_expiry(
        &self,
        key: &str,
        value: &str,
        ttl_seconds: u64,
    ) -> Result<(), DomainError>;

    /// Atomically increment an integer counter
    ///
    /// A missing key counts as 0, so the first increment returns 1. The
    /// increment must be atomic at the store level (one round trip) to
    /// avoid lost updates under concurrent calls.
    ///
    /// # Returns
    /// * `Ok(i64)` - The new counter value
    async fn increment(&self, key: &str) -> Result<i64, DomainError>;

    /// Check whether a key exists
    ///
    /// Expired keys do not exist.
    async fn exists(&self, key: &str) -> Result<bool, DomainError>;

    /// Delete a key
    ///
    /// Idempotent: deleting a nonexistent key is not an error.
    ///
    /// # Returns
    /// * `Ok(true)` - Key was deleted
    /// * `Ok(false)` - Key was not present
    async fn delete(&self, key: &str) -> Result<bool, DomainError>;
}
