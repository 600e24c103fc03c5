//! # Infrastructure Layer
//!
//! Concrete implementations of the external collaborators the AuthGate
//! core depends on. Today that is a single concern: the Redis-backed
//! revocation store holding token version counters and active refresh
//! token records.

pub mod cache;

pub use cache::{RedisClient, RedisTokenStore};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Redis store error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
