//! Redis revocation store implementation
//!
//! Provides:
//! - A thin async Redis client over a multiplexed connection
//! - The [`RedisTokenStore`] adapter implementing the core's store contract

pub mod redis_client;
pub mod token_store;

pub use redis_client::RedisClient;
pub use token_store::RedisTokenStore;

#[cfg(test)]
mod tests;
