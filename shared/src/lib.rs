//! # AuthGate Shared
//!
//! Configuration types shared across the AuthGate backend crates.
//! Configuration is loaded once at process start and passed to services
//! by value; there is no global mutable state.

pub mod config;
pub mod logging;

pub use config::{AppConfig, CacheConfig, Environment, JwtConfig, LoggingConfig};
pub use logging::init_logging;
