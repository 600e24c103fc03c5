//! # AuthGate Core
//!
//! Core domain layer for the AuthGate backend. This crate contains the
//! token lifecycle services (issuance, verification, rotation, revocation),
//! the domain entities they operate on, the store and repository contracts
//! they depend on, and the error taxonomy surfaced to callers.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
