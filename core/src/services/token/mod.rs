//! Token service module for JWT management
//!
//! This module handles all token-related operations including:
//! - Access and refresh token issuance (always as a pair)
//! - Verification against the live revocation state
//! - Refresh with near-expiry rotation
//! - Single-token and all-devices revocation

mod codec;
mod config;
mod service;


pub use codec::TokenCodec;
pub use config::TokenServiceConfig;
pub use service::TokenService;
