//! Error type definitions for token and authentication operations
//!
//! The HTTP layer maps each kind to a specific status/message, so the
//! variants must stay distinct and matchable.

use thiserror::Error;

/// Token-related errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    /// Malformed token, wrong signature, or wrong type for the operation.
    /// Not retryable; the caller must re-authenticate.
    #[error("Invalid token")]
    InvalidToken,

    /// Signature valid but past the expiration timestamp.
    #[error("Token expired")]
    ExpiredToken,

    /// Signature and expiry valid, but the token version is outdated or
    /// the refresh token's active record is gone.
    #[error("Token revoked")]
    RevokedToken,

    /// Token could not be signed.
    #[error("Token generation failed")]
    GenerationFailed,
}

/// Authentication-related errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    /// User not found or inactive, independent of token validity.
    #[error("Authentication failed")]
    AuthenticationFailed,

    /// Authenticated but lacking the required staff privilege.
    #[error("Insufficient permissions")]
    InsufficientPermissions,
}
