//! Domain-specific error types and error handling.

mod types;

// Re-export all error types
pub use types::{AuthError, TokenError};

use thiserror::Error;

/// Core domain errors (general purpose)
///
/// Every failure surfaces to the immediate caller as a distinct, matchable
/// kind; nothing is silently coerced into a generic failure.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Store error: {message}")]
    Store { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_error_bridges_into_domain_error() {
        let err: DomainError = TokenError::RevokedToken.into();
        assert!(matches!(err, DomainError::Token(TokenError::RevokedToken)));
    }

    #[test]
    fn test_auth_error_bridges_into_domain_error() {
        let err: DomainError = AuthError::AuthenticationFailed.into();
        assert!(matches!(
            err,
            DomainError::Auth(AuthError::AuthenticationFailed)
        ));
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::Store {
            message: "connection refused".to_string(),
        };
        assert_eq!(err.to_string(), "Store error: connection refused");

        let err: DomainError = TokenError::ExpiredToken.into();
        assert_eq!(err.to_string(), "Token expired");
    }
}
