//! Configuration for the token service

use chrono::Duration;
use jsonwebtoken::Algorithm;

use ag_shared::config::JwtConfig;

use crate::errors::DomainError;

/// Configuration for the token service
///
/// Lifetimes are kept in seconds to match the deployment configuration;
/// the accessors convert to `chrono::Duration` for arithmetic.
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret (HMAC family)
    pub jwt_secret: String,
    /// JWT signing algorithm
    pub algorithm: Algorithm,
    /// Access token expiry in seconds
    pub access_token_expiry: i64,
    /// Refresh token expiry in seconds
    pub refresh_token_expiry: i64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "development-secret-change-in-production".to_string(),
            algorithm: Algorithm::HS256,
            access_token_expiry: 900,      // 15 minutes
            refresh_token_expiry: 604800,  // 7 days
        }
    }
}

impl TokenServiceConfig {
    /// Build from the shared JWT configuration
    pub fn from_jwt_config(config: &JwtConfig) -> Result<Self, DomainError> {
        let algorithm = config
            .algorithm
            .parse::<Algorithm>()
            .map_err(|_| DomainError::Internal {
                message: format!("Unsupported JWT algorithm: {}", config.algorithm),
            })?;

        Ok(Self {
            jwt_secret: config.secret.clone(),
            algorithm,
            access_token_expiry: config.access_token_expiry,
            refresh_token_expiry: config.refresh_token_expiry,
        })
    }

    /// Access token lifetime
    pub fn access_token_lifetime(&self) -> Duration {
        Duration::seconds(self.access_token_expiry)
    }

    /// Refresh token lifetime
    pub fn refresh_token_lifetime(&self) -> Duration {
        Duration::seconds(self.refresh_token_expiry)
    }

    /// Remaining-lifetime threshold below which a refresh token is rotated
    ///
    /// Twice the access lifetime: a client that refreshes at least once per
    /// access-token lifetime is always handed a new refresh token before
    /// the old one can expire under it.
    pub fn rotation_threshold(&self) -> Duration {
        Duration::seconds(2 * self.access_token_expiry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TokenServiceConfig::default();
        assert_eq!(config.algorithm, Algorithm::HS256);
        assert_eq!(config.access_token_lifetime(), Duration::minutes(15));
        assert_eq!(config.refresh_token_lifetime(), Duration::days(7));
        assert_eq!(config.rotation_threshold(), Duration::minutes(30));
    }

    #[test]
    fn test_from_jwt_config() {
        let jwt = JwtConfig::new("secret").with_access_expiry_minutes(5);
        let config = TokenServiceConfig::from_jwt_config(&jwt).unwrap();

        assert_eq!(config.jwt_secret, "secret");
        assert_eq!(config.algorithm, Algorithm::HS256);
        assert_eq!(config.access_token_expiry, 300);
    }

    #[test]
    fn test_from_jwt_config_rejects_unknown_algorithm() {
        let mut jwt = JwtConfig::new("secret");
        jwt.algorithm = "none".to_string();

        assert!(TokenServiceConfig::from_jwt_config(&jwt).is_err());
    }
}
