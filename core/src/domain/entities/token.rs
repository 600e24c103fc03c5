//! Token entities for JWT-based authentication.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Token type discriminator embedded in every payload
///
/// Access and refresh tokens are structurally distinguishable by this
/// field; verification rejects cross-use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    /// Short-lived credential authorizing API requests directly
    Access,
    /// Long-lived credential used solely to obtain new access tokens
    Refresh,
}

/// Decoded contents of a signed token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPayload {
    /// Subject (user ID)
    pub sub: String,

    /// Token type: access or refresh
    #[serde(rename = "type")]
    pub token_type: TokenType,

    /// Token version; must equal the user's current stored version
    pub version: i64,

    /// Issued at timestamp (seconds since epoch)
    pub iat: i64,

    /// Expiration timestamp (seconds since epoch)
    pub exp: i64,

    /// Token unique ID, present only on refresh tokens; used as the
    /// revocation-store key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,

    /// User email, present only on access tokens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Staff flag, present only on access tokens; denormalized so
    /// authorization checks need no user lookup
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_staff: Option<bool>,
}

impl TokenPayload {
    /// Creates a new payload for an access token
    ///
    /// # Arguments
    ///
    /// * `user_id` - The user's UUID
    /// * `email` - The user's email address
    /// * `is_staff` - Whether the user is staff/admin
    /// * `version` - Current token version for the user
    /// * `lifetime` - Access token lifetime
    pub fn new_access_token(
        user_id: Uuid,
        email: &str,
        is_staff: bool,
        version: i64,
        lifetime: Duration,
    ) -> Self {
        let now = Utc::now();
        let expiry = now + lifetime;

        Self {
            sub: user_id.to_string(),
            token_type: TokenType::Access,
            version,
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            jti: None,
            email: Some(email.to_string()),
            is_staff: Some(is_staff),
        }
    }

    /// Creates a new payload for a refresh token
    ///
    /// `token_id` becomes the `jti` claim and keys the active-refresh
    /// record in the revocation store.
    pub fn new_refresh_token(
        user_id: Uuid,
        token_id: Uuid,
        version: i64,
        lifetime: Duration,
    ) -> Self {
        let now = Utc::now();
        let expiry = now + lifetime;

        Self {
            sub: user_id.to_string(),
            token_type: TokenType::Refresh,
            version,
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            jti: Some(token_id.to_string()),
            email: None,
            is_staff: None,
        }
    }

    /// Gets the user ID from the payload
    pub fn user_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }

    /// Checks if the payload has expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// Gets the time remaining until expiration, or zero if expired
    pub fn remaining_lifetime(&self) -> Duration {
        let remaining = self.exp - Utc::now().timestamp();
        if remaining > 0 {
            Duration::seconds(remaining)
        } else {
            Duration::zero()
        }
    }
}

/// Token pair returned to the client
///
/// Access and refresh tokens are never issued individually by the public
/// creation operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// JWT access token
    pub access: String,

    /// JWT refresh token
    pub refresh: String,
}

impl TokenPair {
    /// Creates a new token pair
    pub fn new(access: String, refresh: String) -> Self {
        Self { access, refresh }
    }
}
