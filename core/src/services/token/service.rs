//! Main token service implementation

use tracing::{debug, info};
use uuid::Uuid;

use crate::domain::entities::token::{TokenPair, TokenPayload, TokenType};
use crate::errors::{DomainError, DomainResult, TokenError};
use crate::repositories::TokenStore;

use super::codec::TokenCodec;
use super::config::TokenServiceConfig;

/// Store key prefix for per-user token version counters
const TOKEN_VERSION_PREFIX: &str = "jwt:version:";

/// Store key prefix for active refresh token records
const REFRESH_TOKEN_PREFIX: &str = "jwt:refresh:";

/// Service for issuing, verifying, rotating and revoking JWT tokens
///
/// All authoritative revocation state lives in the external store:
/// - `jwt:version:{user_id}` holds a monotonically increasing counter; a
///   token is valid only while its embedded version equals it, so one
///   atomic increment invalidates every outstanding token for the user.
/// - `jwt:refresh:{jti}` exists while a refresh token is active; explicit
///   deletion and natural TTL expiry are indistinguishable, both meaning
///   revoked.
///
/// Version and record checks are fresh point reads on every verification;
/// there is no caching layer, and no operation retries internally.
pub struct TokenService<S: TokenStore> {
    store: S,
    config: TokenServiceConfig,
    codec: TokenCodec,
}

impl<S: TokenStore> TokenService<S> {
    /// Creates a new token service instance
    ///
    /// # Arguments
    ///
    /// * `store` - Revocation store holding version counters and refresh records
    /// * `config` - Token service configuration
    pub fn new(store: S, config: TokenServiceConfig) -> Self {
        let codec = TokenCodec::new(&config.jwt_secret, config.algorithm);
        Self {
            store,
            config,
            codec,
        }
    }

    fn version_key(user_id: Uuid) -> String {
        format!("{}{}", TOKEN_VERSION_PREFIX, user_id)
    }

    fn refresh_key(token_id: &str) -> String {
        format!("{}{}", REFRESH_TOKEN_PREFIX, token_id)
    }

    /// Reads the current token version for a user (0 if never bumped)
    async fn current_token_version(&self, user_id: Uuid) -> DomainResult<i64> {
        match self.store.get(&Self::version_key(user_id)).await? {
            Some(raw) => raw.parse::<i64>().map_err(|e| DomainError::Internal {
                message: format!("Corrupt token version for user {}: {}", user_id, e),
            }),
            None => Ok(0),
        }
    }

    /// Builds and signs an access token
    fn issue_access_token(
        &self,
        user_id: Uuid,
        email: &str,
        is_staff: bool,
        version: i64,
    ) -> DomainResult<String> {
        let payload = TokenPayload::new_access_token(
            user_id,
            email,
            is_staff,
            version,
            self.config.access_token_lifetime(),
        );
        self.codec.encode(&payload)
    }

    /// Builds and signs a refresh token, persisting its active record
    async fn issue_refresh_token(&self, user_id: Uuid, version: i64) -> DomainResult<String> {
        let token_id = Uuid::new_v4();
        let payload = TokenPayload::new_refresh_token(
            user_id,
            token_id,
            version,
            self.config.refresh_token_lifetime(),
        );
        let token = self.codec.encode(&payload)?;

        // Existence of this record is what keeps the token live; its TTL
        // matches the token's own lifetime.
        self.store
            .set_with_expiry(
                &Self::refresh_key(&token_id.to_string()),
                &user_id.to_string(),
                self.config.refresh_token_expiry as u64,
            )
            .await?;

        Ok(token)
    }

    /// Creates a new access/refresh token pair for a user
    ///
    /// Works with no prior state: a user whose version key is absent gets
    /// version 0 tokens.
    ///
    /// # Arguments
    ///
    /// * `user_id` - The user's UUID
    /// * `email` - User email, denormalized into the access token
    /// * `is_staff` - Staff flag, denormalized into the access token
    ///
    /// # Returns
    ///
    /// * `Ok(TokenPair)` - Both tokens; never issued individually
    /// * `Err(DomainError)` - Signing or store failure
    pub async fn create_token_pair(
        &self,
        user_id: Uuid,
        email: &str,
        is_staff: bool,
    ) -> DomainResult<TokenPair> {
        let version = self.current_token_version(user_id).await?;
        let access = self.issue_access_token(user_id, email, is_staff, version)?;
        let refresh = self.issue_refresh_token(user_id, version).await?;

        debug!(%user_id, version, "issued token pair");

        Ok(TokenPair::new(access, refresh))
    }

    /// Verifies an access token and returns its payload
    ///
    /// # Returns
    ///
    /// * `Ok(TokenPayload)` - Token is valid and current
    /// * `Err(TokenError::InvalidToken)` - Malformed, bad signature, or not
    ///   an access token
    /// * `Err(TokenError::ExpiredToken)` - Past its expiry
    /// * `Err(TokenError::RevokedToken)` - Version no longer current
    pub async fn verify_access_token(&self, token: &str) -> DomainResult<TokenPayload> {
        let payload = self.codec.decode(token)?;

        if payload.token_type != TokenType::Access {
            return Err(TokenError::InvalidToken.into());
        }

        let user_id = payload
            .user_id()
            .map_err(|_| DomainError::Token(TokenError::InvalidToken))?;
        let current_version = self.current_token_version(user_id).await?;

        if payload.version != current_version {
            return Err(TokenError::RevokedToken.into());
        }

        Ok(payload)
    }

    /// Verifies a refresh token and returns its payload
    ///
    /// On top of the access-token checks, the refresh token's active record
    /// must still exist in the store. Explicit revocation and natural TTL
    /// expiry of the record are treated identically; the store is the
    /// single source of truth.
    pub async fn verify_refresh_token(&self, token: &str) -> DomainResult<TokenPayload> {
        let payload = self.codec.decode(token)?;

        if payload.token_type != TokenType::Refresh {
            return Err(TokenError::InvalidToken.into());
        }

        let user_id = payload
            .user_id()
            .map_err(|_| DomainError::Token(TokenError::InvalidToken))?;
        let current_version = self.current_token_version(user_id).await?;

        if payload.version != current_version {
            return Err(TokenError::RevokedToken.into());
        }

        let token_id = match payload.jti.as_deref() {
            Some(token_id) => token_id,
            None => return Err(TokenError::RevokedToken.into()),
        };
        if !self.store.exists(&Self::refresh_key(token_id)).await? {
            return Err(TokenError::RevokedToken.into());
        }

        Ok(payload)
    }

    /// Issues a new access token against a valid refresh token
    ///
    /// The refresh token itself is rotated only when its remaining lifetime
    /// drops below twice the access lifetime: the common case returns the
    /// original refresh string unchanged, while a periodically refreshing
    /// client is never stranded with a refresh token that expires before
    /// it can be rotated again.
    ///
    /// # Arguments
    ///
    /// * `refresh_token` - Current refresh token
    /// * `email` - Current user email (from the user lookup, not the token)
    /// * `is_staff` - Current staff flag (from the user lookup)
    pub async fn refresh_token_pair(
        &self,
        refresh_token: &str,
        email: &str,
        is_staff: bool,
    ) -> DomainResult<TokenPair> {
        let payload = self.verify_refresh_token(refresh_token).await?;

        let user_id = payload
            .user_id()
            .map_err(|_| DomainError::Token(TokenError::InvalidToken))?;
        let version = self.current_token_version(user_id).await?;
        let access = self.issue_access_token(user_id, email, is_staff, version)?;

        if payload.remaining_lifetime() < self.config.rotation_threshold() {
            // Retire the old token before issuing its replacement
            if let Some(token_id) = payload.jti.as_deref() {
                self.revoke_refresh_token(token_id).await?;
            }

            let refresh = self.issue_refresh_token(user_id, version).await?;
            info!(%user_id, "rotated refresh token nearing expiry");
            return Ok(TokenPair::new(access, refresh));
        }

        Ok(TokenPair::new(access, refresh_token.to_string()))
    }

    /// Revokes a specific refresh token (single-device logout)
    ///
    /// Idempotent: revoking an unknown or already-revoked token id succeeds.
    pub async fn revoke_refresh_token(&self, token_id: &str) -> DomainResult<()> {
        let deleted = self.store.delete(&Self::refresh_key(token_id)).await?;
        debug!(token_id, deleted, "revoked refresh token");
        Ok(())
    }

    /// Revokes all tokens for a user (all-devices logout)
    ///
    /// One atomic increment of the version counter; every previously issued
    /// access and refresh token stops verifying immediately, without
    /// enumerating per-token records.
    ///
    /// # Returns
    ///
    /// * `Ok(i64)` - The new token version
    pub async fn revoke_all_user_tokens(&self, user_id: Uuid) -> DomainResult<i64> {
        let version = self.store.increment(&Self::version_key(user_id)).await?;
        info!(%user_id, version, "revoked all tokens for user");
        Ok(version)
    }
}
