//! Main authentication orchestrator implementation

use std::sync::Arc;

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::domain::entities::token::{TokenPair, TokenPayload};
use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainError, DomainResult, TokenError};
use crate::repositories::{TokenStore, UserRepository};
use crate::services::token::TokenService;

/// Authentication orchestrator over the token service and user lookup
///
/// Thin coordination layer: every collaborator arrives through the
/// constructor, and all token semantics stay inside [`TokenService`].
pub struct AuthService<U, S>
where
    U: UserRepository,
    S: TokenStore,
{
    /// User lookup collaborator
    user_repository: Arc<U>,
    /// Token service for the JWT lifecycle
    token_service: Arc<TokenService<S>>,
}

impl<U, S> AuthService<U, S>
where
    U: UserRepository,
    S: TokenStore,
{
    /// Create a new authentication orchestrator
    ///
    /// # Arguments
    ///
    /// * `user_repository` - User lookup collaborator
    /// * `token_service` - Token service for JWT management
    pub fn new(user_repository: Arc<U>, token_service: Arc<TokenService<S>>) -> Self {
        Self {
            user_repository,
            token_service,
        }
    }

    /// Look up a user, failing authentication when missing or inactive
    async fn require_active_user(&self, user_id: Uuid) -> DomainResult<User> {
        let user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::Auth(AuthError::AuthenticationFailed))?;

        if !user.is_active {
            warn!(%user_id, "refresh attempt for inactive account");
            return Err(AuthError::AuthenticationFailed.into());
        }

        Ok(user)
    }

    /// Refresh the token pair using a valid refresh token
    ///
    /// Verifies the refresh token, confirms the user still exists and is
    /// active, then delegates to the token service with the email and
    /// staff flag from the lookup, so the new access token reflects the
    /// current account state rather than the claims minted at login.
    ///
    /// # Returns
    ///
    /// * `Ok(TokenPair)` - New access token, possibly rotated refresh token
    /// * `Err(TokenError)` - Invalid, expired, or revoked refresh token
    /// * `Err(AuthError::AuthenticationFailed)` - User missing or inactive
    pub async fn refresh_tokens(&self, refresh_token: &str) -> DomainResult<TokenPair> {
        let payload = self.token_service.verify_refresh_token(refresh_token).await?;

        let user_id = payload
            .user_id()
            .map_err(|_| DomainError::Token(TokenError::InvalidToken))?;
        let user = self.require_active_user(user_id).await?;

        debug!(%user_id, "refreshing token pair");

        self.token_service
            .refresh_token_pair(refresh_token, &user.email, user.is_staff)
            .await
    }

    /// Logout from the current device by revoking the refresh token
    pub async fn logout(&self, refresh_token: &str) -> DomainResult<()> {
        let payload = self.token_service.verify_refresh_token(refresh_token).await?;

        if let Some(token_id) = payload.jti.as_deref() {
            self.token_service.revoke_refresh_token(token_id).await?;
        }

        info!(user_id = %payload.sub, "user logged out");
        Ok(())
    }

    /// Logout from all devices by invalidating every token for the user
    ///
    /// Requires no token: the caller is assumed already authenticated via
    /// an access-token check at the boundary.
    pub async fn logout_all_devices(&self, user_id: Uuid) -> DomainResult<()> {
        self.token_service.revoke_all_user_tokens(user_id).await?;
        info!(%user_id, "user logged out from all devices");
        Ok(())
    }

    /// Authenticate a request by its access token
    pub async fn authenticate(&self, access_token: &str) -> DomainResult<TokenPayload> {
        self.token_service.verify_access_token(access_token).await
    }

    /// Authenticate a request and require the staff privilege
    ///
    /// Uses the denormalized `is_staff` claim; no user lookup is made.
    pub async fn authenticate_staff(&self, access_token: &str) -> DomainResult<TokenPayload> {
        let payload = self.authenticate(access_token).await?;

        if payload.is_staff != Some(true) {
            return Err(AuthError::InsufficientPermissions.into());
        }

        Ok(payload)
    }
}
