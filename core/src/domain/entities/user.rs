//! User entity as returned by the user-lookup collaborator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered user, as seen by the token lifecycle services
///
/// The token core does not own user management; it only consumes these
/// fields when refreshing tokens so that access-token claims reflect the
/// current account state rather than stale claims from the original token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Email address, denormalized into access tokens
    pub email: String,

    /// Whether the user is staff/admin
    pub is_staff: bool,

    /// Whether the account is active; inactive users cannot refresh tokens
    pub is_active: bool,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new active, non-staff user
    pub fn new(email: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email,
            is_staff: false,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Grants staff privileges
    pub fn grant_staff(&mut self) {
        self.is_staff = true;
        self.updated_at = Utc::now();
    }

    /// Revokes staff privileges
    pub fn revoke_staff(&mut self) {
        self.is_staff = false;
        self.updated_at = Utc::now();
    }

    /// Deactivates the account
    pub fn deactivate(&mut self) {
        self.is_active = false;
        self.updated_at = Utc::now();
    }

    /// Reactivates the account
    pub fn activate(&mut self) {
        self.is_active = true;
        self.updated_at = Utc::now();
    }
}
