/**
 * User Model and Credential Store
 *
 * This module defines the user record and the `UserStore` trait, the only
 * interface through which authentication code touches persistent storage.
 * Implementations live in `backend::store`.
 */

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::backend::store::StoreError;

/// User struct representing a row of the `users` table
///
/// Carries the password hash, so it is deliberately not `Serialize`.
/// Use [`User::profile`] for anything sent to a client.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// User email address, unique and case-sensitive
    pub email: String,
    /// Hashed password (bcrypt)
    pub hash: String,
    /// Name shown in the client
    pub display_name: String,
}

impl User {
    /// Public view of this user (no hash)
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id,
            email: self.email.clone(),
            display_name: self.display_name.clone(),
        }
    }
}

/// User information that is safe to return to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// User's unique ID
    pub id: Uuid,
    /// User's email address
    pub email: String,
    /// User's display name
    pub display_name: String,
}

/// Lookup and creation of user records
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Get user by email, `None` if no user has that exact email
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Get user by ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError>;

    /// Create a new user
    ///
    /// # Errors
    ///
    /// Returns `StoreError::AlreadyExists` if the email is already taken.
    async fn create(
        &self,
        email: &str,
        hash: &str,
        display_name: &str,
    ) -> Result<UserProfile, StoreError>;
}
