/**
 * Credential Issuer
 *
 * Registration and login. Both operations end by issuing a session token
 * for the user, so a client is signed in right after registering.
 *
 * Password hashing and verification are moved onto the blocking thread pool
 * so a slow bcrypt round never stalls the async runtime. Login runs one
 * bcrypt round whether or not the email is known.
 */

use std::sync::Arc;

use thiserror::Error;

use crate::backend::auth::handlers::types::AuthResponse;
use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::sessions::SessionKeys;
use crate::backend::auth::users::UserStore;
use crate::backend::store::StoreError;
use crate::shared::SharedError;

/// Errors raised while registering or logging in
#[derive(Debug, Error)]
pub enum AuthError {
    /// Request fields failed validation
    #[error(transparent)]
    Validation(#[from] SharedError),

    /// A user with this email already exists
    #[error("Email already registered")]
    EmailTaken,

    /// Unknown email or wrong password; the two are indistinguishable
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Password hashing failed: {0}")]
    Hashing(#[from] bcrypt::BcryptError),

    #[error("Token signing failed: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Registers users and exchanges credentials for session tokens
pub struct CredentialIssuer {
    users: Arc<dyn UserStore>,
    hasher: PasswordHasher,
    sessions: Arc<SessionKeys>,
}

impl CredentialIssuer {
    pub fn new(users: Arc<dyn UserStore>, hasher: PasswordHasher, sessions: Arc<SessionKeys>) -> Self {
        Self {
            users,
            hasher,
            sessions,
        }
    }

    /// Create a user and sign them in
    ///
    /// # Errors
    ///
    /// `AuthError::EmailTaken` if a user with this exact email exists,
    /// including when a concurrent registration wins the race between the
    /// existence check and the insert.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> Result<AuthResponse, AuthError> {
        if self.users.find_by_email(email).await?.is_some() {
            tracing::warn!("Registration rejected, email already exists: {}", email);
            return Err(AuthError::EmailTaken);
        }

        let hasher = self.hasher;
        let password = password.to_owned();
        let hash = tokio::task::spawn_blocking(move || hasher.hash(&password)).await??;

        let user = match self.users.create(email, &hash, display_name).await {
            Ok(user) => user,
            Err(StoreError::AlreadyExists) => {
                tracing::warn!("Registration lost insert race for: {}", email);
                return Err(AuthError::EmailTaken);
            }
            Err(e) => return Err(e.into()),
        };

        let token = self.sessions.issue(user.id)?;
        tracing::info!("User registered successfully: {} ({})", user.display_name, user.email);

        Ok(AuthResponse { token, user })
    }

    /// Verify credentials and sign the user in
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, AuthError> {
        let hasher = self.hasher;
        let password = password.to_owned();

        let Some(user) = self.users.find_by_email(email).await? else {
            // Unknown emails pay the same bcrypt cost as a failed check.
            tokio::task::spawn_blocking(move || hasher.hash(&password)).await??;
            tracing::warn!("User not found: {}", email);
            return Err(AuthError::InvalidCredentials);
        };

        let hash = user.hash.clone();
        let valid = tokio::task::spawn_blocking(move || hasher.verify(&password, &hash)).await?;

        if !valid {
            tracing::warn!("Invalid password for user: {}", email);
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.sessions.issue(user.id)?;
        tracing::info!("User logged in successfully: {}", user.email);

        Ok(AuthResponse {
            token,
            user: user.profile(),
        })
    }
}
