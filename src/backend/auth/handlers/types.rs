/**
 * Authentication Handler Types
 *
 * Request and response bodies of the register and login endpoints.
 * Request fields are optional at the serde layer so a missing field comes
 * back as a 400 naming the field instead of a generic body rejection.
 */

use serde::{Deserialize, Serialize};

use crate::backend::auth::users::UserProfile;
use crate::shared::SharedError;

/// Register request
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub display_name: Option<String>,
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Validated registration fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub display_name: String,
}

/// Validated login fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Auth response
///
/// Returned by register and login. Contains the JWT token and the public
/// user profile.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AuthResponse {
    /// JWT token for authentication
    pub token: String,
    /// User information (without the password hash)
    pub user: UserProfile,
}

impl RegisterRequest {
    /// Email must contain '@'; password and display name must be non-empty
    pub fn validate(self) -> Result<Registration, SharedError> {
        let email = SharedError::require("email", self.email)?;
        if !email.contains('@') {
            return Err(SharedError::validation("email", "Invalid email format"));
        }

        Ok(Registration {
            email,
            password: SharedError::require("password", self.password)?,
            display_name: SharedError::require("displayName", self.display_name)?,
        })
    }
}

impl LoginRequest {
    pub fn validate(self) -> Result<Credentials, SharedError> {
        Ok(Credentials {
            email: SharedError::require("email", self.email)?,
            password: SharedError::require("password", self.password)?,
        })
    }
}
