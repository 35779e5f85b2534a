/**
 * Backend Error Types
 *
 * This module defines the error taxonomy of the backend server. Every
 * handler and middleware returns `BackendError`, which maps onto an HTTP
 * status code and a client-safe message.
 *
 * # Error Categories
 *
 * - Validation (400) - missing or malformed request fields
 * - Conflict (400) - email already registered
 * - Unauthorized (401) - bad login credentials
 * - Unauthenticated (401) - missing, invalid or expired token
 * - NotFound (404) - target row or route does not exist
 * - Upstream (502) - the character API failed
 * - Database / Internal (500) - details are logged, never returned
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::SharedError;

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use character_favorites::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::unauthenticated("Token expired");
/// assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Validation error raised on client input
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// A unique resource (the user's email) already exists
    #[error("Conflict: {message}")]
    Conflict {
        /// Human-readable error message
        message: String,
    },

    /// Login credentials did not match a user
    #[error("Invalid email or password")]
    Unauthorized,

    /// Request lacks a valid identity token
    #[error("Unauthenticated: {reason}")]
    Unauthenticated {
        /// Why the token was rejected
        reason: String,
    },

    /// Requested resource does not exist (or is not visible to the caller)
    #[error("Not found: {message}")]
    NotFound {
        /// Human-readable error message
        message: String,
    },

    /// The external character API failed
    #[error("Upstream error: {message}")]
    UpstreamError {
        /// Human-readable error message
        message: String,
    },

    /// Relational store error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Anything else that went wrong on the server
    #[error("Internal error: {message}")]
    Internal {
        /// Human-readable error message
        message: String,
    },
}

impl BackendError {
    /// Create a validation error for a request field
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SharedError(SharedError::validation(field, message))
    }

    /// Create a conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Create an unauthenticated error with the rejection reason
    pub fn unauthenticated(reason: impl Into<String>) -> Self {
        Self::Unauthenticated {
            reason: reason.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create an upstream error
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::UpstreamError {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `SharedError` / `Conflict` - 400 Bad Request
    /// - `Unauthorized` / `Unauthenticated` - 401 Unauthorized
    /// - `NotFound` - 404 Not Found
    /// - `UpstreamError` - 502 Bad Gateway
    /// - `Database` / `Internal` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::SharedError(_) | Self::Conflict { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized | Self::Unauthenticated { .. } => StatusCode::UNAUTHORIZED,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::UpstreamError { .. } => StatusCode::BAD_GATEWAY,
            Self::Database(_) | Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the message returned to the client
    ///
    /// Server-side failures are reduced to a generic message; their details
    /// only go to the logs.
    pub fn message(&self) -> String {
        match self {
            Self::Database(_) | Self::Internal { .. } => "Internal server error".to_string(),
            Self::SharedError(err) => err.to_string(),
            Self::Conflict { message } => message.clone(),
            Self::Unauthorized => self.to_string(),
            Self::Unauthenticated { reason } => reason.clone(),
            Self::NotFound { message } => message.clone(),
            Self::UpstreamError { .. } => "Character service unavailable".to_string(),
        }
    }
}
