//! Authentication Module
//!
//! # Architecture
//!
//! - **`users`** - User model and the `UserStore` trait
//! - **`password`** - bcrypt hashing and verification
//! - **`sessions`** - JWT issuance and verification
//! - **`issuer`** - Register and login, built from the three above
//! - **`handlers`** - HTTP handlers for `/api/auth/*`
//!
//! # Authentication Flow
//!
//! 1. **Register**: email, password, display name → user created → token returned
//! 2. **Login**: email and password → credentials verified → token returned
//! 3. **Gated request**: token in `Authorization` → verified by the identity
//!    middleware → `AuthenticatedUser` available to the handler
//!
//! # Security
//!
//! - Passwords are stored as salted bcrypt hashes only
//! - Tokens are HS256-signed and expire after the configured TTL (30 days by default)
//! - Unknown email and wrong password give the same 401

/// User data model and store trait
pub mod users;

/// Password hashing
pub mod password;

/// JWT token generation and validation
pub mod sessions;

/// Registration and login
pub mod issuer;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::types::{AuthResponse, LoginRequest, RegisterRequest};
pub use handlers::{login, register};
pub use issuer::{AuthError, CredentialIssuer};
pub use sessions::{SessionKeys, TokenVerification};
