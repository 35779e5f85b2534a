//! Authentication Handlers Module
//!
//! HTTP handlers for the public authentication endpoints.
//!
//! # Handlers
//!
//! - **`register`** - POST /api/auth/register - User registration
//! - **`login`** - POST /api/auth/login - User authentication
//!
//! Both respond with `{token, user}`; the token goes in the `Authorization`
//! header of later requests to `/api/me/*`.

/// Request and response types
pub mod types;

/// Register handler
pub mod register;

/// Login handler
pub mod login;

pub use types::{AuthResponse, LoginRequest, RegisterRequest};

pub use login::login;
pub use register::register;
