//! Middleware Module
//!
//! HTTP middleware for the backend server.
//!
//! - **`auth`** - Identity attachment: consults the route gate, verifies the
//!   bearer token on gated routes, and exposes the caller through the
//!   [`AuthUser`] extractor.

pub mod auth;

pub use auth::{bearer_token, identity_middleware, AuthUser, AuthenticatedUser};
