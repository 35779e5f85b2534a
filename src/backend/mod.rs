//! Backend Module
//!
//! Server-side code, compiled only with the `ssr` feature.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, app creation
//! - **`routes`** - Router assembly and the route authorization gate
//! - **`middleware`** - Identity attachment for gated routes
//! - **`auth`** - Password hashing, session tokens, register and login
//! - **`favorites`** - The caller's favorite characters
//! - **`character`** - Proxy to the external character API
//! - **`store`** - PostgreSQL and SQLite implementations of the stores
//! - **`error`** - `BackendError` and its HTTP mapping
//!
//! # Request Flow
//!
//! ```text
//! TraceLayer -> CorsLayer -> identity middleware -> handler
//!                               |
//!                               +-- gate says Public: pass through
//!                               +-- gate says RequiresIdentity: verify token,
//!                                   attach AuthenticatedUser or answer 401
//! ```
//!
//! Every handler returns `Result<_, BackendError>`; errors become a JSON body
//! `{"error": ..., "status": ...}` and are logged once, server-side.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Middleware for request processing
pub mod middleware;

/// Authentication and user management
pub mod auth;

/// Favorites resource
pub mod favorites;

/// Character API proxy
pub mod character;

/// Relational stores
pub mod store;

/// Backend error types
pub mod error;


pub use error::BackendError;
pub use server::create_app;
