//! Character Favorites - Main Library
//!
//! A small authenticated REST backend. Users register and log in with an
//! email and password, receive a signed JWT, and use it to keep a personal
//! list of favorite characters. Character lookups are proxied to the public
//! Rick and Morty API.
//!
//! # Module Structure
//!
//! - **`shared`** - Wire types shared with clients
//!   - Favorite records and their request payloads
//!   - Validation error type
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum HTTP server, routing and the route authorization gate
//!   - Password hashing, token issuance and identity middleware
//!   - PostgreSQL / SQLite stores for users and favorites
//!   - Character lookup proxy
//!
//! # Feature Flags
//!
//! - **`ssr`** (default) - enables the backend modules and the server binary
//!
//! # Usage
//!
//! ```rust,no_run
//! # #[cfg(feature = "ssr")]
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! use character_favorites::backend::server::{config::ServerConfig, create_app};
//!
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;
