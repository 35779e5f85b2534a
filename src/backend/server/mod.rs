//! Server Module
//!
//! # Architecture
//!
//! - **`config`** - `ServerConfig`, loaded from the environment
//! - **`state`** - `AppState` and its `FromRef` implementations
//! - **`init`** - `create_app`, from config to ready router
//!
//! # Example
//!
//! ```rust,no_run
//! use character_favorites::backend::server::{config::ServerConfig, create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

pub use config::{ConfigError, ServerConfig};
pub use init::create_app;
pub use state::AppState;
