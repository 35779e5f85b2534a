//! Relational Store Module
//!
//! Concrete implementations of [`UserStore`] and [`FavoriteStore`] on top of
//! `sqlx`, plus the connection entry point used at startup.
//!
//! # Backends
//!
//! - **`postgres`** - `PgStore`, selected by `postgres://` / `postgresql://` URLs
//! - **`sqlite`** - `SqliteStore`, selected by `sqlite:` URLs (local
//!   development and tests; `sqlite::memory:` keeps everything in memory)
//!
//! Both backends embed their migrations and run them on connect, so the
//! `users` and `favorites` tables always exist once a store is returned.
//!
//! # Example
//!
//! ```rust,no_run
//! # async fn example() -> Result<(), character_favorites::backend::store::StoreError> {
//! use character_favorites::backend::store::connect;
//!
//! let stores = connect("sqlite::memory:").await?;
//! let user = stores.users.find_by_email("a@x.com").await?;
//! assert!(user.is_none());
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use thiserror::Error;

use crate::backend::auth::users::UserStore;
use crate::backend::favorites::db::FavoriteStore;

/// PostgreSQL store
pub mod postgres;

/// SQLite store
pub mod sqlite;

pub use postgres::PgStore;
pub use sqlite::SqliteStore;

/// Errors raised by store implementations
#[derive(Debug, Error)]
pub enum StoreError {
    /// A uniqueness constraint rejected the insert
    #[error("Record already exists")]
    AlreadyExists,

    /// Any other database failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Embedded migrations could not be applied
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// `DATABASE_URL` names a backend this server does not support
    #[error("Unsupported database URL scheme: {0}")]
    UnsupportedScheme(String),
}

/// Map an insert failure, singling out uniqueness violations
pub(crate) fn map_insert_error(err: sqlx::Error) -> StoreError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => StoreError::AlreadyExists,
        _ => StoreError::Database(err),
    }
}

/// Handles to the stores used by the application state
#[derive(Clone)]
pub struct Stores {
    pub users: Arc<dyn UserStore>,
    pub favorites: Arc<dyn FavoriteStore>,
}

impl Stores {
    /// Use one store value for both users and favorites
    pub fn from_shared<S>(store: Arc<S>) -> Self
    where
        S: UserStore + FavoriteStore + 'static,
    {
        Self {
            users: store.clone(),
            favorites: store,
        }
    }
}

/// Connect to the database named by `database_url` and run migrations
///
/// # Errors
///
/// Returns `StoreError::UnsupportedScheme` for URLs that are neither
/// PostgreSQL nor SQLite, and the underlying error if the connection or the
/// migrations fail.
pub async fn connect(database_url: &str) -> Result<Stores, StoreError> {
    if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
        tracing::info!("Connecting to PostgreSQL database...");
        let store = PgStore::connect(database_url).await?;
        Ok(Stores::from_shared(Arc::new(store)))
    } else if database_url.starts_with("sqlite:") {
        tracing::info!("Connecting to SQLite database...");
        let store = SqliteStore::connect(database_url).await?;
        Ok(Stores::from_shared(Arc::new(store)))
    } else {
        // Only the scheme is reported; the URL may carry credentials.
        let scheme = database_url.split(':').next().unwrap_or_default().to_string();
        Err(StoreError::UnsupportedScheme(scheme))
    }
}
