//! PostgreSQL test fixtures
//!
//! The PostgreSQL store is exercised against the server named by
//! `DATABASE_URL`. When it is unset, or names another backend, the fixture
//! returns `None` and the calling test returns early.

use character_favorites::backend::store::PgStore;
use uuid::Uuid;

/// Connect to the test database and run the PostgreSQL migrations
pub async fn pg_store() -> Option<PgStore> {
    let database_url = std::env::var("DATABASE_URL").ok()?;
    if !(database_url.starts_with("postgres://") || database_url.starts_with("postgresql://")) {
        return None;
    }

    Some(
        PgStore::connect(&database_url)
            .await
            .expect("Failed to connect to test database"),
    )
}

/// An email no other test run will use
pub fn unique_email() -> String {
    format!("pg_{}@example.com", Uuid::new_v4())
}
