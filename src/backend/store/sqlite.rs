/**
 * SQLite Store
 *
 * Same schema and semantics as the PostgreSQL store, for local development
 * and for tests. An in-memory database lives only as long as its single
 * pooled connection, so in-memory pools are pinned to one connection that
 * never expires.
 */

use std::str::FromStr;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use uuid::Uuid;

use crate::backend::auth::users::{User, UserProfile, UserStore};
use crate::backend::favorites::db::FavoriteStore;
use crate::backend::store::{map_insert_error, StoreError};
use crate::shared::{Favorite, NewFavorite};

const MAX_CONNECTIONS: u32 = 5;

/// User and favorite store backed by a SQLite pool
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Connect to a SQLite URL (file or `sqlite::memory:`), then migrate
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool_options = if database_url.contains(":memory:") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(MAX_CONNECTIONS)
        };

        let pool = pool_options.connect_with(options).await?;
        sqlx::migrate!("./migrations/sqlite").run(&pool).await?;
        tracing::debug!("SQLite store ready at {}", database_url);

        Ok(Self { pool })
    }

    /// Fresh, empty in-memory store
    pub async fn in_memory() -> Result<Self, StoreError> {
        Self::connect("sqlite::memory:").await
    }

    /// Get the database pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl UserStore for SqliteStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, hash, display_name
            FROM users
            WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, hash, display_name
            FROM users
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn create(
        &self,
        email: &str,
        hash: &str,
        display_name: &str,
    ) -> Result<UserProfile, StoreError> {
        let id = Uuid::new_v4();

        sqlx::query_as::<_, UserProfile>(
            r#"
            INSERT INTO users (id, email, hash, display_name)
            VALUES (?, ?, ?, ?)
            RETURNING id, email, display_name
            "#,
        )
        .bind(id)
        .bind(email)
        .bind(hash)
        .bind(display_name)
        .fetch_one(&self.pool)
        .await
        .map_err(map_insert_error)
    }
}

#[async_trait]
impl FavoriteStore for SqliteStore {
    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Favorite>, StoreError> {
        let favorites = sqlx::query_as::<_, Favorite>(
            r#"
            SELECT id, name, species, image, user_id
            FROM favorites
            WHERE user_id = ?
            ORDER BY name, id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(favorites)
    }

    async fn create_for_user(
        &self,
        user_id: Uuid,
        favorite: &NewFavorite,
    ) -> Result<Favorite, StoreError> {
        let id = Uuid::new_v4();

        sqlx::query_as::<_, Favorite>(
            r#"
            INSERT INTO favorites (id, name, species, image, user_id)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, name, species, image, user_id
            "#,
        )
        .bind(id)
        .bind(&favorite.name)
        .bind(&favorite.species)
        .bind(&favorite.image)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_insert_error)
    }

    async fn delete_for_user(
        &self,
        id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<Favorite>, StoreError> {
        let favorite = sqlx::query_as::<_, Favorite>(
            r#"
            DELETE FROM favorites
            WHERE id = ? AND user_id = ?
            RETURNING id, name, species, image, user_id
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(favorite)
    }
}
