/**
 * PostgreSQL Store
 *
 * Production implementation of the user and favorite stores. Queries are
 * plain `sqlx::query_as` calls bound positionally, one statement each.
 */

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use uuid::Uuid;

use crate::backend::auth::users::{User, UserProfile, UserStore};
use crate::backend::favorites::db::FavoriteStore;
use crate::backend::store::{map_insert_error, StoreError};
use crate::shared::{Favorite, NewFavorite};

const MAX_CONNECTIONS: u32 = 10;

/// User and favorite store backed by a PostgreSQL pool
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Connect, then run the embedded PostgreSQL migrations
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect(database_url)
            .await?;
        tracing::info!("Database connection pool created successfully");

        tracing::info!("Running database migrations...");
        sqlx::migrate!("./migrations/postgres").run(&pool).await?;
        tracing::info!("Database migrations completed successfully");

        Ok(Self { pool })
    }

    /// Get the database pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl UserStore for PgStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, hash, display_name
            FROM users
            WHERE email = $1
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
            WHERE id = $1
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
            VALUES ($1, $2, $3, $4)
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
impl FavoriteStore for PgStore {
    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Favorite>, StoreError> {
        let favorites = sqlx::query_as::<_, Favorite>(
            r#"
            SELECT id, name, species, image, user_id
            FROM favorites
            WHERE user_id = $1
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
            VALUES ($1, $2, $3, $4, $5)
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
            WHERE id = $1 AND user_id = $2
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
