//! Database operations for favorites
//!
//! Every operation is scoped by the owner's user ID. There is no way to read
//! or delete a favorite without naming its owner.

use async_trait::async_trait;
use uuid::Uuid;

use crate::backend::store::StoreError;
use crate::shared::{Favorite, NewFavorite};

/// Storage of user-owned favorites
#[async_trait]
pub trait FavoriteStore: Send + Sync {
    /// All favorites owned by `user_id`, ordered by name
    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Favorite>, StoreError>;

    /// Store a new favorite owned by `user_id`
    async fn create_for_user(
        &self,
        user_id: Uuid,
        favorite: &NewFavorite,
    ) -> Result<Favorite, StoreError>;

    /// Delete favorite `id` if, and only if, it is owned by `user_id`
    ///
    /// Returns the deleted row, or `None` when nothing matched.
    async fn delete_for_user(
        &self,
        id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<Favorite>, StoreError>;
}
