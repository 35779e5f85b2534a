/**
 * Favorites Handlers
 *
 * - `GET /api/me/favorites` - the caller's favorites
 * - `POST /api/me/favorites` - add a favorite owned by the caller
 * - `DELETE /api/me/favorites/{id}` - remove one of the caller's favorites
 *
 * Deleting a favorite that does not exist and deleting someone else's
 * favorite both answer 404.
 */

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::Json,
};
use uuid::Uuid;

use crate::backend::error::BackendError;
use crate::backend::favorites::db::FavoriteStore;
use crate::backend::middleware::AuthUser;
use crate::shared::{CreateFavoriteRequest, Favorite};

/// List the caller's favorites
pub async fn list_favorites(
    State(favorites): State<Arc<dyn FavoriteStore>>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<Favorite>>, BackendError> {
    let list = favorites.list_for_user(user.user_id).await?;
    tracing::debug!(user_id = %user.user_id, count = list.len(), "Listed favorites");

    Ok(Json(list))
}

/// Create a favorite owned by the caller
///
/// # Errors
///
/// * `400 Bad Request` - unreadable body, or `name`, `species` or `image`
///   missing or empty
pub async fn create_favorite(
    State(favorites): State<Arc<dyn FavoriteStore>>,
    AuthUser(user): AuthUser,
    body: Result<Json<CreateFavoriteRequest>, JsonRejection>,
) -> Result<Json<Favorite>, BackendError> {
    let Json(request) = body?;
    let new_favorite = request.validate()?;

    let favorite = favorites
        .create_for_user(user.user_id, &new_favorite)
        .await?;
    tracing::info!(user_id = %user.user_id, favorite_id = %favorite.id, "Favorite created: {}", favorite.name);

    Ok(Json(favorite))
}

/// Delete one of the caller's favorites and return it
///
/// # Errors
///
/// * `400 Bad Request` - `id` is not a UUID
/// * `404 Not Found` - no favorite with this id belongs to the caller
pub async fn delete_favorite(
    State(favorites): State<Arc<dyn FavoriteStore>>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<Favorite>, BackendError> {
    let id = Uuid::parse_str(&id)
        .map_err(|_| BackendError::validation("id", "Favorite id must be a UUID"))?;

    let deleted = favorites.delete_for_user(id, user.user_id).await?;

    match deleted {
        Some(favorite) => {
            tracing::info!(user_id = %user.user_id, favorite_id = %id, "Favorite deleted");
            Ok(Json(favorite))
        }
        None => {
            tracing::warn!(user_id = %user.user_id, favorite_id = %id, "Favorite not found for caller");
            Err(BackendError::not_found("Favorite not found"))
        }
    }
}
