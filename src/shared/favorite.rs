/**
 * Favorite Data Structures
 *
 * A favorite is a user's saved reference to a character from the external
 * character API. These types are the JSON shapes exchanged with clients and
 * the rows stored in the `favorites` table.
 */
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::SharedError;

/// A stored favorite, owned by exactly one user
///
/// Serialized field names match the `favorites` table columns.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "ssr", derive(sqlx::FromRow))]
pub struct Favorite {
    /// Generated favorite ID
    pub id: Uuid,
    /// Character name
    pub name: String,
    /// Character species
    pub species: String,
    /// Image URL of the character
    pub image: String,
    /// Owner's user ID
    pub user_id: Uuid,
}

/// Body of `POST /api/me/favorites`
///
/// Every field is optional at the deserialization layer so that a missing
/// field is reported as a validation error naming that field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateFavoriteRequest {
    pub name: Option<String>,
    pub species: Option<String>,
    pub image: Option<String>,
}

/// A validated favorite that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFavorite {
    pub name: String,
    pub species: String,
    pub image: String,
}

impl CreateFavoriteRequest {
    /// Check that name, species and image are all present
    pub fn validate(self) -> Result<NewFavorite, SharedError> {
        Ok(NewFavorite {
            name: SharedError::require("name", self.name)?,
            species: SharedError::require("species", self.species)?,
            image: SharedError::require("image", self.image)?,
        })
    }
}
