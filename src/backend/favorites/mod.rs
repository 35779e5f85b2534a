//! Favorites Module
//!
//! A user's saved characters. Every read and write is scoped to the
//! authenticated caller; the owner is always taken from the token, never
//! from the request body or path.
//!
//! - **`db`** - The `FavoriteStore` trait
//! - **`handlers`** - HTTP handlers under `/api/me/favorites`

/// Favorite storage trait
pub mod db;

/// HTTP handlers
pub mod handlers;

pub use db::FavoriteStore;
pub use handlers::{create_favorite, delete_favorite, list_favorites};
