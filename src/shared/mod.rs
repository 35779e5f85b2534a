//! Shared Module
//!
//! Types that describe the JSON payloads exchanged with clients. They carry
//! no server dependencies so a client crate can reuse them without the `ssr`
//! feature.

/// Favorite records and request payloads
pub mod favorite;

/// Shared error types
pub mod error;

/// Re-export commonly used types for convenience
pub use favorite::{CreateFavoriteRequest, Favorite, NewFavorite};
pub use error::SharedError;
