//! Route Configuration Module
//!
//! # Architecture
//!
//! - **`router`** - Main router creation, middleware layers and fallback
//! - **`api_routes`** - The JSON API endpoints
//! - **`gate`** - Which path prefixes need an authenticated identity
//!
//! # Routes
//!
//! - `POST /api/auth/register` - User registration (public)
//! - `POST /api/auth/login` - User login (public)
//! - `GET /api/character?search=` - Character search proxy (public)
//! - `GET /api/me/favorites` - List the caller's favorites
//! - `POST /api/me/favorites` - Add a favorite
//! - `DELETE /api/me/favorites/{id}` - Remove one of the caller's favorites
//!
//! Unknown paths get a JSON 404.

/// Main router creation
pub mod router;

/// API endpoint handlers
pub mod api_routes;

/// Route access table
pub mod gate;

pub use gate::{Access, RouteGate};
pub use router::create_router;
