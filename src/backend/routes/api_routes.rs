/**
 * API Routes
 *
 * ## Authentication
 * - `POST /api/auth/register` - User registration
 * - `POST /api/auth/login` - User login
 *
 * ## Characters
 * - `GET /api/character` - Search the external character API
 *
 * ## Favorites (requires identity)
 * - `GET /api/me/favorites` - List favorites
 * - `POST /api/me/favorites` - Create a favorite
 * - `DELETE /api/me/favorites/{id}` - Delete a favorite
 */

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::backend::auth::handlers::{login, register};
use crate::backend::character::handlers::search_characters;
use crate::backend::favorites::handlers::{create_favorite, delete_favorite, list_favorites};
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// Access control is not applied here; the identity middleware consults the
/// route gate for every path.
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/character", get(search_characters))
        .route(
            "/api/me/favorites",
            get(list_favorites).post(create_favorite),
        )
        .route("/api/me/favorites/{id}", delete(delete_favorite))
}
