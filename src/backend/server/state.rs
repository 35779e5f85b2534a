/**
 * Application State Management
 *
 * `AppState` holds everything built once at startup: the stores, the
 * signing keys, the credential issuer, the route gate and the character API
 * client. The `FromRef` implementations let handlers extract just the part
 * they need.
 *
 * # Example
 *
 * ```rust,no_run
 * use std::sync::Arc;
 * use axum::extract::State;
 * use character_favorites::backend::auth::issuer::CredentialIssuer;
 *
 * async fn handler(State(issuer): State<Arc<CredentialIssuer>>) {
 *     // ...
 * }
 * ```
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::auth::issuer::CredentialIssuer;
use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::sessions::SessionKeys;
use crate::backend::auth::users::UserStore;
use crate::backend::character::client::CharacterClient;
use crate::backend::error::BackendError;
use crate::backend::favorites::db::FavoriteStore;
use crate::backend::routes::gate::RouteGate;
use crate::backend::server::config::ServerConfig;
use crate::backend::store::Stores;

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub favorites: Arc<dyn FavoriteStore>,
    pub sessions: Arc<SessionKeys>,
    pub issuer: Arc<CredentialIssuer>,
    /// Consulted by the identity middleware on every request
    pub gate: Arc<RouteGate>,
    pub characters: CharacterClient,
}

impl AppState {
    /// Wire the state from configuration and connected stores
    pub fn new(config: &ServerConfig, stores: Stores) -> Result<Self, BackendError> {
        let sessions = Arc::new(SessionKeys::new(
            config.jwt_secret.as_bytes(),
            config.token_ttl,
        ));
        let issuer = Arc::new(CredentialIssuer::new(
            stores.users.clone(),
            PasswordHasher::new(config.bcrypt_cost),
            sessions.clone(),
        ));
        let characters = CharacterClient::new(config.character_api_url.as_str())?;

        Ok(Self {
            users: stores.users,
            favorites: stores.favorites,
            sessions,
            issuer,
            gate: Arc::new(RouteGate::standard()),
            characters,
        })
    }
}

impl FromRef<AppState> for Arc<CredentialIssuer> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.issuer.clone()
    }
}

impl FromRef<AppState> for Arc<dyn FavoriteStore> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.favorites.clone()
    }
}

impl FromRef<AppState> for CharacterClient {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.characters.clone()
    }
}
