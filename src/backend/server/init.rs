/**
 * Server Initialization
 *
 * # Initialization Flow
 *
 * 1. Connect to the database named by the config and run migrations
 * 2. Build the application state (keys, issuer, gate, character client)
 * 3. Create the router with all routes and layers
 */

use axum::Router;

use crate::backend::error::BackendError;
use crate::backend::routes::create_router;
use crate::backend::server::config::ServerConfig;
use crate::backend::server::state::AppState;
use crate::backend::store;

/// Create the Axum app
///
/// # Errors
///
/// Fails if the database cannot be reached or migrated, or the HTTP client
/// cannot be built. The server does not start without its store.
pub async fn create_app(config: &ServerConfig) -> Result<Router, BackendError> {
    tracing::info!("Initializing favorites server");

    let stores = store::connect(&config.database_url).await?;
    let app_state = AppState::new(config, stores)?;
    tracing::info!(
        character_api = %config.character_api_url,
        "Application state ready"
    );

    Ok(create_router(app_state))
}
