/**
 * Router Configuration
 *
 * Combines the API routes with the layers every request passes through.
 *
 * # Layer Order (outermost first)
 *
 * 1. `TraceLayer` - one span per request
 * 2. `CorsLayer` - answers preflight requests before any identity check
 * 3. Identity middleware - consults the route gate
 */

use axum::{http::Uri, middleware, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::backend::error::BackendError;
use crate::backend::middleware::identity_middleware;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = configure_api_routes(Router::new());

    // Fallback handler for 404
    let router = router.fallback(not_found);

    router
        .layer(middleware::from_fn_with_state(
            app_state.clone(),
            identity_middleware,
        ))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

async fn not_found(uri: Uri) -> BackendError {
    BackendError::not_found(format!("No route for {}", uri.path()))
}
