/**
 * Register Handler
 *
 * POST /api/auth/register
 *
 * # Registration Process
 *
 * 1. Validate email format, password and display name
 * 2. Reject emails that are already registered (400)
 * 3. Hash the password with bcrypt and create the user
 * 4. Return a session token and the public profile
 */

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use crate::backend::auth::handlers::types::{AuthResponse, RegisterRequest};
use crate::backend::auth::issuer::CredentialIssuer;
use crate::backend::error::BackendError;

/// Register handler
///
/// # Example Request
///
/// ```http
/// POST /api/auth/register HTTP/1.1
/// Content-Type: application/json
///
/// {"email": "a@x.com", "password": "pw", "displayName": "A"}
/// ```
///
/// # Errors
///
/// * `400 Bad Request` - Unreadable body, invalid fields, or the email is
///   already registered
/// * `500 Internal Server Error` - Store or hashing failure
pub async fn register(
    State(issuer): State<Arc<CredentialIssuer>>,
    body: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<Json<AuthResponse>, BackendError> {
    let Json(request) = body?;
    let registration = request.validate()?;
    tracing::info!("Register request for: {}", registration.email);

    let response = issuer
        .register(
            &registration.email,
            &registration.password,
            &registration.display_name,
        )
        .await?;

    Ok(Json(response))
}
