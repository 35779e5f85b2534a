/**
 * Login Handler
 *
 * POST /api/auth/login
 *
 * Unknown emails and wrong passwords both answer 401 with the same message,
 * and both pay for one bcrypt round before answering.
 */

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use crate::backend::auth::handlers::types::{AuthResponse, LoginRequest};
use crate::backend::auth::issuer::CredentialIssuer;
use crate::backend::error::BackendError;

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - Unreadable body, missing email or password
/// * `401 Unauthorized` - Unknown email or wrong password
/// * `500 Internal Server Error` - Store or token failure
pub async fn login(
    State(issuer): State<Arc<CredentialIssuer>>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<AuthResponse>, BackendError> {
    let Json(request) = body?;
    let credentials = request.validate()?;
    tracing::info!("Login request for: {}", credentials.email);

    let response = issuer
        .login(&credentials.email, &credentials.password)
        .await?;

    Ok(Json(response))
}
