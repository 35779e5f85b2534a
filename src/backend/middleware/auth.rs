/**
 * Identity Middleware
 *
 * Runs in front of every route. Paths the route gate marks as public pass
 * straight through. On every other path the `Authorization` header must
 * carry a token that verifies and names a user that still exists; the user
 * ID is then attached to the request extensions, where handlers pick it up
 * through the `AuthUser` extractor.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::backend::auth::sessions::{SessionKeys, TokenVerification};
use crate::backend::auth::users::UserStore;
use crate::backend::error::BackendError;
use crate::backend::routes::gate::Access;
use crate::backend::server::state::AppState;

const BEARER: &str = "Bearer";

/// Identity attached to a request by `identity_middleware`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
}

/// Identity middleware
///
/// Returns 401 when a gated route is called without a valid token.
pub async fn identity_middleware(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    if app_state.gate.access_for(request.uri().path()) == Access::Public {
        return Ok(next.run(request).await);
    }

    let user_id = authenticate(
        &app_state.sessions,
        app_state.users.as_ref(),
        request.headers(),
    )
    .await?;

    tracing::debug!(%user_id, "Request authenticated");
    request
        .extensions_mut()
        .insert(AuthenticatedUser { user_id });

    Ok(next.run(request).await)
}

/// Token carried by the `Authorization` header
///
/// Accepts `Bearer <token>` as well as a bare token. The scheme name is
/// matched case-insensitively; a scheme with no token counts as no token.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?.trim();

    let token = match value.split_once(char::is_whitespace) {
        Some((scheme, rest)) if scheme.eq_ignore_ascii_case(BEARER) => rest.trim(),
        None if value.eq_ignore_ascii_case(BEARER) => "",
        _ => value,
    };

    (!token.is_empty()).then_some(token)
}

async fn authenticate(
    sessions: &SessionKeys,
    users: &dyn UserStore,
    headers: &HeaderMap,
) -> Result<Uuid, BackendError> {
    let token = bearer_token(headers)
        .ok_or_else(|| BackendError::unauthenticated("Missing authorization token"))?;

    let user_id = match sessions.verify(token) {
        TokenVerification::Valid { user_id, .. } => user_id,
        TokenVerification::Expired => return Err(BackendError::unauthenticated("Token expired")),
        TokenVerification::SignatureMismatch => {
            return Err(BackendError::unauthenticated("Invalid token signature"))
        }
        TokenVerification::Malformed => {
            return Err(BackendError::unauthenticated("Malformed token"))
        }
    };

    // A well-signed token for a user that no longer exists is still rejected.
    if users.find_by_id(user_id).await?.is_none() {
        tracing::warn!(%user_id, "Token names an unknown user");
        return Err(BackendError::unauthenticated("Unknown user"));
    }

    Ok(user_id)
}

/// Axum extractor for the authenticated user
///
/// Only succeeds behind `identity_middleware` on a gated route.
#[derive(Clone, Copy, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .copied()
            .map(AuthUser)
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                BackendError::unauthenticated("Missing authorization token")
            })
    }
}
