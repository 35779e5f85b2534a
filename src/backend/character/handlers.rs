/**
 * Character Search Handler
 *
 * `GET /api/character?search=<name>`, public. A missing `search` parameter
 * searches for the empty name, which the upstream API treats as "all".
 */

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use serde_json::Value;

use crate::backend::character::client::CharacterClient;
use crate::backend::error::BackendError;

/// Query string of the search endpoint
#[derive(Debug, Default, Deserialize)]
pub struct CharacterQuery {
    #[serde(default)]
    pub search: String,
}

/// Proxy a character search to the external API
///
/// # Errors
///
/// * `502 Bad Gateway` - The character API is unreachable, failed, or sent
///   something that is not JSON
pub async fn search_characters(
    State(client): State<CharacterClient>,
    Query(query): Query<CharacterQuery>,
) -> Result<(StatusCode, Json<Value>), BackendError> {
    tracing::info!("Character search: {:?}", query.search);

    let (status, body) = client.search(&query.search).await?;

    Ok((status, Json(body)))
}
