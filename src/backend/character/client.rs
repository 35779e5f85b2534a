/**
 * Character API Client
 *
 * Thin wrapper around a shared `reqwest::Client`. The search term is passed
 * as the `name` query parameter, URL-encoded by reqwest.
 */

use std::time::Duration;

use axum::http::StatusCode;
use serde_json::Value;

use crate::backend::error::BackendError;

/// Upper bound on a single upstream call
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the external character API
#[derive(Debug, Clone)]
pub struct CharacterClient {
    http: reqwest::Client,
    base_url: String,
}

impl CharacterClient {
    /// Create a client for the API rooted at `base_url`
    pub fn new(base_url: impl Into<String>) -> Result<Self, BackendError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| BackendError::internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Search characters by name
    ///
    /// Returns the upstream status and JSON body for 2xx and 4xx answers.
    ///
    /// # Errors
    ///
    /// `BackendError::UpstreamError` when the request fails, the upstream
    /// answers 5xx, or the body is not JSON.
    pub async fn search(&self, name: &str) -> Result<(StatusCode, Value), BackendError> {
        let url = format!("{}/character/", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[("name", name)])
            .send()
            .await
            .map_err(|e| BackendError::upstream(format!("Request to {} failed: {}", url, e)))?;

        let status = StatusCode::from_u16(response.status().as_u16())
            .map_err(|e| BackendError::upstream(format!("Invalid upstream status: {}", e)))?;

        if status.is_server_error() {
            return Err(BackendError::upstream(format!(
                "Character API answered {}",
                status
            )));
        }

        let body = response
            .json::<Value>()
            .await
            .map_err(|e| BackendError::upstream(format!("Character API sent invalid JSON: {}", e)))?;

        tracing::debug!(status = status.as_u16(), "Character API answered");
        Ok((status, body))
    }
}
