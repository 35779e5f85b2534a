//! Character search proxy integration tests
//!
//! The external API is replaced by a `wiremock` server.

#[path = "../../common/mod.rs"]
mod common;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::TestApp;

#[tokio::test]
async fn test_search_is_public_and_proxied() {
    let upstream = MockServer::start().await;
    let results = json!({"info": {"count": 1}, "results": [{"id": 1, "name": "Rick Sanchez"}]});
    Mock::given(method("GET"))
        .and(path("/character/"))
        .and(query_param("name", "rick"))
        .respond_with(ResponseTemplate::new(200).set_body_json(results.clone()))
        .expect(1)
        .mount(&upstream)
        .await;

    let app = TestApp::with_character_api(&upstream.uri()).await;
    let response = app.get("/api/character?search=rick", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, results);
}

#[tokio::test]
async fn test_search_term_is_query_encoded() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/character/"))
        .and(query_param("name", "rick & morty"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
        .expect(1)
        .mount(&upstream)
        .await;

    let app = TestApp::with_character_api(&upstream.uri()).await;
    let response = app
        .get("/api/character?search=rick%20%26%20morty", None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_missing_search_sends_empty_name() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/character/"))
        .and(query_param("name", ""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": ["all"]})))
        .expect(1)
        .mount(&upstream)
        .await;

    let app = TestApp::with_character_api(&upstream.uri()).await;
    let response = app.get("/api/character", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({"results": ["all"]}));
}

#[tokio::test]
async fn test_upstream_not_found_is_passed_through() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"error": "There is nothing here"})),
        )
        .mount(&upstream)
        .await;

    let app = TestApp::with_character_api(&upstream.uri()).await;
    let response = app.get("/api/character?search=zzz", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body, json!({"error": "There is nothing here"}));
}

#[tokio::test]
async fn test_upstream_failure_is_bad_gateway() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&upstream)
        .await;

    let app = TestApp::with_character_api(&upstream.uri()).await;
    let response = app.get("/api/character?search=rick", None).await;

    assert_eq!(response.status, StatusCode::BAD_GATEWAY);
    assert_eq!(response.body["error"], "Character service unavailable");
}

#[tokio::test]
async fn test_unreachable_upstream_is_bad_gateway() {
    let app = TestApp::new().await;

    let response = app.get("/api/character?search=rick", None).await;
    assert_eq!(response.status, StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn test_cors_preflight() {
    let app = TestApp::new().await;

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/me/favorites")
        .header(header::ORIGIN, "http://localhost:5173")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();

    let response = app.send(request).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response
            .headers
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|value| value.to_str().ok()),
        Some("*")
    );
}
