//! Authentication API integration tests
//!
//! Register and login over HTTP, and how the identity middleware treats
//! the tokens they hand out.

#[path = "../../common/mod.rs"]
mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use chrono::{Duration, Utc};
use pretty_assertions::assert_eq;
use serde_json::json;
use uuid::Uuid;

use common::{register_user, user_id, TestApp};

#[tokio::test]
async fn test_register_success() {
    let app = TestApp::new().await;

    let response = app
        .post(
            "/api/auth/register",
            None,
            json!({"email": "a@x.com", "password": "pw", "displayName": "A"}),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["token"].as_str().is_some_and(|t| !t.is_empty()));
    assert_eq!(response.body["user"]["email"], "a@x.com");
    assert_eq!(response.body["user"]["displayName"], "A");
    assert!(response.body["user"].get("hash").is_none());
}

#[tokio::test]
async fn test_register_then_login_resolve_to_same_user() {
    let app = TestApp::new().await;
    let registered = register_user(&app, "a@x.com", "pw", "A").await;

    let response = app
        .post("/api/auth/login", None, json!({"email": "a@x.com", "password": "pw"}))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(user_id(&response.body), registered.id);

    let login_token = response.body["token"].as_str().unwrap();
    for token in [registered.token.as_str(), login_token] {
        let favorites = app.get("/api/me/favorites", Some(token)).await;
        assert_eq!(favorites.status, StatusCode::OK);
    }
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = TestApp::new().await;
    register_user(&app, "a@x.com", "pw", "A").await;

    let response = app
        .post(
            "/api/auth/register",
            None,
            json!({"email": "a@x.com", "password": "other", "displayName": "B"}),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "Email already registered");
    assert_eq!(app.user_count("a@x.com").await, 1);
}

#[tokio::test]
async fn test_register_invalid_fields() {
    let app = TestApp::new().await;

    let cases = [
        json!({"email": "no-at-sign", "password": "pw", "displayName": "A"}),
        json!({"email": "a@x.com", "password": "", "displayName": "A"}),
        json!({"email": "a@x.com", "password": "pw"}),
        json!({}),
    ];

    for body in cases {
        let response = app.post("/api/auth/register", None, body.clone()).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "body: {}", body);
        assert_eq!(response.body["status"], 400);
    }
    assert_eq!(app.user_count("a@x.com").await, 0);
}

#[tokio::test]
async fn test_login_wrong_password_and_unknown_email_look_alike() {
    let app = TestApp::new().await;
    register_user(&app, "a@x.com", "pw", "A").await;

    let wrong_password = app
        .post("/api/auth/login", None, json!({"email": "a@x.com", "password": "nope"}))
        .await;
    let unknown_email = app
        .post("/api/auth/login", None, json!({"email": "b@x.com", "password": "pw"}))
        .await;

    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.body, unknown_email.body);
}

#[tokio::test]
async fn test_login_email_is_case_sensitive() {
    let app = TestApp::new().await;
    register_user(&app, "a@x.com", "pw", "A").await;

    let response = app
        .post("/api/auth/login", None, json!({"email": "A@X.COM", "password": "pw"}))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_missing_token_is_rejected() {
    let app = TestApp::new().await;

    let response = app.get("/api/me/favorites", None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "Missing authorization token");
}

#[tokio::test]
async fn test_tampered_token_is_rejected() {
    let app = TestApp::new().await;
    let user = register_user(&app, "a@x.com", "pw", "A").await;

    let mut parts: Vec<String> = user.token.split('.').map(str::to_string).collect();
    let payload = &mut parts[1];
    let middle = payload.len() / 2;
    let replacement = if &payload[middle..middle + 1] == "A" { "B" } else { "A" };
    payload.replace_range(middle..middle + 1, replacement);
    let tampered = parts.join(".");

    let response = app.get("/api/me/favorites", Some(&tampered)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "Invalid token signature");
}

#[tokio::test]
async fn test_garbage_token_is_rejected() {
    let app = TestApp::new().await;

    let response = app.get("/api/me/favorites", Some("not-a-jwt")).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "Malformed token");
}

#[tokio::test]
async fn test_expired_token_is_rejected() {
    let app = TestApp::new().await;
    let user = register_user(&app, "a@x.com", "pw", "A").await;
    let expired = app
        .state
        .sessions
        .issue_at(user.id, Utc::now() - Duration::days(31))
        .unwrap();

    let response = app.get("/api/me/favorites", Some(&expired)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "Token expired");
}

#[tokio::test]
async fn test_token_for_unknown_user_is_rejected() {
    let app = TestApp::new().await;
    let token = app.state.sessions.issue(Uuid::new_v4()).unwrap();

    let response = app.get("/api/me/favorites", Some(&token)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "Unknown user");
}

#[tokio::test]
async fn test_bare_token_is_accepted() {
    let app = TestApp::new().await;
    let user = register_user(&app, "a@x.com", "pw", "A").await;

    let request = Request::builder()
        .uri("/api/me/favorites")
        .header(header::AUTHORIZATION, user.token.as_str())
        .body(Body::empty())
        .unwrap();

    let response = app.send(request).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!([]));
}

#[tokio::test]
async fn test_bearer_scheme_without_token_is_missing_token() {
    let app = TestApp::new().await;

    let request = Request::builder()
        .uri("/api/me/favorites")
        .header(header::AUTHORIZATION, "Bearer ")
        .body(Body::empty())
        .unwrap();

    let response = app.send(request).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "Missing authorization token");
}

#[tokio::test]
async fn test_lowercase_bearer_scheme_is_accepted() {
    let app = TestApp::new().await;
    let user = register_user(&app, "a@x.com", "pw", "A").await;

    let request = Request::builder()
        .uri("/api/me/favorites")
        .header(header::AUTHORIZATION, format!("bearer {}", user.token))
        .body(Body::empty())
        .unwrap();

    let response = app.send(request).await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_register_wrong_field_type_is_bad_request() {
    let app = TestApp::new().await;

    let response = app
        .post(
            "/api/auth/register",
            None,
            json!({"email": 1, "password": "pw", "displayName": "A"}),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["status"], 400);

    let error = response.body["error"].as_str().unwrap();
    assert!(error.contains("wrong type"), "error: {}", error);
    assert!(!error.contains("invalid type"), "serde detail leaked: {}", error);
}

#[tokio::test]
async fn test_login_invalid_json_is_bad_request() {
    let app = TestApp::new().await;

    let response = app
        .post_raw("/api/auth/login", None, Some("application/json"), "{not json")
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "Validation error in field 'body': Request body is not valid JSON");
    assert_eq!(response.body["status"], 400);
}

#[tokio::test]
async fn test_login_without_content_type_is_bad_request() {
    let app = TestApp::new().await;

    let response = app
        .post_raw("/api/auth/login", None, None, r#"{"email": "a@x.com", "password": "pw"}"#)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["status"], 400);
    assert!(response.body["error"].as_str().unwrap().contains("Content-Type"));
}
