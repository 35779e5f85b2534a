//! Favorites API integration tests

#[path = "../../common/mod.rs"]
mod common;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use character_favorites::shared::Favorite;
use common::{register_unique_user, register_user, TestApp};

fn rick() -> Value {
    json!({"name": "Rick", "species": "Human", "image": "u1"})
}

#[tokio::test]
async fn test_favorites_lifecycle() {
    let app = TestApp::new().await;
    let user = register_user(&app, "a@x.com", "pw", "A").await;
    let token = Some(user.token.as_str());

    let created = app.post("/api/me/favorites", token, rick()).await;
    assert_eq!(created.status, StatusCode::OK);
    let favorite: Favorite = serde_json::from_value(created.body.clone()).unwrap();
    assert_eq!(favorite.name, "Rick");
    assert_eq!(favorite.species, "Human");
    assert_eq!(favorite.image, "u1");
    assert_eq!(favorite.user_id, user.id);

    let listed = app.get("/api/me/favorites", token).await;
    assert_eq!(listed.status, StatusCode::OK);
    assert_eq!(listed.body, json!([created.body]));

    let deleted = app
        .delete(&format!("/api/me/favorites/{}", favorite.id), token)
        .await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(deleted.body, created.body);

    let listed = app.get("/api/me/favorites", token).await;
    assert_eq!(listed.body, json!([]));
}

#[tokio::test]
async fn test_favorites_are_private() {
    let app = TestApp::new().await;
    let alice = register_unique_user(&app).await;
    let bob = register_unique_user(&app).await;

    app.post("/api/me/favorites", Some(&alice.token), rick()).await;

    let bobs = app.get("/api/me/favorites", Some(&bob.token)).await;
    assert_eq!(bobs.status, StatusCode::OK);
    assert_eq!(bobs.body, json!([]));
}

#[tokio::test]
async fn test_cannot_delete_another_users_favorite() {
    let app = TestApp::new().await;
    let alice = register_unique_user(&app).await;
    let bob = register_unique_user(&app).await;

    let created = app.post("/api/me/favorites", Some(&alice.token), rick()).await;
    let id = created.body["id"].as_str().unwrap();

    let response = app
        .delete(&format!("/api/me/favorites/{}", id), Some(&bob.token))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let alices = app.get("/api/me/favorites", Some(&alice.token)).await;
    assert_eq!(alices.body, json!([created.body]));
}

#[tokio::test]
async fn test_delete_unknown_and_invalid_ids() {
    let app = TestApp::new().await;
    let user = register_unique_user(&app).await;

    let response = app
        .delete(&format!("/api/me/favorites/{}", uuid::Uuid::new_v4()), Some(&user.token))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "Favorite not found");

    let response = app.delete("/api/me/favorites/42", Some(&user.token)).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_requires_all_fields() {
    let app = TestApp::new().await;
    let user = register_unique_user(&app).await;

    for missing in ["name", "species", "image"] {
        let mut body = rick();
        body.as_object_mut().unwrap().remove(missing);

        let response = app.post("/api/me/favorites", Some(&user.token), body).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert!(
            response.body["error"].as_str().unwrap().contains(missing),
            "error should name {}: {}",
            missing,
            response.body
        );
    }

    let response = app
        .post(
            "/api/me/favorites",
            Some(&user.token),
            json!({"name": "", "species": "Human", "image": "u1"}),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let listed = app.get("/api/me/favorites", Some(&user.token)).await;
    assert_eq!(listed.body, json!([]));
}

#[tokio::test]
async fn test_create_with_unreadable_body_is_bad_request() {
    let app = TestApp::new().await;
    let user = register_unique_user(&app).await;

    let response = app
        .post(
            "/api/me/favorites",
            Some(&user.token),
            json!({"name": ["Rick"], "species": "Human", "image": "u1"}),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["status"], 400);

    let response = app
        .post_raw("/api/me/favorites", Some(&user.token), Some("application/json"), "{")
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app
        .post_raw("/api/me/favorites", Some(&user.token), Some("text/plain"), "Rick")
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let listed = app.get("/api/me/favorites", Some(&user.token)).await;
    assert_eq!(listed.body, json!([]));
}

#[tokio::test]
async fn test_owner_comes_from_token_not_body() {
    let app = TestApp::new().await;
    let alice = register_unique_user(&app).await;
    let bob = register_unique_user(&app).await;

    let mut body = rick();
    body["user_id"] = json!(bob.id.to_string());

    let created = app.post("/api/me/favorites", Some(&alice.token), body).await;
    assert_eq!(created.status, StatusCode::OK);
    assert_eq!(created.body["user_id"], json!(alice.id.to_string()));
}

#[tokio::test]
async fn test_list_is_ordered_by_name() {
    let app = TestApp::new().await;
    let user = register_unique_user(&app).await;

    for name in ["Summer", "Beth", "Morty"] {
        app.post(
            "/api/me/favorites",
            Some(&user.token),
            json!({"name": name, "species": "Human", "image": "u"}),
        )
        .await;
    }

    let listed = app.get("/api/me/favorites", Some(&user.token)).await;
    let names: Vec<&str> = listed
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Beth", "Morty", "Summer"]);
}
