//! Authentication test helpers

use serde_json::{json, Value};
use uuid::Uuid;

use super::app::TestApp;

/// A registered user as seen by a client
pub struct TestUser {
    pub id: Uuid,
    pub email: String,
    pub password: String,
    pub token: String,
}

/// Register a user through the API
pub async fn register_user(app: &TestApp, email: &str, password: &str, display_name: &str) -> TestUser {
    let response = app
        .post(
            "/api/auth/register",
            None,
            json!({"email": email, "password": password, "displayName": display_name}),
        )
        .await;
    assert_eq!(response.status, 200, "register failed: {}", response.body);

    TestUser {
        id: user_id(&response.body),
        email: email.to_string(),
        password: password.to_string(),
        token: response.body["token"].as_str().unwrap().to_string(),
    }
}

/// Register a user with a unique email
pub async fn register_unique_user(app: &TestApp) -> TestUser {
    let email = format!("test_{}@example.com", Uuid::new_v4());
    register_user(app, &email, "test_password_123", "Tester").await
}

/// `user.id` of an auth response body
pub fn user_id(body: &Value) -> Uuid {
    Uuid::parse_str(body["user"]["id"].as_str().unwrap()).unwrap()
}
