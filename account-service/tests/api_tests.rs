mod common;

use auth::Claims;
use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_signup_success() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/signup")
        .json(&json!({
            "name": "Ann",
            "email": " ANN@X.com ",
            "password": "secret1",
            "role": "user"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Signup successful");
    // Email is stored trimmed and lowercased
    assert_eq!(body["data"]["user"]["email"], "ann@x.com");
    assert_eq!(body["data"]["user"]["name"], "Ann");
    assert_eq!(body["data"]["user"]["roles"][0], "user");
    assert!(body["data"]["user"]["id"].is_string());

    // The token decodes to the created account's claims
    let token = body["data"]["token"].as_str().expect("Missing token");
    let claims: Claims = app
        .authenticator
        .validate_token(token)
        .expect("Token validation failed");
    assert_eq!(claims.sub, body["data"]["user"]["id"].as_str().unwrap());
    assert_eq!(claims.email, "ann@x.com");
    assert_eq!(claims.roles, vec!["user".to_string()]);
    assert_eq!(claims.exp - claims.iat, 365 * 24 * 60 * 60);
}

#[tokio::test]
async fn test_signup_response_never_contains_password() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/signup")
        .json(&json!({
            "name": "Ann",
            "email": "ann@x.com",
            "password": "secret1",
            "role": "user"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    let body = response.text().await.expect("Failed to read body");
    assert!(!body.contains("password"));
    assert!(!body.contains("argon2"));
}

#[tokio::test]
async fn test_signup_duplicate_email_case_insensitive() {
    let app = TestApp::spawn().await;

    app.post("/api/auth/signup")
        .json(&json!({
            "name": "Ann",
            "email": "ann@x.com",
            "password": "secret1",
            "role": "user"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    // Different casing and whitespace, same account
    let response = app
        .post("/api/auth/signup")
        .json(&json!({
            "name": "Ann",
            "email": " ANN@X.COM ",
            "password": "secret2",
            "role": "user"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], 400);
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("already exists"));
}

#[tokio::test]
async fn test_signup_invalid_email() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/signup")
        .json(&json!({
            "name": "Ann",
            "email": "not-an-email",
            "password": "secret1",
            "role": "user"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .to_lowercase()
        .contains("email"));
}

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::spawn().await;

    app.post("/api/auth/signup")
        .json(&json!({
            "name": "Ann",
            "email": "ann@x.com",
            "password": "secret1",
            "role": "user"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    let response = app
        .post("/api/auth/login")
        .json(&json!({
            "email": "ann@x.com",
            "password": "secret1"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Login successful");
    assert_eq!(body["data"]["user"]["email"], "ann@x.com");

    let token = body["data"]["token"].as_str().expect("Missing token");
    let claims: Claims = app
        .authenticator
        .validate_token(token)
        .expect("Token validation failed");
    assert_eq!(claims.email, "ann@x.com");
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = TestApp::spawn().await;

    app.post("/api/auth/signup")
        .json(&json!({
            "name": "Ann",
            "email": "ann@x.com",
            "password": "secret1",
            "role": "user"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    let response = app
        .post("/api/auth/login")
        .json(&json!({
            "email": "ann@x.com",
            "password": "wrong"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Invalid credentials");
    assert!(body["data"].is_null());
}

#[tokio::test]
async fn test_login_unknown_email_indistinguishable_from_wrong_password() {
    let app = TestApp::spawn().await;

    app.post("/api/auth/signup")
        .json(&json!({
            "name": "Ann",
            "email": "ann@x.com",
            "password": "secret1",
            "role": "user"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    let wrong_password = app
        .post("/api/auth/login")
        .json(&json!({"email": "ann@x.com", "password": "wrong"}))
        .send()
        .await
        .expect("Failed to execute request");

    let unknown_email = app
        .post("/api/auth/login")
        .json(&json!({"email": "nobody@x.com", "password": "secret1"}))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status(), StatusCode::UNAUTHORIZED);

    let body_a: serde_json::Value = wrong_password.json().await.unwrap();
    let body_b: serde_json::Value = unknown_email.json().await.unwrap();
    assert_eq!(body_a["message"], body_b["message"]);
}

#[tokio::test]
async fn test_login_is_case_sensitive_on_supplied_email() {
    let app = TestApp::spawn().await;

    app.post("/api/auth/signup")
        .json(&json!({
            "name": "Ann",
            "email": "ann@x.com",
            "password": "secret1",
            "role": "user"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    // The stored address is canonical; the uppercase form finds nothing
    let response = app
        .post("/api/auth/login")
        .json(&json!({"email": "ANN@X.COM", "password": "secret1"}))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_get_user_with_valid_token() {
    let app = TestApp::spawn().await;

    let signup: serde_json::Value = app
        .post("/api/auth/signup")
        .json(&json!({
            "name": "Ann",
            "email": "ann@x.com",
            "password": "secret1",
            "role": "user"
        }))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse response");

    let token = signup["data"]["token"].as_str().unwrap();
    let user_id = signup["data"]["user"]["id"].as_str().unwrap();

    let response = app
        .get(&format!("/api/users/{}", user_id))
        .bearer_auth(token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Get user successful");
    assert_eq!(body["data"]["id"], user_id);
    assert_eq!(body["data"]["email"], "ann@x.com");
    assert!(body["data"].get("password").is_none());
    assert!(body["data"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_get_user_without_token() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api/users/00000000-0000-0000-0000-000000000000")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_get_user_with_invalid_token() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api/users/00000000-0000-0000-0000-000000000000")
        .bearer_auth("invalid.token.here")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_get_unknown_user() {
    let app = TestApp::spawn().await;

    let signup: serde_json::Value = app
        .post("/api/auth/signup")
        .json(&json!({
            "name": "Ann",
            "email": "ann@x.com",
            "password": "secret1",
            "role": "user"
        }))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse response");

    let token = signup["data"]["token"].as_str().unwrap();

    let response = app
        .get("/api/users/00000000-0000-0000-0000-000000000000")
        .bearer_auth(token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_user_malformed_id() {
    let app = TestApp::spawn().await;

    let signup: serde_json::Value = app
        .post("/api/auth/signup")
        .json(&json!({
            "name": "Ann",
            "email": "ann@x.com",
            "password": "secret1",
            "role": "user"
        }))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse response");

    let token = signup["data"]["token"].as_str().unwrap();

    let response = app
        .get("/api/users/not-a-uuid")
        .bearer_auth(token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
