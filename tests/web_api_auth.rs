//! Web API Authentication Tests
//!
//! Integration tests for registration and login.

mod common;

use axum::http::header::AUTHORIZATION;
use axum::http::StatusCode;
use common::{create_test_server, login, register_user, TEST_PASSWORD};
use serde_json::{json, Value};

#[tokio::test]
async fn test_register_success() {
    let (server, _db) = create_test_server().await;

    let body = register_user(&server, "alice").await;
    assert_eq!(body["username"], "alice");
    assert_eq!(body["email"], "alice@example.com");
    assert!(body["id"].as_i64().is_some());
    assert!(body.get("password").is_none());
}

#[tokio::test]
async fn test_register_blank_email_is_omitted() {
    let (server, _db) = create_test_server().await;

    for username in ["alice", "bob"] {
        let response = server
            .post("/register")
            .json(&json!({ "username": username, "email": "", "password": TEST_PASSWORD }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let body = response.json::<Value>();
        assert_eq!(body["username"], username);
        assert!(body.get("email").is_none());
    }
}

#[tokio::test]
async fn test_register_duplicate_username() {
    let (server, _db) = create_test_server().await;
    register_user(&server, "alice").await;

    let response = server
        .post("/register")
        .json(&json!({ "username": "ALICE", "password": TEST_PASSWORD }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_register_validation() {
    let (server, _db) = create_test_server().await;

    let response = server
        .post("/register")
        .json(&json!({
            "username": "a b",
            "email": "nope",
            "password": "short"
        }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body = response.json::<Value>();
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(body["details"]["username"].is_array());
    assert!(body["details"]["email"].is_array());
    assert!(body["details"]["password"].is_array());
}

#[tokio::test]
async fn test_register_malformed_json() {
    let (server, _db) = create_test_server().await;

    let response = server
        .post("/register")
        .content_type("application/json")
        .text("{not json")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_with_username_and_email() {
    let (server, _db) = create_test_server().await;
    register_user(&server, "alice").await;

    let by_name = login(&server, "alice").await;
    let by_email = login(&server, "alice@example.com").await;
    assert!(!by_name.is_empty());
    assert!(!by_email.is_empty());
}

#[tokio::test]
async fn test_login_wrong_password() {
    let (server, _db) = create_test_server().await;
    register_user(&server, "alice").await;

    let response = server
        .post("/login")
        .json(&json!({ "identifier": "alice", "password": "wrong-password" }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(response.json::<Value>()["message"], "Invalid credentials");
}

#[tokio::test]
async fn test_login_unknown_user() {
    let (server, _db) = create_test_server().await;

    let response = server
        .post("/login")
        .json(&json!({ "identifier": "ghost", "password": TEST_PASSWORD }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_missing_fields() {
    let (server, _db) = create_test_server().await;

    let response = server
        .post("/login")
        .json(&json!({ "identifier": "alice" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_invalid_token_rejected() {
    let (server, _db) = create_test_server().await;

    let response = server
        .post("/posts")
        .add_header(AUTHORIZATION, "Bearer invalid-token")
        .json(&json!({ "title": "t", "content": "c" }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_health_check() {
    let (server, _db) = create_test_server().await;

    let response = server.get("/health").await;
    response.assert_status_ok();
    assert_eq!(response.text(), "OK");
}
