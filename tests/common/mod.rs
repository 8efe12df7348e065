//! Shared helpers for the web API integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::http::header::AUTHORIZATION;
use axum_test::TestServer;
use inkwell::config::WebConfig;
use inkwell::web::handlers::AppState;
use inkwell::web::middleware::JwtState;
use inkwell::web::router::{create_health_router, create_router};
use inkwell::Database;
use serde_json::{json, Value};

/// JWT secret used by every test server.
pub const TEST_SECRET: &str = "test-secret-key-for-testing-only";

/// Default password for test users.
pub const TEST_PASSWORD: &str = "password123";

/// Create a test configuration.
pub fn create_test_config() -> WebConfig {
    WebConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec![],
        jwt_secret: TEST_SECRET.to_string(),
        jwt_access_token_expiry_secs: 900,
    }
}

/// Create a test server with an in-memory database.
pub async fn create_test_server() -> (TestServer, Database) {
    inkwell::logging::init_for_tests();
    let config = create_test_config();

    let db = Database::open_in_memory()
        .await
        .expect("Failed to create test database");

    let app_state = Arc::new(AppState::new(
        db.clone(),
        &config.jwt_secret,
        config.jwt_access_token_expiry_secs,
    ));
    let jwt_state = Arc::new(JwtState::new(&config.jwt_secret));

    let router = create_router(app_state, jwt_state, &config.cors_origins)
        .merge(create_health_router());

    let server = TestServer::new(router).expect("Failed to create test server");
    (server, db)
}

/// Register a user with [`TEST_PASSWORD`].
pub async fn register_user(server: &TestServer, username: &str) -> Value {
    let response = server
        .post("/register")
        .json(&json!({
            "username": username,
            "email": format!("{username}@example.com"),
            "password": TEST_PASSWORD
        }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()
}

/// Log in and return the access token.
pub async fn login(server: &TestServer, identifier: &str) -> String {
    let response = server
        .post("/login")
        .json(&json!({
            "identifier": identifier,
            "password": TEST_PASSWORD
        }))
        .await;
    response.assert_status_ok();
    response.json::<Value>()["token"]
        .as_str()
        .expect("login response without token")
        .to_string()
}

/// Register a user, log in, and return the access token.
pub async fn register_and_login(server: &TestServer, username: &str) -> String {
    register_user(server, username).await;
    login(server, username).await
}

/// Create a post and return its JSON.
pub async fn create_post(server: &TestServer, token: &str, title: &str, content: &str) -> Value {
    let response = server
        .post("/posts")
        .add_header(AUTHORIZATION, format!("Bearer {}", token))
        .json(&json!({ "title": title, "content": content }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()
}
