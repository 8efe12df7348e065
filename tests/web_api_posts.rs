//! Web API Post Tests
//!
//! Integration tests for listing, creating, editing and deleting posts.

mod common;

use axum::http::header::AUTHORIZATION;
use axum::http::StatusCode;
use common::{create_post, create_test_server, register_and_login};
use inkwell::blog::{CommentRepository, MAX_TITLE_LENGTH};
use serde_json::{json, Value};

#[tokio::test]
async fn test_list_posts_empty() {
    let (server, _db) = create_test_server().await;

    let response = server.get("/posts").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!([]));
}

#[tokio::test]
async fn test_list_posts_with_comments() {
    let (server, _db) = create_test_server().await;
    let alice = register_and_login(&server, "alice").await;
    let bob = register_and_login(&server, "bob").await;

    let first = create_post(&server, &alice, "First", "<p>one</p>").await;
    let second = create_post(&server, &alice, "Second", "<p>two</p>").await;

    server
        .post(&format!("/posts/{}/comments", first["id"]))
        .add_header(AUTHORIZATION, format!("Bearer {}", bob))
        .json(&json!({ "content": "Nice" }))
        .await
        .assert_status(StatusCode::CREATED);

    let posts = server.get("/posts").await.json::<Value>();
    let posts = posts.as_array().unwrap();
    assert_eq!(posts.len(), 2);

    // Newest first
    assert_eq!(posts[0]["id"], second["id"]);
    assert_eq!(posts[0]["Comments"], json!([]));
    assert_eq!(posts[1]["Comments"][0]["username"], "bob");
    assert_eq!(posts[1]["Comments"][0]["content"], "Nice");
    assert!(posts[1]["createdAt"].is_string());
    assert!(posts[1]["updatedAt"].is_string());
}

#[tokio::test]
async fn test_create_post_requires_auth() {
    let (server, _db) = create_test_server().await;

    let response = server
        .post("/posts")
        .json(&json!({ "title": "t", "content": "c" }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_post_sets_owner_from_token() {
    let (server, _db) = create_test_server().await;
    let token = register_and_login(&server, "alice").await;

    let post = create_post(&server, &token, "Hello", "<b>World</b>").await;
    assert_eq!(post["username"], "alice");
    assert_eq!(post["title"], "Hello");
    // HTML is stored as given
    assert_eq!(post["content"], "<b>World</b>");
}

#[tokio::test]
async fn test_create_post_validation() {
    let (server, _db) = create_test_server().await;
    let token = register_and_login(&server, "alice").await;

    let response = server
        .post("/posts")
        .add_header(AUTHORIZATION, format!("Bearer {}", token))
        .json(&json!({ "title": "   ", "content": "body" }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.json::<Value>()["message"], "title is required");

    let response = server
        .post("/posts")
        .add_header(AUTHORIZATION, format!("Bearer {}", token))
        .json(&json!({ "title": "Title", "content": "" }))
        .await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.json::<Value>()["message"], "content is required");

    let response = server
        .post("/posts")
        .add_header(AUTHORIZATION, format!("Bearer {}", token))
        .json(&json!({ "title": "Bad\u{7}title", "content": "body" }))
        .await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.json::<Value>()["details"]["title"].is_array());
}

#[tokio::test]
async fn test_create_post_title_length_limit() {
    let (server, _db) = create_test_server().await;
    let token = register_and_login(&server, "alice").await;

    let response = server
        .post("/posts")
        .add_header(AUTHORIZATION, format!("Bearer {}", token))
        .json(&json!({ "title": "x".repeat(MAX_TITLE_LENGTH + 1), "content": "body" }))
        .await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        response.json::<Value>()["message"],
        format!("title must be at most {MAX_TITLE_LENGTH} characters")
    );

    create_post(&server, &token, &"x".repeat(MAX_TITLE_LENGTH), "body").await;
}

#[tokio::test]
async fn test_get_post() {
    let (server, _db) = create_test_server().await;
    let token = register_and_login(&server, "alice").await;
    let post = create_post(&server, &token, "Hello", "World").await;

    let response = server.get(&format!("/posts/{}", post["id"])).await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["title"], "Hello");

    for path in ["/posts/9999", "/posts/abc"] {
        let response = server.get(path).await;
        response.assert_status(StatusCode::NOT_FOUND);
        assert_eq!(response.json::<Value>()["message"], "Post not found");
    }
}

#[tokio::test]
async fn test_update_post_by_owner() {
    let (server, _db) = create_test_server().await;
    let token = register_and_login(&server, "alice").await;
    let post = create_post(&server, &token, "Old", "old body").await;

    let response = server
        .put(&format!("/posts/{}", post["id"]))
        .add_header(AUTHORIZATION, format!("Bearer {}", token))
        .json(&json!({ "title": "New", "content": "new body" }))
        .await;

    response.assert_status_ok();
    let updated = response.json::<Value>();
    assert_eq!(updated["id"], post["id"]);
    assert_eq!(updated["title"], "New");
    assert_eq!(updated["content"], "new body");
    assert_eq!(updated["username"], "alice");
}

#[tokio::test]
async fn test_update_post_by_other_user_forbidden() {
    let (server, _db) = create_test_server().await;
    let alice = register_and_login(&server, "alice").await;
    let mallory = register_and_login(&server, "mallory").await;
    let post = create_post(&server, &alice, "Mine", "body").await;

    let response = server
        .put(&format!("/posts/{}", post["id"]))
        .add_header(AUTHORIZATION, format!("Bearer {}", mallory))
        .json(&json!({ "title": "Hacked", "content": "body" }))
        .await;
    response.assert_status(StatusCode::FORBIDDEN);

    let current = server
        .get(&format!("/posts/{}", post["id"]))
        .await
        .json::<Value>();
    assert_eq!(current["title"], "Mine");
}

#[tokio::test]
async fn test_update_missing_post() {
    let (server, _db) = create_test_server().await;
    let token = register_and_login(&server, "alice").await;

    let response = server
        .put("/posts/424242")
        .add_header(AUTHORIZATION, format!("Bearer {}", token))
        .json(&json!({ "title": "New", "content": "body" }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_post_by_owner_removes_comments() {
    let (server, db) = create_test_server().await;
    let token = register_and_login(&server, "alice").await;
    let post = create_post(&server, &token, "Doomed", "body").await;
    let post_id = post["id"].as_i64().unwrap();

    server
        .post(&format!("/posts/{}/comments", post_id))
        .add_header(AUTHORIZATION, format!("Bearer {}", token))
        .json(&json!({ "content": "first!" }))
        .await
        .assert_status(StatusCode::CREATED);

    let response = server
        .delete(&format!("/posts/{}", post_id))
        .add_header(AUTHORIZATION, format!("Bearer {}", token))
        .await;
    response.assert_status_ok();
    assert!(response.json::<Value>()["message"].is_string());

    server
        .get(&format!("/posts/{}", post_id))
        .await
        .assert_status(StatusCode::NOT_FOUND);

    let remaining = CommentRepository::new(db.pool())
        .count_by_post(post_id)
        .await
        .unwrap();
    assert_eq!(remaining, 0);
}

#[tokio::test]
async fn test_delete_post_by_other_user_forbidden() {
    let (server, _db) = create_test_server().await;
    let alice = register_and_login(&server, "alice").await;
    let mallory = register_and_login(&server, "mallory").await;
    let post = create_post(&server, &alice, "Mine", "body").await;

    server
        .delete(&format!("/posts/{}", post["id"]))
        .add_header(AUTHORIZATION, format!("Bearer {}", mallory))
        .await
        .assert_status(StatusCode::FORBIDDEN);

    server
        .get(&format!("/posts/{}", post["id"]))
        .await
        .assert_status_ok();
}
