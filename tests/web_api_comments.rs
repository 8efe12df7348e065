//! Web API Comment Tests
//!
//! Integration tests for `POST /posts/:id/comments`.

mod common;

use axum::http::header::AUTHORIZATION;
use axum::http::StatusCode;
use common::{create_post, create_test_server, register_and_login};
use inkwell::blog::CommentRepository;
use serde_json::{json, Value};

#[tokio::test]
async fn test_create_comment_success() {
    let (server, _db) = create_test_server().await;
    let alice = register_and_login(&server, "alice").await;
    let bob = register_and_login(&server, "bob").await;
    let post = create_post(&server, &alice, "Hello", "World").await;

    let response = server
        .post(&format!("/posts/{}/comments", post["id"]))
        .add_header(AUTHORIZATION, format!("Bearer {}", bob))
        .json(&json!({ "content": "Great read" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let comment = response.json::<Value>();
    assert!(comment["id"].as_i64().is_some());
    assert_eq!(comment["postId"], post["id"]);
    assert_eq!(comment["username"], "bob");
    assert_eq!(comment["content"], "Great read");
    assert!(comment["createdAt"].is_string());
}

#[tokio::test]
async fn test_create_comment_on_missing_post_writes_nothing() {
    let (server, db) = create_test_server().await;
    let token = register_and_login(&server, "alice").await;

    let response = server
        .post("/posts/9999/comments")
        .add_header(AUTHORIZATION, format!("Bearer {}", token))
        .json(&json!({ "content": "Into the void" }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["message"], "Post not found");

    let comments = CommentRepository::new(db.pool()).list_all().await.unwrap();
    assert!(comments.is_empty());
}

#[tokio::test]
async fn test_create_comment_requires_auth() {
    let (server, db) = create_test_server().await;
    let token = register_and_login(&server, "alice").await;
    let post = create_post(&server, &token, "Hello", "World").await;

    let response = server
        .post(&format!("/posts/{}/comments", post["id"]))
        .json(&json!({ "content": "anonymous" }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    let count = CommentRepository::new(db.pool())
        .count_by_post(post["id"].as_i64().unwrap())
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn test_create_comment_accepts_empty_content() {
    let (server, _db) = create_test_server().await;
    let token = register_and_login(&server, "alice").await;
    let post = create_post(&server, &token, "Hello", "World").await;

    let response = server
        .post(&format!("/posts/{}/comments", post["id"]))
        .add_header(AUTHORIZATION, format!("Bearer {}", token))
        .json(&json!({ "content": "   " }))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.json::<Value>()["content"], "   ");
}

#[tokio::test]
async fn test_comments_listed_oldest_first() {
    let (server, _db) = create_test_server().await;
    let token = register_and_login(&server, "alice").await;
    let post = create_post(&server, &token, "Hello", "World").await;

    for text in ["one", "two", "three"] {
        server
            .post(&format!("/posts/{}/comments", post["id"]))
            .add_header(AUTHORIZATION, format!("Bearer {}", token))
            .json(&json!({ "content": text }))
            .await
            .assert_status(StatusCode::CREATED);
    }

    let fetched = server
        .get(&format!("/posts/{}", post["id"]))
        .await
        .json::<Value>();
    let contents: Vec<&str> = fetched["Comments"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["content"].as_str().unwrap())
        .collect();
    assert_eq!(contents, vec!["one", "two", "three"]);
}

#[tokio::test]
async fn test_create_comment_unparseable_post_id_is_not_found() {
    let (server, db) = create_test_server().await;
    let token = register_and_login(&server, "alice").await;

    for path in ["/posts/abc/comments", "/posts/99999999999999999999/comments"] {
        let response = server
            .post(path)
            .add_header(AUTHORIZATION, format!("Bearer {}", token))
            .json(&json!({ "content": "hello" }))
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
        let body = response.json::<Value>();
        assert_eq!(body["code"], "NOT_FOUND");
        assert_eq!(body["message"], "Post not found");
    }

    let comments = CommentRepository::new(db.pool()).list_all().await.unwrap();
    assert!(comments.is_empty());
}

#[tokio::test]
async fn test_create_comment_rejects_non_json_body() {
    let (server, db) = create_test_server().await;
    let token = register_and_login(&server, "alice").await;
    let post = create_post(&server, &token, "Hello", "World").await;
    let path = format!("/posts/{}/comments", post["id"]);

    let response = server
        .post(&path)
        .add_header(AUTHORIZATION, format!("Bearer {}", token))
        .text("just text")
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["code"], "BAD_REQUEST");

    let response = server
        .post(&path)
        .add_header(AUTHORIZATION, format!("Bearer {}", token))
        .text("{\"content\": ")
        .content_type("application/json")
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert_eq!(body["code"], "BAD_REQUEST");
    assert!(body["message"].as_str().unwrap().starts_with("Invalid JSON"));

    let count = CommentRepository::new(db.pool())
        .count_by_post(post["id"].as_i64().unwrap())
        .await
        .unwrap();
    assert_eq!(count, 0);
}
