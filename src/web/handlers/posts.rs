//! Post handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::blog::{BlogService, PostUpdate};
use crate::web::dto::{MessageResponse, PostDraft, PostResponse, ValidatedJson};
use crate::web::error::ApiError;
use crate::web::handlers::{parse_post_id, AppState};
use crate::web::middleware::AuthUser;

/// GET /posts - List all posts with their comments, newest first.
pub async fn list_posts(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<PostResponse>>, ApiError> {
    let posts = BlogService::new(&state.db).list_posts().await?;
    Ok(Json(posts.into_iter().map(PostResponse::from).collect()))
}

/// GET /posts/:id - Get a single post with its comments.
pub async fn get_post(
    State(state): State<Arc<AppState>>,
    Path(post_id): Path<String>,
) -> Result<Json<PostResponse>, ApiError> {
    let post_id = parse_post_id(&post_id)?;
    let post = BlogService::new(&state.db).get_post(post_id).await?;
    Ok(Json(post.into()))
}

/// POST /posts - Create a post owned by the caller.
pub async fn create_post(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    ValidatedJson(draft): ValidatedJson<PostDraft>,
) -> Result<(StatusCode, Json<PostResponse>), ApiError> {
    let post = BlogService::new(&state.db)
        .create_post(user.username(), &draft.title, &draft.content)
        .await?;
    Ok((StatusCode::CREATED, Json(PostResponse::new(post, Vec::new()))))
}

/// PUT /posts/:id - Replace the title and content of the caller's post.
pub async fn update_post(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(post_id): Path<String>,
    ValidatedJson(draft): ValidatedJson<PostDraft>,
) -> Result<Json<PostResponse>, ApiError> {
    let post_id = parse_post_id(&post_id)?;
    let service = BlogService::new(&state.db);
    let update = PostUpdate::new().title(draft.title).content(draft.content);

    service
        .update_post(post_id, user.username(), &update)
        .await?;
    let post = service.get_post(post_id).await?;

    Ok(Json(post.into()))
}

/// DELETE /posts/:id - Delete the caller's post and its comments.
pub async fn delete_post(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(post_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let post_id = parse_post_id(&post_id)?;
    BlogService::new(&state.db)
        .delete_post(post_id, user.username())
        .await?;
    Ok(Json(MessageResponse::new("Post deleted")))
}
