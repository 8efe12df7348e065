//! Comment handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::blog::BlogService;
use crate::web::dto::{CommentResponse, CreateCommentRequest, ValidatedJson};
use crate::web::error::ApiError;
use crate::web::handlers::{parse_post_id, AppState};
use crate::web::middleware::AuthUser;

/// POST /posts/:id/comments - Add a comment to a post.
///
/// Responds 404 without writing anything when the post does not exist,
/// including ids that are not numbers at all.
pub async fn create_comment(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(post_id): Path<String>,
    ValidatedJson(req): ValidatedJson<CreateCommentRequest>,
) -> Result<(StatusCode, Json<CommentResponse>), ApiError> {
    let post_id = parse_post_id(&post_id)?;
    let comment = BlogService::new(&state.db)
        .create_comment(post_id, user.username(), &req.content)
        .await?;
    Ok((StatusCode::CREATED, Json(comment.into())))
}
