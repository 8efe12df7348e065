//! Response DTOs for the web API.
//!
//! Field names follow the wire format (`postId`, `createdAt`, `Comments`).
//! The client deserializes the same types.

use serde::{Deserialize, Serialize};

use crate::blog::{Comment, Post, PostWithComments};
use crate::db::User;

/// Login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Access token (JWT). Absent only on a malformed server reply.
    #[serde(default)]
    pub token: Option<String>,
}

/// Public view of a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    /// User ID.
    pub id: i64,
    /// Username.
    pub username: String,
    /// Email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Registration timestamp.
    pub created_at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            created_at: user.created_at,
        }
    }
}

/// A comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    /// Comment ID.
    pub id: i64,
    /// Parent post ID.
    pub post_id: i64,
    /// Author.
    pub username: String,
    /// Comment text.
    pub content: String,
    /// Creation timestamp.
    pub created_at: String,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            post_id: comment.post_id,
            username: comment.username,
            content: comment.content,
            created_at: comment.created_at,
        }
    }
}

/// A post with its comments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    /// Post ID.
    pub id: i64,
    /// Title.
    pub title: String,
    /// Content (HTML).
    pub content: String,
    /// Owner.
    pub username: String,
    /// Creation timestamp.
    pub created_at: String,
    /// Last modification timestamp.
    pub updated_at: String,
    /// Comments, oldest first.
    #[serde(rename = "Comments", default)]
    pub comments: Vec<CommentResponse>,
}

impl PostResponse {
    /// Build a response from a post and its comments.
    pub fn new(post: Post, comments: Vec<Comment>) -> Self {
        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            username: post.username,
            created_at: post.created_at,
            updated_at: post.updated_at,
            comments: comments.into_iter().map(CommentResponse::from).collect(),
        }
    }
}

impl From<PostWithComments> for PostResponse {
    fn from(p: PostWithComments) -> Self {
        Self::new(p.post, p.comments)
    }
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

impl MessageResponse {
    /// Create a new message response.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
