//! Blog service for Inkwell.
//!
//! High-level operations over posts and comments: existence checks before
//! writes and owner checks on post mutation.

use std::collections::HashMap;

use tracing::{debug, info};

use crate::db::Database;
use crate::{InkwellError, Result};

use super::comment::{Comment, NewComment};
use super::comment_repository::CommentRepository;
use super::post::{NewPost, Post, PostUpdate};
use super::post_repository::PostRepository;

/// Maximum length for post titles (in characters).
pub const MAX_TITLE_LENGTH: usize = 200;

/// Maximum length for post content (in characters).
pub const MAX_CONTENT_LENGTH: usize = 100_000;

fn validate_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(InkwellError::Validation("title is required".to_string()));
    }
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(InkwellError::Validation(format!(
            "title must be at most {MAX_TITLE_LENGTH} characters"
        )));
    }
    Ok(())
}

fn validate_content(content: &str) -> Result<()> {
    if content.trim().is_empty() {
        return Err(InkwellError::Validation("content is required".to_string()));
    }
    if content.chars().count() > MAX_CONTENT_LENGTH {
        return Err(InkwellError::Validation(format!(
            "content must be at most {MAX_CONTENT_LENGTH} characters"
        )));
    }
    Ok(())
}

/// A post together with its comments, oldest comment first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostWithComments {
    /// The post.
    pub post: Post,
    /// Comments attached to the post.
    pub comments: Vec<Comment>,
}

/// Service for blog operations.
pub struct BlogService<'a> {
    db: &'a Database,
}

impl<'a> BlogService<'a> {
    /// Create a new BlogService with the given database reference.
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// List all posts, newest first, each with its comments.
    pub async fn list_posts(&self) -> Result<Vec<PostWithComments>> {
        let posts = PostRepository::new(self.db.pool()).list_all().await?;
        let comments = CommentRepository::new(self.db.pool()).list_all().await?;

        let mut by_post: HashMap<i64, Vec<Comment>> = HashMap::new();
        for comment in comments {
            by_post.entry(comment.post_id).or_default().push(comment);
        }

        Ok(posts
            .into_iter()
            .map(|post| {
                let comments = by_post.remove(&post.id).unwrap_or_default();
                PostWithComments { post, comments }
            })
            .collect())
    }

    /// Get a single post with its comments.
    pub async fn get_post(&self, post_id: i64) -> Result<PostWithComments> {
        let post = self.find_post(post_id).await?;
        let comments = CommentRepository::new(self.db.pool())
            .list_by_post(post_id)
            .await?;
        Ok(PostWithComments { post, comments })
    }

    /// Create a post owned by `username`.
    pub async fn create_post(&self, username: &str, title: &str, content: &str) -> Result<Post> {
        validate_title(title)?;
        validate_content(content)?;

        let post = PostRepository::new(self.db.pool())
            .create(&NewPost::new(username, title, content))
            .await?;
        info!(post_id = post.id, username, "Post created");
        Ok(post)
    }

    /// Update a post's title and/or content.
    ///
    /// Only the owner may update a post.
    pub async fn update_post(
        &self,
        post_id: i64,
        username: &str,
        update: &PostUpdate,
    ) -> Result<Post> {
        if let Some(ref title) = update.title {
            validate_title(title)?;
        }
        if let Some(ref content) = update.content {
            validate_content(content)?;
        }

        let post = self.find_post(post_id).await?;
        if !post.is_owned_by(username) {
            return Err(InkwellError::Permission(
                "only the owner can edit this post".to_string(),
            ));
        }

        let updated = PostRepository::new(self.db.pool())
            .update(post_id, update)
            .await?
            .ok_or_else(|| InkwellError::NotFound("Post".to_string()))?;
        info!(post_id, username, "Post updated");
        Ok(updated)
    }

    /// Delete a post and, through the cascade, its comments.
    ///
    /// Only the owner may delete a post.
    pub async fn delete_post(&self, post_id: i64, username: &str) -> Result<()> {
        let post = self.find_post(post_id).await?;
        if !post.is_owned_by(username) {
            return Err(InkwellError::Permission(
                "only the owner can delete this post".to_string(),
            ));
        }

        if !PostRepository::new(self.db.pool()).delete(post_id).await? {
            return Err(InkwellError::NotFound("Post".to_string()));
        }
        info!(post_id, username, "Post deleted");
        Ok(())
    }

    /// Add a comment to a post.
    ///
    /// Fails with `NotFound("Post")` before any write if the post does not
    /// exist. The content is stored as given; empty text is accepted.
    pub async fn create_comment(
        &self,
        post_id: i64,
        username: &str,
        content: &str,
    ) -> Result<Comment> {
        if !PostRepository::new(self.db.pool()).exists(post_id).await? {
            debug!(post_id, "Comment rejected: post does not exist");
            return Err(InkwellError::NotFound("Post".to_string()));
        }

        let comment = CommentRepository::new(self.db.pool())
            .create(&NewComment::new(post_id, username, content))
            .await?;
        info!(post_id, comment_id = comment.id, username, "Comment created");
        Ok(comment)
    }

    async fn find_post(&self, post_id: i64) -> Result<Post> {
        PostRepository::new(self.db.pool())
            .get_by_id(post_id)
            .await?
            .ok_or_else(|| InkwellError::NotFound("Post".to_string()))
    }
}
