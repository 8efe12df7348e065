//! Comment repository for Inkwell.

use super::comment::{Comment, NewComment};
use crate::db::DbPool;
use crate::{InkwellError, Result};

/// Repository for comment persistence.
pub struct CommentRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> CommentRepository<'a> {
    /// Create a new CommentRepository with the given database pool reference.
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Insert a comment row.
    ///
    /// Returns the created comment with the assigned ID and timestamp.
    pub async fn create(&self, new_comment: &NewComment) -> Result<Comment> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO comments (post_id, username, content) VALUES (?, ?, ?) RETURNING id",
        )
        .bind(new_comment.post_id)
        .bind(&new_comment.username)
        .bind(&new_comment.content)
        .fetch_one(self.pool)
        .await
        .map_err(|e| InkwellError::Database(e.to_string()))?;

        self.get_by_id(id)
            .await?
            .ok_or_else(|| InkwellError::NotFound("Comment".to_string()))
    }

    /// Get a comment by ID.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Comment>> {
        let comment = sqlx::query_as::<_, Comment>(
            "SELECT id, post_id, username, content, created_at FROM comments WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| InkwellError::Database(e.to_string()))?;

        Ok(comment)
    }

    /// List comments on a post, oldest first.
    pub async fn list_by_post(&self, post_id: i64) -> Result<Vec<Comment>> {
        let comments = sqlx::query_as::<_, Comment>(
            "SELECT id, post_id, username, content, created_at
             FROM comments WHERE post_id = ? ORDER BY created_at ASC, id ASC",
        )
        .bind(post_id)
        .fetch_all(self.pool)
        .await
        .map_err(|e| InkwellError::Database(e.to_string()))?;

        Ok(comments)
    }

    /// List every comment, grouped by post and oldest first within a post.
    pub async fn list_all(&self) -> Result<Vec<Comment>> {
        let comments = sqlx::query_as::<_, Comment>(
            "SELECT id, post_id, username, content, created_at
             FROM comments ORDER BY post_id ASC, created_at ASC, id ASC",
        )
        .fetch_all(self.pool)
        .await
        .map_err(|e| InkwellError::Database(e.to_string()))?;

        Ok(comments)
    }

    /// Count comments on a post.
    pub async fn count_by_post(&self, post_id: i64) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM comments WHERE post_id = ?")
            .bind(post_id)
            .fetch_one(self.pool)
            .await
            .map_err(|e| InkwellError::Database(e.to_string()))?;
        Ok(count)
    }
}
