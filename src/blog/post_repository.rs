//! Post repository for Inkwell.
//!
//! This module provides CRUD operations for posts in the database.

use sqlx::QueryBuilder;

use super::post::{NewPost, Post, PostUpdate};
use crate::db::DbPool;
use crate::{InkwellError, Result};

/// Repository for post CRUD operations.
pub struct PostRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> PostRepository<'a> {
    /// Create a new PostRepository with the given database pool reference.
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Create a new post.
    ///
    /// Returns the created post with the assigned ID and timestamps.
    pub async fn create(&self, new_post: &NewPost) -> Result<Post> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO posts (title, content, username) VALUES (?, ?, ?) RETURNING id",
        )
        .bind(&new_post.title)
        .bind(&new_post.content)
        .bind(&new_post.username)
        .fetch_one(self.pool)
        .await
        .map_err(|e| InkwellError::Database(e.to_string()))?;

        self.get_by_id(id)
            .await?
            .ok_or_else(|| InkwellError::NotFound("Post".to_string()))
    }

    /// Get a post by ID.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Post>> {
        let post = sqlx::query_as::<_, Post>(
            "SELECT id, title, content, username, created_at, updated_at
             FROM posts WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| InkwellError::Database(e.to_string()))?;

        Ok(post)
    }

    /// Update a post by ID.
    ///
    /// Only fields that are set in the update will be modified; `updated_at`
    /// is refreshed. Returns the updated post, or None if not found.
    pub async fn update(&self, id: i64, update: &PostUpdate) -> Result<Option<Post>> {
        if update.is_empty() {
            return self.get_by_id(id).await;
        }

        let mut query: QueryBuilder<sqlx::Sqlite> = QueryBuilder::new("UPDATE posts SET ");
        let mut separated = query.separated(", ");

        if let Some(ref title) = update.title {
            separated.push("title = ");
            separated.push_bind_unseparated(title);
        }
        if let Some(ref content) = update.content {
            separated.push("content = ");
            separated.push_bind_unseparated(content);
        }
        separated.push("updated_at = datetime('now')");

        query.push(" WHERE id = ");
        query.push_bind(id);

        let result = query
            .build()
            .execute(self.pool)
            .await
            .map_err(|e| InkwellError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.get_by_id(id).await
    }

    /// Delete a post by ID. Its comments are removed by the foreign key cascade.
    ///
    /// Returns true if a post was deleted, false if not found.
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM posts WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(|e| InkwellError::Database(e.to_string()))?;
        Ok(result.rows_affected() > 0)
    }

    /// List all posts, newest first.
    pub async fn list_all(&self) -> Result<Vec<Post>> {
        let posts = sqlx::query_as::<_, Post>(
            "SELECT id, title, content, username, created_at, updated_at
             FROM posts ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(self.pool)
        .await
        .map_err(|e| InkwellError::Database(e.to_string()))?;

        Ok(posts)
    }

    /// Check if a post exists.
    pub async fn exists(&self, id: i64) -> Result<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM posts WHERE id = ?)")
            .bind(id)
            .fetch_one(self.pool)
            .await
            .map_err(|e| InkwellError::Database(e.to_string()))?;
        Ok(exists)
    }

    /// Count all posts.
    #[cfg(test)]
    pub async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM posts")
            .fetch_one(self.pool)
            .await
            .map_err(|e| InkwellError::Database(e.to_string()))?;
        Ok(count)
    }
}
