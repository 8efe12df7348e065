//! Comment model for Inkwell.
//!
//! Comments are append-only: there is no update or delete path.

/// A comment attached to exactly one post.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Comment {
    /// Unique comment ID.
    pub id: i64,
    /// ID of the parent post.
    pub post_id: i64,
    /// Username of the author.
    pub username: String,
    /// Comment text.
    pub content: String,
    /// Creation timestamp.
    pub created_at: String,
}

/// Data for creating a new comment.
#[derive(Debug, Clone)]
pub struct NewComment {
    /// ID of the parent post.
    pub post_id: i64,
    /// Username of the author.
    pub username: String,
    /// Comment text.
    pub content: String,
}

impl NewComment {
    /// Create a new comment with required fields.
    pub fn new(post_id: i64, username: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            post_id,
            username: username.into(),
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_comment() {
        let comment = NewComment::new(7, "bob", "nice post");
        assert_eq!(comment.post_id, 7);
        assert_eq!(comment.username, "bob");
        assert_eq!(comment.content, "nice post");
    }
}
