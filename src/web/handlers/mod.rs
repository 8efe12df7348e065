//! API handlers.

pub mod auth;
pub mod comments;
pub mod posts;

pub use auth::*;
pub use comments::*;
pub use posts::*;

use crate::web::error::ApiError;

/// Parse the `:id` path segment of a post route.
///
/// An id that is not a number, or does not fit in an `i64`, cannot name a
/// stored post, so it is answered like any other missing post.
pub(crate) fn parse_post_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>()
        .map_err(|_| ApiError::not_found("Post not found"))
}
