//! Blog module for Inkwell.
//!
//! This module provides the blog domain:
//! - Posts owned by a user, editable and deletable by that user only
//! - Append-only comments attached to exactly one post
//! - A service layer that checks post existence and ownership

mod comment;
mod comment_repository;
mod post;
mod post_repository;
mod service;

pub use comment::{Comment, NewComment};
pub use comment_repository::CommentRepository;
pub use post::{NewPost, Post, PostUpdate};
pub use post_repository::PostRepository;
pub use service::{BlogService, PostWithComments, MAX_CONTENT_LENGTH, MAX_TITLE_LENGTH};
