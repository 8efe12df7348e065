//! Request DTOs for the web API.
//!
//! These types are also what the client serializes, so they derive both
//! directions.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::validation::{empty_string_as_none, no_control_chars, username_chars};

/// Login request. `identifier` is a username or an email address.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Username or email.
    #[serde(default)]
    pub identifier: String,
    /// Password.
    #[serde(default)]
    pub password: String,
}

/// User registration request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Username.
    #[validate(
        length(min = 3, max = 32, message = "Username must be 3-32 characters"),
        custom(function = "username_chars")
    )]
    pub username: String,
    /// Email (optional). A blank string is read as no email.
    #[serde(
        default,
        deserialize_with = "empty_string_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,
    /// Password.
    #[validate(length(min = 8, max = 128, message = "Password must be 8-128 characters"))]
    pub password: String,
}

/// Title and content of a post, used for both creation and edits.
///
/// Required-field and length rules live in [`crate::blog::BlogService`];
/// only the character set is checked here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct PostDraft {
    /// Post title.
    #[validate(custom(function = "no_control_chars"))]
    pub title: String,
    /// Post content (HTML).
    pub content: String,
}

impl PostDraft {
    /// Create a new draft.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// Comment creation request. The content is stored as given.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CreateCommentRequest {
    /// Comment text.
    #[serde(default)]
    pub content: String,
}
