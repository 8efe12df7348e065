//! User registration and credential checks for Inkwell.

use tracing::{debug, info};

use crate::auth::{hash_password, verify_password, PasswordError};
use crate::db::{NewUser, User, UserRepository};
use crate::{InkwellError, Result};

/// Registration request data.
#[derive(Debug, Clone)]
pub struct RegistrationRequest {
    /// Desired username.
    pub username: String,
    /// Plain-text password (8-128 characters).
    pub password: String,
    /// Optional email address.
    pub email: Option<String>,
}

impl RegistrationRequest {
    /// Create a new registration request.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            email: None,
        }
    }

    /// Set the email address.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

impl From<PasswordError> for InkwellError {
    fn from(e: PasswordError) -> Self {
        match e {
            PasswordError::TooShort | PasswordError::TooLong => {
                InkwellError::Validation(e.to_string())
            }
            PasswordError::VerificationFailed | PasswordError::InvalidHash => {
                InkwellError::Auth(e.to_string())
            }
            PasswordError::HashError(msg) => InkwellError::Internal(msg),
        }
    }
}

/// Register a new user.
///
/// Checks that the username and email are free, hashes the password and
/// stores the user.
pub async fn register(repo: &UserRepository<'_>, request: RegistrationRequest) -> Result<User> {
    if repo.username_exists(&request.username).await? {
        return Err(InkwellError::Conflict("username already taken".to_string()));
    }
    if let Some(ref email) = request.email {
        if repo.email_exists(email).await? {
            return Err(InkwellError::Conflict("email already registered".to_string()));
        }
    }

    let password_hash = hash_password(&request.password)?;

    let mut new_user = NewUser::new(&request.username, password_hash);
    if let Some(email) = request.email {
        new_user = new_user.with_email(email);
    }

    let user = repo.create(&new_user).await?;
    info!(user_id = user.id, username = %user.username, "User registered");
    Ok(user)
}

/// Check login credentials.
///
/// `identifier` may be a username or an email address. Unknown users and
/// wrong passwords fail with the same `Auth` error.
pub async fn authenticate(
    repo: &UserRepository<'_>,
    identifier: &str,
    password: &str,
) -> Result<User> {
    let invalid = || InkwellError::Auth("Invalid credentials".to_string());

    let user = repo.get_by_identifier(identifier).await?.ok_or_else(|| {
        debug!(identifier, "Login failed: unknown identifier");
        invalid()
    })?;

    verify_password(password, &user.password).map_err(|_| {
        debug!(user_id = user.id, "Login failed: wrong password");
        invalid()
    })?;

    Ok(user)
}
