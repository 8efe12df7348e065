//! Login form.

use thiserror::Error;
use tracing::{info, warn};

use super::api::AuthApi;
use super::session::Session;
use crate::web::dto::LoginRequest;

/// Why a login attempt did not produce a session.
///
/// The `Display` text is what the form shows to the user.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum LoginError {
    /// The server accepted the request but sent no token.
    #[error("Invalid response from server. Please try again")]
    MissingToken,
    /// The server rejected the credentials with a message.
    #[error("{0}")]
    Rejected(String),
    /// Anything else (network failure, unexpected body).
    #[error("Something went wrong. Please try again.")]
    Unknown,
}

/// Credentials typed into the login form.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    /// Username or email.
    pub identifier: String,
    /// Password.
    pub password: String,
}

impl LoginForm {
    /// Create a filled-in form.
    pub fn new(identifier: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            password: password.into(),
        }
    }

    /// Submit the form and store the returned token in `session`.
    ///
    /// The session is left untouched on failure.
    pub async fn submit<A: AuthApi>(
        &self,
        api: &A,
        session: &mut Session,
    ) -> Result<(), LoginError> {
        let request = LoginRequest {
            identifier: self.identifier.clone(),
            password: self.password.clone(),
        };

        match api.login(&request).await {
            Ok(response) => {
                let token = response.token.ok_or(LoginError::MissingToken)?;
                session.set_token(token);
                info!(identifier = %self.identifier, "Logged in");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Login failed");
                match e.server_message() {
                    Some(message) => Err(LoginError::Rejected(message.to_string())),
                    None => Err(LoginError::Unknown),
                }
            }
        }
    }
}
