//! Client session holding the bearer token.

/// The authentication state of one client.
///
/// Request-issuing functions take the session explicitly; there is no
/// process-wide token storage.
#[derive(Debug, Clone, Default)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    /// Create a session with no token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session that already holds a token.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    /// Store the token received at login.
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    /// The current token, if logged in.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Check whether a token is held.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Forget the token (logout).
    pub fn clear(&mut self) {
        self.token = None;
    }
}
