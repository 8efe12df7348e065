//! Error types for the API client.

use thiserror::Error;

/// Errors returned by [`ApiClient`](super::ApiClient) calls.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The request could not be sent or the response body could not be read.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("server returned status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// The `message` field of the error body, when present.
        message: Option<String>,
    },

    /// The server answered with a body that does not match the expected shape.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// A request URL could not be built from the base URL.
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

impl ClientError {
    /// The human-readable message the server sent, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ClientError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// HTTP status of a rejected request.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_accessors() {
        let err = ClientError::Status {
            status: 404,
            message: Some("Post not found".to_string()),
        };
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.server_message(), Some("Post not found"));
        assert_eq!(err.to_string(), "server returned status 404");
    }

    #[test]
    fn test_invalid_response_has_no_server_message() {
        let err = ClientError::InvalidResponse("missing field `id`".to_string());
        assert!(err.server_message().is_none());
        assert!(err.status().is_none());
    }
}
