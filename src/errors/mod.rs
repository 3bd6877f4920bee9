//! Error types for the Dotykacka client.
//!
//! Every fallible operation returns [`DotykackaResult`]. The error is `Clone`
//! because a single token fetch may be awaited by several operations at once.

use thiserror::Error;

/// Result type alias for Dotykacka operations.
pub type DotykackaResult<T> = Result<T, DotykackaError>;

/// Error type for Dotykacka client operations.
#[derive(Debug, Clone, Error)]
pub enum DotykackaError {
    /// The access token could not be obtained from the refresh token.
    #[error("Authentication failed: {message}")]
    Auth {
        /// Error message, including the cloud id and HTTP status when known.
        message: String,
    },

    /// The request was rejected locally before anything was sent.
    #[error("Validation error: {message}")]
    Validation {
        /// Error message describing the validation issue.
        message: String,
    },

    /// A domain endpoint answered with a non-2xx status.
    #[error("API error (HTTP {status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message. Embeds the response body for HTTP 400.
        message: String,
        /// Raw response body, kept only for HTTP 400.
        body: Option<String>,
    },

    /// Request timeout.
    #[error("Request timeout: {message}")]
    Timeout {
        /// Error message.
        message: String,
    },

    /// Network/connection error.
    #[error("Connection error: {message}")]
    Connection {
        /// Error message.
        message: String,
    },

    /// Request body could not be serialized.
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error message.
        message: String,
    },

    /// Response body could not be parsed.
    #[error("Deserialization error: {message}")]
    Deserialization {
        /// Error message.
        message: String,
        /// The body that failed to parse.
        body: String,
    },

    /// Invalid client configuration.
    #[error("Configuration error: {message}")]
    Configuration {
        /// Error message describing the configuration issue.
        message: String,
    },
}

impl DotykackaError {
    /// Builds the error for a non-2xx response from a domain endpoint.
    ///
    /// HTTP 400 keeps the server's body verbatim, both in the message and in
    /// `body`. Every other status gets a generic message.
    pub fn from_response(status: u16, body: &[u8], context: &str) -> Self {
        if status == 400 {
            let body = String::from_utf8_lossy(body).into_owned();
            DotykackaError::Api {
                status,
                message: format!("{context}. {body}"),
                body: Some(body),
            }
        } else {
            DotykackaError::Api {
                status,
                message: format!("{context}: request failed with HTTP {status}"),
                body: None,
            }
        }
    }

    /// Returns the HTTP status code if this error came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            DotykackaError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true for an HTTP 400 answer from a domain endpoint.
    pub fn is_bad_request(&self) -> bool {
        self.status() == Some(400)
    }

    /// Returns true if the failure points at the access token.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, DotykackaError::Auth { .. })
            || matches!(self.status(), Some(401 | 403))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        DotykackaError::Validation {
            message: message.into(),
        }
    }

    /// Creates a deserialization error for the given body.
    pub fn deserialization(err: &serde_json::Error, body: &[u8]) -> Self {
        DotykackaError::Deserialization {
            message: err.to_string(),
            body: String::from_utf8_lossy(body).into_owned(),
        }
    }
}

impl From<reqwest::Error> for DotykackaError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            DotykackaError::Timeout {
                message: err.to_string(),
            }
        } else {
            DotykackaError::Connection {
                message: err.to_string(),
            }
        }
    }
}

impl From<serde_json::Error> for DotykackaError {
    fn from(err: serde_json::Error) -> Self {
        DotykackaError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<url::ParseError> for DotykackaError {
    fn from(err: url::ParseError) -> Self {
        DotykackaError::Configuration {
            message: format!("Invalid URL: {}", err),
        }
    }
}
