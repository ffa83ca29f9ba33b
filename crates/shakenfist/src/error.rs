//! Error types for the shakenfist client.
//!
//! A single [`Error`] enum covers every failure a call can produce, with
//! separate variants for transport, authentication, status, encoding and
//! input validation failures so callers can match on the kind they care about.

use thiserror::Error;

/// The unified error type for client operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The server could not be reached (DNS, refused connection, timeout).
    #[error("unable to connect to server: {0}")]
    Connection(#[from] ConnectionError),

    /// Obtaining or refreshing the bearer token failed.
    #[error("unable to get auth token: {0}")]
    Authentication(#[from] AuthError),

    /// The server answered with a non-2xx status.
    #[error("received non 200 status code: {status} - {body}")]
    UnexpectedStatus {
        /// HTTP status code.
        status: u16,
        /// Response body, verbatim.
        body: String,
    },

    /// A successful response body did not match the expected JSON shape.
    #[error("unable to decode response body: {0}")]
    Decoding(#[source] serde_json::Error),

    /// A request payload could not be serialized to JSON.
    #[error("unable to marshal request: {0}")]
    Marshal(#[source] serde_json::Error),

    /// Input validation errors (malformed base URL and similar).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

impl Error {
    /// Returns the HTTP status code when the server produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the server rejected the bearer token.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum ConnectionError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connect { message: String },

    /// Request timed out.
    #[error("request timed out: {message}")]
    Timeout { message: String },

    /// Any other failure raised by the HTTP stack, including body reads.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

impl From<reqwest::Error> for ConnectionError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ConnectionError::Timeout {
                message: err.to_string(),
            }
        } else if err.is_connect() {
            ConnectionError::Connect {
                message: err.to_string(),
            }
        } else {
            ConnectionError::Http {
                message: err.to_string(),
            }
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Connection(ConnectionError::from(err))
    }
}

/// Failures of the `/auth` exchange.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The auth request body could not be serialized.
    #[error("unable to marshal auth request: {0}")]
    Marshal(#[source] serde_json::Error),

    /// The auth request itself failed (unreachable server or non-2xx status).
    #[error("auth request failed: {0}")]
    Request(#[source] Box<Error>),

    /// The auth response did not carry an access token.
    #[error("unable to decode auth response: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid API base URL.
    #[error("invalid base URL '{value}': {reason}")]
    BaseUrl { value: String, reason: String },

    /// Unknown resource kind name.
    #[error("unknown resource kind '{value}' (expected namespace, instance or network)")]
    ResourceKind { value: String },

    /// Invalid header value (for example a token with control characters).
    #[error("invalid header value: {reason}")]
    Header { reason: String },
}
