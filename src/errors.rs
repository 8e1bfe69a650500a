use http::StatusCode;

use crate::config::SessionConfigError;

/// Convenience alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The destination could not be reached (DNS, refused connection, timeout).
    #[error("Connection error: {0}")]
    Connection(#[source] reqwest::Error),

    /// Any other failure reported by the underlying HTTP client.
    #[error("Transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The status code is not part of the accepted success set.
    #[error("HTTP response contains some errors with '{status}' status code! Reason: {body}")]
    Response { status: StatusCode, body: String },

    #[error("Response body is not valid JSON: {0}")]
    Body(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] http::header::InvalidHeaderValue),

    #[error("Both a plain and a JSON body were supplied")]
    ConflictingBody,

    #[error("Session is closed")]
    SessionClosed,

    #[error("Invalid session config: {0}")]
    Config(#[from] SessionConfigError),
}

impl Error {
    /// Returns the status code for response errors.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Response { status, .. } => Some(*status),
            Error::Connection(e) | Error::Transport(e) => e.status(),
            _ => None,
        }
    }

    pub fn is_connection(&self) -> bool {
        matches!(self, Error::Connection(_))
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        if e.is_connect() || e.is_timeout() {
            Error::Connection(e)
        } else {
            Error::Transport(e)
        }
    }
}
