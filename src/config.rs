//! Session configuration.
//!
//! `SessionConfig` controls how an [`HttpSession`](crate::session::HttpSession)
//! talks to the transport: which user agent it announces, which headers are
//! attached to every request, and which status codes count as success.
//!
//! `SessionConfig` provides sensible defaults via [`Default`] and a fluent
//! [`SessionConfig::builder()`] for customization with validation.
//!
//! # Examples
//!
//! ## Use defaults
//! ```rust
//! use urequest::SessionConfig;
//! let cfg = SessionConfig::default();
//! assert_eq!(cfg.success_codes.len(), 3);
//! ```
//!
//! ## Customize with the builder
//! ```rust
//! use urequest::{SessionConfig, StatusCode};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let cfg = SessionConfig::builder()
//!     .user_agent("my-tool/0.3")
//!     .header("x-api-version", "2")
//!     .success_codes([StatusCode::OK, StatusCode::ACCEPTED])
//!     .build()?; // returns Result<SessionConfig, SessionConfigError>
//! # Ok(()) }
//! ```
//!
//! # Errors
//!
//! Builder validation returns [`SessionConfigError`] when the success set is
//! empty, the user agent is blank, or a header name/value is not valid HTTP.

use std::fmt;

use http::header::{HeaderMap, HeaderName, HeaderValue};
use http::StatusCode;

use crate::net::DEFAULT_SUCCESS_CODES;

const DEFAULT_USER_AGENT: &str = concat!("urequest/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// User agent string for HTTP requests
    pub user_agent: String,
    /// Status codes a session accepts; anything else becomes a response error
    pub success_codes: Vec<StatusCode>,
    /// Headers attached to every request
    pub default_headers: HeaderMap,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            success_codes: DEFAULT_SUCCESS_CODES.to_vec(),
            default_headers: HeaderMap::new(),
        }
    }
}

impl SessionConfig {
    pub fn builder() -> SessionConfigBuilder {
        SessionConfigBuilder::default()
    }

    /// Checks a config built by hand. Sessions run this on construction.
    pub fn validate(&self) -> Result<(), SessionConfigError> {
        validate(self)
    }
}

/// Builder for [`SessionConfig`].
#[derive(Debug, Clone, Default)]
pub struct SessionConfigBuilder {
    inner: SessionConfig,
    /// First header rejected by `header()`, reported by `build()`
    invalid_header: Option<String>,
}

impl SessionConfigBuilder {
    #[inline]
    fn map(mut self, f: impl FnOnce(&mut SessionConfig)) -> Self {
        f(&mut self.inner);
        self
    }

    pub fn user_agent<S: Into<String>>(self, ua: S) -> Self { self.map(|c| c.user_agent = ua.into()) }
    pub fn success_codes<I: IntoIterator<Item = StatusCode>>(self, codes: I) -> Self {
        self.map(|c| c.success_codes = codes.into_iter().collect())
    }

    /// Adds a header sent with every request. Invalid names or values are reported by `build()`.
    pub fn header(mut self, name: &str, value: &str) -> Self {
        match (HeaderName::from_bytes(name.as_bytes()), HeaderValue::from_str(value)) {
            (Ok(n), Ok(v)) => {
                self.inner.default_headers.insert(n, v);
            }
            _ => {
                self.invalid_header.get_or_insert_with(|| name.to_string());
            }
        }
        self
    }

    /// Apply multiple changes in one go.
    pub fn with(self, f: impl FnOnce(&mut SessionConfig)) -> Self { self.map(f) }

    /// Validate and build the final config.
    pub fn build(self) -> Result<SessionConfig, SessionConfigError> {
        if let Some(name) = self.invalid_header {
            return Err(SessionConfigError::InvalidHeader(name));
        }
        validate(&self.inner)?;
        Ok(self.inner)
    }
}

// ---------- Validation ----------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionConfigError {
    EmptySuccessCodes,
    EmptyUserAgent,
    InvalidHeader(String),
}

impl fmt::Display for SessionConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionConfigError::EmptySuccessCodes =>
                write!(f, "success_codes must contain at least one status code"),
            SessionConfigError::EmptyUserAgent =>
                write!(f, "user_agent must not be empty"),
            SessionConfigError::InvalidHeader(name) =>
                write!(f, "header {name:?} has an invalid name or value"),
        }
    }
}
impl std::error::Error for SessionConfigError {}

fn validate(c: &SessionConfig) -> Result<(), SessionConfigError> {
    if c.success_codes.is_empty() {
        return Err(SessionConfigError::EmptySuccessCodes);
    }
    if c.user_agent.trim().is_empty() {
        return Err(SessionConfigError::EmptyUserAgent);
    }
    Ok(())
}
