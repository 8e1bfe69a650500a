use serde::Serialize;

use crate::errors::{Error, Result};

/// Payload of a body-bearing request (`POST`, `PUT`, `PATCH`).
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Body {
    #[default]
    Empty,
    /// Raw text, sent as `text/plain`.
    Plain(String),
    /// Structured data, serialized as JSON.
    Json(serde_json::Value),
}

impl Body {
    /// Builds a body from the optional plain text and structured inputs.
    ///
    /// Supplying both is rejected with [`Error::ConflictingBody`] instead of
    /// picking one silently.
    pub fn from_parts(plain: Option<String>, as_dict: Option<serde_json::Value>) -> Result<Self> {
        match (plain, as_dict) {
            (Some(_), Some(_)) => Err(Error::ConflictingBody),
            (Some(text), None) => Ok(Body::Plain(text)),
            (None, Some(value)) => Ok(Body::Json(value)),
            (None, None) => Ok(Body::Empty),
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Body::Plain(text.into())
    }

    /// Serializes any serde type into a JSON body.
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        Ok(Body::Json(serde_json::to_value(value)?))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Body::Empty)
    }
}

impl From<serde_json::Value> for Body {
    fn from(value: serde_json::Value) -> Self {
        Body::Json(value)
    }
}

impl From<String> for Body {
    fn from(text: String) -> Self {
        Body::Plain(text)
    }
}

impl From<&str> for Body {
    fn from(text: &str) -> Self {
        Body::Plain(text.to_string())
    }
}
