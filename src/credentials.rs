use base64::prelude::{Engine as _, BASE64_STANDARD};
use http::header::InvalidHeaderValue;
use http::HeaderValue;

/// Username/password pair used for HTTP basic authentication.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// Renders the `Authorization: Basic ...` header value sent by logged sessions.
    ///
    /// The value is marked sensitive so it is masked in `Debug` output.
    pub fn authorization_header(&self) -> Result<HeaderValue, InvalidHeaderValue> {
        let encoded = BASE64_STANDARD.encode(format!("{}:{}", self.username, self.password));
        let mut header = HeaderValue::from_str(&format!("Basic {encoded}"))?;
        header.set_sensitive(true);
        Ok(header)
    }
}
