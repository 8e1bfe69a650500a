//! HTTP response model.
//!
//! [`Response`] is the capability set callers use to inspect the outcome of a
//! request: success flag, status code, JSON body and (through `Display`) the
//! raw body text. [`HttpResponse`] is the **fully buffered** implementation
//! returned by the transport.
//!
//! [`safe_response`] is the gate every session runs a response through: it
//! hands the response back when its status is in the accepted set and turns it
//! into [`Error::Response`] otherwise.
//!
//! ## Notes
//! - `headers` is an `http::HeaderMap`, which is **case-insensitive** for
//!   header names.
//! - The body is decoded as text when the response arrives. Parse it as JSON
//!   with [`Response::as_json`] or, for typed access, [`HttpResponse::json`].
use std::fmt;

use http::{HeaderMap, StatusCode};
use serde::de::DeserializeOwned;

use crate::errors::{Error, Result};

/// Status codes accepted when the caller does not configure its own set.
pub const DEFAULT_SUCCESS_CODES: [StatusCode; 3] =
    [StatusCode::OK, StatusCode::CREATED, StatusCode::NO_CONTENT];

/// Outcome of one completed request. `Display` renders the body text.
pub trait Response: fmt::Display {
    /// Returns `true` when the status is not a client or server error.
    fn is_ok(&self) -> bool;

    /// HTTP status code of the response.
    fn status(&self) -> StatusCode;

    /// Parses the body as a JSON value.
    fn as_json(&self) -> Result<serde_json::Value>;
}

/// A buffered HTTP response as received from the transport.
///
/// All fields reflect the **received** response as-is; no additional parsing
/// or transformation is performed by this type.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// Final URL of the response (after redirects, if any).
    url: url::Url,
    status: StatusCode,
    headers: HeaderMap,
    /// Body decoded as text (charset from `Content-Type`, UTF-8 otherwise).
    body: String,
}

impl HttpResponse {
    pub fn new(url: url::Url, status: StatusCode, headers: HeaderMap, body: impl Into<String>) -> Self {
        Self {
            url,
            status,
            headers,
            body: body.into(),
        }
    }

    /// Buffers a blocking reqwest response.
    pub(crate) fn from_blocking(res: reqwest::blocking::Response) -> Result<Self> {
        let url = res.url().clone();
        let status = res.status();
        let headers = res.headers().clone();

        // Fetch body. We don't do streaming
        let body = res.text()?;

        Ok(Self { url, status, headers, body })
    }

    pub fn url(&self) -> &url::Url {
        &self.url
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn text(&self) -> &str {
        &self.body
    }

    /// Deserializes the body into `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

impl Response for HttpResponse {
    fn is_ok(&self) -> bool {
        !(self.status.is_client_error() || self.status.is_server_error())
    }

    fn status(&self) -> StatusCode {
        self.status
    }

    fn as_json(&self) -> Result<serde_json::Value> {
        self.json()
    }
}

impl fmt::Display for HttpResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.body)
    }
}

/// Returns `response` unchanged if its status is one of `success_codes`.
///
/// Otherwise fails with [`Error::Response`] carrying the status and the body text.
/// Sessions call this with [`DEFAULT_SUCCESS_CODES`] unless configured otherwise.
pub fn safe_response<R, I>(response: R, success_codes: I) -> Result<R>
where
    R: Response,
    I: IntoIterator<Item = StatusCode>,
{
    let status = response.status();
    if success_codes.into_iter().any(|code| code == status) {
        return Ok(response);
    }

    log::warn!("Rejecting response with status {status}");
    Err(Error::Response {
        status,
        body: response.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Response stub with a fixed status and body.
    #[derive(Debug)]
    struct FakeResponse {
        status: StatusCode,
        body: &'static str,
    }

    impl FakeResponse {
        fn new(status: StatusCode) -> Self {
            Self { status, body: "" }
        }
    }

    impl Response for FakeResponse {
        fn is_ok(&self) -> bool {
            true
        }

        fn status(&self) -> StatusCode {
            self.status
        }

        fn as_json(&self) -> Result<serde_json::Value> {
            Ok(serde_json::Value::Null)
        }
    }

    impl fmt::Display for FakeResponse {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.body)
        }
    }

    fn buffered(status: StatusCode, body: &str) -> HttpResponse {
        HttpResponse::new(
            "http://localhost/".parse().unwrap(),
            status,
            HeaderMap::new(),
            body,
        )
    }

    #[test]
    fn safe_response_accepts_code_in_set() {
        let cases = [
            (StatusCode::CONTINUE, [StatusCode::CONTINUE, StatusCode::SWITCHING_PROTOCOLS, StatusCode::PROCESSING]),
            (StatusCode::OK, [StatusCode::OK, StatusCode::CREATED, StatusCode::ACCEPTED]),
            (StatusCode::MULTIPLE_CHOICES, [StatusCode::MULTIPLE_CHOICES, StatusCode::MOVED_PERMANENTLY, StatusCode::FOUND]),
            (StatusCode::BAD_REQUEST, [StatusCode::BAD_REQUEST, StatusCode::UNAUTHORIZED, StatusCode::PAYMENT_REQUIRED]),
            (StatusCode::INTERNAL_SERVER_ERROR, [StatusCode::INTERNAL_SERVER_ERROR, StatusCode::NOT_IMPLEMENTED, StatusCode::BAD_GATEWAY]),
        ];
        for (code, allowed) in cases {
            let res = safe_response(FakeResponse::new(code), allowed).unwrap();
            assert_eq!(res.status(), code);
        }
    }

    #[test]
    fn safe_response_default_set_returns_same_response() {
        for code in DEFAULT_SUCCESS_CODES {
            let res = safe_response(buffered(code, "payload"), DEFAULT_SUCCESS_CODES).unwrap();
            assert_eq!(res.status(), code);
            assert_eq!(res.text(), "payload");
        }
    }

    #[test]
    fn safe_response_rejects_code_outside_set() {
        let err = safe_response(
            FakeResponse { status: StatusCode::INTERNAL_SERVER_ERROR, body: "boom" },
            [StatusCode::OK, StatusCode::CREATED],
        )
        .unwrap_err();

        match &err {
            Error::Response { status, body } => {
                assert_eq!(*status, StatusCode::INTERNAL_SERVER_ERROR);
                assert_eq!(body, "boom");
            }
            other => panic!("expected Error::Response, got {:?}", other),
        }
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn safe_response_rejects_accepted_with_default_set() {
        let err = safe_response(buffered(StatusCode::ACCEPTED, ""), DEFAULT_SUCCESS_CODES).unwrap_err();
        assert_eq!(err.status(), Some(StatusCode::ACCEPTED));
    }

    #[test]
    fn is_ok_follows_error_classes() {
        assert!(buffered(StatusCode::OK, "").is_ok());
        assert!(buffered(StatusCode::FOUND, "").is_ok());
        assert!(!buffered(StatusCode::NOT_FOUND, "").is_ok());
        assert!(!buffered(StatusCode::BAD_GATEWAY, "").is_ok());
    }

    #[test]
    fn body_accessors() {
        let res = buffered(StatusCode::OK, r#"{"id": 0, "name": "Mike"}"#);
        assert_eq!(res.as_json().unwrap()["name"], "Mike");
        assert_eq!(res.to_string(), r#"{"id": 0, "name": "Mike"}"#);

        #[derive(serde::Deserialize)]
        struct User {
            id: u32,
        }
        assert_eq!(res.json::<User>().unwrap().id, 0);
    }

    #[test]
    fn as_json_fails_on_plain_text() {
        let res = buffered(StatusCode::OK, "Welcome to the employees test app!");
        assert!(matches!(res.as_json(), Err(Error::Body(_))));
    }
}
