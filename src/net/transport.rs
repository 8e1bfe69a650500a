//! The seam between sessions and the HTTP client doing the actual I/O.
//!
//! Sessions never touch `reqwest` directly: they hand a [`Request`] to a
//! [`Transport`] and receive an [`HttpResponse`]. [`ReqwestTransport`] is the
//! production implementation on top of `reqwest::blocking`. Tests can plug in
//! their own transport to observe what a session sends.
use http::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use http::Method;

use crate::config::SessionConfig;
use crate::credentials::Credentials;
use crate::errors::{Error, Result};
use crate::net::{Body, HttpResponse};

/// A single request handed to a transport.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub method: Method,
    /// Rendered address
    pub url: String,
    pub body: Body,
    /// Headers for this request only, on top of the session defaults
    pub headers: HeaderMap,
}

impl Request {
    pub fn new(method: Method, url: impl Into<String>, body: Body) -> Self {
        Self {
            method,
            url: url.into(),
            body,
            headers: HeaderMap::new(),
        }
    }

    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }
}

/// HTTP client interface consumed by sessions.
///
/// A transport is a single mutable resource and is not meant to be shared
/// between threads without external synchronization.
pub trait Transport {
    /// Performs the request and buffers the response.
    ///
    /// Unreachable destinations must be reported as [`Error::Connection`].
    fn send(&self, request: Request) -> Result<HttpResponse>;

    /// Attaches basic-auth credentials to every following request.
    fn set_basic_auth(&mut self, credentials: Credentials);

    /// Releases the underlying client. Sending afterwards fails with [`Error::SessionClosed`].
    fn close(&mut self);
}

/// Transport backed by a blocking `reqwest` client.
#[derive(Debug)]
pub struct ReqwestTransport {
    /// `None` once closed
    client: Option<reqwest::blocking::Client>,
    credentials: Option<Credentials>,
}

impl ReqwestTransport {
    pub fn new(config: &SessionConfig) -> Result<Self> {
        config.validate()?;

        let client = reqwest::blocking::Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(config.default_headers.clone())
            .build()?;

        Ok(Self {
            client: Some(client),
            credentials: None,
        })
    }

    pub fn is_closed(&self) -> bool {
        self.client.is_none()
    }

    /// Completes the per-request headers with auth and body content type.
    fn prepare_headers(&self, body: &Body, mut headers: HeaderMap) -> Result<HeaderMap> {
        // An explicit per-request Authorization header wins over the session credentials
        if let Some(c) = &self.credentials {
            if !headers.contains_key(AUTHORIZATION) {
                headers.insert(AUTHORIZATION, c.authorization_header()?);
            }
        }
        if matches!(body, Body::Plain(_)) && !headers.contains_key(CONTENT_TYPE) {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("text/plain; charset=utf-8"));
        }
        Ok(headers)
    }
}

impl Transport for ReqwestTransport {
    fn send(&self, request: Request) -> Result<HttpResponse> {
        let client = self.client.as_ref().ok_or(Error::SessionClosed)?;

        let Request { method, url, body, headers } = request;
        let url = url::Url::parse(&url)?;
        log::debug!("{method} {url}");

        let headers = self.prepare_headers(&body, headers)?;
        let builder = client.request(method, url).headers(headers);
        let builder = match body {
            Body::Empty => builder,
            Body::Plain(text) => builder.body(text),
            // reqwest keeps a Content-Type that is already set
            Body::Json(value) => builder.json(&value),
        };

        let res = builder.send()?;
        HttpResponse::from_blocking(res)
    }

    fn set_basic_auth(&mut self, credentials: Credentials) {
        log::trace!("Attaching basic auth for user {}", credentials.username());
        self.credentials = Some(credentials);
    }

    fn close(&mut self) {
        if self.client.take().is_some() {
            log::trace!("Transport closed");
        }
    }
}
