//! Scoped HTTP sessions.
//!
//! A session is open from construction until [`Session::close`] (or drop). While
//! open, every verb method renders the [`Address`], hands the request to the
//! transport and runs the result through [`safe_response`] with the session's
//! success codes. After close, every verb fails with [`Error::SessionClosed`].
//!
//! ```no_run
//! use urequest::{Body, Credentials, HttpUrl, LoggedHttpSession, Response, Session};
//! # fn main() -> urequest::Result<()> {
//! let mut session = LoggedHttpSession::new(Credentials::new("superuser", "superpass"))?;
//! let res = session.post(
//!     &HttpUrl::new("127.0.0.1:4444", "create_user"),
//!     Body::json(&serde_json::json!({"name": "Mike"}))?,
//! )?;
//! println!("{} -> {}", res.status(), res);
//! session.close();
//! # Ok(()) }
//! ```
mod logged;

pub use logged::LoggedHttpSession;

use http::{HeaderMap, Method};

use crate::address::Address;
use crate::config::SessionConfig;
use crate::errors::{Error, Result};
use crate::net::{safe_response, Body, HttpResponse, ReqwestTransport, Request, Transport};

/// Verb-named request methods over a scoped transport.
pub trait Session {
    /// Sends `method` to `url` with `body` plus per-request `headers` and validates the response status.
    fn request_with_headers(
        &self,
        method: Method,
        url: &dyn Address,
        body: Body,
        headers: HeaderMap,
    ) -> Result<HttpResponse>;

    /// Releases the transport. Closing twice is a no-op.
    fn close(&mut self);

    fn is_closed(&self) -> bool;

    /// Sends `method` to `url` with `body` and only the session-wide headers.
    fn request(&self, method: Method, url: &dyn Address, body: Body) -> Result<HttpResponse> {
        self.request_with_headers(method, url, body, HeaderMap::new())
    }

    /// Performs a `GET` request.
    fn get(&self, url: &dyn Address) -> Result<HttpResponse> {
        self.request(Method::GET, url, Body::Empty)
    }

    /// Performs a `HEAD` request.
    fn head(&self, url: &dyn Address) -> Result<HttpResponse> {
        self.request(Method::HEAD, url, Body::Empty)
    }

    /// Performs an `OPTIONS` request.
    fn options(&self, url: &dyn Address) -> Result<HttpResponse> {
        self.request(Method::OPTIONS, url, Body::Empty)
    }

    /// Performs a `DELETE` request.
    fn delete(&self, url: &dyn Address) -> Result<HttpResponse> {
        self.request(Method::DELETE, url, Body::Empty)
    }

    /// Performs a `POST` request.
    fn post(&self, url: &dyn Address, body: Body) -> Result<HttpResponse> {
        self.request(Method::POST, url, body)
    }

    /// Performs a `PUT` request.
    fn put(&self, url: &dyn Address, body: Body) -> Result<HttpResponse> {
        self.request(Method::PUT, url, body)
    }

    /// Performs a `PATCH` request.
    fn patch(&self, url: &dyn Address, body: Body) -> Result<HttpResponse> {
        self.request(Method::PATCH, url, body)
    }
}

/// Plain HTTP session owning a transport.
pub struct HttpSession<T: Transport = ReqwestTransport> {
    transport: T,
    config: SessionConfig,
    closed: bool,
}

impl HttpSession<ReqwestTransport> {
    /// Opens a session with the default config.
    pub fn new() -> Result<Self> {
        Self::with_config(SessionConfig::default())
    }

    pub fn with_config(config: SessionConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(&config)?;
        Self::with_transport(transport, config)
    }
}

impl<T: Transport> HttpSession<T> {
    /// Opens a session over an already constructed transport.
    ///
    /// Fails with [`Error::Config`] when `config` does not pass validation.
    pub fn with_transport(transport: T, config: SessionConfig) -> Result<Self> {
        config.validate()?;
        log::trace!("Session opened");
        Ok(Self {
            transport,
            config,
            closed: false,
        })
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub(crate) fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }
}

impl<T: Transport> Session for HttpSession<T> {
    fn request_with_headers(
        &self,
        method: Method,
        url: &dyn Address,
        body: Body,
        headers: HeaderMap,
    ) -> Result<HttpResponse> {
        if self.closed {
            return Err(Error::SessionClosed);
        }

        let request = Request::new(method, url.to_string(), body).with_headers(headers);
        let response = self.transport.send(request)?;
        safe_response(response, self.config.success_codes.iter().copied())
    }

    fn close(&mut self) {
        if self.closed {
            return;
        }
        self.transport.close();
        self.closed = true;
        log::trace!("Session closed");
    }

    fn is_closed(&self) -> bool {
        self.closed
    }
}

impl<T: Transport> Drop for HttpSession<T> {
    fn drop(&mut self) {
        self.close();
    }
}
