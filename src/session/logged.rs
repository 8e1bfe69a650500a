use http::{HeaderMap, Method};

use crate::address::Address;
use crate::config::SessionConfig;
use crate::credentials::Credentials;
use crate::errors::Result;
use crate::net::{Body, HttpResponse, ReqwestTransport, Transport};
use crate::session::{HttpSession, Session};

/// Session that authenticates every request with HTTP basic auth.
///
/// The credentials are attached to the transport once, at construction. Every
/// call is then forwarded unchanged to the wrapped [`HttpSession`].
pub struct LoggedHttpSession<T: Transport = ReqwestTransport> {
    inner: HttpSession<T>,
}

impl LoggedHttpSession<ReqwestTransport> {
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_config(credentials, SessionConfig::default())
    }

    pub fn with_config(credentials: Credentials, config: SessionConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(&config)?;
        Self::with_transport(credentials, transport, config)
    }
}

impl<T: Transport> LoggedHttpSession<T> {
    pub fn with_transport(credentials: Credentials, mut transport: T, config: SessionConfig) -> Result<Self> {
        transport.set_basic_auth(credentials);
        Ok(Self {
            inner: HttpSession::with_transport(transport, config)?,
        })
    }

    /// Attaches new credentials to the open session.
    pub fn relog(&mut self, credentials: Credentials) {
        self.inner.transport_mut().set_basic_auth(credentials);
    }
}

impl<T: Transport> Session for LoggedHttpSession<T> {
    fn request_with_headers(
        &self,
        method: Method,
        url: &dyn Address,
        body: Body,
        headers: HeaderMap,
    ) -> Result<HttpResponse> {
        self.inner.request_with_headers(method, url, body, headers)
    }

    fn close(&mut self) {
        self.inner.close();
    }

    fn is_closed(&self) -> bool {
        self.inner.is_closed()
    }
}
