//! User-friendly blocking HTTP client with clean objects.
//!
//! Build an [`Address`] (`Url`, `HttpUrl`, `HttpsUrl`), open a [`Session`]
//! (`HttpSession` or the basic-auth `LoggedHttpSession`), call a verb and read
//! the validated [`Response`].
pub mod address;
pub mod config;
pub mod credentials;
pub mod errors;
pub mod net;
pub mod session;

pub use address::{Address, HttpUrl, HttpsUrl, Protocol, Url};
pub use config::{SessionConfig, SessionConfigBuilder, SessionConfigError};
pub use credentials::Credentials;
pub use errors::{Error, Result};
pub use net::{
    safe_response, Body, HttpResponse, ReqwestTransport, Request, Response, Transport,
    DEFAULT_SUCCESS_CODES,
};
pub use session::{HttpSession, LoggedHttpSession, Session};

pub use http::{HeaderMap, Method, StatusCode};
