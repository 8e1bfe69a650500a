//! Network layer: request bodies, the transport seam and buffered responses.
mod body;
mod response;
mod transport;

pub use body::Body;
pub use response::{safe_response, HttpResponse, Response, DEFAULT_SUCCESS_CODES};
pub use transport::{ReqwestTransport, Request, Transport};
