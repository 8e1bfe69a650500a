//! Addresses that render to canonical URL strings.
//!
//! An [`Address`] is a host, a protocol and a path. Rendering it (via
//! `Display`) yields `protocol://host/path` with exactly one slash between
//! host and path, no matter whether the caller wrote the path with a leading
//! slash or not.
//!
//! No percent-encoding, host validation or query handling happens here:
//! callers pre-encode path segments themselves.
//!
//! ```rust
//! use urequest::{Address, HttpUrl, Url};
//!
//! let url = Url::new("9.9.9.9", "ftp", "/api/path");
//! assert_eq!(url.to_string(), "ftp://9.9.9.9/api/path");
//!
//! // A host that already is a full URL is used verbatim
//! let bound = HttpUrl::from_host("http://0.0.0.0:4444");
//! assert_eq!(bound.to_string(), "http://0.0.0.0:4444");
//! assert_eq!(bound.matcher(), "");
//! ```
use std::fmt;

/// Something that can be rendered into a URL string.
pub trait Address: fmt::Display {
    /// Returns the path exactly as supplied.
    fn matcher(&self) -> &str;

    /// Returns the host (domain name, IP or full URL) exactly as supplied.
    fn host(&self) -> &str;

    /// Parses the rendered address into a `url::Url`.
    fn to_url(&self) -> Result<url::Url, url::ParseError> {
        url::Url::parse(&self.to_string())
    }
}

/// URL scheme of an [`Url`]. Schemes are stored and rendered in lower case.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Protocol {
    Http,
    Https,
    Other(String),
}

impl Protocol {
    pub fn as_str(&self) -> &str {
        match self {
            Protocol::Http => "http",
            Protocol::Https => "https",
            Protocol::Other(s) => s,
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Protocol {
    fn from(s: &str) -> Self {
        if s.eq_ignore_ascii_case("http") {
            Protocol::Http
        } else if s.eq_ignore_ascii_case("https") {
            Protocol::Https
        } else {
            Protocol::Other(s.to_ascii_lowercase())
        }
    }
}

impl From<String> for Protocol {
    fn from(s: String) -> Self {
        Protocol::from(s.as_str())
    }
}

/// A regular URL with an arbitrary protocol.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Url {
    host: String,
    protocol: Protocol,
    path: String,
}

impl Url {
    pub fn new(host: impl Into<String>, protocol: impl Into<Protocol>, path: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            protocol: protocol.into(),
            path: path.into(),
        }
    }

    /// Creates an URL without a path.
    pub fn from_host(host: impl Into<String>, protocol: impl Into<Protocol>) -> Self {
        Self::new(host, protocol, "")
    }

    pub fn protocol(&self) -> &Protocol {
        &self.protocol
    }

    /// True when the host already begins with the protocol (ASCII case-insensitive).
    fn is_full_url(&self) -> bool {
        let protocol = self.protocol.as_str().as_bytes();
        self.host
            .as_bytes()
            .get(..protocol.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(protocol))
    }
}

impl Address for Url {
    fn matcher(&self) -> &str {
        &self.path
    }

    fn host(&self) -> &str {
        &self.host
    }
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_full_url() {
            return f.write_str(&self.host);
        }
        let path = self.path.strip_prefix('/').unwrap_or(&self.path);
        write!(f, "{}://{}/{}", self.protocol, self.host, path)
    }
}

macro_rules! fixed_protocol_url {
    ($(#[$doc:meta])* $name:ident, $protocol:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(Url);

        impl $name {
            pub fn new(host: impl Into<String>, path: impl Into<String>) -> Self {
                Self(Url::new(host, $protocol, path))
            }

            pub fn from_host(host: impl Into<String>) -> Self {
                Self::new(host, "")
            }
        }

        impl Address for $name {
            fn matcher(&self) -> &str {
                self.0.matcher()
            }

            fn host(&self) -> &str {
                self.0.host()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<$name> for Url {
            fn from(u: $name) -> Url {
                u.0
            }
        }
    };
}

fixed_protocol_url!(
    /// URL with the protocol fixed to `http`.
    HttpUrl,
    Protocol::Http
);
fixed_protocol_url!(
    /// URL with the protocol fixed to `https`.
    HttpsUrl,
    Protocol::Https
);
