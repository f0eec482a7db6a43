use std::collections::HashMap;

/// HTTP request methods.
///
/// The server only serves static files, so GET is the single supported
/// verb; anything else is rejected at parse time with a 400.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    Get,
}

impl Method {
    /// Parses an HTTP method token (case-sensitive, per the wire format).
    ///
    /// Returns `None` for anything other than `GET`.
    pub fn from_token(s: &str) -> Option<Self> {
        match s {
            "GET" => Some(Method::Get),
            _ => None,
        }
    }

    /// The wire representation of the method.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
        }
    }
}

/// A parsed HTTP request.
///
/// `Host` and `Connection` are promoted out of the generic header map
/// into the `host` and `close` fields during parsing; `headers` holds
/// everything else under canonical names. A request is built once by
/// the parser, owned by the connection handler for one
/// request/response cycle, then discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The HTTP method (always GET)
    pub method: Method,
    /// The request path (e.g., "/index.html")
    pub path: String,
    /// HTTP version (always "HTTP/1.1")
    pub version: String,
    /// Remaining headers under canonical names, Host and Connection excluded
    pub headers: HashMap<String, String>,
    /// Value of the Host header, empty when the header was absent
    pub host: String,
    /// True iff the request carried exactly `Connection: close`
    pub close: bool,
}

impl Request {
    /// Retrieves a header value by canonical name.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(|v| v.as_str())
    }
}
