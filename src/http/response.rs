use crate::files::ResolvedFile;
use crate::http::HTTP_VERSION;
use crate::http::headers;
use crate::http::mime;
use crate::http::request::Request;
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::SystemTime;

/// HTTP status codes the server can produce.
///
/// Every server-side condition maps onto one of these three:
/// - `Ok` (200): the resolver found a readable file
/// - `BadRequest` (400): protocol violation, the connection will close
/// - `NotFound` (404): the resolver reported absence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 400 Bad Request
    BadRequest,
    /// 404 Not Found
    NotFound,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::BadRequest => 400,
            StatusCode::NotFound => 404,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::NotFound => "Not Found",
        }
    }
}

/// A complete HTTP response ready for serialization.
///
/// Built fresh per response and never mutated afterwards; all headers go
/// through [`ResponseBuilder`], which canonicalizes names at insertion so
/// the map never holds two case variants of the same key.
#[derive(Debug)]
pub struct Response {
    /// The HTTP status code
    pub status: StatusCode,
    /// Protocol version for the status line
    pub version: String,
    /// Response headers under canonical names
    pub headers: HashMap<String, String>,
    /// The valid request that led to this response, if any
    pub request: Option<Request>,
    /// Local path of the file to stream as the body; `None` means no body
    pub file_path: Option<PathBuf>,
}

/// Builder for constructing HTTP responses in a fluent style.
pub struct ResponseBuilder {
    status: StatusCode,
    version: String,
    headers: HashMap<String, String>,
    request: Option<Request>,
    file_path: Option<PathBuf>,
}

impl ResponseBuilder {
    /// Creates a new response builder with the specified status code.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            version: HTTP_VERSION.to_string(),
            headers: HashMap::new(),
            request: None,
            file_path: None,
        }
    }

    /// Sets the protocol version used on the status line.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Adds or replaces a header. The name is canonicalized, so case
    /// variants of the same name overwrite each other.
    pub fn header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.insert(headers::canonical(name), value.into());
        self
    }

    /// Attaches the originating request.
    pub fn request(mut self, request: Request) -> Self {
        self.request = Some(request);
        self
    }

    /// Attaches the file whose content becomes the response body.
    pub fn file_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_path = Some(path.into());
        self
    }

    /// Builds the final Response.
    pub fn build(self) -> Response {
        Response {
            status: self.status,
            version: self.version,
            headers: self.headers,
            request: self.request,
            file_path: self.file_path,
        }
    }
}

impl Response {
    /// Builds a 200 OK response serving `file`.
    ///
    /// Carries Date, Last-Modified, Content-Type (from the file extension,
    /// with a fixed fallback), Content-Length, and `Connection: close` when
    /// the request asked for it. The resolved path is kept for body
    /// streaming.
    pub fn ok(request: &Request, file: &ResolvedFile) -> Self {
        let mut builder = ResponseBuilder::new(StatusCode::Ok)
            .version(request.version.clone())
            .header("Date", httpdate::fmt_http_date(SystemTime::now()))
            .header("Last-Modified", httpdate::fmt_http_date(file.modified))
            .header("Content-Type", mime::content_type_for(&file.path))
            .header("Content-Length", file.len.to_string())
            .file_path(file.path.clone());

        if request.close {
            builder = builder.header("Connection", "close");
        }

        builder.request(request.clone()).build()
    }

    /// Builds a 404 Not Found response. No body.
    pub fn not_found(request: &Request) -> Self {
        let mut builder = ResponseBuilder::new(StatusCode::NotFound)
            .header("Date", httpdate::fmt_http_date(SystemTime::now()));

        if request.close {
            builder = builder.header("Connection", "close");
        }

        builder.request(request.clone()).build()
    }

    /// Builds a 400 Bad Request response.
    ///
    /// Always carries `Connection: close`: the session is terminating and
    /// there may not even be a parsed request to consult, so no request
    /// back-reference is attached.
    pub fn bad_request() -> Self {
        ResponseBuilder::new(StatusCode::BadRequest)
            .header("Date", httpdate::fmt_http_date(SystemTime::now()))
            .header("Connection", "close")
            .build()
    }
}
