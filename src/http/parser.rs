use crate::http::HTTP_VERSION;
use crate::http::headers;
use crate::http::request::{Method, Request};
use std::collections::HashMap;

/// Classified parse failures.
///
/// `Incomplete` is the only recoverable variant: the buffer does not yet
/// hold a full request and the caller should read more bytes. Everything
/// else is terminal for the current attempt and maps to a 400.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    MalformedRequestLine,
    MalformedHeaderLine,
    UnsupportedMethod,
    UnsupportedVersion,
    Incomplete,
}

/// Tries to parse one request from the front of `buf`.
///
/// On success returns the request plus the number of bytes it occupied
/// (through the blank line), which the caller must drain from its buffer.
///
/// The request line is validated as soon as its own CRLF is present, so a
/// broken first line is rejected without waiting for the header block to
/// complete.
pub fn parse_request(buf: &[u8]) -> Result<(Request, usize), ParseError> {
    let line_end = find_crlf(buf).ok_or(ParseError::Incomplete)?;
    let request_line =
        std::str::from_utf8(&buf[..line_end]).map_err(|_| ParseError::MalformedRequestLine)?;
    let (method, path, version) = parse_request_line(request_line)?;

    let head_end = find_headers_end(buf).ok_or(ParseError::Incomplete)?;

    let mut headers = HashMap::new();
    if head_end > line_end {
        let header_str = std::str::from_utf8(&buf[line_end + 2..head_end])
            .map_err(|_| ParseError::MalformedHeaderLine)?;

        for line in header_str.split("\r\n") {
            let (name, value) = line.split_once(':').ok_or(ParseError::MalformedHeaderLine)?;
            // Last-write-wins for repeated names; canonicalization collapses
            // case variants onto one key.
            headers.insert(headers::canonical(name.trim()), value.trim().to_string());
        }
    }

    // Host and Connection are promoted to dedicated fields and never stay
    // in the generic map. A missing Host is tolerated.
    let host = headers.remove("Host").unwrap_or_default();
    let close = headers.remove("Connection").is_some_and(|v| v == "close");

    let request = Request { method, path, version, headers, host, close };

    Ok((request, head_end + 4))
}

fn parse_request_line(line: &str) -> Result<(Method, String, String), ParseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [method, path, version] = tokens[..] else {
        return Err(ParseError::MalformedRequestLine);
    };

    let method = Method::from_token(method).ok_or(ParseError::UnsupportedMethod)?;
    if version != HTTP_VERSION {
        return Err(ParseError::UnsupportedVersion);
    }

    Ok((method, path.to_string(), version.to_string()))
}

fn find_crlf(buf: &[u8]) -> Option<usize> {
    buf.windows(2).position(|w| w == b"\r\n")
}

fn find_headers_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}
