use bytes::{Buf, BytesMut};
use std::io;
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite};
use tokio::time::{Instant, timeout_at};

use crate::config::StaticFilesConfig;
use crate::files;
use crate::http::parser::{self, ParseError};
use crate::http::request::Request;
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;

/// Idle-read deadline, re-armed each time the handler starts waiting for
/// the next request.
pub const READ_TIMEOUT: Duration = Duration::from_secs(5);

pub struct Connection<S> {
    stream: S,
    buffer: BytesMut,
    state: ConnectionState,
    docs: StaticFilesConfig,
}

pub enum ConnectionState {
    AwaitRequest,
    Dispatch(Request),
    Respond(Response, bool), // bool = close after responding?
    Closed,
}

/// Failure classification for one request-read attempt, decided at the
/// parser/transport boundary rather than inferred downstream.
///
/// `partial` is true when bytes of the attempt had already been buffered,
/// distinguishing "no new request arrived" from "a request began but did
/// not complete".
#[derive(Debug)]
pub enum ReadError {
    /// Peer closed the stream
    Closed { partial: bool },
    /// The idle-read deadline expired
    TimedOut { partial: bool },
    /// A request arrived but was broken
    Malformed(ParseError),
    /// Transport failure other than a clean close
    Io(io::Error),
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, docs: StaticFilesConfig) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(4096),
            state: ConnectionState::AwaitRequest,
            docs,
        }
    }

    /// Drives the connection through the request/response loop until a
    /// close condition is met. Write failures abort immediately; the
    /// caller drops the connection.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            let state = std::mem::replace(&mut self.state, ConnectionState::Closed);
            match state {
                ConnectionState::AwaitRequest => match self.read_request().await {
                    Ok(req) => {
                        self.state = ConnectionState::Dispatch(req);
                    }
                    Err(ReadError::TimedOut { partial: false }) => {
                        // Pure idle timeout: close without writing anything.
                        tracing::debug!("idle timeout with no request pending, closing");
                    }
                    Err(ReadError::Io(e)) => {
                        return Err(e.into());
                    }
                    Err(err) => {
                        // Peer EOF (clean or mid-request), deadline with a
                        // partial request pending, or a malformed request:
                        // answer 400, then close.
                        tracing::debug!(error = ?err, "terminating session with 400");
                        let response = Response::bad_request();
                        ResponseWriter::new(&response)
                            .write_to_stream(&mut self.stream)
                            .await?;
                    }
                },

                ConnectionState::Dispatch(req) => {
                    let response = match files::resolve(&self.docs, &req.path).await {
                        Some(file) => Response::ok(&req, &file),
                        None => Response::not_found(&req),
                    };

                    tracing::debug!(
                        method = req.method.as_str(),
                        path = %req.path,
                        status = response.status.as_u16(),
                        "request handled"
                    );

                    let close = req.close;
                    self.state = ConnectionState::Respond(response, close);
                }

                ConnectionState::Respond(response, close) => {
                    ResponseWriter::new(&response)
                        .write_to_stream(&mut self.stream)
                        .await?;

                    if !close {
                        self.state = ConnectionState::AwaitRequest; // go back for next request
                    }
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Reads and parses the next request, with the whole attempt bounded
    /// by one freshly armed deadline.
    async fn read_request(&mut self) -> Result<Request, ReadError> {
        let deadline = Instant::now() + READ_TIMEOUT;

        loop {
            // Try parsing whatever we already have
            match parser::parse_request(&self.buffer) {
                Ok((request, consumed)) => {
                    self.buffer.advance(consumed);
                    return Ok(request);
                }

                Err(ParseError::Incomplete) => {
                    // Need more data → fall through to read
                }

                Err(e) => {
                    return Err(ReadError::Malformed(e));
                }
            }

            let mut chunk = [0u8; 4096];
            let n = match timeout_at(deadline, self.stream.read(&mut chunk)).await {
                Ok(Ok(n)) => n,
                Ok(Err(e)) => return Err(ReadError::Io(e)),
                Err(_) => {
                    return Err(ReadError::TimedOut { partial: !self.buffer.is_empty() });
                }
            };

            if n == 0 {
                return Err(ReadError::Closed { partial: !self.buffer.is_empty() });
            }

            self.buffer.extend_from_slice(&chunk[..n]);
        }
    }
}
