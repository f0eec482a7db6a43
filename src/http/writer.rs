use anyhow::Context;
use std::path::PathBuf;
use tokio::fs::File;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::response::{Response, StatusCode};

/// Renders the response head: status line, headers, terminating blank line.
///
/// Headers are written sorted ascending by canonical name, not in
/// insertion order. Two responses with the same header set always render
/// their keys identically; determinism here is part of the wire contract.
pub fn serialize_head(resp: &Response) -> Vec<u8> {
    let mut buf = Vec::new();

    let status_line = format!(
        "{} {} {}\r\n",
        resp.version,
        resp.status.as_u16(),
        resp.status.reason_phrase()
    );
    buf.extend_from_slice(status_line.as_bytes());

    let mut names: Vec<&String> = resp.headers.keys().collect();
    names.sort();

    for name in names {
        buf.extend_from_slice(name.as_bytes());
        buf.extend_from_slice(b": ");
        buf.extend_from_slice(resp.headers[name].as_bytes());
        buf.extend_from_slice(b"\r\n");
    }

    buf.extend_from_slice(b"\r\n");

    buf
}

/// Serializes one response onto a transport.
///
/// Writing is not transactional: if the transport fails partway, whatever
/// was already written stays sent and the error is surfaced to the caller.
pub struct ResponseWriter {
    head: Vec<u8>,
    status: StatusCode,
    body: Option<PathBuf>,
}

impl ResponseWriter {
    pub fn new(response: &Response) -> Self {
        Self {
            head: serialize_head(response),
            status: response.status,
            body: response.file_path.clone(),
        }
    }

    /// Writes the head and then the body bytes.
    ///
    /// A 200 streams the referenced file verbatim in one bulk copy; a 404
    /// has no body; a 400 has no body, and a 400 that somehow carries a
    /// file path is an error, never silently ignored.
    pub async fn write_to_stream<W>(&mut self, stream: &mut W) -> anyhow::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        stream
            .write_all(&self.head)
            .await
            .context("failed to write response head")?;

        match self.status {
            StatusCode::BadRequest => {
                if self.body.is_some() {
                    anyhow::bail!("bad request response must not carry a body");
                }
            }
            StatusCode::NotFound => {}
            StatusCode::Ok => {
                if let Some(path) = &self.body {
                    let mut file = File::open(path)
                        .await
                        .with_context(|| format!("failed to open {} for body", path.display()))?;
                    tokio::io::copy(&mut file, &mut *stream)
                        .await
                        .context("failed to stream response body")?;
                }
            }
        }

        stream.flush().await.context("failed to flush response")?;

        Ok(())
    }
}
