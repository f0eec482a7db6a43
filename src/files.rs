//! Document-root file resolution.
//!
//! Maps a request path onto a concrete file under the document root. All
//! stat failures (missing file, permission error, anything else) collapse
//! into "absent"; the caller answers 404 without distinguishing causes.

use crate::config::StaticFilesConfig;
use std::path::PathBuf;
use std::time::SystemTime;
use tokio::fs;

/// A file located under the document root, with the stat results the
/// response builder needs so it never has to stat again.
#[derive(Debug, Clone)]
pub struct ResolvedFile {
    /// Concrete path to stream as the response body
    pub path: PathBuf,
    /// File size in bytes
    pub len: u64,
    /// Filesystem modification time
    pub modified: SystemTime,
}

/// Resolves `request_path` against the document root.
///
/// The candidate is the plain concatenation of doc_root and the request
/// path; no canonicalization or traversal bounding is applied, matching
/// the wire contract this server implements. When the candidate is a
/// directory, the configured index file is appended and resolved again.
pub async fn resolve(docs: &StaticFilesConfig, request_path: &str) -> Option<ResolvedFile> {
    let mut candidate = PathBuf::from(format!("{}{}", docs.doc_root.display(), request_path));

    let mut meta = fs::metadata(&candidate).await.ok()?;
    if meta.is_dir() {
        candidate.push(&docs.index_file);
        meta = fs::metadata(&candidate).await.ok()?;
    }

    let modified = meta.modified().ok()?;

    Some(ResolvedFile { path: candidate, len: meta.len(), modified })
}
