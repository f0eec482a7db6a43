use std::path::Path;

/// Content type served for files with no extension or an extension we
/// don't recognize.
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Maps a file's extension to its Content-Type header value.
///
/// Lookup is case-insensitive on the extension. Anything unknown falls
/// back to [`DEFAULT_CONTENT_TYPE`] rather than failing.
pub fn content_type_for(path: &Path) -> &'static str {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return DEFAULT_CONTENT_TYPE;
    };

    match ext.to_ascii_lowercase().as_str() {
        "html" | "htm" => "text/html",
        "css" => "text/css",
        "txt" => "text/plain",
        "js" => "text/javascript",
        "json" => "application/json",
        "xml" => "application/xml",
        "pdf" => "application/pdf",
        "wasm" => "application/wasm",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        "webp" => "image/webp",
        "woff" => "font/woff",
        "woff2" => "font/woff2",
        "mp4" => "video/mp4",
        "mp3" => "audio/mpeg",
        _ => DEFAULT_CONTENT_TYPE,
    }
}
