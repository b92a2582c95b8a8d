use std::path::Path;

/// Returned for extensions the table does not know, and for paths without one.
pub const DEFAULT_MIME: &str = "application/octet-stream";

/// Album art is always advertised as PNG, whatever the buffer actually holds.
pub const IMAGE_MIME: &str = "image/png";

/// Look up the MIME type for a bare file extension (no leading dot).
///
/// Matching is case-insensitive. Returns `None` for unrecognized extensions;
/// callers that need a header value should use [`mime_for_path`].
pub fn lookup(ext: &str) -> Option<&'static str> {
    let ext = ext.to_ascii_lowercase();

    let mime = match ext.as_str() {
        // Text
        "css" => "text/css",
        "htm" | "html" => "text/html",
        "xml" => "text/xml",
        "java" => "text/x-java-source",
        "md" | "txt" | "asc" => "text/plain",

        // Image
        "gif" => "image/gif",
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",

        // Audio
        "mp3" => "audio/mpeg",
        "m3u" => "audio/mpeg-url",
        "flac" => "audio/flac",
        "wav" => "audio/wav",
        "m4a" => "audio/mp4",
        "aac" => "audio/aac",
        "ogg" | "oga" | "opus" => "audio/ogg",
        "wma" => "audio/x-ms-wma",
        "aif" | "aiff" => "audio/aiff",

        // Video
        "mp4" => "video/mp4",
        "ogv" => "video/ogg",
        "flv" => "video/x-flv",
        "mov" => "video/quicktime",

        // Application
        "swf" => "application/x-shockwave-flash",
        "js" => "application/javascript",
        "pdf" => "application/pdf",
        "doc" => "application/msword",
        "zip" | "exe" | "class" => DEFAULT_MIME,

        _ => return None,
    };

    Some(mime)
}

/// MIME type for the file at `path`, derived from its extension.
/// Falls back to [`DEFAULT_MIME`] so the result is always a usable header value.
pub fn mime_for_path(path: &Path) -> &'static str {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(lookup)
        .unwrap_or(DEFAULT_MIME)
}
