use std::net::SocketAddr;

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};

const TEXT_HTML: &str = "text/html";

/// Per-request failures. Each one ends the request with a terminal status;
/// nothing is retried by the server.
#[derive(Debug, thiserror::Error)]
pub enum ServeError {
    /// No resource set for the route, the file is gone, or the route is unknown.
    #[error("{0}")]
    NotFound(&'static str),

    /// Body carries the range exactly as the client sent it.
    #[error("range not satisfiable: {range}")]
    RangeNotSatisfiable { range: String, file_len: u64 },

    /// The file ended before the requested start offset could be reached.
    #[error("skipped only {skipped} of {requested} bytes")]
    ShortSkip { requested: u64, skipped: u64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for ServeError {
    fn into_response(self) -> Response {
        match self {
            ServeError::NotFound(reason) => {
                html(StatusCode::NOT_FOUND, reason.to_string())
            }
            ServeError::RangeNotSatisfiable { range, file_len } => {
                let mut response = html(StatusCode::RANGE_NOT_SATISFIABLE, range);
                if let Ok(value) = HeaderValue::from_str(&format!("bytes */{}", file_len)) {
                    response.headers_mut().insert(header::CONTENT_RANGE, value);
                }
                response
            }
            ServeError::ShortSkip { .. } => html(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Unable to skip to requested byte range".to_string(),
            ),
            ServeError::Io(e) if e.kind() == std::io::ErrorKind::NotFound => {
                html(StatusCode::NOT_FOUND, "File not found".to_string())
            }
            ServeError::Io(_) => html(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error reading file".to_string(),
            ),
        }
    }
}

fn html(status: StatusCode, body: String) -> Response {
    (status, [(header::CONTENT_TYPE, TEXT_HTML)], body).into_response()
}

/// Listener lifecycle failures. `MediaServer::start` logs these instead of returning them.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
}
