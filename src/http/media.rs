use std::io::SeekFrom;

use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use tokio::io::{AsyncReadExt, AsyncSeekExt};
use tokio_util::io::ReaderStream;

use crate::error::ServeError;
use crate::http::range::{self, ByteRange, DEFAULT_RANGE};
use crate::http::state::AppState;
use crate::http::streams::{cancellable_body, StreamKind};
use crate::media::mime::{mime_for_path, IMAGE_MIME};

/// Single entry point for every request. Routes on a substring of the path:
/// anything mentioning `audio` is the track, then anything mentioning `image` is
/// the artwork, and everything else is 404.
pub async fn dispatch(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    req_headers: HeaderMap,
) -> Response {
    let path = uri.path();
    let result = if path.contains("audio") {
        serve_audio(&state, &method, &req_headers).await
    } else if path.contains("image") {
        serve_image(&state, &method)
    } else {
        Err(ServeError::NotFound("File not found"))
    };

    result.unwrap_or_else(|e| {
        match &e {
            ServeError::NotFound(_) | ServeError::RangeNotSatisfiable { .. } => {
                tracing::debug!("{} {}: {}", method, path, e)
            }
            _ => tracing::error!("{} {}: {}", method, path, e),
        }
        e.into_response()
    })
}

/// Audio is always answered with 206, even when no `Range` was sent
/// (the request is then treated as `bytes=0-`).
async fn serve_audio(
    state: &AppState,
    method: &Method,
    req_headers: &HeaderMap,
) -> Result<Response, ServeError> {
    let Some(path) = state.resources.audio_resource() else {
        tracing::warn!("Audio requested but no audio file is set");
        return Err(ServeError::NotFound("File not found"));
    };

    let metadata = tokio::fs::metadata(&path).await?;
    if !metadata.is_file() {
        tracing::warn!("Audio path is not a regular file: {}", path.display());
        return Err(ServeError::NotFound("File not found"));
    }
    let file_len = metadata.len();

    let range_str = match req_headers.get(header::RANGE) {
        None => DEFAULT_RANGE.to_string(),
        Some(value) => match value.to_str() {
            Ok(s) => s.to_owned(),
            Err(_) => {
                return Err(ServeError::RangeNotSatisfiable {
                    range: String::from_utf8_lossy(value.as_bytes()).into_owned(),
                    file_len,
                });
            }
        },
    };

    let range = range::resolve(&range_str, file_len).map_err(|e| {
        tracing::debug!("Rejecting range {:?}: {}", range_str, e);
        ServeError::RangeNotSatisfiable {
            range: range_str.clone(),
            file_len,
        }
    })?;

    let headers = partial_content_headers(&range, file_len, mime_for_path(&path));
    if *method == Method::HEAD {
        return Ok((StatusCode::PARTIAL_CONTENT, headers).into_response());
    }

    let mut file = tokio::fs::File::open(&path).await?;
    let skipped = skip_to(&mut file, range.start).await?;
    if skipped < range.start {
        tracing::warn!("Skipped only {} of {} bytes in {}", skipped, range.start, path.display());
        return Err(ServeError::ShortSkip {
            requested: range.start,
            skipped,
        });
    }

    // A failed request leaves the in-flight stream alone; only a body that is
    // about to be sent closes the previous one
    let token = state.streams.replace(StreamKind::Audio);
    tracing::debug!("Serving {} {}", path.display(), range.content_range(file_len));
    let stream = ReaderStream::new(file.take(range.content_length()));
    let body = cancellable_body(token, stream);
    Ok((StatusCode::PARTIAL_CONTENT, headers, body).into_response())
}

fn partial_content_headers(range: &ByteRange, file_len: u64, mime: &'static str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(mime));
    headers.insert(
        header::CONTENT_LENGTH,
        HeaderValue::from(range.content_length()),
    );
    headers.insert(
        header::CONTENT_RANGE,
        HeaderValue::from_str(&range.content_range(file_len))
            .unwrap_or_else(|_| HeaderValue::from_static("bytes 0-0/0")),
    );
    headers.insert(header::ACCEPT_RANGES, HeaderValue::from_static("bytes"));
    headers
}

/// Move to `offset` and report how far the file actually let us go.
/// Seeking past EOF succeeds on most platforms, so the current length bounds the result.
async fn skip_to(file: &mut tokio::fs::File, offset: u64) -> std::io::Result<u64> {
    let available = file.metadata().await?.len();
    let target = offset.min(available);
    file.seek(SeekFrom::Start(target)).await
}

/// The artwork buffer in full, labelled PNG regardless of its real encoding.
fn serve_image(state: &AppState, method: &Method) -> Result<Response, ServeError> {
    let Some(bytes) = state.resources.image_resource() else {
        return Err(ServeError::NotFound("No artwork set"));
    };

    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(IMAGE_MIME));
    headers.insert(header::CONTENT_LENGTH, HeaderValue::from(bytes.len()));
    if *method == Method::HEAD {
        return Ok((StatusCode::OK, headers).into_response());
    }

    tracing::debug!("Serving {} bytes of artwork", bytes.len());
    let token = state.streams.replace(StreamKind::Image);
    let stream = futures_util::stream::once(async move { Ok::<Bytes, std::io::Error>(bytes) });
    let body = cancellable_body(token, stream);
    Ok((StatusCode::OK, headers, body).into_response())
}
