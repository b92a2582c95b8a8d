//! `Range: bytes=…` resolution against a known file length.
//!
//! Only the single-range forms are served. A multi-range list is reduced to its
//! first range, and the response is never `multipart/byteranges`.

/// Range assumed when the request carries no `Range` header: the whole file.
pub const DEFAULT_RANGE: &str = "bytes=0-";

const BYTES_UNIT: &str = "bytes=";

/// An inclusive byte span, already clamped to the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteRange {
    pub start: u64,
    pub end: u64,
}

impl ByteRange {
    /// Number of bytes covered. Never zero: `start <= end` holds for every resolved range.
    pub fn content_length(&self) -> u64 {
        self.end - self.start + 1
    }

    /// `Content-Range` header value, e.g. `bytes 0-99/1000`.
    pub fn content_range(&self, file_len: u64) -> String {
        format!("bytes {}-{}/{}", self.start, self.end, file_len)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    #[error("range does not use the bytes unit")]
    Unit,
    #[error("malformed byte range")]
    Malformed,
    #[error("range starting at {start} cannot be satisfied by a {file_len}-byte file")]
    Unsatisfiable { start: u64, file_len: u64 },
}

/// Resolve a `Range` header value against a file of `file_len` bytes.
///
/// * `bytes=-N` ends at the last byte and starts `N` bytes before it, so it
///   covers `N + 1` bytes (the whole file when `N >= file_len - 1`).
/// * `bytes=S-` runs to the end of the file.
/// * `bytes=S-E` has its end clamped to the last byte.
///
/// A start past the (clamped) end is unsatisfiable, which includes every range
/// against an empty file.
pub fn resolve(header: &str, file_len: u64) -> Result<ByteRange, RangeError> {
    let spec = header
        .trim()
        .strip_prefix(BYTES_UNIT)
        .ok_or(RangeError::Unit)?;
    let first = spec.split(',').next().unwrap_or_default().trim();
    let (start_str, end_str) = first.split_once('-').ok_or(RangeError::Malformed)?;
    let (start_str, end_str) = (start_str.trim(), end_str.trim());

    if file_len == 0 {
        return Err(RangeError::Unsatisfiable { start: 0, file_len });
    }
    let last = file_len - 1;

    if start_str.is_empty() {
        let suffix = parse_bound(end_str)?;
        return Ok(ByteRange {
            start: last.saturating_sub(suffix),
            end: last,
        });
    }

    let start = parse_bound(start_str)?;
    let end = if end_str.is_empty() {
        last
    } else {
        parse_bound(end_str)?.min(last)
    };

    if start > end {
        return Err(RangeError::Unsatisfiable { start, file_len });
    }
    Ok(ByteRange { start, end })
}

fn parse_bound(s: &str) -> Result<u64, RangeError> {
    // u64::from_str accepts a leading '+', which is not valid in a byte range
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RangeError::Malformed);
    }
    s.parse().map_err(|_| RangeError::Malformed)
}
