use std::sync::{Arc, Mutex, PoisonError};

use axum::body::Body;
use bytes::Bytes;
use futures_util::{Stream, StreamExt};
use tokio_util::sync::CancellationToken;

/// Which resource a response stream belongs to.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StreamKind {
    Audio,
    Image,
}

/// At most one open response stream per [`StreamKind`].
///
/// Opening a stream closes the previous one of the same kind: its body ends
/// early and the file handle behind it is dropped. Clones share the slots.
#[derive(Debug, Clone, Default)]
pub struct StreamSlots {
    audio: Arc<Mutex<Option<CancellationToken>>>,
    image: Arc<Mutex<Option<CancellationToken>>>,
}

impl StreamSlots {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, kind: StreamKind) -> &Mutex<Option<CancellationToken>> {
        match kind {
            StreamKind::Audio => &self.audio,
            StreamKind::Image => &self.image,
        }
    }

    /// Close the open stream of `kind` (if any) and register a new one.
    pub fn replace(&self, kind: StreamKind) -> CancellationToken {
        let token = CancellationToken::new();
        let previous = self
            .slot(kind)
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(token.clone());
        if let Some(previous) = previous {
            tracing::debug!("Closing previous {:?} stream", kind);
            previous.cancel();
        }
        token
    }

    /// Close every open stream. Called when the server stops.
    pub fn close_all(&self) {
        for kind in [StreamKind::Audio, StreamKind::Image] {
            if let Some(token) = self
                .slot(kind)
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .take()
            {
                token.cancel();
            }
        }
    }
}

/// Response body that ends as soon as `token` is cancelled.
pub fn cancellable_body<S>(token: CancellationToken, stream: S) -> Body
where
    S: Stream<Item = std::io::Result<Bytes>> + Send + 'static,
{
    Body::from_stream(stream.take_until(token.cancelled_owned()))
}
