use std::path::PathBuf;
use std::sync::{Arc, PoisonError, RwLock};

use bytes::Bytes;

/// The audio file and album-art buffer currently exposed over HTTP.
///
/// Cloning yields another handle onto the same state, so the application can keep
/// one to swap tracks while the router holds another. Swaps are last-write-wins;
/// an in-flight request may observe either the old or the new value.
#[derive(Debug, Clone, Default)]
pub struct ServedResources {
    audio: Arc<RwLock<Option<PathBuf>>>,
    image: Arc<RwLock<Option<Bytes>>>,
}

impl ServedResources {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the audio file served to subsequent requests.
    /// The path is not checked here; a missing file surfaces as a 404 at request time.
    pub fn set_audio_resource(&self, path: impl Into<PathBuf>) {
        let path = path.into();
        tracing::debug!("Serving audio from {}", path.display());
        *self.audio.write().unwrap_or_else(PoisonError::into_inner) = Some(path);
    }

    pub fn audio_resource(&self) -> Option<PathBuf> {
        self.audio
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replace the album-art buffer, or clear it with `None`.
    pub fn set_image_resource(&self, bytes: Option<Bytes>) {
        match &bytes {
            Some(b) => tracing::debug!("Serving {} bytes of artwork", b.len()),
            None => tracing::debug!("Artwork cleared"),
        }
        *self.image.write().unwrap_or_else(PoisonError::into_inner) = bytes;
    }

    pub fn clear_image_resource(&self) {
        self.set_image_resource(None);
    }

    /// Cheap snapshot: `Bytes` clones share the underlying buffer.
    pub fn image_resource(&self) -> Option<Bytes> {
        self.image
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
