//! Album-art resolution: an ordered chain of sources where the first one that
//! yields a recognizable image wins.
//!
//! A source that fails is logged and treated as a miss, so one unreadable file
//! never hides artwork a later source could have found.

pub mod embedded;
pub mod folder;

use std::path::{Path, PathBuf};

use bytes::Bytes;

pub use embedded::EmbeddedSource;
pub use folder::FolderSource;

#[derive(Debug, thiserror::Error)]
pub enum ArtworkError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot read tags: {0}")]
    Tags(#[from] symphonia::core::errors::Error),
}

/// One place artwork for a track may come from.
pub trait ArtworkSource: Send + Sync {
    /// Short label used in logs.
    fn name(&self) -> &'static str;

    /// Raw image bytes for `track`, or `None` when this source has nothing.
    fn load(&self, track: &Path) -> Result<Option<Vec<u8>>, ArtworkError>;
}

/// Artwork the user picked explicitly. Always tried first.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ArtworkSource for FileSource {
    fn name(&self) -> &'static str {
        "user-selected"
    }

    fn load(&self, _track: &Path) -> Result<Option<Vec<u8>>, ArtworkError> {
        Ok(Some(std::fs::read(&self.path)?))
    }
}

/// Which sources take part in resolution, and in what order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArtworkPreferences {
    /// Try tags before the folder. Folder art wins by default.
    pub prefer_embedded: bool,
    pub ignore_embedded: bool,
    pub ignore_folder: bool,
}

#[derive(Debug, Clone, Default)]
pub struct ArtworkResolver {
    preferences: ArtworkPreferences,
    user_selected: Option<FileSource>,
}

impl ArtworkResolver {
    pub fn new(preferences: ArtworkPreferences) -> Self {
        Self {
            preferences,
            user_selected: None,
        }
    }

    pub fn with_user_selected(mut self, path: impl Into<PathBuf>) -> Self {
        self.user_selected = Some(FileSource::new(path));
        self
    }

    /// The chain in the order it is tried.
    pub fn sources(&self) -> Vec<&dyn ArtworkSource> {
        let mut sources: Vec<&dyn ArtworkSource> = Vec::with_capacity(3);
        if let Some(user) = &self.user_selected {
            sources.push(user);
        }

        let embedded = (!self.preferences.ignore_embedded)
            .then_some(&EmbeddedSource as &dyn ArtworkSource);
        let folder = (!self.preferences.ignore_folder)
            .then_some(&FolderSource as &dyn ArtworkSource);
        let ordered = if self.preferences.prefer_embedded {
            [embedded, folder]
        } else {
            [folder, embedded]
        };
        sources.extend(ordered.into_iter().flatten());
        sources
    }

    /// Artwork for `track`, or `None` when every source misses.
    /// Does blocking file I/O; call from a blocking context.
    pub fn resolve(&self, track: &Path) -> Option<Bytes> {
        for source in self.sources() {
            match source.load(track) {
                Ok(Some(data)) => match imagesize::blob_size(&data) {
                    Ok(size) => {
                        tracing::debug!(
                            "Artwork for {} from {} ({}x{}, {} bytes)",
                            track.display(),
                            source.name(),
                            size.width,
                            size.height,
                            data.len()
                        );
                        return Some(Bytes::from(data));
                    }
                    Err(e) => {
                        tracing::warn!(
                            "Ignoring {} artwork for {}: {}",
                            source.name(),
                            track.display(),
                            e
                        );
                    }
                },
                Ok(None) => {}
                Err(e) => {
                    tracing::warn!("{} artwork failed for {}: {}", source.name(), track.display(), e);
                }
            }
        }
        tracing::debug!("No artwork found for {}", track.display());
        None
    }
}
