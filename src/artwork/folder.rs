use std::path::{Path, PathBuf};

use crate::artwork::{ArtworkError, ArtworkSource};

/// File stems recognized as album art, most specific first.
pub const COVER_NAMES: &[&str] = &["cover", "folder", "album", "front", "artwork"];

const COVER_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// An image file next to the track, e.g. `cover.jpg` or `Folder.PNG`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FolderSource;

impl FolderSource {
    /// Best-ranked cover image in `dir`. Names are matched case-insensitively.
    pub fn find_cover(dir: &Path) -> Result<Option<PathBuf>, ArtworkError> {
        let mut best: Option<(usize, PathBuf)> = None;

        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let path = entry.path();
            let Some(rank) = cover_rank(&path) else {
                continue;
            };
            if best.as_ref().map_or(true, |(r, _)| rank < *r) {
                best = Some((rank, path));
            }
        }

        Ok(best.map(|(_, path)| path))
    }
}

fn cover_rank(path: &Path) -> Option<usize> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    if !COVER_EXTENSIONS.contains(&ext.as_str()) {
        return None;
    }
    let stem = path.file_stem()?.to_str()?.to_ascii_lowercase();
    COVER_NAMES.iter().position(|name| *name == stem)
}

impl ArtworkSource for FolderSource {
    fn name(&self) -> &'static str {
        "folder"
    }

    fn load(&self, track: &Path) -> Result<Option<Vec<u8>>, ArtworkError> {
        let Some(dir) = track.parent() else {
            return Ok(None);
        };
        // A bare file name has an empty parent: look in the working directory
        let dir = if dir.as_os_str().is_empty() { Path::new(".") } else { dir };

        match Self::find_cover(dir)? {
            Some(cover) => {
                tracing::debug!("Found folder artwork {}", cover.display());
                Ok(Some(std::fs::read(cover)?))
            }
            None => Ok(None),
        }
    }
}
