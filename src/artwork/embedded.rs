use std::path::Path;

use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::{MetadataOptions, MetadataRevision, StandardVisualKey};
use symphonia::core::probe::Hint;

use crate::artwork::{ArtworkError, ArtworkSource};

/// Picture stored in the track's own tags (ID3v2 APIC, FLAC PICTURE, MP4 covr, ...).
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

impl ArtworkSource for EmbeddedSource {
    fn name(&self) -> &'static str {
        "embedded"
    }

    fn load(&self, track: &Path) -> Result<Option<Vec<u8>>, ArtworkError> {
        let file = std::fs::File::open(track)?;
        let mss = MediaSourceStream::new(Box::new(file), Default::default());

        let mut hint = Hint::new();
        if let Some(ext) = track.extension().and_then(|e| e.to_str()) {
            hint.with_extension(ext);
        }

        let mut probed = symphonia::default::get_probe().format(
            &hint,
            mss,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )?;

        // Tags in front of the container (ID3v2 on MP3) are found by the probe;
        // tags inside it (Vorbis comments, MP4 atoms) by the format reader.
        if let Some(data) = probed
            .metadata
            .get()
            .as_ref()
            .and_then(|m| m.current())
            .and_then(front_cover)
        {
            return Ok(Some(data));
        }

        let mut format = probed.format;
        let data = format.metadata().current().and_then(front_cover);
        Ok(data)
    }
}

/// Prefer a picture tagged as the front cover, else the first picture at all.
fn front_cover(revision: &MetadataRevision) -> Option<Vec<u8>> {
    let visuals = revision.visuals();
    visuals
        .iter()
        .find(|v| matches!(v.usage, Some(StandardVisualKey::FrontCover)))
        .or_else(|| visuals.first())
        .map(|v| v.data.to_vec())
}
