use std::path::Path;
use mediacast::media::mime::{lookup, mime_for_path, DEFAULT_MIME};

#[test]
fn test_mp3_is_audio_mpeg() {
    assert_eq!(mime_for_path(Path::new("/music/song.mp3")), "audio/mpeg");
}

#[test]
fn test_flac_is_audio_flac() {
    assert_eq!(mime_for_path(Path::new("track.flac")), "audio/flac");
}

#[test]
fn test_ogg_is_audio_ogg() {
    assert_eq!(lookup("ogg"), Some("audio/ogg"));
}

#[test]
fn test_case_insensitive() {
    assert_eq!(mime_for_path(Path::new("SONG.MP3")), "audio/mpeg");
    assert_eq!(lookup("PNG"), Some("image/png"));
}

#[test]
fn test_unknown_extension_falls_back_to_octet_stream() {
    assert_eq!(lookup("xyz"), None);
    assert_eq!(mime_for_path(Path::new("song.xyz")), DEFAULT_MIME);
}

#[test]
fn test_no_extension_falls_back_to_octet_stream() {
    assert_eq!(mime_for_path(Path::new("Makefile")), DEFAULT_MIME);
}

#[test]
fn test_only_last_extension_counts() {
    assert_eq!(mime_for_path(Path::new("mix.mp3.m4a")), "audio/mp4");
}

#[test]
fn test_text_and_application_entries() {
    assert_eq!(lookup("html"), Some("text/html"));
    assert_eq!(lookup("pdf"), Some("application/pdf"));
    assert_eq!(lookup("m3u"), Some("audio/mpeg-url"));
}
