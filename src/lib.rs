//! Local HTTP media endpoint: the current track with byte-range support, and its album art.

pub mod artwork;
pub mod cli;
pub mod config;
pub mod error;
pub mod http;
pub mod media;
pub mod server;
