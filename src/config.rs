use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use crate::artwork::ArtworkPreferences;

const DEFAULT_PORT: u16 = 5000;

#[derive(Deserialize, Default, Debug)]
pub struct FileConfig {
    pub port: Option<u16>,
    pub localhost: Option<bool>,
    pub prefer_embedded_artwork: Option<bool>,
    pub ignore_embedded_artwork: Option<bool>,
    pub ignore_folder_artwork: Option<bool>,
}

#[derive(Debug)]
pub struct Config {
    pub port: u16,
    pub localhost: bool,
    pub audio: Option<PathBuf>,
    pub image: Option<PathBuf>,
    pub artwork: ArtworkPreferences,
}

impl Config {
    pub fn resolve(file: Option<FileConfig>, args: &crate::cli::Args) -> Self {
        let file = file.unwrap_or_default();
        Config {
            port: args.port.or(file.port).unwrap_or(DEFAULT_PORT),
            localhost: args.localhost || file.localhost.unwrap_or(false),
            audio: args.audio.clone(),
            image: args.image.clone(),
            artwork: ArtworkPreferences {
                prefer_embedded: args.prefer_embedded
                    || file.prefer_embedded_artwork.unwrap_or(false),
                ignore_embedded: file.ignore_embedded_artwork.unwrap_or(false),
                ignore_folder: file.ignore_folder_artwork.unwrap_or(false),
            },
        }
    }

    /// 127.0.0.1 with `localhost`, otherwise every IPv4 interface.
    pub fn bind_addr(&self) -> SocketAddr {
        let ip = if self.localhost {
            IpAddr::V4(Ipv4Addr::LOCALHOST)
        } else {
            IpAddr::V4(Ipv4Addr::UNSPECIFIED)
        };
        SocketAddr::new(ip, self.port)
    }
}

pub fn find_config_file(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_owned());
    }
    let cwd_config = PathBuf::from("mediacast.toml");
    if cwd_config.exists() {
        return Some(cwd_config);
    }
    if let Some(config_dir) = dirs::config_dir() {
        let xdg_config = config_dir.join("mediacast").join("config.toml");
        if xdg_config.exists() {
            return Some(xdg_config);
        }
    }
    None
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

pub fn load_config(path: &Path) -> Result<FileConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: FileConfig = toml::from_str(&content)?;
    Ok(config)
}
