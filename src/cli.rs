use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "mediacast",
    about = "Serve the current track (with byte ranges) and its album art over local HTTP",
    long_about = None,
    version,
)]
pub struct Args {
    /// Audio file to serve on /audio
    pub audio: Option<PathBuf>,

    /// Artwork file to serve on /image, overriding embedded and folder art
    #[arg(short, long, value_name = "FILE")]
    pub image: Option<PathBuf>,

    /// HTTP port to listen on [default: 5000]
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Path to TOML config file (overrides default search: ./mediacast.toml, ~/.config/mediacast/config.toml)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Bind to localhost only (127.0.0.1) instead of all interfaces (0.0.0.0)
    #[arg(long)]
    pub localhost: bool,

    /// Look for artwork in the track's tags before the track's folder
    #[arg(long)]
    pub prefer_embedded: bool,
}
