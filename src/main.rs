use std::sync::atomic::{AtomicBool, Ordering};

use bytes::Bytes;
use clap::Parser;

use mediacast::artwork::ArtworkResolver;
use mediacast::server::MediaServer;
use mediacast::{cli, config};

/// Set to true once the first Ctrl+C is received. Second Ctrl+C force-exits.
static SHUTTING_DOWN: AtomicBool = AtomicBool::new(false);

/// Wait for the first Ctrl+C; a second one during shutdown exits immediately.
async fn wait_for_shutdown() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        eprintln!("error: failed to install Ctrl+C handler: {e}");
        std::process::exit(1);
    }
    tokio::spawn(async {
        if tokio::signal::ctrl_c().await.is_ok() && SHUTTING_DOWN.load(Ordering::SeqCst) {
            eprintln!("\nmediacast: forced exit");
            std::process::exit(1);
        }
    });
    SHUTTING_DOWN.store(true, Ordering::SeqCst);
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
        )
        .init();

    let args = cli::Args::parse();

    let file_config = config::find_config_file(args.config.as_deref())
        .and_then(|path| {
            match config::load_config(&path) {
                Ok(cfg) => {
                    tracing::debug!("Loaded config from {}", path.display());
                    Some(cfg)
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config file: {}", e);
                    None
                }
            }
        });

    let config = config::Config::resolve(file_config, &args);

    let server = MediaServer::new(config.bind_addr());

    if let Some(track) = &config.audio {
        if !track.is_file() {
            eprintln!("error: not a file: {}", track.display());
            std::process::exit(1);
        }
        server.set_audio_resource(track.clone());

        let mut resolver = ArtworkResolver::new(config.artwork);
        if let Some(image) = &config.image {
            resolver = resolver.with_user_selected(image.clone());
        }
        // Synchronous artwork lookup -- acceptable since the server has not started yet
        server.set_image_resource(resolver.resolve(track));
    } else if let Some(image) = &config.image {
        match std::fs::read(image) {
            Ok(data) => server.set_image_resource(Some(Bytes::from(data))),
            Err(e) => {
                eprintln!("error: cannot read {}: {}", image.display(), e);
                std::process::exit(1);
            }
        }
    }

    let addr = match server.try_start().await {
        Ok(addr) => addr,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };
    tracing::info!("Audio on http://{}/audio, artwork on http://{}/image", addr, addr);

    wait_for_shutdown().await;
    tracing::info!("Shutting down...");
    server.stop().await;
    tracing::info!("Goodbye.");
}
