use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use bytes::Bytes;
use tokio::sync::{oneshot, Mutex};
use tokio::task::JoinHandle;

use crate::error::ServerError;
use crate::http::{self, state::AppState};
use crate::media::resources::ServedResources;

/// How long `stop()` waits for in-flight connections to drain.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(1);

struct Running {
    local_addr: SocketAddr,
    shutdown_tx: oneshot::Sender<()>,
    task: JoinHandle<()>,
}

/// The local media endpoint: owns the served resources, the open-stream slots
/// and the listener lifecycle (Stopped -> Started -> Stopped).
///
/// Construct once in the composition root and share by reference or `Arc`.
/// `start`/`stop` are meant to be driven by a single controlling task.
pub struct MediaServer {
    bind_addr: SocketAddr,
    state: AppState,
    running: Mutex<Option<Running>>,
}

impl MediaServer {
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            state: AppState::default(),
            running: Mutex::new(None),
        }
    }

    /// Handle for callers that swap the served track or artwork.
    pub fn resources(&self) -> &ServedResources {
        &self.state.resources
    }

    pub fn set_audio_resource(&self, path: impl Into<PathBuf>) {
        self.state.resources.set_audio_resource(path);
    }

    pub fn set_image_resource(&self, bytes: Option<Bytes>) {
        self.state.resources.set_image_resource(bytes);
    }

    pub fn clear_image_resource(&self) {
        self.state.resources.clear_image_resource();
    }

    /// Bind the listener and start serving. Bind failures are logged, not returned.
    pub async fn start(&self) {
        if let Err(e) = self.try_start().await {
            tracing::error!("Error starting server: {}", e);
        }
    }

    /// Bind the listener and start serving, returning the bound address.
    /// Calling it on a running server returns the existing address.
    pub async fn try_start(&self) -> Result<SocketAddr, ServerError> {
        let mut running = self.running.lock().await;
        if let Some(r) = running.as_ref() {
            tracing::debug!("Server already running on {}", r.local_addr);
            return Ok(r.local_addr);
        }

        let bind_err = |source| ServerError::Bind {
            addr: self.bind_addr,
            source,
        };
        let listener = tokio::net::TcpListener::bind(self.bind_addr)
            .await
            .map_err(bind_err)?;
        let local_addr = listener.local_addr().map_err(bind_err)?;

        let app = http::build_router(self.state.clone());
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let task = tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.await;
                })
                .await
                .unwrap_or_else(|e| tracing::error!("HTTP server error: {}", e));
        });

        tracing::info!("Media server listening on http://{}", local_addr);
        *running = Some(Running {
            local_addr,
            shutdown_tx,
            task,
        });
        Ok(local_addr)
    }

    /// Stop listening and close any open audio/image streams. No-op when stopped.
    pub async fn stop(&self) {
        let Some(running) = self.running.lock().await.take() else {
            return;
        };

        let _ = running.shutdown_tx.send(());
        // Streams are cut first so graceful shutdown is not held up by long bodies
        self.state.streams.close_all();

        let mut task = running.task;
        if tokio::time::timeout(SHUTDOWN_GRACE, &mut task).await.is_err() {
            tracing::warn!("HTTP server did not drain within {:?}; aborting", SHUTDOWN_GRACE);
            task.abort();
        }
        tracing::info!("Media server on {} stopped", running.local_addr);
    }

    pub async fn is_running(&self) -> bool {
        self.running.lock().await.is_some()
    }

    /// Address the listener is bound to, if running. Differs from the configured
    /// address when port 0 was requested.
    pub async fn local_addr(&self) -> Option<SocketAddr> {
        self.running.lock().await.as_ref().map(|r| r.local_addr)
    }
}
