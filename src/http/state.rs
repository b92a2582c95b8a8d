use crate::http::streams::StreamSlots;
use crate::media::resources::ServedResources;

/// Shared state injected into the request dispatcher via axum::extract::State.
/// Both fields are handles; cloning the state does not copy the resources.
#[derive(Clone, Default)]
pub struct AppState {
    pub resources: ServedResources,
    pub streams: StreamSlots,
}

impl AppState {
    pub fn new(resources: ServedResources) -> Self {
        Self {
            resources,
            streams: StreamSlots::new(),
        }
    }
}
