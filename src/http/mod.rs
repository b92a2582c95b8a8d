pub mod media;
pub mod range;
pub mod state;
pub mod streams;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::http::state::AppState;

/// Every path goes through one dispatcher, which picks the resource by substring.
/// `get` also answers HEAD; other methods get 405.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .fallback(get(media::dispatch))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
