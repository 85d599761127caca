// Public API - what other modules can use
pub use cleanup_task::{cleanup_abandoned_matches, start_cleanup_task, CleanupConfig};
pub use handlers::{create_match, get_match, get_match_state, pause_match, resume_match, stop_match};
pub use registry::MatchRegistry;
pub use service::{live_match, start_match};
pub use types::{CreateMatchRequest, MatchPhaseResponse, MatchStateResponse};

use axum::{
    routing::{get, post},
    Router,
};

use crate::shared::AppState;

// Internal modules
mod cleanup_task;
mod handlers;
mod registry;
mod service;
mod types;

/// Routes for creating, inspecting and controlling matches
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/matches", post(create_match))
        .route("/matches/:id", get(get_match))
        .route("/matches/:id/state", get(get_match_state))
        .route("/matches/:id/pause", post(pause_match))
        .route("/matches/:id/resume", post(resume_match))
        .route("/matches/:id/stop", post(stop_match))
        .with_state(state)
}
