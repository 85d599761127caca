use axum::{
    extract::{Path, State},
    Json,
};
use tracing::{info, instrument};

use super::service::{live_match, start_match};
use super::types::{CreateMatchRequest, MatchPhaseResponse, MatchStateResponse};
use crate::persistence::MatchRecord;
use crate::shared::{AppError, AppState};

/// HTTP handler for starting a new match
///
/// POST /matches
/// Returns the generated match id and its phase (running)
#[instrument(name = "create_match", skip(state, request))]
pub async fn create_match(
    State(state): State<AppState>,
    Json(request): Json<CreateMatchRequest>,
) -> Result<Json<MatchPhaseResponse>, AppError> {
    info!(home = %request.home.name, away = %request.away.name, "Creating match");

    let engine = start_match(&state, request.home, request.away).await?;

    Ok(Json(MatchPhaseResponse {
        match_id: engine.match_id().to_string(),
        phase: engine.phase().await,
    }))
}

/// HTTP handler for the persisted record of a match
///
/// GET /matches/:id
#[instrument(name = "get_match", skip(state))]
pub async fn get_match(
    State(state): State<AppState>,
    Path(match_id): Path<String>,
) -> Result<Json<MatchRecord>, AppError> {
    let record = state
        .repository
        .get_match(&match_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Match not found: {}", match_id)))?;

    Ok(Json(record))
}

/// HTTP handler for the live state of a running or paused match
///
/// GET /matches/:id/state
#[instrument(name = "get_match_state", skip(state))]
pub async fn get_match_state(
    State(state): State<AppState>,
    Path(match_id): Path<String>,
) -> Result<Json<MatchStateResponse>, AppError> {
    let engine = live_match(&state, &match_id).await?;

    Ok(Json(MatchStateResponse {
        match_id,
        phase: engine.phase().await,
        state: engine.snapshot().await,
    }))
}

/// POST /matches/:id/pause
#[instrument(name = "pause_match", skip(state))]
pub async fn pause_match(
    State(state): State<AppState>,
    Path(match_id): Path<String>,
) -> Result<Json<MatchPhaseResponse>, AppError> {
    let phase = live_match(&state, &match_id).await?.pause().await;
    Ok(Json(MatchPhaseResponse { match_id, phase }))
}

/// POST /matches/:id/resume
#[instrument(name = "resume_match", skip(state))]
pub async fn resume_match(
    State(state): State<AppState>,
    Path(match_id): Path<String>,
) -> Result<Json<MatchPhaseResponse>, AppError> {
    let phase = live_match(&state, &match_id).await?.resume().await;
    Ok(Json(MatchPhaseResponse { match_id, phase }))
}

/// POST /matches/:id/stop
#[instrument(name = "stop_match", skip(state))]
pub async fn stop_match(
    State(state): State<AppState>,
    Path(match_id): Path<String>,
) -> Result<Json<MatchPhaseResponse>, AppError> {
    let phase = live_match(&state, &match_id).await?.stop().await;
    info!(match_id = %match_id, "Match stopped on request");
    Ok(Json(MatchPhaseResponse { match_id, phase }))
}
