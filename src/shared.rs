use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;

use crate::config::EngineConfig;
use crate::engine::EngineError;
use crate::matches::MatchRegistry;
use crate::persistence::{MatchRepository, RepositoryError};

/// Shared application state containing all dependencies
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn MatchRepository>,
    pub registry: MatchRegistry,
    pub engine_config: EngineConfig,
}

impl AppState {
    pub fn new(repository: Arc<dyn MatchRepository>, engine_config: EngineConfig) -> Self {
        Self {
            repository,
            registry: MatchRegistry::new(),
            engine_config,
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal server error")]
    Internal,
}

impl From<EngineError> for AppError {
    fn from(e: EngineError) -> Self {
        AppError::BadRequest(e.to_string())
    }
}

impl From<RepositoryError> for AppError {
    fn from(e: RepositoryError) -> Self {
        match e {
            RepositoryError::NotFound(id) => AppError::NotFound(format!("Match not found: {}", id)),
            RepositoryError::AlreadyExists(_) | RepositoryError::AlreadyCompleted(_) => {
                AppError::Conflict(e.to_string())
            }
            RepositoryError::Database(msg) => AppError::DatabaseError(msg),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            AppError::DatabaseError(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", msg),
            ),
            AppError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        let body = Json(json!({
            "error": error_message
        }));

        (status, body).into_response()
    }
}
