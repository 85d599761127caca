use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, instrument, warn};

use super::errors::RepositoryError;
use super::models::{CommentaryRecord, MatchRecord, MatchStatus};
use crate::event::{CommentaryKind, MatchSummary};

/// Persistence sink for matches: a live record, appended commentary and a
/// final summary that marks the match completed
#[async_trait]
pub trait MatchRepository: Send + Sync {
    async fn create_match(&self, record: &MatchRecord) -> Result<(), RepositoryError>;
    async fn append_commentary(
        &self,
        match_id: &str,
        record: CommentaryRecord,
    ) -> Result<(), RepositoryError>;
    async fn complete_match(
        &self,
        match_id: &str,
        summary: MatchSummary,
    ) -> Result<(), RepositoryError>;
    async fn get_match(&self, match_id: &str) -> Result<Option<MatchRecord>, RepositoryError>;
}

#[derive(Debug, Default)]
pub struct InMemoryMatchRepository {
    matches: Arc<RwLock<HashMap<String, MatchRecord>>>,
}

impl InMemoryMatchRepository {
    pub fn new() -> Self {
        Self {
            matches: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl MatchRepository for InMemoryMatchRepository {
    async fn create_match(&self, record: &MatchRecord) -> Result<(), RepositoryError> {
        let mut matches = self.matches.write().await;
        if matches.contains_key(&record.id) {
            return Err(RepositoryError::AlreadyExists(record.id.clone()));
        }
        matches.insert(record.id.clone(), record.clone());
        debug!(match_id = %record.id, "Match stored in memory");
        Ok(())
    }

    async fn append_commentary(
        &self,
        match_id: &str,
        record: CommentaryRecord,
    ) -> Result<(), RepositoryError> {
        let mut matches = self.matches.write().await;
        let stored = matches
            .get_mut(match_id)
            .ok_or_else(|| RepositoryError::NotFound(match_id.to_string()))?;
        stored.commentary.push(record);
        Ok(())
    }

    async fn complete_match(
        &self,
        match_id: &str,
        summary: MatchSummary,
    ) -> Result<(), RepositoryError> {
        let mut matches = self.matches.write().await;
        let stored = matches
            .get_mut(match_id)
            .ok_or_else(|| RepositoryError::NotFound(match_id.to_string()))?;

        if stored.is_completed() {
            return Err(RepositoryError::AlreadyCompleted(match_id.to_string()));
        }

        stored.status = MatchStatus::Completed;
        stored.summary = Some(summary);
        debug!(match_id = %match_id, "Match completed in memory");
        Ok(())
    }

    async fn get_match(&self, match_id: &str) -> Result<Option<MatchRecord>, RepositoryError> {
        let matches = self.matches.read().await;
        Ok(matches.get(match_id).cloned())
    }
}

const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS matches (
        id TEXT PRIMARY KEY,
        home_team TEXT NOT NULL,
        away_team TEXT NOT NULL,
        stadium TEXT,
        status TEXT NOT NULL,
        summary TEXT,
        created_at TIMESTAMPTZ NOT NULL,
        completed_at TIMESTAMPTZ
    )",
    "CREATE TABLE IF NOT EXISTS match_commentary (
        id UUID PRIMARY KEY,
        match_id TEXT NOT NULL REFERENCES matches(id) ON DELETE CASCADE,
        minute INTEGER NOT NULL,
        kind TEXT NOT NULL,
        text TEXT NOT NULL,
        severe BOOLEAN NOT NULL,
        created_at TIMESTAMPTZ NOT NULL
    )",
];

/// PostgreSQL implementation of the match repository
pub struct PostgresMatchRepository {
    pool: PgPool,
}

impl PostgresMatchRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates the match tables when they do not exist yet
    #[instrument(skip(self))]
    pub async fn ensure_schema(&self) -> Result<(), RepositoryError> {
        for statement in SCHEMA {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .map_err(database_error)?;
        }
        Ok(())
    }

    async fn load_commentary(
        &self,
        match_id: &str,
    ) -> Result<Vec<CommentaryRecord>, RepositoryError> {
        let rows = sqlx::query(
            "SELECT id, minute, kind, text, severe, created_at FROM match_commentary WHERE match_id = $1 ORDER BY minute, created_at",
        )
        .bind(match_id)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        rows.into_iter()
            .map(|row| {
                let kind: String = row.get("kind");
                let minute: i32 = row.get("minute");
                Ok(CommentaryRecord {
                    id: row.get("id"),
                    minute: minute.max(0) as u32,
                    kind: kind.parse::<CommentaryKind>().map_err(|_| {
                        RepositoryError::Database(format!("Unknown commentary kind: {}", kind))
                    })?,
                    text: row.get("text"),
                    severe: row.get("severe"),
                    created_at: row.get("created_at"),
                })
            })
            .collect()
    }
}

fn database_error(e: sqlx::Error) -> RepositoryError {
    warn!(error = %e, "Match repository query failed");
    RepositoryError::Database(e.to_string())
}

#[async_trait]
impl MatchRepository for PostgresMatchRepository {
    #[instrument(skip(self, record), fields(match_id = %record.id))]
    async fn create_match(&self, record: &MatchRecord) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            "INSERT INTO matches (id, home_team, away_team, stadium, status, created_at) VALUES ($1, $2, $3, $4, $5, $6) ON CONFLICT (id) DO NOTHING",
        )
        .bind(&record.id)
        .bind(&record.home_team)
        .bind(&record.away_team)
        .bind(&record.stadium)
        .bind(record.status.to_string())
        .bind(record.created_at)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::AlreadyExists(record.id.clone()));
        }

        debug!("Match created in database");
        Ok(())
    }

    #[instrument(skip(self, record))]
    async fn append_commentary(
        &self,
        match_id: &str,
        record: CommentaryRecord,
    ) -> Result<(), RepositoryError> {
        sqlx::query(
            "INSERT INTO match_commentary (id, match_id, minute, kind, text, severe, created_at) VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(record.id)
        .bind(match_id)
        .bind(record.minute as i32)
        .bind(record.kind.to_string())
        .bind(&record.text)
        .bind(record.severe)
        .bind(record.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            let unknown_match =
                matches!(&e, sqlx::Error::Database(db) if db.is_foreign_key_violation());
            if unknown_match {
                RepositoryError::NotFound(match_id.to_string())
            } else {
                database_error(e)
            }
        })?;

        Ok(())
    }

    #[instrument(skip(self, summary))]
    async fn complete_match(
        &self,
        match_id: &str,
        summary: MatchSummary,
    ) -> Result<(), RepositoryError> {
        let serialized = serde_json::to_string(&summary)
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        let result = sqlx::query(
            "UPDATE matches SET status = $2, summary = $3, completed_at = $4 WHERE id = $1 AND status <> $2",
        )
        .bind(match_id)
        .bind(MatchStatus::Completed.to_string())
        .bind(serialized)
        .bind(summary.completed_at)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return match self.get_match(match_id).await? {
                Some(_) => Err(RepositoryError::AlreadyCompleted(match_id.to_string())),
                None => Err(RepositoryError::NotFound(match_id.to_string())),
            };
        }

        debug!(match_id = %match_id, "Match completed in database");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_match(&self, match_id: &str) -> Result<Option<MatchRecord>, RepositoryError> {
        let row = sqlx::query(
            "SELECT id, home_team, away_team, stadium, status, summary, created_at FROM matches WHERE id = $1",
        )
        .bind(match_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        let Some(row) = row else {
            debug!(match_id = %match_id, "Match not found in database");
            return Ok(None);
        };

        let status: String = row.get("status");
        let summary: Option<String> = row.get("summary");
        let created_at: DateTime<Utc> = row.get("created_at");

        let summary = summary
            .map(|raw| serde_json::from_str::<MatchSummary>(&raw))
            .transpose()
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        Ok(Some(MatchRecord {
            id: row.get("id"),
            home_team: row.get("home_team"),
            away_team: row.get("away_team"),
            stadium: row.get("stadium"),
            status: status
                .parse::<MatchStatus>()
                .map_err(|_| RepositoryError::Database(format!("Unknown status: {}", status)))?,
            commentary: self.load_commentary(match_id).await?,
            summary,
            created_at,
        }))
    }
}
