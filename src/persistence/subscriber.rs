use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use super::models::CommentaryRecord;
use super::repository::MatchRepository;
use crate::event::{CommentaryEvent, EventError, MatchEventListener, MatchSummary};

enum PersistenceCommand {
    Commentary(CommentaryRecord),
    Complete(MatchSummary),
}

/// Mirrors a match's commentary and final summary into a repository.
///
/// The engine-facing side only queues work; a background writer performs the
/// writes in emission order, so the simulation never waits on storage and a
/// failed write never touches match state.
pub struct PersistenceListener {
    match_id: String,
    sender: mpsc::UnboundedSender<PersistenceCommand>,
}

impl PersistenceListener {
    /// Starts the writer task for one match. Must run inside a tokio runtime.
    pub fn spawn(
        match_id: impl Into<String>,
        repository: Arc<dyn MatchRepository>,
    ) -> (Arc<Self>, JoinHandle<()>) {
        let match_id = match_id.into();
        let (sender, receiver) = mpsc::unbounded_channel();
        let writer = tokio::spawn(run_writer(match_id.clone(), repository, receiver));

        (Arc::new(Self { match_id, sender }), writer)
    }

    fn enqueue(&self, command: PersistenceCommand) -> Result<(), EventError> {
        self.sender.send(command).map_err(|_| {
            EventError::listener(format!(
                "Persistence writer for match {} has stopped",
                self.match_id
            ))
        })
    }
}

impl MatchEventListener for PersistenceListener {
    fn on_commentary(&self, event: &CommentaryEvent) -> Result<(), EventError> {
        self.enqueue(PersistenceCommand::Commentary(CommentaryRecord::from(event)))
    }

    fn on_match_end(&self, summary: &MatchSummary) -> Result<(), EventError> {
        self.enqueue(PersistenceCommand::Complete(summary.clone()))
    }

    fn name(&self) -> &'static str {
        "PersistenceListener"
    }
}

async fn run_writer(
    match_id: String,
    repository: Arc<dyn MatchRepository>,
    mut receiver: mpsc::UnboundedReceiver<PersistenceCommand>,
) {
    while let Some(command) = receiver.recv().await {
        match command {
            PersistenceCommand::Commentary(record) => {
                let minute = record.minute;
                if let Err(e) = repository.append_commentary(&match_id, record).await {
                    warn!(
                        match_id = %match_id,
                        minute = minute,
                        error = %e,
                        "Failed to persist commentary"
                    );
                }
            }
            PersistenceCommand::Complete(summary) => {
                match repository.complete_match(&match_id, summary).await {
                    Ok(()) => info!(match_id = %match_id, "Match result persisted"),
                    Err(e) => error!(
                        match_id = %match_id,
                        error = %e,
                        "Failed to persist match result"
                    ),
                }
                break;
            }
        }
    }
}
