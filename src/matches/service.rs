use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::engine::{MatchEngine, RandomSource, SeededRandom, TeamDescriptor};
use crate::persistence::{MatchRecord, PersistenceListener};
use crate::shared::{AppError, AppState};

/// Generates a readable match id, e.g. "brave-otter-3f9a1c"
fn generate_match_id() -> String {
    let petname = petname::Petnames::default().generate_one(2, "-");
    let suffix = Uuid::new_v4().simple().to_string();
    format!("{}-{}", petname, &suffix[..6])
}

/// Creates, wires up and kicks off a match.
///
/// The match is stored before kick-off so commentary always has a record to
/// append to, and it leaves the registry on its own once it ends. Teams
/// without a roster are given a generated one.
#[instrument(skip(state, home, away), fields(home = %home.name, away = %away.name))]
pub async fn start_match(
    state: &AppState,
    home: TeamDescriptor,
    away: TeamDescriptor,
) -> Result<MatchEngine, AppError> {
    let match_id = generate_match_id();

    // teams sent without players get a generated eleven
    let mut roster_rng: Box<dyn RandomSource> = match state.engine_config.seed {
        Some(seed) => Box::new(SeededRandom::from_seed(seed)),
        None => Box::new(SeededRandom::from_entropy()),
    };
    let home = home.with_generated_roster(roster_rng.as_mut());
    let away = away.with_generated_roster(roster_rng.as_mut());

    let record = MatchRecord::new(&match_id, &home, &away);
    let engine = MatchEngine::new(&match_id, home, away, state.engine_config.clone())?;

    state.repository.create_match(&record).await?;

    let (listener, _writer) = PersistenceListener::spawn(&match_id, Arc::clone(&state.repository));
    engine.subscribe(listener).await;

    let registry = state.registry.clone();
    engine
        .on_match_end(move |summary| {
            let registry = registry.clone();
            let match_id = summary.match_id.clone();
            tokio::spawn(async move {
                registry.remove(&match_id).await;
            });
            Ok(())
        })
        .await;

    state.registry.insert(engine.clone()).await;
    engine.start().await;

    info!(match_id = %match_id, "Match kicked off");
    Ok(engine)
}

/// Looks up a live match or fails with NotFound
pub async fn live_match(state: &AppState, match_id: &str) -> Result<MatchEngine, AppError> {
    state
        .registry
        .get(match_id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("No live match: {}", match_id)))
}
