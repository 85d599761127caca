use std::time::Duration;
use tokio::time::interval;
use tracing::{info, instrument};

use super::registry::MatchRegistry;
use crate::engine::MatchPhase;

/// Configuration for the abandoned-match cleanup task
#[derive(Debug, Clone)]
pub struct CleanupConfig {
    /// How often to look for abandoned matches
    pub cleanup_interval: Duration,
    /// How long a match may stay paused before it is ended and dropped
    pub paused_threshold: Duration,
}

impl Default for CleanupConfig {
    fn default() -> Self {
        Self {
            cleanup_interval: Duration::from_secs(60),
            paused_threshold: Duration::from_secs(30 * 60), // 30 minutes
        }
    }
}

/// Periodically ends matches that were paused and never resumed
#[instrument(skip(registry))]
pub async fn start_cleanup_task(registry: MatchRegistry, config: CleanupConfig) {
    info!(
        cleanup_interval_secs = config.cleanup_interval.as_secs(),
        paused_threshold_secs = config.paused_threshold.as_secs(),
        "Starting match cleanup background task"
    );

    let mut cleanup_interval = interval(config.cleanup_interval);

    loop {
        cleanup_interval.tick().await;

        let ended = cleanup_abandoned_matches(&registry, config.paused_threshold).await;
        if ended > 0 {
            info!(ended_count = ended, "Match cleanup completed");
        }
    }
}

/// Ends and unregisters every match paused for longer than the threshold.
/// Ending goes through `stop`, so listeners still get full time and the summary.
pub async fn cleanup_abandoned_matches(
    registry: &MatchRegistry,
    paused_threshold: Duration,
) -> usize {
    let mut ended = 0;

    for engine in registry.all().await {
        let Some(paused_for) = engine.paused_for().await else {
            continue;
        };
        if paused_for < paused_threshold {
            continue;
        }

        if engine.stop().await == MatchPhase::Ended {
            registry.remove(engine.match_id()).await;
            ended += 1;
            info!(
                match_id = %engine.match_id(),
                paused_secs = paused_for.as_secs(),
                "Ended abandoned paused match"
            );
        }
    }

    ended
}
